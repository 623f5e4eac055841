use std::io;
use std::path::PathBuf;

use mycli::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::JsonError(_)));
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::GeneratedFileMissing {
        path: PathBuf::from("src/components/button.tsx"),
    };
    assert_eq!(
        err.to_string(),
        "Generated file not found: src/components/button.tsx."
    );

    let err = Error::TemplateNotFound {
        name: "card".to_string(),
        available: "button, cn".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Template \"card\" not found in registry. Available templates: button, cn."
    );
}

#[test]
fn test_barrel_write_failure_keeps_source() {
    use std::error::Error as _;

    let err = Error::BarrelWriteFailure {
        path: PathBuf::from("index.ts"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().starts_with("Failed to write index file index.ts"));
    assert!(err.source().is_some());
}
