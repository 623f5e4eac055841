use clap::Parser;
use mycli::cli::{Args, Commands};
use std::ffi::OsString;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("mycli")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_init_args() {
    let parsed = Args::try_parse_from(make_args(&["init", "my-project"])).unwrap();
    match parsed.command {
        Commands::Init { name, force } => {
            assert_eq!(name.as_deref(), Some("my-project"));
            assert!(!force);
        }
        other => panic!("Expected init, got {other:?}"),
    }
    assert!(!parsed.verbose);
}

#[test]
fn test_init_without_name() {
    let parsed = Args::try_parse_from(make_args(&["init", "-f"])).unwrap();
    match parsed.command {
        Commands::Init { name, force } => {
            assert!(name.is_none());
            assert!(force);
        }
        other => panic!("Expected init, got {other:?}"),
    }
}

#[test]
fn test_add_args() {
    let parsed = Args::try_parse_from(make_args(&["add", "button", "MyButton"])).unwrap();
    match parsed.command {
        Commands::Add {
            template,
            name,
            force,
            no_format,
        } => {
            assert_eq!(template, "button");
            assert_eq!(name.as_deref(), Some("MyButton"));
            assert!(!force);
            assert!(!no_format);
        }
        other => panic!("Expected add, got {other:?}"),
    }
}

#[test]
fn test_add_flags() {
    let args = make_args(&["add", "--force", "--no-format", "cn", "--verbose"]);
    let parsed = Args::try_parse_from(args).unwrap();
    assert!(parsed.verbose);
    match parsed.command {
        Commands::Add {
            force, no_format, ..
        } => {
            assert!(force);
            assert!(no_format);
        }
        other => panic!("Expected add, got {other:?}"),
    }
}

#[test]
fn test_list() {
    let parsed = Args::try_parse_from(make_args(&["list"])).unwrap();
    assert!(matches!(parsed.command, Commands::List));
}

#[test]
fn test_add_requires_template() {
    assert!(Args::try_parse_from(make_args(&["add"])).is_err());
}

#[test]
fn test_missing_command() {
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_unknown_command() {
    assert!(Args::try_parse_from(make_args(&["remove", "button"])).is_err());
}
