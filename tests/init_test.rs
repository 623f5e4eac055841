use mycli::commands::init::{self, barrel_seed, create_project_directories, InitOptions};
use mycli::config::{load_config, ProjectConfig};
use mycli::constants::{EMPTY_BARREL, PROVIDERS_BARREL};
use mycli::error::Error;
use mycli::registry::TemplateKind;
use std::fs;
use tempfile::TempDir;

#[test_log::test]
fn test_init_creates_layout() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let config = init::run(
        root,
        InitOptions {
            name: Some("shop".to_string()),
            force: false,
        },
    )
    .unwrap();

    assert_eq!(config.name, "shop");
    assert_eq!(load_config(root).unwrap(), config);

    assert_eq!(
        fs::read_to_string(root.join("src/components/index.tsx")).unwrap(),
        EMPTY_BARREL
    );
    assert_eq!(
        fs::read_to_string(root.join("src/providers/index.tsx")).unwrap(),
        PROVIDERS_BARREL
    );
    for folder in ["src/hooks", "src/utils", "src/constants"] {
        assert_eq!(
            fs::read_to_string(root.join(folder).join("index.ts")).unwrap(),
            EMPTY_BARREL
        );
    }
}

#[test_log::test]
fn test_init_defaults_name_to_directory() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("storefront");
    fs::create_dir(&project).unwrap();

    let config = init::run(&project, InitOptions::default()).unwrap();
    assert_eq!(config.name, "storefront");
}

#[test_log::test]
fn test_init_twice_requires_force() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    init::run(root, InitOptions::default()).unwrap();

    assert!(matches!(
        init::run(root, InitOptions::default()),
        Err(Error::ProjectAlreadyInitialized)
    ));

    let forced = init::run(
        root,
        InitOptions {
            name: Some("renamed".to_string()),
            force: true,
        },
    )
    .unwrap();
    assert_eq!(load_config(root).unwrap().name, forced.name);
}

#[test_log::test]
fn test_existing_barrels_are_kept() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let hooks = root.join("src/hooks");
    fs::create_dir_all(&hooks).unwrap();
    let custom = "import useX from './use-x';\nexport default {\n  useX\n};\n";
    fs::write(hooks.join("index.ts"), custom).unwrap();

    let created = create_project_directories(root, &ProjectConfig::new("shop")).unwrap();

    assert_eq!(created.len(), 4);
    assert!(!created.contains(&hooks.join("index.ts")));
    assert_eq!(fs::read_to_string(hooks.join("index.ts")).unwrap(), custom);
}

#[test]
fn test_barrel_seed() {
    assert_eq!(barrel_seed(TemplateKind::Provider), PROVIDERS_BARREL);
    assert_eq!(barrel_seed(TemplateKind::Hook), EMPTY_BARREL);
}
