use std::fs;

use winhelper_common::error::VersionError;
use winhelper_core::version::{VERSION_FILE, VersionManager, iss};

const SCRIPT: &str = "#define MyAppName \"Demo\"\r\n#define MyAppVersion \"2.4.9\"\r\n\r\n[Setup]\r\nAppVersion={#MyAppVersion}\r\n";

#[test]
fn version_file_lifecycle() {
    let dir = tempfile::tempdir().unwrap();

    let mut manager = VersionManager::new();
    manager.set_version("1.2.3").unwrap();
    manager.save(dir.path(), false).unwrap();

    let mut manager = VersionManager::load(dir.path()).unwrap();
    for op in ["++", "+", "---"] {
        manager.set_version(op).unwrap();
    }
    assert_eq!(manager.version(), "0.3.4");

    assert!(matches!(
        manager.save(dir.path(), false),
        Err(VersionError::AlreadyExists(_))
    ));
    manager.save(dir.path(), true).unwrap();
    assert_eq!(fs::read_to_string(dir.path().join(VERSION_FILE)).unwrap(), "0.3.4");

    assert!(matches!(manager.set_version("---"), Err(VersionError::NegativeVersion)));
    assert_eq!(manager.version(), "0.3.4");
}

#[test]
fn iss_script_bump() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("setup.iss");
    fs::write(&path, SCRIPT).unwrap();

    let previous = iss::current_version(&path).unwrap();
    let mut manager = VersionManager::with_version(previous);
    manager.set_version("+").unwrap();
    iss::save_version(&path, manager.version()).unwrap();

    let rewritten = fs::read_to_string(&path).unwrap();
    assert_eq!(rewritten, SCRIPT.replace("2.4.9", "2.4.10"));
    assert_eq!(iss::current_version(&path).unwrap(), "2.4.10");
}
