use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn winhelper() -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("winhelper");
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn version_dir(initial: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("VERSION"), initial).unwrap();
    temp
}

#[test]
fn help_lists_every_command() {
    winhelper()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("version"))
        .stdout(predicate::str::contains("iss"))
        .stdout(predicate::str::contains("wake"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("link"));
}

#[test]
fn version_initializes_a_new_file() {
    let temp = TempDir::new().unwrap();

    winhelper()
        .args(["version", "1.0.0", "--dir"])
        .arg(temp.path())
        .assert()
        .success();

    assert_eq!(fs::read_to_string(temp.path().join("VERSION")).unwrap(), "1.0.0");
}

#[test]
fn version_prints_the_current_value() {
    let temp = version_dir("3.1.4\n");

    winhelper()
        .args(["version", "--dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3.1.4"));
}

#[test]
fn forced_bump_overwrites() {
    let temp = version_dir("1.0.0");

    winhelper()
        .args(["version", "+", "--force", "--dir"])
        .arg(temp.path())
        .assert()
        .success();

    assert_eq!(fs::read_to_string(temp.path().join("VERSION")).unwrap(), "1.0.1");
}

#[test]
fn bump_without_force_is_refused_when_not_interactive() {
    let temp = version_dir("1.0.0");

    winhelper()
        .args(["version", "+", "--dir"])
        .arg(temp.path())
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(temp.path().join("VERSION")).unwrap(), "1.0.0");
}

#[test]
fn drop_below_zero_fails() {
    let temp = version_dir("0.0.0");

    winhelper()
        .args(["version", "-", "--force", "--dir"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative version"));

    assert_eq!(fs::read_to_string(temp.path().join("VERSION")).unwrap(), "0.0.0");
}

#[test]
fn unknown_operator_fails() {
    let temp = version_dir("1.0.0");

    winhelper()
        .args(["version", "*", "--force", "--dir"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid operation"));
}

#[test]
fn iss_bumps_the_define() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("setup.iss");
    fs::write(&script, "#define MyAppVersion \"1.9.9\"\n").unwrap();

    winhelper()
        .args(["iss", "--op", "+++", "--iss-path"])
        .arg(&script)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&script).unwrap(),
        "#define MyAppVersion \"2.9.9\"\n"
    );
}

#[test]
fn wake_rejects_a_short_mac() {
    winhelper()
        .args(["wake", "1C:83:41:78:28", "--broadcast", "127.0.0.1"])
        .assert()
        .failure();
}

#[cfg(unix)]
#[test]
fn link_points_at_the_original() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("data.txt"), "payload").unwrap();

    winhelper()
        .args(["link", "--oldname", "data.txt", "--newname", "alias.txt", "--dir"])
        .arg(temp.path())
        .assert()
        .success();

    assert_eq!(fs::read_to_string(temp.path().join("alias.txt")).unwrap(), "payload");
}
