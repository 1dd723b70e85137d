//! Integration tests for kickoff-cli.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `kickoff` running in `temp`, logging under `temp/data`.
fn kickoff(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kickoff").unwrap();
    cmd.current_dir(temp.path())
        .env("KICKOFF__LOGGING__DATA_FOLDER", temp.path().join("data"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// The folder the binary sees as its working folder.
fn root(temp: &TempDir) -> PathBuf {
    temp.path().canonicalize().unwrap()
}

fn folder_text(path: &Path) -> String {
    format!("{}{}", path.display(), std::path::MAIN_SEPARATOR)
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    kickoff(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_project_success() {
    let temp = TempDir::new().unwrap();
    let project = root(&temp).join("widget");

    kickoff(&temp)
        .arg("widget")
        .assert()
        .success()
        .stdout(format!(
            "Creating project in folder {}... Done.\n",
            folder_text(&project)
        ));

    for name in ["project.json", "README.md", "LICENSE", ".gitignore"] {
        assert!(project.join(name).is_file(), "{name} missing");
    }
    assert!(project.join("sources").is_dir());
    assert!(project.join("tests").is_dir());
    assert_eq!(
        fs::read_to_string(project.join("README.md")).unwrap(),
        "# qub/widget\n"
    );
    assert!(temp.path().join("data/logs/1.log").is_file());
}

#[test]
fn test_run_subcommand_defaults_to_current_folder() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("here");
    fs::create_dir(&project).unwrap();

    let mut cmd = kickoff(&temp);
    cmd.current_dir(&project)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating project in folder"));

    assert!(project.join("project.json").is_file());
}

#[test]
fn test_existing_project_is_left_alone() {
    let temp = TempDir::new().unwrap();
    let project = root(&temp).join("widget");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("project.json"), "{}").unwrap();

    kickoff(&temp)
        .arg("widget")
        .assert()
        .code(255)
        .stdout(format!(
            "A project already exists in folder {}.\n",
            folder_text(&project)
        ));

    assert_eq!(fs::read_to_string(project.join("project.json")).unwrap(), "{}");
    assert!(!project.join("README.md").exists());
}

#[test]
fn test_verbose_existing_project_is_not_run() {
    let temp = TempDir::new().unwrap();
    let project = root(&temp);
    fs::write(project.join("project.json"), "{}").unwrap();

    kickoff(&temp)
        .arg("-v")
        .assert()
        .code(255)
        .stdout(predicate::str::contains(format!(
            "VERBOSE: Project folder ({}) already exists.",
            folder_text(&project)
        )))
        .stdout(predicate::str::ends_with(format!(
            "A project already exists in folder {}.\n",
            folder_text(&project)
        )));

    assert!(!project.join("README.md").exists());
}

#[test]
fn test_parent_folder_argument_is_resolved() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("widget").join("sub");
    fs::create_dir_all(&nested).unwrap();
    let project = root(&temp).join("widget");

    let mut cmd = kickoff(&temp);
    cmd.current_dir(&nested)
        .arg("..")
        .assert()
        .success()
        .stdout(format!(
            "Creating project in folder {}... Done.\n",
            folder_text(&project)
        ));

    assert!(project.join("project.json").is_file());
    assert!(!nested.join("project.json").exists());
}

#[test]
fn test_second_run_writes_second_log() {
    let temp = TempDir::new().unwrap();
    kickoff(&temp).arg("widget").assert().success();
    kickoff(&temp).arg("widget").assert().code(255);

    let second = fs::read_to_string(temp.path().join("data/logs/2.log")).unwrap();
    assert!(second.contains("VERBOSE: project.json file"));
    assert!(second.contains("A project already exists in folder"));
}

#[test]
fn test_verbose_flag_echoes_diagnostics() {
    let temp = TempDir::new().unwrap();
    kickoff(&temp)
        .args(["widget", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VERBOSE: Checking if project folder"))
        .stdout(predicate::str::contains("VERBOSE: Creating tests folder"))
        .stdout(predicate::str::ends_with(" Done.\n"));
}

#[test]
fn test_quiet_by_default() {
    let temp = TempDir::new().unwrap();
    kickoff(&temp)
        .arg("widget")
        .assert()
        .success()
        .stdout(predicate::str::contains("VERBOSE").not());

    let log = fs::read_to_string(temp.path().join("data/logs/1.log")).unwrap();
    assert!(log.contains("VERBOSE: Creating README.md file"));
}

#[test]
fn test_help_flag_shows_usage_and_does_nothing() {
    let temp = TempDir::new().unwrap();
    for flag in ["-?", "--help"] {
        kickoff(&temp)
            .args([flag, "widget"])
            .assert()
            .code(255)
            .stdout(predicate::str::contains("Usage"))
            .stdout(predicate::str::contains("kickoff"));
    }

    assert!(!temp.path().join("widget").exists());
    assert!(!temp.path().join("data").exists());
}

#[test]
fn test_subcommand_help() {
    let temp = TempDir::new().unwrap();
    kickoff(&temp)
        .args(["logs", "-?"])
        .assert()
        .code(255)
        .stdout(predicate::str::contains("--latest"));
}

#[test]
fn test_logs_command() {
    let temp = TempDir::new().unwrap();

    kickoff(&temp)
        .arg("logs")
        .assert()
        .success()
        .stdout(predicate::str::contains("No run logs"));

    kickoff(&temp).arg("widget").assert().success();

    kickoff(&temp)
        .arg("logs")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.log"));

    kickoff(&temp)
        .args(["logs", "--latest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating project in folder"));

    kickoff(&temp)
        .args(["logs", "--latest", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("1.log\n"));
}

#[test]
fn test_global_flags_before_logs_do_not_scaffold() {
    let temp = TempDir::new().unwrap();
    for flag in ["-v", "--no-color"] {
        kickoff(&temp)
            .args([flag, "logs"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No run logs"));
    }

    assert!(!temp.path().join("logs").exists());
    assert!(!temp.path().join("project.json").exists());
}

#[test]
fn test_global_flag_before_run_subcommand() {
    let temp = TempDir::new().unwrap();
    kickoff(&temp)
        .args(["-v", "run", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VERBOSE: Creating project.json file"));

    assert!(temp.path().join("a").join("project.json").is_file());
}

#[test]
fn test_folder_before_subcommand_is_rejected() {
    let temp = TempDir::new().unwrap();
    kickoff(&temp)
        .args(["widget", "logs"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot come before the 'logs' subcommand"));

    assert!(!temp.path().join("widget").exists());
}

#[test]
fn test_missing_config_file() {
    let temp = TempDir::new().unwrap();
    kickoff(&temp)
        .args(["--config", "missing.toml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_config_get() {
    let temp = TempDir::new().unwrap();
    kickoff(&temp)
        .args(["config", "get", "logging.data_folder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data"));

    kickoff(&temp)
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("no setting named"));
}

#[test]
fn test_shell_completions() {
    let temp = TempDir::new().unwrap();
    kickoff(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kickoff"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let temp = TempDir::new().unwrap();
    kickoff(&temp).arg("--bogus").assert().code(2);
}
