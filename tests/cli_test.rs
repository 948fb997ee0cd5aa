//! Integration tests for the devtools-installer binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn setup_catalog(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("installer.yaml"), config).unwrap();
    temp
}

fn installer_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("devtools-installer"));
    cmd.current_dir(dir);
    cmd.env_remove("DEVTOOLS_INSTALLER_CONFIG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// PATH with `dir` searched first.
#[cfg(unix)]
fn path_with(dir: &Path) -> String {
    let system = std::env::var("PATH").unwrap_or_default();
    format!("{}:{}", dir.display(), system)
}

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("devtools-installer"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Detect and install development tools"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("list"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("devtools-installer"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_missing_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    installer_cmd(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn cli_unparsable_config_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog("tool_list: [unterminated\n");
    installer_cmd(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_config_flag_selects_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("tools.yaml"), "tool_list: []\n")?;
    installer_cmd(temp.path())
        .args(["--config", "tools.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0/0 tools installed"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_installs_missing_tool() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let marker = temp.path().join("alpha-installed");
    fs::write(
        temp.path().join("installer.yaml"),
        format!(
            r#"
tool_list: [devtools-installer-e2e-alpha]
tools:
  devtools-installer-e2e-alpha:
    methods:
      - name: touch
        commands: ["touch {}"]
"#,
            marker.display()
        ),
    )?;

    installer_cmd(temp.path())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("╭─── System Tools Check ───╮"))
        .stdout(predicate::str::contains("Not installed"))
        .stdout(predicate::str::contains(
            "Installing devtools-installer-e2e-alpha using touch method...",
        ))
        .stdout(predicate::str::contains("1/1 tools installed"));

    assert!(marker.exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_present_tool_is_left_alone_on_every_run() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let bin = temp.path().join("bin");
    fs::create_dir(&bin)?;
    write_script(&bin, "alpha", "echo \"alpha version v1.4.2\"");
    let marker = temp.path().join("reinstalled");
    fs::write(
        temp.path().join("installer.yaml"),
        format!(
            r#"
tool_list: [alpha]
tools:
  alpha:
    methods:
      - name: touch
        commands: ["touch {}"]
"#,
            marker.display()
        ),
    )?;

    for _ in 0..2 {
        installer_cmd(temp.path())
            .env("PATH", path_with(&bin))
            .assert()
            .success()
            .stdout(predicate::str::contains("✓ alpha"))
            .stdout(predicate::str::contains("v1.4.2"))
            .stdout(predicate::str::contains("1/1 tools installed"));
    }

    assert!(!marker.exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_failed_tool_still_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog(
        r#"
tool_list: [devtools-installer-e2e-broken]
tools:
  devtools-installer-e2e-broken:
    methods:
      - name: broken
        commands: ["false"]
"#,
    );

    installer_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "all installation methods failed for devtools-installer-e2e-broken",
        ))
        .stdout(predicate::str::contains("0/1 tools installed"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_surfaces_go_download_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let bin = temp.path().join("bin");
    fs::create_dir(&bin)?;
    write_script(
        &bin,
        "go",
        "echo 'go: downloading example.com/tool v1.0.0'\necho 'go: resolving noise' >&2",
    );
    fs::write(
        temp.path().join("installer.yaml"),
        r#"
tool_list: [devtools-installer-e2e-gotool]
tools:
  devtools-installer-e2e-gotool:
    methods:
      - name: go
        commands: ["go install example.com/tool@latest"]
"#,
    )?;

    installer_cmd(temp.path())
        .env("PATH", path_with(&bin))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "│ go: downloading example.com/tool v1.0.0",
        ))
        .stdout(predicate::str::contains("resolving noise").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_quiet_hides_method_narration() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog(
        r#"
tool_list: [devtools-installer-e2e-quiet]
tools:
  devtools-installer-e2e-quiet:
    methods:
      - name: noop
        commands: ["true"]
"#,
    );

    installer_cmd(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("using noop method").not())
        .stdout(predicate::str::contains("1/1 tools installed"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_check_reports_missing_tools() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let marker = temp.path().join("should-not-exist");
    fs::write(
        temp.path().join("installer.yaml"),
        format!(
            r#"
tool_list: [devtools-installer-e2e-absent]
tools:
  devtools-installer-e2e-absent:
    methods:
      - name: touch
        commands: ["touch {}"]
"#,
            marker.display()
        ),
    )?;

    installer_cmd(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Not installed"))
        .stdout(predicate::str::contains("0/1 tools present"));

    assert!(!marker.exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_check_succeeds_when_all_present() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog("tool_list: [sh]\ntools:\n  sh:\n    version: \"posix\"\n");

    installer_cmd(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("posix"))
        .stdout(predicate::str::contains("1/1 tools present"));
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog(
        r#"
tool_list: [go, jq]
tools:
  go:
    version: "1.23.3"
    methods:
      - name: binary
        commands: ["wget https://go.dev/dl/go${version}.linux-amd64.tar.gz"]
  jq:
    methods:
      - name: apt
        commands: ["sudo apt-get install -y jq"]
"#,
    );

    let output = installer_cmd(temp.path())
        .args(["list", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value[0]["name"], "go");
    assert_eq!(value[0]["version"], "1.23.3");
    assert_eq!(value[1]["methods"][0]["name"], "apt");
    Ok(())
}

#[test]
fn cli_list_text() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog(
        r#"
tool_list: [nmap]
tools:
  nmap:
    methods:
      - name: apt
        commands: ["sudo apt-get install -y nmap"]
"#,
    );

    installer_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("nmap"))
        .stdout(predicate::str::contains("1. apt"))
        .stdout(predicate::str::contains("$ sudo apt-get install -y nmap"));
    Ok(())
}

#[test]
fn cli_quiet_list_json_still_prints() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog(
        r#"
tool_list: [jq]
tools:
  jq:
    methods:
      - name: apt
        commands: ["sudo apt-get install -y jq"]
"#,
    );

    let output = installer_cmd(temp.path())
        .args(["-q", "list", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value[0]["name"], "jq");
    Ok(())
}

#[test]
fn cli_quiet_list_text_still_prints() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_catalog("tool_list: [jq]\ntools:\n  jq:\n    methods:\n      - name: apt\n        commands: [\"sudo apt-get install -y jq\"]\n");

    installer_cmd(temp.path())
        .args(["--quiet", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. apt"));
    Ok(())
}
