//! End-to-end tests for the addgem CLI
//!
//! These tests verify:
//! - Usage and exit codes
//! - Gemfile contents after a run
//! - Dry-run mode leaves the Gemfile unchanged
//! - JSON output schema

mod common;

use assert_cmd::Command;
use common::{spawn_registry, Route};
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const BASE_GEMFILE: &str = "source 'https://rubygems.org'\n\ngem 'rails', '~> 7.0'\n";

/// Create a project directory holding a Gemfile
fn create_test_project() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("Gemfile"), BASE_GEMFILE).unwrap();
    temp_dir
}

fn gemfile_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("Gemfile")
}

/// Command running the binary inside the project, isolated from proxy and
/// addgem settings in the environment
fn addgem(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_addgem"));
    cmd.current_dir(temp_dir.path())
        .env_remove("ADDGEM_GEMFILE")
        .env_remove("ADDGEM_REGISTRY_URL")
        .env_remove("RUST_LOG")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .env("NO_PROXY", "127.0.0.1,localhost")
        .env("no_proxy", "127.0.0.1,localhost");
    cmd
}

mod exit_code_tests {
    use super::*;

    #[test]
    fn test_no_arguments_prints_usage() {
        let temp_dir = create_test_project();

        addgem(&temp_dir)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Usage: addgem"));
    }

    #[test]
    fn test_missing_gemfile_fails() {
        let temp_dir = tempfile::tempdir().unwrap();

        addgem(&temp_dir)
            .args(["rake", "--skip-install"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("manifest file not found"));

        assert!(!gemfile_path(&temp_dir).exists());
    }

    #[test]
    fn test_help_succeeds() {
        let temp_dir = create_test_project();

        addgem(&temp_dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--dry-run"));
    }

    #[test]
    fn test_invalid_spec_still_exits_zero() {
        let temp_dir = create_test_project();

        addgem(&temp_dir)
            .args([r#"gem "rails"#, "--skip-install"])
            .assert()
            .success()
            .stderr(predicate::str::contains("invalid gem specification"));

        assert_eq!(fs::read_to_string(gemfile_path(&temp_dir)).unwrap(), BASE_GEMFILE);
    }
}

mod add_tests {
    use super::*;

    #[test]
    fn test_already_present_gem_is_skipped() {
        let temp_dir = create_test_project();
        let base_url = spawn_registry(vec![]);

        addgem(&temp_dir)
            .args(["rails", "--skip-install", "--registry-url", &base_url])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Gem 'rails' is already in the Gemfile.",
            ));

        assert_eq!(fs::read_to_string(gemfile_path(&temp_dir)).unwrap(), BASE_GEMFILE);
    }

    #[test]
    fn test_adds_gem_with_constraints() {
        let temp_dir = create_test_project();
        let base_url = spawn_registry(vec![Route::gem(
            "nokogiri",
            "Nokogiri makes it easy to work with XML and HTML",
        )]);

        addgem(&temp_dir)
            .args([
                r#"gem "nokogiri", "1.13.0""#,
                "--skip-install",
                "--registry-url",
                &base_url,
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Gem 'nokogiri' added to Gemfile."));

        let content = fs::read_to_string(gemfile_path(&temp_dir)).unwrap();
        assert_eq!(
            content,
            format!(
                "{}\n# Added nokogiri: Nokogiri makes it easy to work with XML and HTML\n\
                 gem 'nokogiri', \"1.13.0\"\n",
                BASE_GEMFILE
            )
        );
    }

    #[test]
    fn test_unknown_gem_is_reported() {
        let temp_dir = create_test_project();
        let base_url = spawn_registry(vec![]);

        addgem(&temp_dir)
            .args(["ghostgem", "--skip-install", "--registry-url", &base_url])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "gem 'ghostgem' not found on RubyGems",
            ))
            .stdout(predicate::str::contains("0 added, 0 already present, 1 failed"))
            .stdout(predicate::str::contains("ghostgem").not());

        assert_eq!(fs::read_to_string(gemfile_path(&temp_dir)).unwrap(), BASE_GEMFILE);
    }

    #[test]
    fn test_gemfile_option_points_elsewhere() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("app");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("Gemfile"), BASE_GEMFILE).unwrap();
        let base_url = spawn_registry(vec![Route::gem("rake", "Make-like program")]);

        addgem(&temp_dir)
            .args([
                "rake",
                "--skip-install",
                "--gemfile",
                "app/Gemfile",
                "--registry-url",
                &base_url,
            ])
            .assert()
            .success();

        let content = fs::read_to_string(nested.join("Gemfile")).unwrap();
        assert!(content.ends_with("\n# Added rake: Make-like program\ngem 'rake'\n"));
    }
}

mod dry_run_tests {
    use super::*;

    #[test]
    fn test_dry_run_leaves_gemfile_unchanged() {
        let temp_dir = create_test_project();
        let base_url = spawn_registry(vec![Route::gem("rake", "Make-like program")]);

        addgem(&temp_dir)
            .args(["rake", "--dry-run", "--registry-url", &base_url])
            .assert()
            .success()
            .stdout(predicate::str::contains("would be added to Gemfile"))
            .stdout(predicate::str::contains("Running").not());

        assert_eq!(fs::read_to_string(gemfile_path(&temp_dir)).unwrap(), BASE_GEMFILE);
    }
}

mod json_output_tests {
    use super::*;

    #[test]
    fn test_json_output_schema() {
        let temp_dir = create_test_project();
        let base_url = spawn_registry(vec![Route::gem("rake", "Make-like program")]);

        let output = addgem(&temp_dir)
            .args([
                "rake",
                "rails",
                "ghostgem",
                "--json",
                "--skip-install",
                "--registry-url",
                &base_url,
            ])
            .output()
            .expect("Failed to execute command");

        assert!(output.status.success());
        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");

        assert_eq!(json["dry_run"], false);
        assert_eq!(json["summary"]["added"], 1);
        assert_eq!(json["summary"]["already_present"], 1);
        assert_eq!(json["summary"]["failed"], 1);
        assert_eq!(json["results"][0]["status"], "added");
        assert_eq!(json["results"][0]["description"], "Make-like program");
        assert_eq!(json["results"][1]["status"], "already_present");
        assert_eq!(json["results"][2]["status"], "failed");
        assert_eq!(json["results"][2]["reason"], "not_found");
        assert!(json.get("install").is_none());
    }
}

#[cfg(unix)]
mod install_tests {
    use super::*;
    use std::fs::File;
    use std::os::unix::fs::PermissionsExt;
    use std::process::{Command as StdCommand, Stdio};

    /// Install a `bundle` stand-in that snapshots what addgem has printed so
    /// far, then reports success
    fn fake_bundle(bin_dir: &std::path::Path) {
        let script = "#!/bin/sh\n\
                      cp \"$ADDGEM_TEST_STDOUT\" \"$ADDGEM_TEST_SEEN_OUT\"\n\
                      cp \"$ADDGEM_TEST_STDERR\" \"$ADDGEM_TEST_SEEN_ERR\"\n\
                      echo 'Bundle complete!'\n";
        let path = bin_dir.join("bundle");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_reports_are_written_before_installer_starts() {
        let temp_dir = create_test_project();
        let bin_dir = tempfile::tempdir().unwrap();
        let logs = tempfile::tempdir().unwrap();
        fake_bundle(bin_dir.path());

        let stdout_path = logs.path().join("stdout");
        let stderr_path = logs.path().join("stderr");
        let seen_out = logs.path().join("seen_out");
        let seen_err = logs.path().join("seen_err");
        let path_var = format!(
            "{}:{}",
            bin_dir.path().display(),
            std::env::var("PATH").unwrap_or_default()
        );

        let status = StdCommand::new(env!("CARGO_BIN_EXE_addgem"))
            .args(["rails", r#""bad""#])
            .current_dir(temp_dir.path())
            .env_remove("ADDGEM_GEMFILE")
            .env_remove("ADDGEM_REGISTRY_URL")
            .env_remove("RUST_LOG")
            .env("PATH", path_var)
            .env("ADDGEM_TEST_STDOUT", &stdout_path)
            .env("ADDGEM_TEST_STDERR", &stderr_path)
            .env("ADDGEM_TEST_SEEN_OUT", &seen_out)
            .env("ADDGEM_TEST_SEEN_ERR", &seen_err)
            .stdout(Stdio::from(File::create(&stdout_path).unwrap()))
            .stderr(Stdio::from(File::create(&stderr_path).unwrap()))
            .status()
            .expect("Failed to execute command");
        assert!(status.success());

        let before_out = fs::read_to_string(&seen_out).unwrap();
        let before_err = fs::read_to_string(&seen_err).unwrap();
        assert!(before_out.contains("Gem 'rails' is already in the Gemfile."));
        assert!(before_out.contains("Running 'bundle install'..."));
        assert!(!before_out.contains("Bundle complete!"));
        assert!(before_err.contains("invalid gem specification"));

        let after_out = fs::read_to_string(&stdout_path).unwrap();
        let running = after_out.find("Running 'bundle install'...").unwrap();
        let installer = after_out.find("Bundle complete!").unwrap();
        assert!(running < installer);
        assert!(after_out.contains("Summary: 0 added, 1 already present, 1 failed"));
    }
}
