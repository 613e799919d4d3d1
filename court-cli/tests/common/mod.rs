//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with a pinned clock
//! - Script helpers for running shell sessions

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The time every test session starts at: Monday 10 June 2024, 08:00.
#[allow(dead_code)]
pub const NOW: &str = "2024-06-10T08:00";

/// Environment variables that would leak host configuration into tests.
const COURT_ENV_VARS: [&str; 9] = [
    "COURT_CONFIG_DIR",
    "COURT_NOW",
    "COURT_LOG_MODE",
    "COURT_WEEKLY_LIMIT",
    "COURT_LIMIT_PERIOD",
    "COURT_LEAD_TIME_MINUTES",
    "COURT_PROBE_STEP_MINUTES",
    "COURT_SEARCH_HORIZON_DAYS",
    "COURT_OUTPUT_FORMAT",
];

/// Test environment with isolated configuration and working directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// User configuration directory passed with `--config-dir`
    pub config_dir: PathBuf,
    /// Working directory the binary runs in
    pub work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("court-config");
        let work_dir = temp_path.join("club");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
            work_dir,
        }
    }

    /// Get a command builder with only the environment isolated.
    ///
    /// No global flags are set, so tests have full control over them.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("court").expect("Failed to find court binary");
        for var in COURT_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Get a command builder with `--config-dir` and `--now` pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir).arg("--now").arg(NOW);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the working directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, contents: &str) {
        std::fs::write(self.config_dir.join("config.yaml"), contents)
            .expect("Failed to write user config");
    }

    /// Run a session script through stdin.
    pub fn session(&self, script: &str) -> assert_cmd::assert::Assert {
        self.command()
            .arg("shell")
            .write_stdin(script.to_string())
            .assert()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
