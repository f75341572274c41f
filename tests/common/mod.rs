#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use assert_cmd::Command;
use farm_core::config::{ConfigManager, HOME_ENV};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated configuration directory for one test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn setup_config_manager() -> ConfigManager {
    ConfigManager::with_base_dir(temp_home())
}

/// Script-mode CLI bound to `home`, with colour disabled.
pub fn script_cli(home: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("farm_core_cli").expect("binary built");
    cmd.env("FARM_CORE_CLI_SCRIPT", "1")
        .env(HOME_ENV, home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}
