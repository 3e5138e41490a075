//! Configuration loading tests

#![allow(clippy::float_cmp)]

use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use qtab_core::{AgentConfig, QTabError};

/// Serializes tests that read or write process environment variables
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_file() {
    let file = toml_file(
        "learning_rate = 0.25\ndiscount_factor = 0.95\nexploration_rate = 0.05\n",
    );

    let config = AgentConfig::from_file(file.path()).unwrap();
    assert_eq!(config, AgentConfig::new(0.25, 0.95, 0.05));
}

#[test]
fn test_invalid_value_type() {
    let file = toml_file("learning_rate = \"fast\"\n");

    let result = AgentConfig::from_file(file.path());
    assert!(matches!(result, Err(QTabError::Config(_))));
}

#[test]
fn test_environment_overrides_file() {
    let _guard = env_lock();
    let file = toml_file("learning_rate = 0.25\nexploration_rate = 0.2\n");
    std::env::set_var("QTAB__EXPLORATION_RATE", "0.4");

    let config = AgentConfig::load_from(Some(file.path())).unwrap();
    std::env::remove_var("QTAB__EXPLORATION_RATE");

    assert_eq!(config.learning_rate, 0.25);
    assert_eq!(config.exploration_rate, 0.4);
    assert_eq!(config.discount_factor, 0.9);
}

#[test]
fn test_load_uses_qtab_config_path() {
    let _guard = env_lock();
    let file = toml_file("learning_rate = 0.7\ndiscount_factor = 0.6\nexploration_rate = 0.15\n");
    std::env::set_var("QTAB_CONFIG", file.path());

    let config = AgentConfig::load();
    std::env::remove_var("QTAB_CONFIG");

    assert_eq!(config.unwrap(), AgentConfig::new(0.7, 0.6, 0.15));
}

#[test]
fn test_load_skips_missing_qtab_config_path() {
    let _guard = env_lock();
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("QTAB_CONFIG", dir.path().join("absent.toml"));

    let config = AgentConfig::load();
    std::env::remove_var("QTAB_CONFIG");

    // No ./qtab.toml exists in the crate directory, so defaults apply
    assert_eq!(config.unwrap(), AgentConfig::default());
}

#[test]
fn test_config_json_round_trip() {
    let config = AgentConfig::new(0.3, 0.8, 0.1);
    let json = serde_json::to_string(&config).unwrap();
    let parsed: AgentConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);

    let partial: AgentConfig = serde_json::from_str(r#"{"discount_factor": 0.5}"#).unwrap();
    assert_eq!(partial, AgentConfig::new(0.1, 0.5, 0.3));
}
