use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use toml::{map::Map, Value};

/// Root of the cargo workspace, where `Config.toml` and the secrets files
/// live.
pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to run cargo locate-project")?
        .stdout;
    let cargo_path = Path::new(std::str::from_utf8(&output)?.trim());

    cargo_path
        .parent()
        .map(Path::to_path_buf)
        .context("workspace manifest has no parent directory")
}

pub fn load_config<T: DeserializeOwned>(config_name: &str) -> anyhow::Result<T> {
    let config = std::fs::read_to_string(workspace_dir()?.join(config_name))
        .with_context(|| format!("failed to read {config_name}"))?;

    toml::from_str::<T>(&config)
        .with_context(|| format!("failed to parse {config_name}"))
}

pub fn load_env(secrets_name: &str) -> anyhow::Result<Map<String, Value>> {
    load_config(secrets_name)
}
