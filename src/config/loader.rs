// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** check the pass
/// graph. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), passes = config.pass.len(), "parsed config");

    Ok(config)
}

/// Load a configuration file from path and validate it.
///
/// Checks for:
/// - at least one pass,
/// - a sane `[config]` section,
/// - duplicate names, unknown `after` references and out-of-range queues,
/// - cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Default config location: `Passes.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Passes.toml")
}
