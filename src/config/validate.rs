// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::dag::{PassDesc, PassGraph, topological_order};
use crate::errors::{Result, SyncdagError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = SyncdagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.pass))
    }
}

/// Run every config check without consuming the raw config.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_raw_config(cfg)
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_passes(cfg)?;
    validate_global_config(cfg)?;
    validate_pass_graph(cfg)?;
    Ok(())
}

fn ensure_has_passes(cfg: &RawConfigFile) -> Result<()> {
    if cfg.pass.is_empty() {
        return Err(SyncdagError::ConfigError(
            "config must contain at least one [[pass]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.queue_count == 0 {
        return Err(SyncdagError::ConfigError(
            "[config].queue_count must be >= 1 (got 0)".to_string(),
        ));
    }

    let names = cfg.config.queue_names.len();
    if names != 0 && names != cfg.config.queue_count {
        return Err(SyncdagError::ConfigError(format!(
            "[config].queue_names has {} entries but queue_count is {}",
            names, cfg.config.queue_count
        )));
    }

    Ok(())
}

/// Registration errors and cycles are reported with their own variants.
fn validate_pass_graph(cfg: &RawConfigFile) -> Result<()> {
    let graph = PassGraph::new(
        cfg.pass.iter().map(PassDesc::from),
        cfg.config.queue_count,
    )?;
    topological_order(&graph)?;
    Ok(())
}
