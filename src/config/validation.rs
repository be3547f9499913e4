//! Configuration semantic validation.
//!
//! Runs after parsing: range checks the type system cannot express.

use crate::config::{CONFIG_VERSION, Config};
use crate::{InkstreakError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error for an unsupported version, an empty extension list,
/// `recent_points` of zero or `max_age_days` of zero.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_version(config)?;
    validate_store_section(config)?;
    validate_stats_section(config)?;
    validate_counter_section(config)?;
    Ok(())
}

pub(crate) fn validate_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(InkstreakError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

fn validate_store_section(config: &Config) -> Result<()> {
    if config.store.max_age_days == Some(0) {
        return Err(InkstreakError::Config(
            "store.max_age_days must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_stats_section(config: &Config) -> Result<()> {
    if config.stats.recent_points == 0 {
        return Err(InkstreakError::Config(
            "stats.recent_points must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_counter_section(config: &Config) -> Result<()> {
    if config.counter.extensions.is_empty() {
        return Err(InkstreakError::Config(
            "counter.extensions cannot be empty".to_string(),
        ));
    }

    for (i, ext) in config.counter.extensions.iter().enumerate() {
        let trimmed = ext.trim_start_matches('.');
        if trimmed.is_empty() || trimmed.contains(['/', '\\', '*']) {
            return Err(InkstreakError::Config(format!(
                "counter.extensions[{i}] '{ext}' is not a file extension"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
