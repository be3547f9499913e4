use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, validate_config_semantics};
use crate::{InkstreakError, Result};

use super::context::{load_config, resolve_project_root};

/// `inkstreak config validate|show`
///
/// # Errors
/// Returns an error if the configuration is missing, malformed or invalid.
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Validate { config } => {
            run_config_validate_impl(config)?;
            if !cli.quiet {
                println!("Configuration is valid: {}", config.display());
            }
        }
        ConfigAction::Show { config, format } => {
            print!("{}", run_config_show_impl(config.as_deref(), *format, cli)?);
        }
    }
    Ok(())
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(InkstreakError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|source| {
        InkstreakError::FileAccess {
            path: config_path.to_path_buf(),
            source,
        }
    })?;
    let config: Config = toml::from_str(&content)?;

    validate_config_semantics(&config)
}

pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    cli: &Cli,
) -> Result<String> {
    let project_root = resolve_project_root()?;
    let loaded = load_config(config_path, cli.no_config, &project_root)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(
            &loaded.config,
            loaded.source.as_deref(),
        )),
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &Config, source: Option<&Path>) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    match source {
        Some(path) => {
            let _ = writeln!(output, "# source: {}\n", path.display());
        }
        None => output.push_str("# source: built-in defaults\n\n"),
    }

    output.push_str("[store]\n");
    match &config.store.path {
        Some(path) => {
            let _ = writeln!(output, "  path = \"{}\"", path.display());
        }
        None => output.push_str("  path = (state directory)\n"),
    }
    if let Some(max_age_days) = config.store.max_age_days {
        let _ = writeln!(output, "  max_age_days = {max_age_days}");
    }

    output.push_str("\n[stats]\n");
    let _ = writeln!(output, "  streak_policy = \"{}\"", config.stats.streak_policy);
    let _ = writeln!(output, "  duplicates = \"{}\"", config.stats.duplicates);
    let _ = writeln!(output, "  recent_points = {}", config.stats.recent_points);

    output.push_str("\n[counter]\n");
    let _ = writeln!(output, "  extensions = {:?}", config.counter.extensions);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
