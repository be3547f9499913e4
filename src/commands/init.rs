use std::fs;

use crate::cli::InitArgs;
use crate::{InkstreakError, Result};

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init(args: &InitArgs) -> Result<()> {
    let message = run_init_impl(args)?;
    print!("{message}");
    Ok(())
}

pub(crate) fn run_init_impl(args: &InitArgs) -> Result<String> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(InkstreakError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        InkstreakError::FileAccess {
            path: output_path.clone(),
            source,
        }
    })?;

    Ok(format!(
        "Created configuration file: {}\n",
        output_path.display()
    ))
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# inkstreak configuration file
version = "1"

[store]
# Snapshot log location, relative to the project root.
# Default: .git/inkstreak/snapshots.json inside a git repository,
# otherwise .inkstreak/snapshots.json
# path = "data/snapshots.json"

# Drop snapshots older than this many days when saving
# max_age_days = 800

[stats]
# "today": the streak is 0 unless something was recorded today
# "latest": the newest snapshot counts as today
streak_policy = "today"

# How several rows for one document on one day are combined: "sum" or "last"
duplicates = "sum"

# Days listed in the text and markdown trend tables
recent_points = 14

[counter]
# File extensions accepted by `inkstreak record`
extensions = ["md", "txt"]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
