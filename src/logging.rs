//! Developer diagnostics through the `log` facade.
//!
//! User-facing errors and warnings go through `output::error_output`; this is
//! only for tracing what the tool did (`-v`, `-vv`, or `RUST_LOG`).

use log::LevelFilter;

/// Level selected by the global verbosity flags.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the stderr logger. `RUST_LOG` takes precedence over the flags.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbose: u8, quiet: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose, quiet))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
