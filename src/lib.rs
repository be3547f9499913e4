pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod logging;
pub mod output;
pub mod snapshot;
pub mod state;
pub mod stats;
pub mod store;

pub use error::{InkstreakError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
