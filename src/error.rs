use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InkstreakError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid snapshot {field} '{value}': {reason}")]
    InvalidSnapshot {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Timed out waiting for lock on {path}")]
    LockTimeout { path: PathBuf },
}

impl InkstreakError {
    /// Short category name shown in front of the message.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::InvalidSnapshot { .. } => "InvalidSnapshot",
            Self::InvalidDate { .. } => "InvalidDate",
            Self::FileAccess { .. } => "FileAccess",
            Self::Io(_) => "IO",
            Self::Json(_) => "JSON",
            Self::LockTimeout { .. } => "LockTimeout",
        }
    }

    /// Primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::InvalidSnapshot { field, value, .. } => {
                format!("invalid {field} '{value}'")
            }
            Self::InvalidDate { value } => format!("'{value}' is not a valid date"),
            Self::FileAccess { path, source } => {
                format!("{} ({})", path.display(), source.kind())
            }
            Self::Io(e) => e.to_string(),
            Self::TomlParse(_) => "failed to parse TOML configuration".to_string(),
            Self::Json(_) => "failed to read or write JSON".to_string(),
            Self::LockTimeout { path } => {
                format!("could not lock {}", path.display())
            }
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidSnapshot { reason, .. } => Some(reason.clone()),
            Self::FileAccess { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => Some(e.to_string()),
            Self::Json(e) => Some(e.to_string()),
            Self::Config(_)
            | Self::InvalidDate { .. }
            | Self::Io(_)
            | Self::LockTimeout { .. } => None,
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidDate { .. } => {
                Some("Use the ISO calendar form, e.g. 2024-01-31".to_string())
            }
            Self::FileAccess { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Some("Check that the path exists".to_string())
            }
            Self::LockTimeout { .. } => {
                Some("Another inkstreak process may be writing; retry shortly".to_string())
            }
            Self::TomlParse(_) => Some("Run `inkstreak config validate` for details".to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, InkstreakError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
