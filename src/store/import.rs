use std::fs;
use std::path::Path;

use crate::snapshot::DailySnapshot;
use crate::{InkstreakError, Result};

/// Read a JSON array of snapshot rows for bulk import.
///
/// Rows use the log's field names (`date`, `entity_id`, `word_count`);
/// `owner_entity_id`, `document_id` and `chapter_id` are accepted for the
/// entity. Every row is validated and the first bad row fails the import.
///
/// # Errors
/// Returns `FileAccess` if the file cannot be read and `Json` if it is not an
/// array of valid rows.
pub fn import_snapshots(path: &Path) -> Result<Vec<DailySnapshot>> {
    let content = fs::read_to_string(path).map_err(|e| InkstreakError::FileAccess {
        path: path.to_path_buf(),
        source: e,
    })?;

    let snapshots: Vec<DailySnapshot> = serde_json::from_str(&content)?;
    log::debug!("read {} rows from {}", snapshots.len(), path.display());
    Ok(snapshots)
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
