//! Word counting for mixed CJK and Latin text.
//!
//! Each CJK character counts as one word. Latin words and numbers are runs of
//! ASCII word characters (`[A-Za-z0-9_]`) delimited by anything else; a run
//! counts as a word if it is all letters and as a number if it is all digits.
//! Mixed runs such as `abc123` or `snake_case` count as nothing.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::{InkstreakError, Result};

/// File size threshold for streaming reads (10 MB)
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

static CJK_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\u{3000}-\u{303f}\u{3040}-\u{309f}\u{30a0}-\u{30ff}\u{4e00}-\u{9fff}\u{ff00}-\u{ffef}]",
    )
    .expect("CJK character class is a valid regex")
});

static ASCII_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("ASCII word run is a valid regex"));

#[derive(Debug, Clone, Copy, Default)]
pub struct WordCounter;

impl WordCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Count words in `text`.
    #[must_use]
    pub fn count(&self, text: &str) -> u64 {
        if text.trim().is_empty() {
            return 0;
        }

        let cjk = CJK_CHAR.find_iter(text).count();
        let runs = ASCII_WORD_RUN
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|run| {
                run.bytes().all(|b| b.is_ascii_alphabetic())
                    || run.bytes().all(|b| b.is_ascii_digit())
            })
            .count();

        (cjk + runs) as u64
    }

    /// Count words line by line from a buffered reader.
    ///
    /// # Errors
    /// Returns an I/O error if reading fails or the input is not UTF-8.
    pub fn count_reader<R: BufRead>(&self, reader: R) -> std::io::Result<u64> {
        let mut total = 0;
        for line in reader.lines() {
            total += self.count(&line?);
        }
        Ok(total)
    }

    /// Count words in a file, streaming large files.
    ///
    /// # Errors
    /// Returns `FileAccess` if the file cannot be opened or read.
    pub fn count_file(&self, path: &Path) -> Result<u64> {
        let access = |source| InkstreakError::FileAccess {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(path).map_err(access)?;
        if metadata.len() >= LARGE_FILE_THRESHOLD {
            let file = File::open(path).map_err(access)?;
            return self.count_reader(BufReader::new(file)).map_err(access);
        }

        let content = fs::read_to_string(path).map_err(access)?;
        Ok(self.count(&content))
    }
}

#[cfg(test)]
#[path = "words_tests.rs"]
mod tests;
