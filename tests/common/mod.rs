#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the inkstreak binary.
#[macro_export]
macro_rules! inkstreak {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("inkstreak"))
    };
}

/// A temporary project directory for integration tests.
///
/// The directory contains an empty `.git/` so project discovery stops here
/// and the snapshot log lands in `.git/inkstreak/`.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(dir.path().join(".git")).expect("Failed to create .git directory");
        Self { dir }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".inkstreak.toml", content);
    }

    /// Default snapshot log location for this project.
    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join(".git").join("inkstreak").join("snapshots.json")
    }

    pub fn read_log(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.log_path()).expect("Failed to read snapshot log");
        serde_json::from_str(&content).expect("Snapshot log is not JSON")
    }

    /// Command running in the fixture, isolated from the user config dir.
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = inkstreak!();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".xdg"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Stores a raw word count for `entity` on `date`.
    pub fn add(&self, date: &str, entity: &str, words: u64) {
        self.cmd()
            .args(["add", "--entity", entity, "--words", &words.to_string()])
            .args(["--date", date])
            .assert()
            .success();
    }
}
