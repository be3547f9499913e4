mod mock_fs;

use std::path::PathBuf;

use self::mock_fs::MockFileSystem;
use super::*;
use crate::stats::StreakPolicy;

const LOCAL: &str = "/project/.inkstreak.toml";
const USER: &str = "/home/user/.config/inkstreak/config.toml";

// =============================================================================
// Discovery Tests
// =============================================================================

#[test]
fn no_config_files_returns_default() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load().unwrap();
    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn local_config_is_found() {
    let fs = MockFileSystem::new().with_file(LOCAL, "[stats]\nrecent_points = 3\n");
    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.stats.recent_points, 3);
    assert_eq!(result.source, Some(PathBuf::from(LOCAL)));
}

#[test]
fn user_config_used_when_no_local() {
    let fs = MockFileSystem::new().with_file(USER, "[stats]\nstreak_policy = \"latest\"\n");
    let result = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(result.config.stats.streak_policy, StreakPolicy::Latest);
    assert_eq!(result.source, Some(PathBuf::from(USER)));
}

#[test]
fn local_config_takes_precedence_over_user() {
    let fs = MockFileSystem::new()
        .with_file(LOCAL, "[stats]\nrecent_points = 5\n")
        .with_file(USER, "[stats]\nrecent_points = 9\n");
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(result.config.stats.recent_points, 5);
}

#[test]
fn missing_user_config_dir_falls_back_to_default() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let result = FileConfigLoader::with_fs(fs).load().unwrap();
    assert!(result.source.is_none());
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file(LOCAL, "[stats\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, InkstreakError::TomlParse(_)));
}

#[test]
fn unsupported_version_is_config_error() {
    let fs = MockFileSystem::new().with_file(LOCAL, "version = \"7\"\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, InkstreakError::Config(_)));
}

#[test]
fn load_from_path_reads_explicit_file() {
    let fs = MockFileSystem::new()
        .with_file("/elsewhere/custom.toml", "[counter]\nextensions = [\"org\"]\n");
    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/elsewhere/custom.toml"))
        .unwrap();
    assert_eq!(result.config.counter.extensions, vec!["org"]);
}

#[test]
fn load_from_missing_path_is_file_access_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();
    assert!(matches!(err, InkstreakError::FileAccess { .. }));
}
