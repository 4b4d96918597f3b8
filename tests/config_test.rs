// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 默认值、JSON 文件、环境变量覆写、错误分类
// ==========================================

use mourning_almanac::config::{
    config_keys, AlmanacConfig, AlmanacConfigReader, ConfigError, ConfigManager,
};
use mourning_almanac::domain::types::RecommendationLevel;
use std::io::Write;
use tempfile::NamedTempFile;

fn no_env(_: &str) -> Option<String> {
    None
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[tokio::test]
async fn test_defaults() {
    let manager = ConfigManager::new();
    assert_eq!(manager.get_max_range_days().await.unwrap(), 366);
    assert_eq!(manager.get_parallel_chunk_days().await.unwrap(), 31);
    assert_eq!(
        manager.get_min_level().await.unwrap(),
        RecommendationLevel::Excellent
    );
    assert!(manager.get_traditional_mode_default().await.unwrap());
    assert!(manager.source().is_none());
}

#[tokio::test]
async fn test_partial_file_keeps_defaults() {
    let file = write_config(r#"{ "max_range_days": 90, "min_level": "SUITABLE" }"#);
    let manager = ConfigManager::load_with_env(Some(file.path()), no_env).unwrap();

    assert_eq!(manager.get_max_range_days().await.unwrap(), 90);
    assert_eq!(manager.get_parallel_chunk_days().await.unwrap(), 31);
    assert_eq!(
        manager.get_min_level().await.unwrap(),
        RecommendationLevel::Suitable
    );
    assert_eq!(manager.source(), Some(file.path()));
}

#[test]
fn test_env_overrides_file() {
    let file = write_config(r#"{ "parallel_chunk_days": 10 }"#);
    let manager = ConfigManager::load_with_env(Some(file.path()), |key| {
        (key == config_keys::ENV_PARALLEL_CHUNK_DAYS).then(|| "14".to_string())
    })
    .unwrap();
    assert_eq!(manager.config().parallel_chunk_days, 14);
}

#[test]
fn test_invalid_json_is_parse_error() {
    let file = write_config("{ not json");
    let err = ConfigManager::load_with_env(Some(file.path()), no_env).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_explicit_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = ConfigManager::load_with_env(Some(&path), no_env).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_out_of_range_values_rejected() {
    let file = write_config(r#"{ "max_range_days": 0 }"#);
    let err = ConfigManager::load_with_env(Some(file.path()), no_env).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    let err = ConfigManager::load_with_env(None, |key| {
        (key == config_keys::ENV_MIN_LEVEL).then(|| "BEST".to_string())
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_oversized_chunk_from_env_rejected() {
    let file = write_config("{}");
    let err = ConfigManager::load_with_env(Some(file.path()), |key| {
        (key == config_keys::ENV_PARALLEL_CHUNK_DAYS).then(|| "200000000000000".to_string())
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_snapshot_round_trip() {
    let config = AlmanacConfig {
        max_range_days: 60,
        traditional_mode_default: false,
        ..AlmanacConfig::default()
    };
    let manager = ConfigManager::from_config(config.clone()).unwrap();
    let snapshot = manager.get_config_snapshot().unwrap();
    let restored: AlmanacConfig = serde_json::from_str(&snapshot).unwrap();
    assert_eq!(restored, config);
}
