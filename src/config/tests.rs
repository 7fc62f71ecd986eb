//! Configuration tests
//!
//! The round-trip tests guard `to_toml` against drifting from `FileConfig`:
//! when a field is added to one but not the other, they fail.

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let reloaded = Config::from_sources(parsed.unwrap(), no_env);
    assert_eq!(reloaded.theme, config.theme);
    assert_eq!(reloaded.greeting, config.greeting);
    assert_eq!(reloaded.loading_delay_ms, config.loading_delay_ms);
    assert_eq!(reloaded.tick_ms, config.tick_ms);
    assert_eq!(reloaded.transitions, config.transitions);
    assert_eq!(reloaded.logging.file_rotation, config.logging.file_rotation);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.theme = "nord".to_string();
    config.greeting = "Say \"hi\"".to_string();
    config.loading_delay_ms = 500;
    config.transitions.enter = "expand".to_string();
    config.transitions.exit = "none".to_string();
    config.transitions.duration_ms = 120;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let parsed: FileConfig = toml::from_str(&config.to_toml()).expect("custom config parses");
    let reloaded = Config::from_sources(parsed, no_env);

    assert_eq!(reloaded.theme, "nord");
    assert_eq!(reloaded.greeting, "Say \"hi\"");
    assert_eq!(reloaded.loading_delay_ms, 500);
    assert_eq!(reloaded.transitions, config.transitions);
    assert!(reloaded.logging.file_enabled);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_config_roundtrip_control_characters() {
    let mut config = Config::default();
    config.greeting = "line one\nline two\r\ttabbed \\ end".to_string();

    let parsed: FileConfig =
        toml::from_str(&config.to_toml()).expect("control characters are escaped");
    let reloaded = Config::from_sources(parsed, no_env);
    assert_eq!(reloaded.greeting, config.greeting);
}

// ─────────────────────────────────────────────────────────────────────────────
// Layering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::from_sources(FileConfig::default(), no_env);
    assert_eq!(config.theme, "dracula");
    assert_eq!(config.greeting, "Android");
    assert_eq!(config.loading_delay_ms, 3000);
    assert_eq!(config.tick_ms, 100);
    assert_eq!(config.transitions.duration_ms, 300);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "nord"
loading_delay_ms = 1000
"#,
    )
    .unwrap();

    let config = Config::from_sources(
        file,
        env_from(&[(ENV_THEME, "gruvbox"), (ENV_DELAY_MS, "250")]),
    );
    assert_eq!(config.theme, "gruvbox");
    assert_eq!(config.loading_delay_ms, 250);
}

#[test]
fn test_invalid_env_delay_falls_back_to_file() {
    let file: FileConfig = toml::from_str("loading_delay_ms = 1000").unwrap();
    let config = Config::from_sources(file, env_from(&[(ENV_DELAY_MS, "soon")]));
    assert_eq!(config.loading_delay_ms, 1000);
}

#[test]
fn test_zero_tick_is_clamped() {
    let file: FileConfig = toml::from_str("tick_ms = 0").unwrap();
    assert_eq!(Config::from_sources(file, no_env).tick_ms, 1);
}

#[test]
fn test_unknown_transition_name_normalizes_to_fade() {
    let file: FileConfig = toml::from_str(
        r#"
[transitions]
enter = "Expand"
exit = "wobble"
duration_ms = 50
"#,
    )
    .unwrap();

    let transitions = Config::from_sources(file, no_env).transitions;
    assert_eq!(transitions.enter, "expand");
    assert_eq!(transitions.exit, "fade");
    assert_eq!(
        transitions.enter(),
        crate::tui::components::button::Transition::Expand {
            duration: std::time::Duration::from_millis(50)
        }
    );
}

#[test]
fn test_log_rotation_parsing() {
    assert_eq!("HOURLY".parse(), Ok(LogRotation::Hourly));
    assert_eq!("never".parse(), Ok(LogRotation::Never));
    assert_eq!("weekly".parse(), Ok(LogRotation::Daily));
    assert_eq!(LogRotation::Never.to_string(), "never");
}

// ─────────────────────────────────────────────────────────────────────────────
// File loading
// ─────────────────────────────────────────────────────────────────────────────

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("composeful-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_missing_file_is_not_an_error() {
    let dir = scratch_dir("missing");
    let file = Config::load_file_config(&dir.join("config.toml")).unwrap();
    assert!(file.theme.is_none());
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = scratch_dir("malformed");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "theme = [unterminated").unwrap();

    let err = Config::load_file_config(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config file"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_write_default_creates_parseable_file() {
    let dir = scratch_dir("write");
    let path = dir.join("nested").join("config.toml");

    Config::write_default(&path).unwrap();
    let file = Config::load_file_config(&path).unwrap();
    assert_eq!(file.greeting.as_deref(), Some("Android"));

    let _ = std::fs::remove_dir_all(&dir);
}
