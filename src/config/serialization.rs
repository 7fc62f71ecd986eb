//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use crate::theme::THEME_NAMES;

impl Config {
    /// Render the effective config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# composeful configuration

# Theme: {themes}
theme = "{theme}"

# Name shown on the text button
greeting = "{greeting}"

# How long a clicked button stays loading (milliseconds)
loading_delay_ms = {delay}

# Redraw and spinner tick (milliseconds)
tick_ms = {tick}

# Busy overlay effects: fade, expand, none
[transitions]
enter = "{enter}"
exit = "{exit}"
duration_ms = {duration}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the log pane or stdout)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            themes = THEME_NAMES.join(", "),
            theme = escape(&self.theme),
            greeting = escape(&self.greeting),
            delay = self.loading_delay_ms,
            tick = self.tick_ms,
            enter = escape(&self.transitions.enter),
            exit = escape(&self.transitions.exit),
            duration = self.transitions.duration_ms,
            log_level = escape(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = escape(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a TOML basic string
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}
