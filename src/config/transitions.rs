//! Overlay transition configuration

use serde::Deserialize;
use std::time::Duration;

use crate::tui::components::button::{Transition, DEFAULT_TRANSITION_DURATION};

/// Enter/exit effects for the busy overlay
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionConfig {
    /// Effect name when loading starts: "fade", "expand", "none"
    pub enter: String,
    /// Effect name when loading ends
    pub exit: String,
    /// Length of each effect
    pub duration_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enter: "fade".to_string(),
            exit: "fade".to_string(),
            duration_ms: DEFAULT_TRANSITION_DURATION.as_millis() as u64,
        }
    }
}

/// Transition settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileTransitions {
    pub enter: Option<String>,
    pub exit: Option<String>,
    pub duration_ms: Option<u64>,
}

impl TransitionConfig {
    /// Create from file config with defaults
    ///
    /// Names are normalized through `Transition::from_name`, so an unknown
    /// effect is stored (and re-serialized) as "fade".
    pub fn from_file(file: Option<FileTransitions>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        let normalize = |name: String| Transition::from_name(&name, Duration::ZERO).as_str();

        Self {
            enter: file
                .enter
                .map(|n| normalize(n).to_string())
                .unwrap_or(defaults.enter),
            exit: file
                .exit
                .map(|n| normalize(n).to_string())
                .unwrap_or(defaults.exit),
            duration_ms: file.duration_ms.unwrap_or(defaults.duration_ms),
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Effect applied while the overlay appears
    pub fn enter(&self) -> Transition {
        Transition::from_name(&self.enter, self.duration())
    }

    /// Effect applied while the overlay disappears
    pub fn exit(&self) -> Transition {
        Transition::from_name(&self.exit, self.duration())
    }
}
