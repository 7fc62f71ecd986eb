//! Default styling for `ProgressButton`
//!
//! Colors are resolved by enabled state, elevation by enabled and pressed
//! state. Everything here is derived from a `Theme` so a host can restyle
//! every button by switching themes.

use crate::theme::Theme;
use ratatui::style::Color;
use ratatui::widgets::{BorderType, Padding};

/// Background and content colors of a button in its enabled and disabled states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub background: Color,
    pub content: Color,
    pub disabled_background: Color,
    pub disabled_content: Color,
}

impl ButtonColors {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: theme.primary,
            content: theme.on_primary,
            disabled_background: theme.disabled,
            disabled_content: theme.on_disabled,
        }
    }

    /// Background color of the control for the given enabled state
    pub fn background_color(&self, enabled: bool) -> Color {
        if enabled {
            self.background
        } else {
            self.disabled_background
        }
    }

    /// Content (label) color of the control for the given enabled state
    pub fn content_color(&self, enabled: bool) -> Color {
        if enabled {
            self.content
        } else {
            self.disabled_content
        }
    }
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Drop shadow depth, in cells, for each interaction state
///
/// A pressed button sinks into the surface, so `pressed` is normally lower
/// than `default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonElevation {
    pub default: u16,
    pub pressed: u16,
    pub disabled: u16,
    /// Color painted into the shadow cells
    pub shadow: Color,
}

impl ButtonElevation {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            default: 1,
            pressed: 0,
            disabled: 0,
            shadow: theme.shadow,
        }
    }

    /// Shadow depth for the current state. Disabled wins over pressed.
    pub fn resolve(&self, enabled: bool, pressed: bool) -> u16 {
        if !enabled {
            self.disabled
        } else if pressed {
            self.pressed
        } else {
            self.default
        }
    }
}

impl Default for ButtonElevation {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Constants and theme lookups used when a builder option is not set
pub struct ButtonDefaults;

impl ButtonDefaults {
    /// Spacing between the control's frame and its content
    pub const CONTENT_PADDING: Padding = Padding::horizontal(2);

    /// Content rows a button always reserves, even for empty content
    pub const MIN_CONTENT_HEIGHT: u16 = 1;

    pub fn colors(theme: &Theme) -> ButtonColors {
        ButtonColors::from_theme(theme)
    }

    pub fn elevation(theme: &Theme) -> ButtonElevation {
        ButtonElevation::from_theme(theme)
    }

    pub fn shape(theme: &Theme) -> BorderType {
        theme.border_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_follow_enabled_state() {
        let colors = ButtonColors::from_theme(&Theme::dracula());
        assert_eq!(colors.background_color(true), Theme::dracula().primary);
        assert_eq!(colors.background_color(false), Theme::dracula().disabled);
        assert_eq!(colors.content_color(true), Theme::dracula().on_primary);
        assert_eq!(colors.content_color(false), Theme::dracula().on_disabled);
    }

    #[test]
    fn test_elevation_resolution() {
        let elevation = ButtonElevation::default();
        assert_eq!(elevation.resolve(true, false), 1);
        assert_eq!(elevation.resolve(true, true), 0);
        // Disabled beats pressed
        let custom = ButtonElevation {
            default: 2,
            pressed: 3,
            disabled: 0,
            shadow: Color::Black,
        };
        assert_eq!(custom.resolve(false, true), 0);
    }

    #[test]
    fn test_default_padding_is_horizontal_only() {
        let padding = ButtonDefaults::CONTENT_PADDING;
        assert_eq!((padding.left, padding.right), (2, 2));
        assert_eq!((padding.top, padding.bottom), (0, 0));
    }
}
