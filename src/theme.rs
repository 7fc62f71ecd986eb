// Theme support for the button widget and the preview host
//
// Provides color palettes that can be configured via config file.
// "auto" uses terminal's ANSI palette, named themes use true color (RGB).
// Button styling defaults (ButtonColors, ButtonElevation) are derived from here.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Names accepted by `Theme::by_name`, in display order
pub const THEME_NAMES: [&str; 5] = ["auto", "dracula", "nord", "gruvbox", "monokai"];

/// Color palette for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,

    // ─── Button Colors ───────────────────────────────────────
    pub primary: Color,
    pub on_primary: Color,
    pub disabled: Color,
    pub on_disabled: Color,
    pub shadow: Color,

    // ─── Surface Colors ──────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub border: Color,
    pub highlight: Color,
    pub muted: Color,
    pub error: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            "monokai" => Self::monokai(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            primary: Color::Blue,
            on_primary: Color::White,
            disabled: Color::DarkGray,
            on_disabled: Color::Gray,
            shadow: Color::Black,
            background: Color::Reset,
            foreground: Color::White,
            surface: Color::Reset,
            border: Color::White,
            highlight: Color::Yellow,
            muted: Color::DarkGray,
            error: Color::Red,
            border_type: BorderType::Plain,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            primary: Color::Rgb(0xbd, 0x93, 0xf9),     // purple
            on_primary: Color::Rgb(0x28, 0x2a, 0x36),  // background
            disabled: Color::Rgb(0x44, 0x47, 0x5a),    // current line
            on_disabled: Color::Rgb(0x62, 0x72, 0xa4), // comment
            shadow: Color::Rgb(0x19, 0x1a, 0x21),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            surface: Color::Rgb(0x21, 0x22, 0x2c),
            border: Color::Rgb(0x62, 0x72, 0xa4),    // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            muted: Color::Rgb(0x62, 0x72, 0xa4),     // comment
            error: Color::Rgb(0xff, 0x55, 0x55),     // red
            border_type: BorderType::Rounded,
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            primary: Color::Rgb(0x88, 0xc0, 0xd0),     // frost cyan
            on_primary: Color::Rgb(0x2e, 0x34, 0x40),  // polar night
            disabled: Color::Rgb(0x43, 0x4c, 0x5e),    // polar night 2
            on_disabled: Color::Rgb(0x4c, 0x56, 0x6a), // polar night 3
            shadow: Color::Rgb(0x24, 0x29, 0x33),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xec, 0xef, 0xf4),
            surface: Color::Rgb(0x3b, 0x42, 0x52),
            border: Color::Rgb(0x4c, 0x56, 0x6a),
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b), // aurora yellow
            muted: Color::Rgb(0x4c, 0x56, 0x6a),
            error: Color::Rgb(0xbf, 0x61, 0x6a), // aurora red
            border_type: BorderType::Rounded,
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            primary: Color::Rgb(0x83, 0xa5, 0x98),     // aqua
            on_primary: Color::Rgb(0x28, 0x28, 0x28),  // bg0
            disabled: Color::Rgb(0x50, 0x49, 0x45),    // bg2
            on_disabled: Color::Rgb(0x92, 0x83, 0x74), // gray
            shadow: Color::Rgb(0x1d, 0x20, 0x21),
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            surface: Color::Rgb(0x3c, 0x38, 0x36),
            border: Color::Rgb(0x92, 0x83, 0x74),
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f), // yellow
            muted: Color::Rgb(0x92, 0x83, 0x74),
            error: Color::Rgb(0xfb, 0x49, 0x34), // red
            border_type: BorderType::Plain,
        }
    }

    /// Monokai Pro theme
    pub fn monokai() -> Self {
        Self {
            name: "monokai".to_string(),
            primary: Color::Rgb(0xa6, 0xe2, 0x2e),     // green
            on_primary: Color::Rgb(0x27, 0x28, 0x22),  // background
            disabled: Color::Rgb(0x49, 0x48, 0x3e),    // line highlight
            on_disabled: Color::Rgb(0x75, 0x71, 0x5e), // comment
            shadow: Color::Rgb(0x1e, 0x1f, 0x1c),
            background: Color::Rgb(0x27, 0x28, 0x22),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            surface: Color::Rgb(0x3e, 0x3d, 0x32),
            border: Color::Rgb(0x75, 0x71, 0x5e),
            highlight: Color::Rgb(0xe6, 0xdb, 0x74), // yellow
            muted: Color::Rgb(0x75, 0x71, 0x5e),
            error: Color::Rgb(0xf9, 0x26, 0x72), // pink/red
            border_type: BorderType::Thick,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("Dracula").name, "dracula");
        assert_eq!(Theme::by_name("NORD").name, "nord");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_auto() {
        assert_eq!(Theme::by_name("solarized-purple"), Theme::auto());
    }

    #[test]
    fn test_every_listed_name_resolves_to_itself() {
        for name in THEME_NAMES {
            assert_eq!(Theme::by_name(name).name, name);
        }
    }

    #[test]
    fn test_primary_contrasts_with_label_color() {
        for name in THEME_NAMES {
            let theme = Theme::by_name(name);
            assert_ne!(theme.primary, theme.on_primary, "{name}");
            assert_ne!(theme.disabled, theme.on_disabled, "{name}");
        }
    }
}
