// composeful - a progress button widget for ratatui, plus a terminal preview
//
// The widget (`ProgressButton`) shows either its content or a busy indicator
// depending on a `loading` flag its caller owns, and suppresses clicks while
// loading. Everything else in the crate hosts it:
// - Config: layered env > file > defaults
// - Logging: tracing capture for the preview's log pane
// - Theme: named color palettes
// - TUI: the preview app and event loop

pub mod cli;
pub mod config;
pub mod logging;
pub mod theme;
pub mod tui;

pub use tui::components::button::{
    AnimatedVisibility, BusyIndicator, ButtonColors, ButtonContent, ButtonDefaults,
    ButtonElevation, ButtonPhase, Clock, Interaction, InteractionSource, ManualClock, Phase,
    ProgressButton, SystemClock, Transition,
};
pub use tui::traits::{Handled, Interactive};
