// Components module - reusable UI building blocks
//
// - Button: the progress button widget and its host-owned state types
// - Logs panel: tail of the captured log buffer
// - Status bar: focused button and key hints

pub mod button;
pub mod logs_panel;
pub mod status_bar;

pub use logs_panel::LogsPanel;
