//! Logs panel component
//!
//! Shows the tail of the captured log buffer, newest at the bottom. The
//! panel keeps no state of its own: it always follows the latest entries.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Log pane over a slice of entries (oldest first)
pub struct LogsPanel<'a> {
    entries: &'a [LogEntry],
    theme: &'a Theme,
}

impl<'a> LogsPanel<'a> {
    pub fn new(entries: &'a [LogEntry], theme: &'a Theme) -> Self {
        Self { entries, theme }
    }

    /// Entries that fit in `height` rows, most recent last
    fn visible(&self, height: usize) -> &'a [LogEntry] {
        let start = self.entries.len().saturating_sub(height);
        &self.entries[start..]
    }
}

impl Widget for LogsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.theme.border_type)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.surface))
            .title(" Logs ");
        let height = block.inner(area).height as usize;

        let items: Vec<ListItem> = self
            .visible(height)
            .iter()
            .map(|entry| {
                ListItem::new(format_log_entry(entry))
                    .style(log_level_style(&entry.level, self.theme))
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}

/// Format a log entry for display
fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

/// Get color style for log level
fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.highlight),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}
