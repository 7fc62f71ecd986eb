// UI rendering logic
//
// Lays out the preview: the full-width icon button, a divider, the centered
// greeting button, the log pane and the status line. Button areas are
// recorded on the app so mouse events can be hit-tested against them.

use super::app::{App, ButtonId};
use super::components::{status_bar, LogsPanel};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

/// Height of the log pane, borders included
const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let theme = &app.theme;
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.foreground)),
        f.area(),
    );

    let (_, icon_height) = app.button(ButtonId::Icon, || {}).preferred_size();
    let (text_width, text_height) = app.button(ButtonId::Text, || {}).preferred_size();

    // Split the terminal into vertical sections:
    // - Icon button (with a one-row margin above)
    // - Divider
    // - Greeting button
    // - Spacer
    // - Logs
    // - Status line
    let chunks = Layout::vertical([
        Constraint::Length(icon_height + 1),
        Constraint::Length(1),
        Constraint::Length(text_height),
        Constraint::Min(0),
        Constraint::Length(LOGS_HEIGHT),
        Constraint::Length(1),
    ])
    .split(f.area());

    let icon_area = chunks[0].inner(Margin::new(1, 0));
    let icon_area = Rect {
        y: icon_area.y + 1,
        height: icon_area.height.saturating_sub(1),
        ..icon_area
    };
    app.state_mut(ButtonId::Icon).area = icon_area;
    app.state_mut(ButtonId::Text).area = center_horizontally(chunks[2], text_width);

    let app = &*app;
    for id in ButtonId::ALL {
        let button = app.button(id, || {});
        f.render_widget(&button, app.state(id).area);
    }

    f.render_widget(
        Block::default()
            .borders(Borders::TOP)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
        chunks[1].inner(Margin::new(1, 0)),
    );

    let entries = app.log_buffer.recent(LOGS_HEIGHT as usize);
    f.render_widget(LogsPanel::new(&entries, &app.theme), chunks[4]);

    status_bar::render(f, chunks[5], app);
}

/// Wrap-content placement: `width` columns centered in `area`
fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
