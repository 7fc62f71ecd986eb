// Status bar component
//
// One line at the bottom: the focused button, its state, and the keys.

use crate::tui::app::{App, ButtonId};
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Short state label for a button
pub fn state_label(app: &App, id: ButtonId) -> &'static str {
    let state = app.state(id);
    match (state.enabled, state.loading) {
        (false, _) => "disabled",
        (true, true) => "loading",
        (true, false) => "idle",
    }
}

/// Render the status line for the focused button
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let id = app.focus;
    let button = app.button(id, || {});
    let hint = if button.focusable() {
        button.focus_hint().unwrap_or("")
    } else {
        "d:enable"
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", id.name()),
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {} │ {} │ Tab:focus  d:toggle  q:quit", state_label(app, id), hint)),
    ]);

    f.render_widget(
        Paragraph::new(line).style(Style::default().fg(app.theme.muted)),
        area,
    );
}
