// TUI application state
//
// The preview owns every piece of button state (loading, enabled, overlay
// animation, press tracking) and rebuilds the buttons from it each frame.
// Clicks flip `loading` on and start a delay task; the task reports back
// through the action channel and the event loop flips it off again.

use super::components::button::{
    AnimatedVisibility, Clock, Interaction, InteractionSource, ProgressButton,
};
use super::traits::{Handled, Interactive};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::theme::Theme;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Padding;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Capacity of the action channel between delay tasks and the event loop
pub const ACTION_CHANNEL_CAPACITY: usize = 32;

/// The two buttons in the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonId {
    /// Full-width button with an icon and caption
    #[default]
    Icon,
    /// Centered text button labelled with the greeting
    Text,
}

impl ButtonId {
    pub const ALL: [ButtonId; 2] = [ButtonId::Icon, ButtonId::Text];

    fn index(self) -> usize {
        match self {
            ButtonId::Icon => 0,
            ButtonId::Text => 1,
        }
    }

    /// Get the next button in focus order
    pub fn next(self) -> Self {
        match self {
            ButtonId::Icon => ButtonId::Text,
            ButtonId::Text => ButtonId::Icon,
        }
    }

    /// Name for logs and the status line
    pub fn name(&self) -> &'static str {
        match self {
            ButtonId::Icon => "play",
            ButtonId::Text => "greeting",
        }
    }
}

/// Messages from background tasks to the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAction {
    /// The loading delay for a button elapsed
    Finished(ButtonId),
}

/// Caller-owned state for one button
#[derive(Debug, Default)]
pub struct ButtonState {
    pub loading: bool,
    pub enabled: bool,
    pub visibility: AnimatedVisibility,
    pub interactions: InteractionSource,
    /// Where the button was last drawn (for mouse hit-testing)
    pub area: Rect,
    pending: Option<JoinHandle<()>>,
}

impl ButtonState {
    fn new(visibility: AnimatedVisibility) -> Self {
        Self {
            enabled: true,
            visibility,
            ..Self::default()
        }
    }
}

/// Main application state for the preview
pub struct App {
    pub theme: Theme,
    pub config: Config,
    pub log_buffer: LogBuffer,
    buttons: [ButtonState; 2],
    /// Button receiving Enter/Space
    pub focus: ButtonId,
    /// Spinner animation frame, advanced on every tick
    pub spinner_frame: usize,
    /// Whether the app should quit
    pub should_quit: bool,
    action_tx: mpsc::Sender<DemoAction>,
}

impl App {
    pub fn new(config: Config, log_buffer: LogBuffer, action_tx: mpsc::Sender<DemoAction>) -> Self {
        let overlay = || {
            AnimatedVisibility::new(false)
                .with_transitions(config.transitions.enter(), config.transitions.exit())
        };
        Self {
            theme: Theme::by_name(&config.theme),
            buttons: [ButtonState::new(overlay()), ButtonState::new(overlay())],
            config,
            log_buffer,
            focus: ButtonId::default(),
            spinner_frame: 0,
            should_quit: false,
            action_tx,
        }
    }

    pub fn state(&self, id: ButtonId) -> &ButtonState {
        &self.buttons[id.index()]
    }

    pub fn state_mut(&mut self, id: ButtonId) -> &mut ButtonState {
        &mut self.buttons[id.index()]
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.config.loading_delay_ms)
    }

    /// Build the widget for `id` from current state
    ///
    /// Rendering passes a no-op handler; input handling passes one that
    /// records the click.
    pub fn button<'a>(&'a self, id: ButtonId, on_click: impl FnMut() + 'a) -> ProgressButton<'a> {
        let state = self.state(id);
        let button = match id {
            ButtonId::Icon => ProgressButton::content(self.icon_content(), on_click)
                .padding(Padding::new(2, 2, 1, 1)),
            ButtonId::Text => ProgressButton::text(self.config.greeting.as_str(), on_click),
        };
        button
            .themed(&self.theme)
            .loading(state.loading)
            .enabled(state.enabled)
            .focused(self.focus == id)
            .visibility(&state.visibility)
            .interactions(&state.interactions)
            .spinner_frame(self.spinner_frame)
    }

    fn icon_content(&self) -> Text<'static> {
        Text::from(Line::from(vec![
            Span::styled("▶", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Play"),
        ]))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.next(),
            KeyCode::Char('d') => self.toggle_enabled(self.focus),
            _ => {
                let id = self.focus;
                let mut clicked = false;
                let handled = self.button(id, || clicked = true).handle_key(key);
                if clicked {
                    self.click(id);
                } else if handled == Handled::No {
                    tracing::trace!(key = ?key.code, "unhandled key");
                }
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        for id in ButtonId::ALL {
            let area = self.state(id).area;
            let mut clicked = false;
            let handled = self.button(id, || clicked = true).handle_mouse(mouse, area);

            if handled.was_handled() && mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                self.focus = id;
            }
            if clicked {
                self.click(id);
            }
        }
    }

    fn toggle_enabled(&mut self, id: ButtonId) {
        let state = self.state_mut(id);
        state.enabled = !state.enabled;
        if !state.enabled && state.interactions.is_pressed() {
            state.interactions.emit(Interaction::Cancel);
        }
        tracing::info!(button = id.name(), enabled = state.enabled, "toggled enabled");
    }

    /// The button's on_click: start loading and schedule its end
    fn click(&mut self, id: ButtonId) {
        let delay = self.loading_delay();
        let deadline = tokio::time::Instant::now() + delay;
        let tx = self.action_tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(DemoAction::Finished(id)).await;
        });

        let state = self.state_mut(id);
        state.loading = true;
        if let Some(previous) = state.pending.replace(task) {
            previous.abort();
        }
        tracing::info!(
            button = id.name(),
            delay_ms = delay.as_millis() as u64,
            "clicked, loading"
        );
    }

    // ─────────────────────────────────────────────────────────────────────
    // Background actions and timing
    // ─────────────────────────────────────────────────────────────────────

    pub fn apply_action(&mut self, action: DemoAction) {
        match action {
            DemoAction::Finished(id) => {
                let state = self.state_mut(id);
                state.loading = false;
                state.pending = None;
                tracing::info!(button = id.name(), "finished loading");
            }
        }
    }

    /// Advance the spinner frame
    pub fn tick_animation(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Point each overlay at its button's loading flag and advance it
    pub fn sync_transitions(&mut self, clock: &dyn Clock) {
        for state in &mut self.buttons {
            state.visibility.sync(state.loading, clock);
        }
    }

    /// Abort pending delay tasks
    pub fn shutdown(&mut self) {
        for (id, state) in ButtonId::ALL.iter().zip(&mut self.buttons) {
            if let Some(task) = state.pending.take() {
                task.abort();
                tracing::debug!(button = id.name(), "aborted pending delay");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::button::{ManualClock, Phase};

    fn app() -> (App, mpsc::Receiver<DemoAction>) {
        let (tx, rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);
        (App::new(Config::default(), LogBuffer::new(), tx), rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_loads_then_finishes_after_delay() {
        let (mut app, mut rx) = app();

        app.handle_key(key(KeyCode::Enter));
        assert!(app.state(ButtonId::Icon).loading);
        assert!(!app.state(ButtonId::Text).loading);

        let start = tokio::time::Instant::now();
        let action = rx.recv().await.unwrap();
        assert_eq!(action, DemoAction::Finished(ButtonId::Icon));
        assert!(start.elapsed() >= Duration::from_millis(3000));

        app.apply_action(action);
        assert!(!app.state(ButtonId::Icon).loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_while_loading_is_suppressed() {
        let (mut app, mut rx) = app();

        app.handle_key(key(KeyCode::Enter));
        tokio::time::advance(Duration::from_millis(1000)).await;
        app.handle_key(key(KeyCode::Char(' ')));

        // Still a single pending delay, ending at the original deadline
        let start = tokio::time::Instant::now();
        let action = rx.recv().await.unwrap();
        assert!(start.elapsed() < Duration::from_millis(3000));
        app.apply_action(action);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_button_ignores_clicks() {
        let (mut app, mut rx) = app();

        app.handle_key(key(KeyCode::Char('d')));
        assert!(!app.state(ButtonId::Icon).enabled);

        app.handle_key(key(KeyCode::Enter));
        assert!(!app.state(ButtonId::Icon).loading);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());

        app.handle_key(key(KeyCode::Char('d')));
        assert!(app.state(ButtonId::Icon).enabled);
    }

    #[tokio::test]
    async fn test_focus_and_quit_keys() {
        let (mut app, _rx) = app();
        assert_eq!(app.focus, ButtonId::Icon);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, ButtonId::Text);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.focus, ButtonId::Icon);

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mouse_click_focuses_and_loads() {
        let (mut app, _rx) = app();
        app.state_mut(ButtonId::Icon).area = Rect::new(0, 0, 40, 3);
        app.state_mut(ButtonId::Text).area = Rect::new(14, 5, 12, 2);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 16, 5));
        assert_eq!(app.focus, ButtonId::Text);
        assert!(app.state(ButtonId::Text).interactions.is_pressed());
        assert!(!app.state(ButtonId::Text).loading);

        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 16, 5));
        assert!(app.state(ButtonId::Text).loading);
        assert!(!app.state(ButtonId::Icon).loading);
    }

    #[tokio::test]
    async fn test_mouse_release_outside_cancels() {
        let (mut app, _rx) = app();
        app.state_mut(ButtonId::Icon).area = Rect::new(0, 0, 40, 3);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 1));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 20));

        let state = app.state(ButtonId::Icon);
        assert!(!state.loading);
        assert_eq!(state.interactions.last(), Some(Interaction::Cancel));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabling_mid_press_drops_the_press() {
        let (mut app, mut rx) = app();
        app.state_mut(ButtonId::Icon).area = Rect::new(0, 0, 40, 3);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 1));
        app.handle_key(key(KeyCode::Char('d')));
        assert!(!app.state(ButtonId::Icon).interactions.is_pressed());
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 1));
        app.handle_key(key(KeyCode::Char('d')));
        assert!(app.state(ButtonId::Icon).enabled);

        // Gesture that starts elsewhere and ends on the button
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 20));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 1));
        assert!(!app.state(ButtonId::Icon).loading);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlay_follows_loading() {
        let (mut app, _rx) = app();
        let clock = ManualClock::new();

        app.sync_transitions(&clock);
        assert_eq!(app.state(ButtonId::Icon).visibility.phase(), Phase::Hidden);

        app.handle_key(key(KeyCode::Enter));
        app.sync_transitions(&clock);
        assert_eq!(
            app.state(ButtonId::Icon).visibility.phase(),
            Phase::Appearing
        );

        clock.advance(Duration::from_millis(300));
        app.sync_transitions(&clock);
        assert_eq!(app.state(ButtonId::Icon).visibility.phase(), Phase::Visible);
        assert_eq!(app.state(ButtonId::Text).visibility.phase(), Phase::Hidden);

        app.apply_action(DemoAction::Finished(ButtonId::Icon));
        app.sync_transitions(&clock);
        assert_eq!(
            app.state(ButtonId::Icon).visibility.phase(),
            Phase::Disappearing
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_aborts_pending_delay() {
        let (mut app, mut rx) = app();

        app.handle_key(key(KeyCode::Enter));
        app.shutdown();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_tick_advances_spinner() {
        let (mut app, _rx) = app();
        app.tick_animation();
        app.tick_animation();
        assert_eq!(app.spinner_frame, 2);
    }
}
