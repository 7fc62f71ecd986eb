// TUI module - Terminal User Interface
//
// This module manages the preview using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Receiving delay-task completions and updating button state
// - Rendering the UI

pub mod app;
pub mod components;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, DemoAction, ACTION_CHANNEL_CAPACITY};
use components::button::SystemClock;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the preview
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done.
pub async fn run_preview(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (action_tx, mut action_rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);
    let mut app = App::new(config, log_buffer, action_tx);
    tracing::info!(
        theme = app.theme.name.as_str(),
        delay_ms = app.config.loading_delay_ms,
        "preview started"
    );

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut action_rx).await;
    app.shutdown();

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard and mouse input (routed to the buttons)
/// 2. Timer ticks (spinner frames and periodic redraws)
/// 3. Delay-task completions (resetting `loading`)
///
/// Transitions are synced against the wall clock before every draw.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    action_rx: &mut mpsc::Receiver<DemoAction>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(app.config.tick_ms));

    loop {
        app.sync_transitions(&SystemClock);
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key)) => app.handle_key(key),
                        Ok(Event::Mouse(mouse)) => app.handle_mouse(mouse),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Delay tasks reporting back
            Some(action) = action_rx.recv() => {
                app.apply_action(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
