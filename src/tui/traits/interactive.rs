//! Interactive trait for components that handle keyboard and mouse input
//!
//! The host routes input to its components; each component decides whether
//! it consumed the event or whether it should bubble up for global handling.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

/// Result of handling an input event
///
/// Tells the host whether the component consumed the event or
/// if it should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    /// Create from a boolean (true = handled)
    pub fn from_bool(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }

    /// Check if the event was handled
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        Self::from_bool(handled)
    }
}

/// Trait for components that handle input
///
/// # Event Flow
///
/// ```text
/// KeyEvent / MouseEvent
///    │
///    ▼
/// Host (global handlers: q, Esc, Tab)
///    │
///    │ if not handled
///    ▼
/// Component (via Interactive trait)
///    │
///    │ returns Handled::Yes or Handled::No
///    ▼
/// Host (fallback handlers)
/// ```
pub trait Interactive {
    /// Handle a key event
    ///
    /// Returns `Handled::Yes` if the component consumed the event,
    /// `Handled::No` if it should bubble up to the host.
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Handle a mouse event, given the area the component was last rendered into
    ///
    /// Default ignores the mouse entirely.
    fn handle_mouse(&mut self, _mouse: MouseEvent, _area: Rect) -> Handled {
        Handled::No
    }

    /// Whether this component can receive focus
    fn focusable(&self) -> bool {
        true
    }

    /// Hint text for the status line when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
