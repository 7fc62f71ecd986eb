//! Interaction source for buttons
//!
//! A caller-owned record of the press gestures a button recognized. The host
//! keeps one per button across frames (the button itself is rebuilt every
//! frame), and can observe it to react to presses or restyle around them.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Maximum number of interactions kept for observers
const MAX_INTERACTIONS: usize = 64;

/// A single recognized interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Pointer went down inside the button
    Press,
    /// Pointer went up inside the button after a press
    Release,
    /// Pointer went up outside the button after a press
    Cancel,
}

/// Stream of interactions plus the derived pressed flag
#[derive(Debug, Default)]
pub struct InteractionSource {
    pressed: Cell<bool>,
    history: RefCell<VecDeque<Interaction>>,
}

impl InteractionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an interaction, dropping the oldest when full
    pub fn emit(&self, interaction: Interaction) {
        self.pressed.set(interaction == Interaction::Press);

        let mut history = self.history.borrow_mut();
        if history.len() >= MAX_INTERACTIONS {
            history.pop_front();
        }
        history.push_back(interaction);
    }

    /// True between a `Press` and the following `Release` or `Cancel`
    pub fn is_pressed(&self) -> bool {
        self.pressed.get()
    }

    pub fn last(&self) -> Option<Interaction> {
        self.history.borrow().back().copied()
    }

    /// Take every recorded interaction, oldest first
    pub fn drain(&self) -> Vec<Interaction> {
        self.history.borrow_mut().drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_tracks_press_and_release() {
        let source = InteractionSource::new();
        assert!(!source.is_pressed());

        source.emit(Interaction::Press);
        assert!(source.is_pressed());

        source.emit(Interaction::Release);
        assert!(!source.is_pressed());

        source.emit(Interaction::Press);
        source.emit(Interaction::Cancel);
        assert!(!source.is_pressed());
    }

    #[test]
    fn test_drain_returns_in_order_and_empties() {
        let source = InteractionSource::new();
        source.emit(Interaction::Press);
        source.emit(Interaction::Release);

        assert_eq!(
            source.drain(),
            vec![Interaction::Press, Interaction::Release]
        );
        assert!(source.drain().is_empty());
        assert_eq!(source.last(), None);
    }

    #[test]
    fn test_history_is_bounded() {
        let source = InteractionSource::new();
        for _ in 0..(MAX_INTERACTIONS + 10) {
            source.emit(Interaction::Press);
        }
        source.emit(Interaction::Release);

        let history = source.drain();
        assert_eq!(history.len(), MAX_INTERACTIONS);
        assert_eq!(history.last(), Some(&Interaction::Release));
    }
}
