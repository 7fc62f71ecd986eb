//! Component trait system for the TUI
//!
//! Components declare their input capabilities through traits instead of
//! the host knowing how every widget reacts to keys and clicks.
//!
//! - [`Interactive`] - Components that handle keyboard and mouse input

mod interactive;

pub use interactive::{Handled, Interactive};
