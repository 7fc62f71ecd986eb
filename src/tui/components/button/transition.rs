// Visibility transitions for the busy overlay
//
// The overlay's appearance is the only temporal behavior of the button, so it
// lives here as an explicit state machine rather than inside the widget. The
// host owns one `AnimatedVisibility` per button and syncs it to the `loading`
// flag every frame; the widget only reads it while rendering.
//
// State Diagram:
//
//   [Hidden] ──show──▶ [Appearing] ──fraction = 1──▶ [Visible]
//      ▲                  │    ▲                        │
//      │             hide │    │ show                   │ hide
//      │                  ▼    │                        ▼
//      └──fraction = 0── [Disappearing] ◀───────────────┘
//
// A zero-duration effect (Transition::None) skips the middle states.
// Reversing mid-animation keeps the current fraction.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Default length of the enter and exit effects
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Fractions this close to 0 or 1 count as settled (float accumulation)
const SETTLE_EPSILON: f64 = 1e-6;

/// Visual effect used when the overlay appears or disappears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Snap with no animation
    None,
    /// Blend the overlay in from the control's background color
    Fade { duration: Duration },
    /// Grow the overlay outward from the center
    Expand { duration: Duration },
}

impl Transition {
    pub const fn fade() -> Self {
        Self::Fade {
            duration: DEFAULT_TRANSITION_DURATION,
        }
    }

    pub const fn expand() -> Self {
        Self::Expand {
            duration: DEFAULT_TRANSITION_DURATION,
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            Self::None => Duration::ZERO,
            Self::Fade { duration } | Self::Expand { duration } => *duration,
        }
    }

    /// Parse an effect name from config. Unknown names fall back to fade.
    pub fn from_name(name: &str, duration: Duration) -> Self {
        match name.to_lowercase().as_str() {
            "none" => Self::None,
            "expand" => Self::Expand { duration },
            _ => Self::Fade { duration },
        }
    }

    /// Name for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fade { .. } => "fade",
            Self::Expand { .. } => "expand",
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::fade()
    }
}

/// Where the overlay is in its show/hide cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Hidden,
    Appearing,
    Visible,
    Disappearing,
}

/// Time source for transitions
///
/// Lets hosts and tests drive animations without real wall-clock timing.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Transition state for one overlay
#[derive(Debug, Clone)]
pub struct AnimatedVisibility {
    phase: Phase,
    /// 0.0 = fully hidden, 1.0 = fully visible
    fraction: f64,
    enter: Transition,
    exit: Transition,
    last_sync: Option<Instant>,
}

impl AnimatedVisibility {
    /// Start settled in the given state, with fade in and fade out
    pub fn new(visible: bool) -> Self {
        Self {
            phase: if visible {
                Phase::Visible
            } else {
                Phase::Hidden
            },
            fraction: if visible { 1.0 } else { 0.0 },
            enter: Transition::default(),
            exit: Transition::default(),
            last_sync: None,
        }
    }

    pub fn with_transitions(mut self, enter: Transition, exit: Transition) -> Self {
        self.enter = enter;
        self.exit = exit;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn fraction(&self) -> f32 {
        self.fraction as f32
    }

    pub fn enter(&self) -> Transition {
        self.enter
    }

    pub fn exit(&self) -> Transition {
        self.exit
    }

    /// Whether the overlay draws anything this frame
    pub fn is_shown(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Whether the overlay is heading toward (or at) full visibility
    pub fn target(&self) -> bool {
        matches!(self.phase, Phase::Appearing | Phase::Visible)
    }

    /// Effect governing the current frame: enter while showing, exit while hiding
    pub fn active_transition(&self) -> Transition {
        if self.target() {
            self.enter
        } else {
            self.exit
        }
    }

    /// Point the animation at a new target without advancing time
    pub fn set_visible(&mut self, visible: bool) {
        match (visible, self.phase) {
            (true, Phase::Hidden | Phase::Disappearing) => self.phase = Phase::Appearing,
            (false, Phase::Visible | Phase::Appearing) => self.phase = Phase::Disappearing,
            _ => {}
        }
        self.settle();
    }

    /// Move toward the current target by `dt`
    pub fn advance(&mut self, dt: Duration) {
        match self.phase {
            Phase::Appearing => {
                self.fraction = (self.fraction + step(dt, self.enter.duration())).min(1.0);
            }
            Phase::Disappearing => {
                self.fraction = (self.fraction - step(dt, self.exit.duration())).max(0.0);
            }
            Phase::Hidden | Phase::Visible => return,
        }
        self.settle();
    }

    /// Advance by the time elapsed since the previous sync, then retarget
    ///
    /// Called once per frame by the host with the current `loading` flag.
    pub fn sync<C: Clock + ?Sized>(&mut self, visible: bool, clock: &C) -> Phase {
        let now = clock.now();
        if let Some(last) = self.last_sync {
            self.advance(now.saturating_duration_since(last));
        }
        self.last_sync = Some(now);
        self.set_visible(visible);
        self.phase
    }

    fn settle(&mut self) {
        match self.phase {
            Phase::Appearing
                if self.enter.duration().is_zero() || self.fraction >= 1.0 - SETTLE_EPSILON =>
            {
                self.fraction = 1.0;
                self.phase = Phase::Visible;
            }
            Phase::Disappearing
                if self.exit.duration().is_zero() || self.fraction <= SETTLE_EPSILON =>
            {
                self.fraction = 0.0;
                self.phase = Phase::Hidden;
            }
            _ => {}
        }
    }
}

impl Default for AnimatedVisibility {
    fn default() -> Self {
        Self::new(false)
    }
}

fn step(dt: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        1.0
    } else {
        dt.as_secs_f64() / duration.as_secs_f64()
    }
}
