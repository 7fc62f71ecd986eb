//! Progress button component
//!
//! A button that shows either its content or an indeterminate busy
//! indicator, depending on a `loading` flag the caller owns.
//!
//! # State hoisting
//!
//! The button is rebuilt every frame from caller state and never keeps a
//! copy of `loading` or `enabled`. Anything that must survive between frames
//! (the overlay animation, the pressed state) lives in host-owned values the
//! button borrows: [`AnimatedVisibility`] and [`InteractionSource`].
//!
//! ```ignore
//! let button = ProgressButton::text("Start", || tx.send(Action::Start))
//!     .loading(state.loading)
//!     .visibility(&state.overlay)
//!     .interactions(&state.interactions)
//!     .spinner_frame(frame);
//! f.render_widget(&button, area);
//! ```
//!
//! # Click suppression
//!
//! `on_click` runs only for a recognized gesture while `enabled && !loading`.
//! While loading, gestures are still consumed so they don't leak to whatever
//! sits behind the button. A caller that never resets `loading` disables the
//! button for good; that's a usage error the widget cannot detect.

mod defaults;
mod indicator;
mod interaction;
mod transition;

pub use defaults::{ButtonColors, ButtonDefaults, ButtonElevation};
pub use indicator::{BusyIndicator, SPINNER_FRAMES};
pub use interaction::{Interaction, InteractionSource};
pub use transition::{
    AnimatedVisibility, Clock, ManualClock, Phase, SystemClock, Transition,
    DEFAULT_TRANSITION_DURATION,
};

use crate::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget},
};
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

/// What the button shows when it is not busy
#[derive(Debug, Clone)]
pub enum ButtonContent<'a> {
    /// Plain text. Hidden while loading by recoloring it to the background.
    Label {
        text: Cow<'a, str>,
        /// `None` uses the colors' content color
        color: Option<Color>,
    },
    /// Arbitrary styled content, e.g. an icon glyph and a caption
    Custom(Text<'a>),
}

impl ButtonContent<'_> {
    fn width(&self) -> u16 {
        match self {
            Self::Label { text, .. } => text.width() as u16,
            Self::Custom(text) => text.width() as u16,
        }
    }

    fn height(&self) -> u16 {
        match self {
            Self::Label { .. } => 1,
            Self::Custom(text) => text.height() as u16,
        }
    }

    fn describe(&self) -> &str {
        match self {
            Self::Label { text, .. } => text,
            Self::Custom(_) => "custom content",
        }
    }
}

/// The two logical states of a button for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPhase {
    /// Content shown, clicks delivered (subject to `enabled`)
    Idle,
    /// Busy overlay shown, clicks swallowed
    Busy,
}

impl ButtonPhase {
    pub fn from_loading(loading: bool) -> Self {
        if loading {
            Self::Busy
        } else {
            Self::Idle
        }
    }
}

/// Button with a hoisted loading state
///
/// Build one per frame, render it by reference, and route input to it
/// through [`Interactive`].
pub struct ProgressButton<'a> {
    content: ButtonContent<'a>,
    on_click: Box<dyn FnMut() + 'a>,
    loading: bool,
    enabled: bool,
    focused: bool,
    colors: ButtonColors,
    elevation: Option<ButtonElevation>,
    shape: BorderType,
    border: Option<Style>,
    padding: Padding,
    interactions: Option<&'a InteractionSource>,
    visibility: Option<&'a AnimatedVisibility>,
    spinner_frame: usize,
    indicator_color: Option<Color>,
}

impl<'a> ProgressButton<'a> {
    /// Button with a plain text label
    pub fn text(label: impl Into<Cow<'a, str>>, on_click: impl FnMut() + 'a) -> Self {
        Self::with_content(
            ButtonContent::Label {
                text: label.into(),
                color: None,
            },
            on_click,
        )
    }

    /// Button with arbitrary content
    pub fn content(content: impl Into<Text<'a>>, on_click: impl FnMut() + 'a) -> Self {
        Self::with_content(ButtonContent::Custom(content.into()), on_click)
    }

    pub fn with_content(content: ButtonContent<'a>, on_click: impl FnMut() + 'a) -> Self {
        let theme = Theme::default();
        Self {
            content,
            on_click: Box::new(on_click),
            loading: false,
            enabled: true,
            focused: false,
            colors: ButtonDefaults::colors(&theme),
            elevation: Some(ButtonDefaults::elevation(&theme)),
            shape: ButtonDefaults::shape(&theme),
            border: None,
            padding: ButtonDefaults::CONTENT_PADDING,
            interactions: None,
            visibility: None,
            spinner_frame: 0,
            indicator_color: None,
        }
    }

    /// Take colors, elevation and shape from a theme
    ///
    /// Call before any of the individual style setters, which it overrides.
    pub fn themed(mut self, theme: &Theme) -> Self {
        self.colors = ButtonDefaults::colors(theme);
        self.elevation = Some(ButtonDefaults::elevation(theme));
        self.shape = ButtonDefaults::shape(theme);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether Enter/Space should click this button
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Label color for the text variant; ignored for custom content
    pub fn text_color(mut self, color: Color) -> Self {
        if let ButtonContent::Label { color: slot, .. } = &mut self.content {
            *slot = Some(color);
        }
        self
    }

    pub fn colors(mut self, colors: ButtonColors) -> Self {
        self.colors = colors;
        self
    }

    /// `None` disables the drop shadow
    pub fn elevation(mut self, elevation: Option<ButtonElevation>) -> Self {
        self.elevation = elevation;
        self
    }

    /// Border glyph set, used when a border is drawn
    pub fn shape(mut self, shape: BorderType) -> Self {
        self.shape = shape;
        self
    }

    /// Draw a frame around the control with this stroke style
    pub fn border(mut self, style: Style) -> Self {
        self.border = Some(style);
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn interactions(mut self, source: &'a InteractionSource) -> Self {
        self.interactions = Some(source);
        self
    }

    /// Animate the overlay with host-owned transition state
    ///
    /// Without it the overlay snaps in and out with `loading`.
    pub fn visibility(mut self, visibility: &'a AnimatedVisibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    /// Spinner color; defaults to the content color
    pub fn indicator_color(mut self, color: Color) -> Self {
        self.indicator_color = Some(color);
        self
    }

    /// Which of the two render states this frame draws
    pub fn phase(&self) -> ButtonPhase {
        ButtonPhase::from_loading(self.loading)
    }

    /// Smallest (width, height) that fits the content, padding, frame and shadow
    pub fn preferred_size(&self) -> (u16, u16) {
        let frame = if self.border.is_some() { 2 } else { 0 };
        let depth = self.elevation.map_or(0, |e| e.default);
        let width = self.content.width() + self.padding.left + self.padding.right + frame + depth;
        let height = self.content.height().max(ButtonDefaults::MIN_CONTENT_HEIGHT)
            + self.padding.top
            + self.padding.bottom
            + frame
            + depth;
        (width, height)
    }

    /// The guarded click handler
    ///
    /// Invokes `on_click` only when enabled and not loading. Returns whether
    /// it fired.
    pub fn perform_click(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        if self.loading {
            tracing::debug!(
                button = self.content.describe(),
                "click suppressed while loading"
            );
            return false;
        }
        tracing::trace!(button = self.content.describe(), "click");
        (self.on_click)();
        true
    }

    fn emit(&self, interaction: Interaction) {
        if let Some(source) = self.interactions {
            source.emit(interaction);
        }
    }

    fn is_pressed(&self) -> bool {
        self.interactions.is_some_and(|s| s.is_pressed())
    }

    /// Shadow depth that fits inside `area`, leaving at least one cell of control
    fn shadow_depth(&self, area: Rect) -> u16 {
        let depth = self
            .elevation
            .map_or(0, |e| e.resolve(self.enabled, self.is_pressed()));
        depth
            .min(area.width.saturating_sub(1))
            .min(area.height.saturating_sub(1))
    }

    fn content_text(&self, background: Color) -> Text<'_> {
        match &self.content {
            ButtonContent::Label { text, color } => {
                let fg = match self.phase() {
                    ButtonPhase::Idle => color.unwrap_or(self.colors.content_color(self.enabled)),
                    ButtonPhase::Busy => background,
                };
                Text::styled(text.clone(), Style::default().fg(fg))
            }
            ButtonContent::Custom(text) => text.clone(),
        }
    }

    /// Single render path shared by both content variants
    fn render_content(&self, inner: Rect, background: Color, buf: &mut Buffer) {
        if inner.is_empty() {
            return;
        }
        let mut text = self.content_text(background);
        if self.focused {
            text = text.patch_style(Style::new().add_modifier(Modifier::BOLD));
        }
        let area = center_vertically(inner, text.height() as u16);

        Paragraph::new(text)
            .style(
                Style::default()
                    .fg(self.colors.content_color(self.enabled))
                    .bg(background),
            )
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_overlay(&self, inner: Rect, background: Color, buf: &mut Buffer) {
        let (shown, fraction, effect) = match (self.visibility, self.phase()) {
            (Some(anim), _) => (anim.is_shown(), anim.fraction(), anim.active_transition()),
            (None, ButtonPhase::Busy) => (true, 1.0, Transition::None),
            (None, ButtonPhase::Idle) => return,
        };
        if !shown || inner.is_empty() {
            return;
        }

        let color = self
            .indicator_color
            .unwrap_or_else(|| self.colors.content_color(self.enabled));

        let (region, glyph_color, masked) = match effect {
            Transition::None => (inner, color, true),
            Transition::Fade { .. } => (inner, blend(background, color, fraction), fraction >= 0.5),
            Transition::Expand { .. } => (expand_region(inner, fraction), color, true),
        };

        // Content shows through until the overlay is half opaque
        if !masked {
            return;
        }
        Clear.render(region, buf);
        buf.set_style(region, Style::default().bg(background));
        BusyIndicator::new(self.spinner_frame)
            .style(Style::default().fg(glyph_color).bg(background))
            .render(region, buf);
    }
}

impl Widget for &ProgressButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let background = self.colors.background_color(self.enabled);

        let depth = self.shadow_depth(area);
        let control = Rect {
            width: area.width - depth,
            height: area.height - depth,
            ..area
        };
        if let (true, Some(elevation)) = (depth > 0, self.elevation) {
            render_shadow(control, depth, elevation.shadow, buf);
        }

        let mut block = Block::default()
            .style(Style::default().bg(background))
            .padding(self.padding);
        if let Some(border) = self.border {
            block = block
                .borders(Borders::ALL)
                .border_type(self.shape)
                .border_style(border);
        }
        let inner = block.inner(control);
        block.render(control, buf);

        self.render_content(inner, background, buf);
        self.render_overlay(inner, background, buf);
    }
}

impl Interactive for ProgressButton<'_> {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if !self.enabled || !self.focused || key.kind != KeyEventKind::Press {
            return Handled::No;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.emit(Interaction::Press);
                self.emit(Interaction::Release);
                self.perform_click();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Handled {
        if !self.enabled {
            // A press from before the button was disabled must not carry over
            if mouse.kind == MouseEventKind::Up(MouseButton::Left) && self.is_pressed() {
                self.emit(Interaction::Cancel);
            }
            return Handled::No;
        }
        let depth = self.shadow_depth(area);
        let control = Rect {
            width: area.width - depth,
            height: area.height - depth,
            ..area
        };
        let inside = control.contains(Position::new(mouse.column, mouse.row));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.emit(Interaction::Press);
                Handled::Yes
            }
            MouseEventKind::Up(MouseButton::Left) => {
                // Without a source there is no press to match, so the release alone counts
                let pressed = self.interactions.map_or(true, |s| s.is_pressed());
                if !pressed {
                    return Handled::No;
                }
                if inside {
                    self.emit(Interaction::Release);
                    self.perform_click();
                    Handled::Yes
                } else {
                    self.emit(Interaction::Cancel);
                    Handled::from(self.interactions.is_some())
                }
            }
            _ => Handled::No,
        }
    }

    fn focusable(&self) -> bool {
        self.enabled
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("Enter/Space:click")
    }
}

fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height
        .max(ButtonDefaults::MIN_CONTENT_HEIGHT)
        .min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

fn expand_region(area: Rect, fraction: f32) -> Rect {
    let width = ((area.width as f32 * fraction).ceil() as u16).clamp(1, area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Paint a drop shadow along the right and bottom edges of `control`
fn render_shadow(control: Rect, depth: u16, color: Color, buf: &mut Buffer) {
    for offset in 0..depth {
        let x = control.right() + offset;
        for y in (control.y + 1)..(control.bottom() + depth) {
            buf[(x, y)].set_bg(color);
        }
        let y = control.bottom() + offset;
        for x in (control.x + 1)..(control.right() + depth) {
            buf[(x, y)].set_bg(color);
        }
    }
}

/// Linear blend between two colors; non-RGB colors switch at the midpoint
fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t >= 0.5 => to,
        _ => from,
    }
}
