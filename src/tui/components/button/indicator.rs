//! Indeterminate busy indicator
//!
//! One spinner glyph centered in its area. The frame counter comes from the
//! host's tick so the indicator itself holds no state.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Spinner glyphs, one per animation frame
pub const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BusyIndicator {
    frame: usize,
    style: Style,
}

impl BusyIndicator {
    pub fn new(frame: usize) -> Self {
        Self {
            frame,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn glyph(&self) -> char {
        SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
    }
}

impl Widget for BusyIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let x = area.x + area.width / 2;
        let y = area.y + area.height / 2;
        buf[(x, y)].set_char(self.glyph()).set_style(self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_frames_cycle() {
        assert_eq!(BusyIndicator::new(0).glyph(), '◐');
        assert_eq!(BusyIndicator::new(1).glyph(), '◓');
        assert_eq!(BusyIndicator::new(4).glyph(), '◐');
        assert_eq!(BusyIndicator::new(7).glyph(), '◒');
    }

    #[test]
    fn test_renders_centered() {
        let area = Rect::new(0, 0, 9, 3);
        let mut buf = Buffer::empty(area);
        BusyIndicator::new(2)
            .style(Style::default().fg(Color::Red))
            .render(area, &mut buf);

        assert_eq!(buf[(4, 1)].symbol(), "◑");
        assert_eq!(buf[(4, 1)].fg, Color::Red);
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_empty_area_is_noop() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        let before = buf.clone();
        BusyIndicator::new(0).render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(buf, before);
    }
}
