use chrono::NaiveDateTime;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::core::time::position_x;

pub const LINE_SYMBOL: &str = "┃";

/// The "now" marker: a single column drawn over the content viewport.
///
/// The column is placed `minutes since start * hour_width / 60` cells into
/// the canvas (mirrored in RTL), shifted by the horizontal scroll, and
/// spans the part of the content height that is on screen.
pub struct Line {
    pub day_width: u16,
    pub hour_width: u16,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub now: NaiveDateTime,
    /// Content height in rows.
    pub height: u32,
    pub scroll_x: u16,
    pub scroll_y: u16,
    pub is_rtl: bool,
}

impl Line {
    /// Canvas column of `now`, if it is inside the guide range.
    pub fn canvas_x(&self) -> Option<u16> {
        if self.now < self.start_date || self.now >= self.end_date {
            return None;
        }
        let x = u16::try_from(position_x(self.start_date, self.now, self.hour_width)).ok()?;
        if x >= self.day_width {
            return None;
        }
        if self.is_rtl {
            Some(self.day_width - 1 - x)
        } else {
            Some(x)
        }
    }

    /// Screen column the marker occupies inside `viewport`, if on screen.
    pub fn column(&self, viewport: Rect) -> Option<Rect> {
        let x = self.canvas_x()?;
        if x < self.scroll_x || x - self.scroll_x >= viewport.width {
            return None;
        }
        let visible_rows = self.height.saturating_sub(u32::from(self.scroll_y));
        let height = u16::try_from(visible_rows)
            .unwrap_or(u16::MAX)
            .min(viewport.height);
        if height == 0 {
            return None;
        }
        Some(Rect::new(viewport.x + (x - self.scroll_x), viewport.y, 1, height))
    }
}

impl Widget for Line {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(column) = self.column(area) else {
            return;
        };
        let column = column.intersection(*buf.area());
        let style = Style::default().fg(Color::Red);
        for y in column.top()..column.bottom() {
            if let Some(cell) = buf.cell_mut((column.x, y)) {
                cell.set_symbol(LINE_SYMBOL).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::at;

    fn line() -> Line {
        Line {
            day_width: 288,
            hour_width: 12,
            start_date: at(0, 0),
            end_date: at(23, 59),
            now: at(1, 0),
            height: 6,
            scroll_x: 0,
            scroll_y: 0,
            is_rtl: false,
        }
    }

    #[test]
    fn test_canvas_x_from_minutes() {
        assert_eq!(line().canvas_x(), Some(12));
        let half_past = Line {
            now: at(1, 30),
            ..line()
        };
        assert_eq!(half_past.canvas_x(), Some(18));
    }

    #[test]
    fn test_canvas_x_outside_range() {
        let before = Line {
            start_date: at(2, 0),
            ..line()
        };
        assert_eq!(before.canvas_x(), None);
        let after = Line {
            end_date: at(0, 30),
            ..line()
        };
        assert_eq!(after.canvas_x(), None);
    }

    #[test]
    fn test_canvas_x_rtl() {
        let rtl = Line {
            is_rtl: true,
            ..line()
        };
        assert_eq!(rtl.canvas_x(), Some(275));
    }

    #[test]
    fn test_column_follows_scroll_and_content_height() {
        let viewport = Rect::new(10, 2, 40, 10);
        assert_eq!(line().column(viewport), Some(Rect::new(22, 2, 1, 6)));

        let scrolled = Line {
            scroll_x: 5,
            scroll_y: 2,
            ..line()
        };
        assert_eq!(scrolled.column(viewport), Some(Rect::new(17, 2, 1, 4)));

        let off_screen = Line {
            scroll_x: 13,
            ..line()
        };
        assert_eq!(off_screen.column(viewport), None);
    }

    #[test]
    fn test_render_draws_marker() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        line().render(area, &mut buf);
        for y in 0..4 {
            assert_eq!(buf.cell((12, y)).unwrap().symbol(), LINE_SYMBOL);
        }
        assert_eq!(buf.cell((11, 0)).unwrap().symbol(), " ");
    }
}
