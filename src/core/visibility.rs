//! # Visibility Predicates
//!
//! Decides whether an item's canvas position falls inside the rendered
//! viewport (plus an overscan margin). The layout calls these per item on
//! every render; it never pre-filters the sequence itself.

use crate::core::types::Position;

/// The visible window onto the guide canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub scroll_x: u16,
    pub scroll_y: u16,
    pub width: u16,
    pub height: u16,
    /// Extra cells rendered around the window on every side.
    pub overscan: u16,
    /// Canvas width, needed to mirror positions in RTL.
    pub canvas_width: u16,
    /// Row band height of a channel.
    pub item_height: u16,
    pub is_rtl: bool,
}

impl Viewport {
    /// Vertical window `[start, end)` including overscan.
    fn rows(&self) -> (u32, u32) {
        let start = u32::from(self.scroll_y.saturating_sub(self.overscan));
        let end = u32::from(self.scroll_y) + u32::from(self.height) + u32::from(self.overscan);
        (start, end)
    }

    /// Horizontal window `[start, end)` including overscan.
    fn columns(&self) -> (u32, u32) {
        let start = u32::from(self.scroll_x.saturating_sub(self.overscan));
        let end = u32::from(self.scroll_x) + u32::from(self.width) + u32::from(self.overscan);
        (start, end)
    }

    /// Whether a program at `position` intersects the window.
    pub fn is_program_visible(&self, position: &Position) -> bool {
        let top = u32::from(position.top);
        let bottom = top + u32::from(position.height);
        let (row_start, row_end) = self.rows();
        if bottom <= row_start || top >= row_end {
            return false;
        }

        let left = if self.is_rtl {
            u32::from(
                self.canvas_width
                    .saturating_sub(position.left)
                    .saturating_sub(position.width),
            )
        } else {
            u32::from(position.left)
        };
        let right = left + u32::from(position.width);
        let (col_start, col_end) = self.columns();
        right > col_start && left < col_end
    }

    /// Whether a channel band starting at `top` intersects the window.
    pub fn is_channel_visible(&self, top: u16) -> bool {
        let top = u32::from(top);
        let bottom = top + u32::from(self.item_height);
        let (row_start, row_end) = self.rows();
        bottom > row_start && top < row_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport {
            scroll_x: 24,
            scroll_y: 6,
            width: 40,
            height: 9,
            overscan: 0,
            canvas_width: 288,
            item_height: 3,
            is_rtl: false,
        }
    }

    fn at(top: u16, left: u16, width: u16) -> Position {
        Position {
            top,
            left,
            width,
            height: 3,
            edge_end: left + width,
        }
    }

    #[test]
    fn test_program_inside_window_is_visible() {
        assert!(viewport().is_program_visible(&at(6, 30, 10)));
    }

    #[test]
    fn test_program_partially_overlapping_is_visible() {
        // Starts left of the window, ends inside it.
        assert!(viewport().is_program_visible(&at(6, 10, 20)));
        // Band straddles the top edge.
        assert!(viewport().is_program_visible(&at(4, 30, 10)));
    }

    #[test]
    fn test_program_outside_window_is_hidden() {
        let viewport = viewport();
        assert!(!viewport.is_program_visible(&at(0, 30, 10)), "above");
        assert!(!viewport.is_program_visible(&at(15, 30, 10)), "below");
        assert!(!viewport.is_program_visible(&at(6, 0, 24)), "left");
        assert!(!viewport.is_program_visible(&at(6, 64, 10)), "right");
    }

    #[test]
    fn test_overscan_widens_window() {
        let viewport = Viewport {
            overscan: 3,
            ..viewport()
        };
        assert!(viewport.is_program_visible(&at(1, 30, 10)));
        assert!(viewport.is_program_visible(&at(6, 64, 10)));
        assert!(!viewport.is_program_visible(&at(6, 67, 10)));
    }

    #[test]
    fn test_rtl_mirrors_horizontal_test() {
        let viewport = Viewport {
            scroll_x: 0,
            is_rtl: true,
            ..viewport()
        };
        // The end of the day is drawn at the canvas origin in RTL.
        assert!(viewport.is_program_visible(&at(6, 270, 18)));
        assert!(!viewport.is_program_visible(&at(6, 0, 18)));
    }

    #[test]
    fn test_channel_visibility() {
        let viewport = viewport();
        assert!(!viewport.is_channel_visible(3));
        assert!(viewport.is_channel_visible(6));
        assert!(viewport.is_channel_visible(12));
        assert!(!viewport.is_channel_visible(15));
    }
}
