//! # TitleBar Component
//!
//! Single-line header showing which day the guide covers and its time range.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.start_date, app.end_date, app.flags.is_base_time_format);
//! title_bar.render(frame, area);
//! ```
//!
//! ### Props-in-Struct Pattern
//!
//! Props are stored as struct fields rather than passed to `render()`, so the
//! component fits the fixed `Component::render` signature.

use chrono::NaiveDateTime;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::time::format_range;
use crate::tui::component::Component;

/// Header component showing the guide day and range.
pub struct TitleBar {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub is_base_time_format: bool,
}

impl TitleBar {
    pub fn new(start_date: NaiveDateTime, end_date: NaiveDateTime, is_base_time_format: bool) -> Self {
        Self {
            start_date,
            end_date,
            is_base_time_format,
        }
    }

    /// `"TV Guide · Tue 18 Oct 2022 · 00:00 - 00:00"`
    pub fn text(&self) -> String {
        format!(
            "TV Guide · {} · {}",
            self.start_date.format("%a %-d %b %Y"),
            format_range(self.start_date, self.end_date, self.is_base_time_format)
        )
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

/// One-line footer with key hints or the selected program.
pub struct StatusBar<'a> {
    pub message: &'a str,
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.message,
            Style::default().add_modifier(Modifier::DIM),
        ));
        frame.render_widget(line, area);
    }
}
