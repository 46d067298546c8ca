use crate::core::state::App;
use crate::core::visibility::Viewport;
use crate::core::types::Position;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Layout, LayoutAreas, LayoutProps, StatusBar, TitleBar};

use chrono::{Local, NaiveDateTime};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};

/// Split the frame into header, guide and footer rows.
pub fn frame_areas(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    ratatui::layout::Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}

/// Visible window of the content canvas for the guide area.
pub fn viewport(app: &App, guide_area: Rect) -> Viewport {
    let content = LayoutAreas::compute(guide_area, &app.geometry, &app.flags).content;
    Viewport {
        scroll_x: app.scroll_x,
        scroll_y: app.scroll_y,
        width: content.width,
        height: content.height,
        overscan: app.overscan,
        canvas_width: app.geometry.day_width,
        item_height: app.geometry.item_height,
        is_rtl: app.flags.is_rtl,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    draw_ui_at(frame, app, tui, Local::now().naive_local());
}

/// Draw the whole screen with an explicit clock.
pub fn draw_ui_at(frame: &mut Frame, app: &App, tui: &mut TuiState, now: NaiveDateTime) {
    let [title_area, guide_area, status_area] = frame_areas(frame.area());

    let mut title_bar = TitleBar::new(app.start_date, app.end_date, app.flags.is_base_time_format);
    title_bar.render(frame, title_area);

    let viewport = viewport(app, guide_area);
    let is_program_visible = |position: &Position| viewport.is_program_visible(position);
    let is_channel_visible = |top: u16| viewport.is_channel_visible(top);

    let props = LayoutProps::new(
        &app.programs,
        &app.channels,
        app.start_date,
        app.end_date,
        app.geometry,
        &is_program_visible,
        &is_channel_visible,
    )
    .scroll(app.scroll_x, app.scroll_y)
    .flags(app.flags)
    .now(now);
    Layout::new(&mut tui.layout, props).render(frame, guide_area);

    StatusBar {
        message: &app.status_message,
    }
    .render(frame, status_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::DEFAULT_STATUS;
    use crate::test_support::{at, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui_at(f, app, tui, at(2, 30)))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draws_header_guide_and_status() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui);

        assert!(text.contains("TV Guide"));
        assert!(text.contains("News 24"));
        assert!(text.contains("Movie"));
        // Status row is the last of 12; the whole key help fits in 60 columns
        let status: String = text.chars().skip(11 * 60).collect();
        assert_eq!(status.trim_end(), DEFAULT_STATUS);
        assert_eq!(tui.layout.handle.scroll_box, Rect::new(0, 1, 60, 10));
    }

    #[test]
    fn test_programs_outside_viewport_are_skipped() {
        let app = test_app();
        let mut tui = TuiState::new();
        draw(&app, &mut tui);

        // Late Show starts at 10:00, well right of the 50-column window
        let ids: Vec<&str> = tui
            .layout
            .rendered_programs
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["news", "movie"]);
    }

    #[test]
    fn test_viewport_tracks_content_area() {
        let app = test_app();
        let viewport = viewport(&app, Rect::new(0, 1, 60, 10));
        assert_eq!(viewport.width, 50);
        assert_eq!(viewport.height, 8);
        assert_eq!(viewport.canvas_width, 288);
    }
}
