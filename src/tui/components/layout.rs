//! # Layout Component
//!
//! The program guide: a scroll box holding a timeline topbar, a channel
//! sidebar, the program grid and the "now" line.
//!
//! ```text
//! scroll_box
//! ┌──────────┬──────────────────────────────────────┐
//! │ (corner) │ topbar: Timeline / render_timeline   │
//! ├──────────┼──────────────────────────────────────┤
//! │ channels │ content: Program / render_program    │
//! │          │               ┃ line                 │
//! └──────────┴──────────────────────────────────────┘
//! ```
//!
//! ## Architecture
//!
//! `Layout` is a transient component (created each frame) that wraps
//! `&'a mut LayoutState` (persistent state) and `LayoutProps` (data).
//! It computes very little itself:
//!
//! - `content_height = channels × item_height`, memoized in [`ContentHeight`]
//! - whether the now-line is due (`is_line` and the guide end is in the future)
//! - per program: ask `is_program_visible`, then draw it through the
//!   override or the default [`Program`] widget
//!
//! Everything else is handed to the child components as props.
//!
//! ## Scrolling
//!
//! The parent owns the scroll offsets and passes them in as props. Scroll
//! input goes to [`LayoutState`], which plays the host scroll box: it moves
//! within the canvas bounds and reports the new offsets as a
//! [`ScrollEvent`] for the parent to store.
//!
//! ## Handles
//!
//! After each render the four regions (scroll box, content, channels, line)
//! are recorded in [`LayoutHandle`] so the parent can hit-test and route
//! input by region.

use chrono::{Local, NaiveDateTime};
use log::trace;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position as CellPosition, Rect, Size};
use ratatui::widgets::Widget;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::action::ScrollEvent;
use crate::core::position::program_options;
use crate::core::time::is_future_time;
use crate::core::types::{
    ChannelWithPosition, DisplayFlags, Geometry, Position, ProgramItem, ProgramOptions,
};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::channels::{Channels, RenderChannel};
use crate::tui::components::line::Line;
use crate::tui::components::program::Program;
use crate::tui::components::timeline::{TIMELINE_HEIGHT, Timeline, TimelineProps};
use crate::tui::event::TuiEvent;

// ============================================================================
// Render overrides
// ============================================================================

/// What a program override receives.
#[derive(Debug, Clone, Copy)]
pub struct ProgramRenderProps<'a> {
    pub program: ProgramOptions<'a>,
    pub is_rtl: bool,
    pub is_base_time_format: bool,
}

/// Replaces the default program block.
pub trait RenderProgram {
    fn render_program(&self, props: ProgramRenderProps<'_>, area: Rect, buf: &mut Buffer);
}

impl<F> RenderProgram for F
where
    F: Fn(ProgramRenderProps<'_>, Rect, &mut Buffer),
{
    fn render_program(&self, props: ProgramRenderProps<'_>, area: Rect, buf: &mut Buffer) {
        self(props, area, buf)
    }
}

/// Replaces the default timeline.
pub trait RenderTimeline {
    fn render_timeline(&self, props: TimelineProps, area: Rect, buf: &mut Buffer);
}

impl<F> RenderTimeline for F
where
    F: Fn(TimelineProps, Rect, &mut Buffer),
{
    fn render_timeline(&self, props: TimelineProps, area: Rect, buf: &mut Buffer) {
        self(props, area, buf)
    }
}

struct ProgramOverride<'a, 'p> {
    renderer: &'a dyn RenderProgram,
    props: ProgramRenderProps<'p>,
}

impl Widget for ProgramOverride<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.renderer.render_program(self.props, area, buf);
    }
}

struct TimelineOverride<'a> {
    renderer: &'a dyn RenderTimeline,
    props: TimelineProps,
}

impl Widget for TimelineOverride<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.renderer.render_timeline(self.props, area, buf);
    }
}

// ============================================================================
// Props
// ============================================================================

/// Everything the layout needs for one render pass.
///
/// Built with [`LayoutProps::new`] from the required inputs; optional inputs
/// start at their defaults (`DisplayFlags::default()`, no overrides, scroll
/// at the origin, `now` from the wall clock) and are set with the builder
/// methods.
pub struct LayoutProps<'a> {
    pub programs: &'a [ProgramItem],
    pub channels: &'a [ChannelWithPosition],
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub now: NaiveDateTime,
    pub scroll_x: u16,
    pub scroll_y: u16,
    pub geometry: Geometry,
    pub flags: DisplayFlags,
    pub is_program_visible: &'a dyn Fn(&Position) -> bool,
    pub is_channel_visible: &'a dyn Fn(u16) -> bool,
    pub render_program: Option<&'a dyn RenderProgram>,
    pub render_channel: Option<&'a dyn RenderChannel>,
    pub render_timeline: Option<&'a dyn RenderTimeline>,
}

impl<'a> LayoutProps<'a> {
    pub fn new(
        programs: &'a [ProgramItem],
        channels: &'a [ChannelWithPosition],
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        geometry: Geometry,
        is_program_visible: &'a dyn Fn(&Position) -> bool,
        is_channel_visible: &'a dyn Fn(u16) -> bool,
    ) -> Self {
        Self {
            programs,
            channels,
            start_date,
            end_date,
            now: Local::now().naive_local(),
            scroll_x: 0,
            scroll_y: 0,
            geometry,
            flags: DisplayFlags::default(),
            is_program_visible,
            is_channel_visible,
            render_program: None,
            render_channel: None,
            render_timeline: None,
        }
    }

    pub fn scroll(mut self, scroll_x: u16, scroll_y: u16) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }

    pub fn flags(mut self, flags: DisplayFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    pub fn render_program(mut self, renderer: &'a dyn RenderProgram) -> Self {
        self.render_program = Some(renderer);
        self
    }

    pub fn render_channel(mut self, renderer: &'a dyn RenderChannel) -> Self {
        self.render_channel = Some(renderer);
        self
    }

    pub fn render_timeline(mut self, renderer: &'a dyn RenderTimeline) -> Self {
        self.render_timeline = Some(renderer);
        self
    }
}

// ============================================================================
// Areas and handles
// ============================================================================

/// Screen regions of the layout for a given scroll box area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutAreas {
    pub topbar: Option<Rect>,
    pub channels: Option<Rect>,
    pub content: Rect,
}

impl LayoutAreas {
    /// Split `area`: the sidebar takes `sidebar_width` columns on the leading
    /// side (right in RTL), the topbar takes `TIMELINE_HEIGHT` rows above the
    /// content. The content's horizontal offset depends on the sidebar only.
    pub fn compute(area: Rect, geometry: &Geometry, flags: &DisplayFlags) -> Self {
        let top = if flags.is_timeline {
            TIMELINE_HEIGHT.min(area.height)
        } else {
            0
        };
        let side = if flags.is_sidebar {
            geometry.sidebar_width.min(area.width)
        } else {
            0
        };
        let content_width = area.width - side;
        let (sidebar_x, content_x) = if flags.is_rtl {
            (area.x + content_width, area.x)
        } else {
            (area.x, area.x + side)
        };

        Self {
            topbar: flags
                .is_timeline
                .then(|| Rect::new(content_x, area.y, content_width, top)),
            channels: flags
                .is_sidebar
                .then(|| Rect::new(sidebar_x, area.y, side, area.height)),
            content: Rect::new(content_x, area.y + top, content_width, area.height - top),
        }
    }
}

/// Region identifiers recorded after each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutHandle {
    pub scroll_box: Rect,
    pub content: Rect,
    /// `None` when the sidebar is hidden.
    pub channels: Option<Rect>,
    /// `None` when no line is drawn.
    pub line: Option<Rect>,
}

/// A program drawn in the last render, in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProgram {
    pub id: String,
    pub area: Rect,
}

// ============================================================================
// State
// ============================================================================

/// `channel_count × item_height`, recomputed only when either input changes.
#[derive(Debug, Default)]
pub struct ContentHeight {
    key: Option<(usize, u16)>,
    value: u32,
    computations: usize,
}

impl ContentHeight {
    pub fn get(&mut self, channel_count: usize, item_height: u16) -> u32 {
        let key = (channel_count, item_height);
        if self.key != Some(key) {
            let height = channel_count as u64 * u64::from(item_height);
            self.value = u32::try_from(height).unwrap_or(u32::MAX);
            self.key = Some(key);
            self.computations += 1;
        }
        self.value
    }

    /// How many times the height has been recomputed.
    pub fn computations(&self) -> usize {
        self.computations
    }
}

/// Persistent layout state. Must be kept in the parent between frames.
#[derive(Default)]
pub struct LayoutState {
    /// Scroll offset of the content canvas
    pub scroll_state: ScrollViewState,
    pub content_height: ContentHeight,
    /// Regions from the last render
    pub handle: LayoutHandle,
    /// Programs drawn in the last render
    pub rendered_programs: Vec<RenderedProgram>,
    /// Canvas and viewport sizes from the last render (for clamping)
    canvas: Size,
    viewport: Size,
    /// Columns per horizontal step (a quarter hour)
    step_x: u16,
    /// Canvas column of the now-line from the last render
    now_x: Option<u16>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> (u16, u16) {
        (
            self.canvas.width.saturating_sub(self.viewport.width),
            self.canvas.height.saturating_sub(self.viewport.height),
        )
    }

    fn clamp(&self, x: u16, y: u16) -> (u16, u16) {
        let (max_x, max_y) = self.max_offset();
        (x.min(max_x), y.min(max_y))
    }

    /// The offsets the scroll box actually used, when they differ from what
    /// the parent last stored (e.g. after a resize shrank the range).
    pub fn pending_scroll(&self, scroll_x: u16, scroll_y: u16) -> Option<ScrollEvent> {
        let offset = self.scroll_state.offset();
        (offset.x != scroll_x || offset.y != scroll_y).then_some(ScrollEvent {
            scroll_left: offset.x,
            scroll_top: offset.y,
        })
    }

    /// Id of the program under a screen cell, from the last render.
    pub fn program_at(&self, column: u16, row: u16) -> Option<&str> {
        let content = self.handle.content;
        if !content.contains(CellPosition { x: column, y: row }) {
            return None;
        }
        let offset = self.scroll_state.offset();
        let point = CellPosition {
            x: column - content.x + offset.x,
            y: row - content.y + offset.y,
        };
        self.rendered_programs
            .iter()
            .find(|p| p.area.contains(point))
            .map(|p| p.id.as_str())
    }
}

impl EventHandler for LayoutState {
    type Event = ScrollEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ScrollEvent> {
        let current = self.scroll_state.offset();
        let (x, y) = (current.x, current.y);
        let step_x = self.step_x.max(1);
        let page_x = self.viewport.width.max(1);
        let page_y = self.viewport.height.max(1);

        let (target_x, target_y) = match event {
            TuiEvent::ScrollUp => (x, y.saturating_sub(1)),
            TuiEvent::ScrollDown => (x, y.saturating_add(1)),
            TuiEvent::ScrollLeft => (x.saturating_sub(step_x), y),
            TuiEvent::ScrollRight => (x.saturating_add(step_x), y),
            TuiEvent::ScrollPageUp => (x, y.saturating_sub(page_y)),
            TuiEvent::ScrollPageDown => (x, y.saturating_add(page_y)),
            TuiEvent::ScrollPageLeft => (x.saturating_sub(page_x), y),
            TuiEvent::ScrollPageRight => (x.saturating_add(page_x), y),
            TuiEvent::ScrollHome => (0, 0),
            TuiEvent::ScrollToNow => {
                let now_x = self.now_x?;
                (now_x.saturating_sub(self.viewport.width / 2), y)
            }
            _ => return None,
        };

        let (new_x, new_y) = self.clamp(target_x, target_y);
        if (new_x, new_y) == (x, y) {
            return None;
        }
        self.scroll_state.set_offset(CellPosition { x: new_x, y: new_y });
        Some(ScrollEvent {
            scroll_left: new_x,
            scroll_top: new_y,
        })
    }
}

// ============================================================================
// Component
// ============================================================================

/// The guide layout. Created fresh each frame.
pub struct Layout<'a> {
    pub state: &'a mut LayoutState,
    pub props: LayoutProps<'a>,
}

impl<'a> Layout<'a> {
    pub fn new(state: &'a mut LayoutState, props: LayoutProps<'a>) -> Self {
        Self { state, props }
    }

    /// Canvas rect for a program, mirrored in RTL and clipped to the canvas.
    fn program_rect(&self, position: &Position, canvas: Size) -> Rect {
        let left = if self.props.flags.is_rtl {
            self.props
                .geometry
                .day_width
                .saturating_sub(position.left)
                .saturating_sub(position.width)
        } else {
            position.left
        };
        Rect::new(left, position.top, position.width, position.height)
            .intersection(Rect::new(0, 0, canvas.width, canvas.height))
    }

    fn render_program(&mut self, scroll_view: &mut ScrollView, program: &ProgramItem, canvas: Size) {
        if !(self.props.is_program_visible)(&program.position) {
            return;
        }
        let options = program_options(program, self.props.now);
        let rect = self.program_rect(&options.position, canvas);
        let flags = self.props.flags;

        match self.props.render_program {
            Some(renderer) => scroll_view.render_widget(
                ProgramOverride {
                    renderer,
                    props: ProgramRenderProps {
                        program: options,
                        is_rtl: flags.is_rtl,
                        is_base_time_format: flags.is_base_time_format,
                    },
                },
                rect,
            ),
            None => scroll_view.render_widget(
                Program::new(options, flags.is_rtl, flags.is_base_time_format),
                rect,
            ),
        }
        self.state.rendered_programs.push(RenderedProgram {
            id: program.data.id.clone(),
            area: rect,
        });
    }

    fn timeline_props(&self) -> TimelineProps {
        let geometry = &self.props.geometry;
        let flags = &self.props.flags;
        TimelineProps {
            offset_start_hours_range: geometry.offset_start_hours_range,
            number_of_hours_in_day: geometry.number_of_hours_in_day,
            is_base_time_format: flags.is_base_time_format,
            hour_width: geometry.hour_width,
            sidebar_width: geometry.sidebar_width,
            is_sidebar: flags.is_sidebar,
            is_rtl: flags.is_rtl,
            day_width: geometry.day_width,
        }
    }

    fn render_topbar(&self, frame: &mut Frame, area: Rect, scroll_x: u16) {
        let canvas = Size::new(self.props.geometry.day_width.max(1), area.height.max(1));
        let canvas_rect = Rect::new(0, 0, canvas.width, canvas.height);
        let mut scroll_view = ScrollView::new(canvas)
            .vertical_scrollbar_visibility(ScrollbarVisibility::Never)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let props = self.timeline_props();
        match self.props.render_timeline {
            Some(renderer) => {
                scroll_view.render_widget(TimelineOverride { renderer, props }, canvas_rect)
            }
            None => scroll_view.render_widget(Timeline::new(props), canvas_rect),
        }

        let mut state = ScrollViewState::default();
        state.set_offset(CellPosition { x: scroll_x, y: 0 });
        frame.render_stateful_widget(scroll_view, area, &mut state);
    }
}

impl Component for Layout<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let geometry = self.props.geometry;
        let flags = self.props.flags;
        let channel_count = self.props.channels.len();
        let content_height = self
            .state
            .content_height
            .get(channel_count, geometry.item_height);
        let is_future = is_future_time(self.props.end_date, self.props.now);
        let areas = LayoutAreas::compute(area, &geometry, &flags);

        // Content canvas, scrolled by the parent's offsets (clamped)
        let canvas = Size::new(
            geometry.day_width,
            u16::try_from(content_height).unwrap_or(u16::MAX),
        );
        self.state.canvas = canvas;
        self.state.viewport = areas.content.as_size();
        self.state.step_x = geometry.hour_width / 4;
        let (scroll_x, scroll_y) = self.state.clamp(self.props.scroll_x, self.props.scroll_y);
        self.state
            .scroll_state
            .set_offset(CellPosition { x: scroll_x, y: scroll_y });

        let mut scroll_view = ScrollView::new(Size::new(canvas.width.max(1), canvas.height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Never)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        self.state.rendered_programs.clear();
        let programs = self.props.programs;
        for program in programs {
            self.render_program(&mut scroll_view, program, canvas);
        }
        trace!(
            "Layout rendered {} of {} programs",
            self.state.rendered_programs.len(),
            programs.len()
        );
        frame.render_stateful_widget(scroll_view, areas.content, &mut self.state.scroll_state);

        // Now-line over the content viewport
        let line = Line {
            day_width: geometry.day_width,
            hour_width: geometry.hour_width,
            start_date: self.props.start_date,
            end_date: self.props.end_date,
            now: self.props.now,
            height: content_height,
            scroll_x,
            scroll_y,
            is_rtl: flags.is_rtl,
        };
        self.state.now_x = line.canvas_x();
        let line_rect = if flags.is_line && is_future {
            let rect = line.column(areas.content);
            frame.render_widget(line, areas.content);
            rect
        } else {
            None
        };

        if let Some(topbar) = areas.topbar {
            self.render_topbar(frame, topbar, scroll_x);
        }

        if let Some(sidebar) = areas.channels {
            Channels {
                channels: self.props.channels,
                scroll_y,
                is_rtl: flags.is_rtl,
                is_timeline: flags.is_timeline,
                is_channel_visible: self.props.is_channel_visible,
                render_channel: self.props.render_channel,
            }
            .render(frame, sidebar);
        }

        self.state.handle = LayoutHandle {
            scroll_box: area,
            content: areas.content,
            channels: areas.channels,
            line: line_rect,
        };
    }
}
