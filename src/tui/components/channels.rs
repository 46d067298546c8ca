//! # Channels Component
//!
//! The sidebar: one box per channel, stacked in the same row bands as the
//! content canvas and scrolled by the same vertical offset so the two panes
//! stay aligned.
//!
//! ## Windowing
//!
//! Every channel is offered to `is_channel_visible` with its `top`; only
//! channels that pass are drawn. The sidebar canvas is as tall as the
//! channel stack, so a channel scrolled half out of view is clipped by the
//! `ScrollView` rather than squashed.
//!
//! ## Corner
//!
//! With the timeline shown, the top `TIMELINE_HEIGHT` rows of the sidebar
//! are a blank corner above the channel list.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position as CellPosition, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::types::ChannelWithPosition;
use crate::tui::component::Component;
use crate::tui::components::timeline::TIMELINE_HEIGHT;

/// Replaces the default channel box.
pub trait RenderChannel {
    fn render_channel(&self, channel: &ChannelWithPosition, area: Rect, buf: &mut Buffer);
}

impl<F> RenderChannel for F
where
    F: Fn(&ChannelWithPosition, Rect, &mut Buffer),
{
    fn render_channel(&self, channel: &ChannelWithPosition, area: Rect, buf: &mut Buffer) {
        self(channel, area, buf)
    }
}

/// Default channel box: the title centered in the band, with a border
/// toward the content.
pub struct Channel<'a> {
    pub channel: &'a ChannelWithPosition,
    pub is_rtl: bool,
}

impl Widget for Channel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(*buf.area());
        if area.is_empty() {
            return;
        }
        let borders = if self.is_rtl {
            Borders::LEFT
        } else {
            Borders::RIGHT
        };
        let block = Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        // Title on the middle row of the band
        let title_row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1)
            .intersection(inner);
        Paragraph::new(self.channel.channel.title.as_str())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(title_row, buf);
    }
}

/// Adapts a [`RenderChannel`] override to a widget for the sidebar canvas.
struct ChannelOverride<'a> {
    renderer: &'a dyn RenderChannel,
    channel: &'a ChannelWithPosition,
}

impl Widget for ChannelOverride<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.renderer.render_channel(self.channel, area, buf);
    }
}

/// Sidebar component. Transient; created by the layout each frame.
pub struct Channels<'a> {
    pub channels: &'a [ChannelWithPosition],
    pub scroll_y: u16,
    pub is_rtl: bool,
    pub is_timeline: bool,
    pub is_channel_visible: &'a dyn Fn(u16) -> bool,
    pub render_channel: Option<&'a dyn RenderChannel>,
}

impl Channels<'_> {
    /// Height of the channel stack.
    fn canvas_height(&self) -> u16 {
        self.channels
            .iter()
            .map(|c| c.position.top.saturating_add(c.position.height))
            .max()
            .unwrap_or(0)
    }

    /// Split the sidebar into the corner and the scrolling list.
    pub fn areas(&self, area: Rect) -> (Option<Rect>, Rect) {
        if !self.is_timeline {
            return (None, area);
        }
        let corner_height = TIMELINE_HEIGHT.min(area.height);
        let corner = Rect::new(area.x, area.y, area.width, corner_height);
        let list = Rect::new(
            area.x,
            area.y + corner_height,
            area.width,
            area.height - corner_height,
        );
        (Some(corner), list)
    }
}

impl Component for Channels<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (corner, list) = self.areas(area);

        if let Some(corner) = corner {
            let borders = if self.is_rtl {
                Borders::LEFT | Borders::BOTTOM
            } else {
                Borders::RIGHT | Borders::BOTTOM
            };
            frame.render_widget(
                Block::default()
                    .borders(borders)
                    .border_style(Style::default().fg(Color::DarkGray)),
                corner,
            );
        }

        if list.is_empty() {
            return;
        }

        let canvas = Size::new(list.width, self.canvas_height().max(1));
        let mut scroll_view = ScrollView::new(canvas)
            .vertical_scrollbar_visibility(ScrollbarVisibility::Never)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for channel in self.channels {
            if !(self.is_channel_visible)(channel.position.top) {
                continue;
            }
            let rect = Rect::new(0, channel.position.top, list.width, channel.position.height)
                .intersection(Rect::new(0, 0, canvas.width, canvas.height));
            if rect.is_empty() {
                continue;
            }
            match self.render_channel {
                Some(renderer) => scroll_view.render_widget(ChannelOverride { renderer, channel }, rect),
                None => scroll_view.render_widget(
                    Channel {
                        channel,
                        is_rtl: self.is_rtl,
                    },
                    rect,
                ),
            }
        }

        let mut state = ScrollViewState::default();
        state.set_offset(CellPosition {
            x: 0,
            y: self.scroll_y,
        });
        frame.render_stateful_widget(scroll_view, list, &mut state);
    }
}
