//! # Guide Data Model
//!
//! Plain view-model records. Nothing here is mutated by the layout: the
//! caller builds these once per schedule and hands out slices every frame.
//!
//! ```text
//! Schedule (JSON)            Converted (per geometry)
//! ├── Channel        ──▶     ChannelWithPosition { channel, position }
//! └── Program        ──▶     ProgramItem { data, position }
//!                                   │
//!                                   ▼  (per render, visible only)
//!                            ProgramOptions { data, position, is_live, .. }
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A broadcast channel as found in the schedule file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub uuid: String,
    pub title: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// A scheduled program as found in the schedule file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub channel_uuid: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub since: NaiveDateTime,
    pub till: NaiveDateTime,
    #[serde(default)]
    pub image: Option<String>,
}

/// Geometry of an item on the guide canvas, in terminal cells.
///
/// `left` is measured from the guide start in left-to-right order; mirroring
/// for RTL happens at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub top: u16,
    pub left: u16,
    pub width: u16,
    pub height: u16,
    /// `left + width`
    pub edge_end: u16,
}

/// A program with its computed canvas position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramItem {
    pub data: Program,
    pub position: Position,
}

/// A channel with its computed vertical position (`top`, `height`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelWithPosition {
    pub channel: Channel,
    pub position: Position,
}

/// Render-ready view of a visible program.
///
/// Built fresh for each visible program on each render pass; borrows the
/// program data rather than cloning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramOptions<'a> {
    pub data: &'a Program,
    /// Position shrunk by the gap between neighbouring blocks.
    pub position: Position,
    /// `since <= now < till`
    pub is_live: bool,
    /// Wide enough to show the time range under the title.
    pub is_min_width: bool,
}

/// Guide geometry in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// `hour_width * number_of_hours_in_day`
    pub day_width: u16,
    pub hour_width: u16,
    pub number_of_hours_in_day: u16,
    /// Hour of day the guide starts at (labels begin here).
    pub offset_start_hours_range: u16,
    pub sidebar_width: u16,
    pub item_height: u16,
}

impl Geometry {
    pub fn new(
        hour_width: u16,
        number_of_hours_in_day: u16,
        offset_start_hours_range: u16,
        sidebar_width: u16,
        item_height: u16,
    ) -> Self {
        Self {
            day_width: hour_width.saturating_mul(number_of_hours_in_day),
            hour_width,
            number_of_hours_in_day,
            offset_start_hours_range,
            sidebar_width,
            item_height,
        }
    }
}

/// Display toggles for the layout.
///
/// Defaults: left-to-right, 24-hour clock, sidebar, timeline and now-line
/// all shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    pub is_rtl: bool,
    /// `true` renders times on a 12-hour clock.
    pub is_base_time_format: bool,
    pub is_sidebar: bool,
    pub is_timeline: bool,
    pub is_line: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            is_rtl: false,
            is_base_time_format: false,
            is_sidebar: true,
            is_timeline: true,
            is_line: true,
        }
    }
}
