//! # Application State
//!
//! Core guide state. This module contains domain data only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── schedule: Schedule                    // raw channels + programs
//! ├── channels: Vec<ChannelWithPosition>    // converted once per geometry
//! ├── programs: Vec<ProgramItem>            // converted once per geometry
//! ├── start_date / end_date                 // guide range
//! ├── geometry: Geometry                    // cell sizes
//! ├── flags: DisplayFlags                   // toggles
//! ├── overscan: u16                         // visibility margin
//! ├── scroll_x / scroll_y                   // last reported scroll offsets
//! ├── selected_program: Option<String>      // clicked program id
//! └── status_message: String                // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::core::config::ResolvedConfig;
use crate::core::position::{convert_channels, convert_programs};
use crate::core::schedule::Schedule;
use crate::core::types::{
    ChannelWithPosition, DisplayFlags, Geometry, Program, ProgramItem,
};

/// Key help. Quit comes first so narrow terminals keep it.
pub const DEFAULT_STATUS: &str = "q quit · n now · ←↑↓→ scroll · s/t/l/r/f toggles";

pub struct App {
    pub schedule: Schedule,
    pub channels: Vec<ChannelWithPosition>,
    pub programs: Vec<ProgramItem>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub geometry: Geometry,
    pub flags: DisplayFlags,
    pub overscan: u16,
    pub scroll_x: u16,
    pub scroll_y: u16,
    pub selected_program: Option<String>,
    pub status_message: String,
}

impl App {
    /// Build the guide for `day`, starting at the geometry's start hour.
    pub fn new(
        schedule: Schedule,
        day: NaiveDate,
        geometry: Geometry,
        flags: DisplayFlags,
        overscan: u16,
    ) -> Self {
        let start_date = NaiveDateTime::new(day, NaiveTime::MIN)
            + TimeDelta::hours(i64::from(geometry.offset_start_hours_range));
        let end_date = start_date + TimeDelta::hours(i64::from(geometry.number_of_hours_in_day));

        let channels = convert_channels(&schedule.channels, geometry.item_height);
        let programs =
            convert_programs(&schedule.programs, &channels, start_date, end_date, &geometry);

        Self {
            schedule,
            channels,
            programs,
            start_date,
            end_date,
            geometry,
            flags,
            overscan,
            scroll_x: 0,
            scroll_y: 0,
            selected_program: None,
            status_message: DEFAULT_STATUS.to_string(),
        }
    }

    pub fn from_config(schedule: Schedule, day: NaiveDate, config: &ResolvedConfig) -> Self {
        Self::new(schedule, day, config.geometry, config.flags, config.overscan)
    }

    /// The program currently selected, if it is still on the guide.
    pub fn selected(&self) -> Option<&Program> {
        let id = self.selected_program.as_deref()?;
        self.programs
            .iter()
            .map(|item| &item.data)
            .find(|program| program.id == id)
    }
}
