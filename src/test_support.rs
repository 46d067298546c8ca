//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::schedule::Schedule;
use crate::core::state::App;
use crate::core::types::{Channel, DisplayFlags, Geometry, Program};

/// The day every fixture is scheduled on.
pub fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 10, 18).unwrap()
}

/// A time of day on [`test_day`].
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    test_day().and_hms_opt(hour, minute, 0).unwrap()
}

/// 12 columns per hour, 24 hours from midnight, 10-column sidebar, 3-row channels.
pub fn test_geometry() -> Geometry {
    Geometry::new(12, 24, 0, 10, 3)
}

pub fn channel(uuid: &str, title: &str) -> Channel {
    Channel {
        uuid: uuid.to_string(),
        title: title.to_string(),
        logo: None,
    }
}

pub fn program(
    id: &str,
    channel_uuid: &str,
    title: &str,
    since: NaiveDateTime,
    till: NaiveDateTime,
) -> Program {
    Program {
        id: id.to_string(),
        channel_uuid: channel_uuid.to_string(),
        title: title.to_string(),
        description: None,
        since,
        till,
        image: None,
    }
}

/// Two channels and three programs, one of them late in the day.
pub fn test_schedule() -> Schedule {
    Schedule {
        channels: vec![channel("a", "News 24"), channel("b", "Cinema")],
        programs: vec![
            program("news", "a", "News", at(0, 0), at(1, 30)),
            program("movie", "b", "Movie", at(0, 30), at(2, 0)),
            program("late", "a", "Late Show", at(10, 0), at(11, 0)),
        ],
    }
}

/// Creates a test App over [`test_schedule`] with default flags.
pub fn test_app() -> App {
    App::new(
        test_schedule(),
        test_day(),
        test_geometry(),
        DisplayFlags::default(),
        0,
    )
}
