//! # Schedule Loading
//!
//! A schedule is a JSON document with a channel list and a flat program
//! list:
//!
//! ```json
//! {
//!   "channels": [{ "uuid": "c1", "title": "News 24" }],
//!   "epg": [{
//!     "id": "p1", "channelUuid": "c1", "title": "Headlines",
//!     "since": "2022-10-18T06:00:00", "till": "2022-10-18T06:30:00"
//!   }]
//! }
//! ```
//!
//! `programs` is accepted as an alias for `epg`. When no file is given the
//! viewer falls back to [`Schedule::sample`].

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use log::info;
use serde::{Deserialize, Serialize};

use crate::core::types::{Channel, Program};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default, rename = "epg", alias = "programs")]
    pub programs: Vec<Program>,
}

#[derive(Debug)]
pub enum ScheduleError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::Io(e) => write!(f, "schedule I/O error: {e}"),
            ScheduleError::Parse(e) => write!(f, "schedule parse error: {e}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

const SAMPLE_CHANNELS: &[&str] = &[
    "News 24",
    "Cinema One",
    "Sport Live",
    "Kids Zone",
    "Discovery",
    "Music Hits",
    "History",
    "Comedy Central",
    "Nature HD",
    "Travel",
];

const SAMPLE_TITLES: &[&str] = &[
    "Morning Briefing",
    "The Long Goodbye",
    "Match of the Day",
    "Cartoon Hour",
    "Deep Oceans",
    "Top 40 Countdown",
    "Empires Rising",
    "Stand-up Special",
    "Wild Africa",
    "Hidden Cities",
    "Evening Report",
    "Late Night Feature",
];

/// Program lengths in minutes, rotated per channel.
const SAMPLE_DURATIONS: &[i64] = &[30, 60, 90, 45, 120, 15, 75];

impl Schedule {
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        serde_json::from_str(json).map_err(ScheduleError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, ScheduleError> {
        let contents = fs::read_to_string(path).map_err(ScheduleError::Io)?;
        let schedule = Self::from_json(&contents)?;
        info!(
            "Loaded schedule from {}: {} channels, {} programs",
            path.display(),
            schedule.channels.len(),
            schedule.programs.len()
        );
        Ok(schedule)
    }

    /// The day most programs start on, used when no guide date is given.
    ///
    /// A program spilling over from the previous evening does not pull the
    /// guide back a day. Ties go to the earlier day.
    pub fn first_day(&self) -> Option<NaiveDate> {
        let mut starts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for program in &self.programs {
            *starts.entry(program.since.date()).or_default() += 1;
        }
        starts
            .into_iter()
            .rev()
            .max_by_key(|&(_, count)| count)
            .map(|(day, _)| day)
    }

    /// A full day of made-up programming for every sample channel.
    ///
    /// Odd channels start half an hour before midnight so the guide shows
    /// clipped blocks at its left edge.
    pub fn sample(day: NaiveDate) -> Self {
        let midnight = NaiveDateTime::new(day, NaiveTime::MIN);
        let day_end = midnight + TimeDelta::days(1);

        let channels: Vec<Channel> = SAMPLE_CHANNELS
            .iter()
            .map(|title| Channel {
                uuid: uuid::Uuid::new_v4().to_string(),
                title: (*title).to_string(),
                logo: None,
            })
            .collect();

        let mut programs = Vec::new();
        for (index, channel) in channels.iter().enumerate() {
            let mut since = if index % 2 == 1 {
                midnight - TimeDelta::minutes(30)
            } else {
                midnight
            };
            let mut slot = index;
            while since < day_end {
                let till = since + TimeDelta::minutes(SAMPLE_DURATIONS[slot % SAMPLE_DURATIONS.len()]);
                let title = SAMPLE_TITLES[(slot + index) % SAMPLE_TITLES.len()];
                programs.push(Program {
                    id: uuid::Uuid::new_v4().to_string(),
                    channel_uuid: channel.uuid.clone(),
                    title: title.to_string(),
                    description: Some(format!("{title} on {}", channel.title)),
                    since,
                    till,
                    image: None,
                });
                since = till;
                slot += 1;
            }
        }

        info!(
            "Generated sample schedule for {day}: {} channels, {} programs",
            channels.len(),
            programs.len()
        );
        Self { channels, programs }
    }
}
