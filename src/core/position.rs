//! # Canvas Positions
//!
//! Converts schedule records into canvas geometry. Channels stack vertically,
//! one `item_height` row band each; programs sit in their channel's band and
//! span `minutes * hour_width / 60` columns from the guide start.
//!
//! Programs are clipped to the guide range. Programs whose channel is not in
//! the schedule, or which fall entirely outside the range, are dropped.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use log::{debug, warn};

use crate::core::time::{is_live, position_x};
use crate::core::types::{
    Channel, ChannelWithPosition, Geometry, Position, Program, ProgramItem, ProgramOptions,
};

/// Columns left empty between neighbouring program blocks.
pub const PROGRAM_GAP: u16 = 1;

/// Minimum block width (after the gap) that shows the time range.
pub const PROGRAM_MIN_WIDTH: u16 = 14;

/// Clamp a wide intermediate into cell coordinates.
fn to_cells(value: i64) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

/// Assign each channel its row band: `top = index * item_height`.
///
/// Channels whose band would end past the last addressable row are dropped
/// with a warning.
pub fn convert_channels(channels: &[Channel], item_height: u16) -> Vec<ChannelWithPosition> {
    let capacity = usize::from(u16::MAX / item_height.max(1));
    if channels.len() > capacity {
        warn!(
            "{} channels of height {} exceed the canvas; keeping the first {}",
            channels.len(),
            item_height,
            capacity
        );
    }
    channels
        .iter()
        .take(capacity)
        .enumerate()
        .map(|(index, channel)| {
            let top = to_cells(index as i64 * i64::from(item_height));
            ChannelWithPosition {
                channel: channel.clone(),
                position: Position {
                    top,
                    left: 0,
                    width: 0,
                    height: item_height,
                    edge_end: 0,
                },
            }
        })
        .collect()
}

/// Place programs on the canvas spanning `start_date..end_date`.
pub fn convert_programs(
    programs: &[Program],
    channels: &[ChannelWithPosition],
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    geometry: &Geometry,
) -> Vec<ProgramItem> {
    let tops: HashMap<&str, u16> = channels
        .iter()
        .map(|c| (c.channel.uuid.as_str(), c.position.top))
        .collect();

    let mut converted = Vec::with_capacity(programs.len());
    for program in programs {
        let Some(&top) = tops.get(program.channel_uuid.as_str()) else {
            warn!(
                "Program {} references unknown channel {}",
                program.id, program.channel_uuid
            );
            continue;
        };
        if program.till <= start_date || program.since >= end_date {
            debug!("Program {} is outside the guide range", program.id);
            continue;
        }

        let since = program.since.max(start_date);
        let till = program.till.min(end_date);
        let left = to_cells(position_x(start_date, since, geometry.hour_width));
        let right = to_cells(position_x(start_date, till, geometry.hour_width));
        // Short programs still get one cell so they stay reachable.
        let width = right.saturating_sub(left).max(1);

        converted.push(ProgramItem {
            data: program.clone(),
            position: Position {
                top,
                left,
                width,
                height: geometry.item_height,
                edge_end: left.saturating_add(width),
            },
        });
    }

    debug!(
        "Converted {} of {} programs onto the guide canvas",
        converted.len(),
        programs.len()
    );
    converted
}

/// Derive the render options for a visible program.
pub fn program_options(item: &ProgramItem, now: NaiveDateTime) -> ProgramOptions<'_> {
    let width = item.position.width.saturating_sub(PROGRAM_GAP).max(1);
    ProgramOptions {
        data: &item.data,
        position: Position {
            width,
            edge_end: item.position.left.saturating_add(width),
            ..item.position
        },
        is_live: is_live(item.data.since, item.data.till, now),
        is_min_width: width >= PROGRAM_MIN_WIDTH,
    }
}
