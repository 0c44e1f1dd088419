// --- File: crates/salon_booking/src/slots.rs ---
//! Slot availability calculation.
//!
//! Pure computation: given a worker's declared availability windows and the
//! reservations already on the books for a date, derive the ordered list of
//! fixed-duration slot candidates, each tagged bookable or occupied. No I/O
//! and no shared state; callers supply "now" so the result is reproducible.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SlotError {
    #[error("service duration must be positive, got {0} minutes")]
    InvalidDuration(i64),
    #[error("failed to parse time: {0}")]
    TimeParse(String),
    #[error("failed to parse date: {0}")]
    DateParse(String),
}

/// A contiguous block of time a worker is available on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// An existing reservation occupying part of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Bookable,
    Occupied,
}

/// A fixed-duration interval tiled out of an availability window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCandidate {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub status: SlotStatus,
}

/// Parses a wall-clock time in `HH:MM` or `HH:MM:SS` form.
///
/// Seconds are accepted (the wire format carries them) but truncated; the
/// calculator works at minute granularity.
pub fn parse_wall_time(value: &str) -> Result<NaiveTime, SlotError> {
    let parsed = NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| SlotError::TimeParse(value.to_string()))?;
    Ok(parsed.with_second(0).unwrap_or(parsed))
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_wall_date(value: &str) -> Result<NaiveDate, SlotError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| SlotError::DateParse(value.to_string()))
}

fn minutes_of_day(t: NaiveTime) -> i64 {
    t.hour() as i64 * 60 + t.minute() as i64
}

fn time_from_minutes(m: i64) -> NaiveTime {
    NaiveTime::from_hms_opt((m / 60) as u32, (m % 60) as u32, 0)
        .unwrap_or_else(|| NaiveTime::from_hms_opt(0, 0, 0).unwrap())
}

/// Open-interval overlap test between two minute ranges.
fn overlaps(a_start: i64, a_end: i64, b_start: i64, b_end: i64) -> bool {
    a_start < b_end && b_start < a_end
}

/// Calculates the slot candidates for one worker's date.
///
/// Each window matching `date` is tiled from its start in steps of
/// `duration_minutes`; a tile never crosses the window end, so a trailing
/// remainder shorter than the duration yields no slot. When `date` is
/// `now`'s date, tiles starting before `now` are dropped entirely. A tile
/// overlapping any booking on the date is returned tagged [`SlotStatus::Occupied`];
/// everything else is [`SlotStatus::Bookable`].
///
/// Windows and bookings need not be pre-sorted; the result is ordered by
/// start time ascending across all windows.
pub fn calculate_day_slots(
    date: NaiveDate,
    duration_minutes: i64,
    windows: &[AvailabilityWindow],
    bookings: &[Booking],
    now: NaiveDateTime,
) -> Result<Vec<SlotCandidate>, SlotError> {
    if duration_minutes <= 0 {
        return Err(SlotError::InvalidDuration(duration_minutes));
    }

    let mut day_windows: Vec<&AvailabilityWindow> =
        windows.iter().filter(|w| w.date == date).collect();
    day_windows.sort_by_key(|w| w.start);

    let day_bookings: Vec<(i64, i64)> = bookings
        .iter()
        .filter(|b| b.date == date)
        .map(|b| (minutes_of_day(b.start), minutes_of_day(b.end)))
        .collect();

    let now_minutes = if now.date() == date {
        Some(minutes_of_day(now.time()))
    } else {
        None
    };

    debug!(
        %date,
        duration_minutes,
        windows = day_windows.len(),
        bookings = day_bookings.len(),
        "calculating day slots"
    );

    let mut slots = Vec::new();
    for window in day_windows {
        let window_start = minutes_of_day(window.start);
        let window_end = minutes_of_day(window.end);

        let mut start = window_start;
        while start + duration_minutes <= window_end {
            let end = start + duration_minutes;
            // Past slots are excluded on the current date only.
            if now_minutes.is_some_and(|m| start < m) {
                start = end;
                continue;
            }
            let occupied = day_bookings
                .iter()
                .any(|&(b_start, b_end)| overlaps(start, end, b_start, b_end));
            slots.push(SlotCandidate {
                start: time_from_minutes(start),
                end: time_from_minutes(end),
                status: if occupied {
                    SlotStatus::Occupied
                } else {
                    SlotStatus::Bookable
                },
            });
            start = end;
        }
    }

    // Overlapping windows can interleave; keep the overall ordering contract.
    slots.sort_by_key(|s| s.start);
    Ok(slots)
}
