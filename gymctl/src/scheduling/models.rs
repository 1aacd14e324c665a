//! Value types for the availability engine.
//!
//! The types here make the scheduling domain's bounds unrepresentable rather
//! than re-checked at every call site: an [`HourOfDay`] is always `0..=23`, a
//! [`SlotDuration`] always `1..=4`. Fallible constructors are the single
//! validation point; once a value exists it can be trusted.

use crate::types::BoxId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error as ThisError;
use utoipa::ToSchema;

/// Exclusive end of the bookable day. Hours run `0..DAY_END_HOUR`.
pub const DAY_END_HOUR: u8 = 24;

/// Shortest bookable slot, in hours.
pub const MIN_SLOT_HOURS: u8 = 1;

/// Longest bookable slot, in hours.
pub const MAX_SLOT_HOURS: u8 = 4;

/// Rejection taxonomy for the engine's boundary.
///
/// Everything here is an invalid-argument class error: it is raised
/// synchronously when a value fails construction and never produces a partial
/// result. Empty availability is a normal result, not an error.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Hour outside the day-local range `0..=23`
    #[error("hour {0} is outside the bookable day (0-23)")]
    InvalidHour(i64),

    /// Duration outside the allowed `1..=4` hour range
    #[error("duration of {0} hours is outside the allowed range (1-4)")]
    InvalidDuration(i64),

    /// Clock time string that is neither `HH:MM` nor `HHMM`
    #[error("{0:?} is not a valid HH:MM or HHMM clock time")]
    InvalidClockTime(String),
}

/// A day-local hour, guaranteed to be in `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "u8", into = "u8")]
#[schema(value_type = u8)]
pub struct HourOfDay(u8);

impl HourOfDay {
    /// First hour of the day.
    pub const FIRST: HourOfDay = HourOfDay(0);

    /// Last hour of the day.
    pub const LAST: HourOfDay = HourOfDay(23);

    pub fn new(hour: u8) -> Result<Self, Error> {
        if hour < DAY_END_HOUR {
            Ok(Self(hour))
        } else {
            Err(Error::InvalidHour(i64::from(hour)))
        }
    }

    /// Lossless fallible conversion for values arriving as wider integers.
    pub fn from_i64(hour: i64) -> Result<Self, Error> {
        u8::try_from(hour)
            .map_err(|_| Error::InvalidHour(hour))
            .and_then(Self::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HourOfDay {
    type Error = Error;

    fn try_from(hour: u8) -> Result<Self, Error> {
        Self::new(hour)
    }
}

impl From<HourOfDay> for u8 {
    fn from(hour: HourOfDay) -> u8 {
        hour.0
    }
}

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// A booking length in whole hours, guaranteed to be in `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "u8", into = "u8")]
#[schema(value_type = u8)]
pub struct SlotDuration(u8);

impl SlotDuration {
    pub fn new(hours: u8) -> Result<Self, Error> {
        if (MIN_SLOT_HOURS..=MAX_SLOT_HOURS).contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(Error::InvalidDuration(i64::from(hours)))
        }
    }

    pub fn from_i64(hours: i64) -> Result<Self, Error> {
        u8::try_from(hours)
            .map_err(|_| Error::InvalidDuration(hours))
            .and_then(Self::new)
    }

    pub fn hours(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SlotDuration {
    type Error = Error;

    fn try_from(hours: u8) -> Result<Self, Error> {
        Self::new(hours)
    }
}

impl From<SlotDuration> for u8 {
    fn from(duration: SlotDuration) -> u8 {
        duration.0
    }
}

/// A time of day with minute resolution, parsed from client input.
///
/// Accepts both `"HH:MM"` and the compact `"HHMM"` form the mobile clients
/// send in URL paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: HourOfDay,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, Error> {
        let hour = HourOfDay::new(hour)?;
        if minute >= 60 {
            return Err(Error::InvalidClockTime(format!("{:02}:{minute:02}", hour.get())));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(self) -> HourOfDay {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidClockTime(s.to_string());

        let (hh, mm) = match s.split_once(':') {
            Some((hh, mm)) if hh.len() == 2 && mm.len() == 2 => (hh, mm),
            Some(_) => return Err(invalid()),
            None if s.len() == 4 => s.split_at(2),
            None => return Err(invalid()),
        };

        let hour: u8 = hh.parse().map_err(|_| invalid())?;
        let minute: u8 = mm.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl From<chrono::NaiveTime> for ClockTime {
    fn from(t: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        // Wall-clock hours/minutes are always in range.
        Self {
            hour: HourOfDay(t.hour() as u8),
            minute: t.minute() as u8,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour.get(), self.minute)
    }
}

/// The hours one existing booking occupies on its day: `[start, start + duration)`,
/// clipped to the end of the day.
///
/// This is the projection of a stored booking that the engine consumes.
/// Callers are expected to supply rows that already satisfy the storage
/// invariants (bounded hours, no midnight span); the interval arithmetic is
/// total regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedHours {
    pub start_hour: u8,
    pub duration_hours: u8,
}

impl BookedHours {
    pub fn new(start_hour: u8, duration_hours: u8) -> Self {
        Self { start_hour, duration_hours }
    }

    /// Exclusive end of the occupied range, clipped to the day boundary.
    pub fn end_hour(self) -> u8 {
        self.start_hour
            .saturating_add(self.duration_hours)
            .min(DAY_END_HOUR)
    }

    /// Whether this booking covers the given hour.
    pub fn covers(self, hour: u8) -> bool {
        self.start_hour <= hour && hour < self.end_hour()
    }

    /// Half-open interval intersection with `[start, end)`.
    pub fn overlaps(self, start: u8, end: u8) -> bool {
        self.start_hour < end && start < self.end_hour()
    }
}

/// A candidate reservation window `[start_hour, end_hour)` of the requested
/// duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HourSlot {
    /// First occupied hour
    pub start_hour: u8,
    /// Exclusive end hour (at most 24)
    pub end_hour: u8,
}

/// A validated availability request: the earliest acceptable start and the
/// requested slot length. The calendar date is resolved by the caller, which
/// filters bookings to that day before invoking the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub earliest_start: HourOfDay,
    pub duration: SlotDuration,
}

impl AvailabilityQuery {
    pub fn new(earliest_start: HourOfDay, duration: SlotDuration) -> Self {
        Self { earliest_start, duration }
    }

    /// The last start hour at which a slot of this duration still fits before
    /// the day ends, or `None` if no start at or after `earliest_start` does.
    pub fn latest_start(&self) -> Option<HourOfDay> {
        let latest = DAY_END_HOUR - self.duration.hours();
        if self.earliest_start.get() > latest {
            None
        } else {
            // latest <= 23 because duration >= 1
            Some(HourOfDay(latest))
        }
    }
}

/// Result of an availability computation over one day.
///
/// `DayClosed` is the distinguished "no more bookings possible today"
/// outcome: no candidate start remains at or after the queried earliest
/// start. It is deliberately not an empty map, so callers can tell "the day
/// is over" apart from "every box is taken".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayAvailability {
    /// No candidate start hour fits before the end of the day.
    DayClosed,
    /// Open slots per box, ascending by box id; fully-booked boxes are omitted.
    Open(BTreeMap<BoxId, Vec<HourSlot>>),
}

impl DayAvailability {
    pub fn is_closed(&self) -> bool {
        matches!(self, DayAvailability::DayClosed)
    }
}
