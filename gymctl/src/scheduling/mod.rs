//! Box availability scheduling.
//!
//! This module is the computational core of the service: given the bookings
//! that already exist for a set of boxes on one calendar day, it decides which
//! start hours are still open for a reservation of a requested length.
//!
//! Everything in here is a pure function of its inputs. The module never
//! touches the database or the clock; callers load the day's bookings and
//! inject the current time of day explicitly, which keeps the overlap logic in
//! exactly one place and makes it testable without fixtures.
//!
//! # Modules
//!
//! - [`models`]: bounded hour/duration types, clock-time parsing, and the
//!   availability result types
//! - [`engine`]: slot enumeration, the first-open-hour policy, and per-hour
//!   occupancy grids
//!
//! # Invariants
//!
//! - Hours are day-local: `0..=23`, with `24` appearing only as the exclusive
//!   end of a day. Bookings never span midnight.
//! - All interval comparisons use half-open `[start, end)` semantics.
//! - Out-of-range hours and durations are rejected at construction, never
//!   clamped.

pub mod engine;
pub mod models;

pub use engine::{compute_availability, first_open_hour, hourly_occupancy, nearest_hour};
pub use models::{
    AvailabilityQuery, BookedHours, ClockTime, DayAvailability, Error, HourOfDay, HourSlot,
    SlotDuration, DAY_END_HOUR,
};
