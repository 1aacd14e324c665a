//! Database models for bookings.

use crate::scheduling::BookedHours;
use crate::types::{BookingId, BoxId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database request for creating a booking.
///
/// `end_hour` is derived as `start_hour + duration_hours` at insert time; the
/// schema enforces that it stays within the day.
#[derive(Debug, Clone)]
pub struct BookingCreateDBRequest {
    pub user_id: UserId,
    pub box_id: BoxId,
    pub date: NaiveDate,
    pub code: String,
    pub start_hour: i16,
    pub duration_hours: i16,
}

/// Database response for a booking
#[derive(Debug, Clone, FromRow)]
pub struct BookingDBResponse {
    pub id: BookingId,
    pub user_id: UserId,
    pub box_id: BoxId,
    pub date: NaiveDate,
    pub code: String,
    pub start_hour: i16,
    pub duration_hours: i16,
    pub end_hour: i16,
    pub created_at: DateTime<Utc>,
}

impl BookingDBResponse {
    /// Project the stored row into the engine's day-local occupancy type.
    pub fn booked_hours(&self) -> BookedHours {
        BookedHours::new(self.start_hour as u8, self.duration_hours as u8)
    }
}

/// Database response for a booking joined with its owning user, for the admin
/// booking-detail view.
#[derive(Debug, Clone, FromRow)]
pub struct BookingDetailDBResponse {
    pub id: BookingId,
    pub user_id: UserId,
    pub box_id: BoxId,
    pub date: NaiveDate,
    pub code: String,
    pub start_hour: i16,
    pub duration_hours: i16,
    pub end_hour: i16,
    pub created_at: DateTime<Utc>,
    pub user_email: String,
    pub user_first_name: String,
    pub user_last_name: String,
    pub user_phone: String,
}
