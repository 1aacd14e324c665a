//! API models for bookings.

use crate::db::models::bookings::{BookingDBResponse, BookingDetailDBResponse};
use crate::types::{BookingId, BoxId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a booking.
///
/// Hours are validated against the scheduling types in the handler: start in
/// `0..=23`, duration in `1..=4`, and the whole slot must end by hour 24 —
/// bookings never span midnight.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookingCreate {
    pub user_id: UserId,
    pub box_id: BoxId,
    /// Day of the reservation (YYYY-MM-DD)
    pub date: NaiveDate,
    pub start_hour: u8,
    pub duration_hours: u8,
}

/// A booking as returned to its owner.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: BookingId,
    pub user_id: UserId,
    pub box_id: BoxId,
    pub date: NaiveDate,
    /// Four-character check-in code shown at the door
    pub code: String,
    pub start_hour: u8,
    pub duration_hours: u8,
    pub end_hour: u8,
    pub created_at: DateTime<Utc>,
}

impl From<BookingDBResponse> for BookingResponse {
    fn from(db: BookingDBResponse) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            box_id: db.box_id,
            date: db.date,
            code: db.code,
            start_hour: db.start_hour as u8,
            duration_hours: db.duration_hours as u8,
            end_hour: db.end_hour as u8,
            created_at: db.created_at,
        }
    }
}

/// A booking joined with its owning user, for the admin detail view.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingDetailResponse {
    pub id: BookingId,
    pub user_id: UserId,
    pub box_id: BoxId,
    pub date: NaiveDate,
    pub code: String,
    pub start_hour: u8,
    pub duration_hours: u8,
    pub end_hour: u8,
    pub created_at: DateTime<Utc>,
    pub user_email: String,
    pub user_first_name: String,
    pub user_last_name: String,
    pub user_phone: String,
}

impl From<BookingDetailDBResponse> for BookingDetailResponse {
    fn from(db: BookingDetailDBResponse) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            box_id: db.box_id,
            date: db.date,
            code: db.code,
            start_hour: db.start_hour as u8,
            duration_hours: db.duration_hours as u8,
            end_hour: db.end_hour as u8,
            created_at: db.created_at,
            user_email: db.user_email,
            user_first_name: db.user_first_name,
            user_last_name: db.user_last_name,
            user_phone: db.user_phone,
        }
    }
}
