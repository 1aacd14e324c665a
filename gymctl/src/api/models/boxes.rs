//! API models for boxes.

use crate::db::models::bookings::BookingDBResponse;
use crate::db::models::boxes::BoxDBResponse;
use crate::types::{BookingId, BoxId, FitnessCenterId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Operational state of a box. Closed boxes are blocked out with a closure
/// booking so the availability engine sees them as occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "box_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BoxStatus {
    Open,
    Closed,
}

/// A box as returned by management endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BoxResponse {
    pub id: BoxId,
    pub box_number: i32,
    pub fitness_center_id: FitnessCenterId,
    pub status: BoxStatus,
    pub created_at: DateTime<Utc>,
}

impl From<BoxDBResponse> for BoxResponse {
    fn from(db: BoxDBResponse) -> Self {
        Self {
            id: db.id,
            box_number: db.box_number,
            fitness_center_id: db.fitness_center_id,
            status: db.status,
            created_at: db.created_at,
        }
    }
}

/// A box in the live floor view, with its occupancy at the next clock hour.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BoxSummary {
    pub id: BoxId,
    pub box_number: i32,
    pub status: BoxStatus,
    /// Whether a booking covers the upcoming clock hour
    pub occupied_next_hour: bool,
}

/// Request body for opening or closing a box.
///
/// Closing requires `closed_hours` (1-4): the box is booked out from the
/// nearest whole hour for that long, attributed to the acting staff user.
/// Reopening ignores `closed_hours` and evicts the covering closure booking.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BoxStatusUpdate {
    pub status: BoxStatus,
    pub closed_hours: Option<u8>,
    /// Staff user recording the closure
    pub user_id: UserId,
}

/// Query parameters for the schedule grid.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ScheduleQueryParams {
    /// Number of days to include, starting today (default 7, max 31)
    pub days: Option<u8>,
}

/// A booking as shown inside the schedule grid.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScheduleBooking {
    pub booking_id: BookingId,
    pub start_hour: u8,
    pub duration_hours: u8,
    pub end_hour: u8,
}

impl From<&BookingDBResponse> for ScheduleBooking {
    fn from(db: &BookingDBResponse) -> Self {
        Self {
            booking_id: db.id,
            start_hour: db.start_hour as u8,
            duration_hours: db.duration_hours as u8,
            end_hour: db.end_hour as u8,
        }
    }
}

/// One hour cell of the schedule grid.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HourOccupancy {
    pub hour: u8,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<ScheduleBooking>,
}

/// One day of the schedule grid: 24 hour cells in order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub hours: Vec<HourOccupancy>,
}

/// Hour-by-hour occupancy of one box over the coming days.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BoxScheduleResponse {
    pub box_id: BoxId,
    pub days: Vec<DaySchedule>,
}
