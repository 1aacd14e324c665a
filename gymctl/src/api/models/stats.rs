//! API models for the admin dashboard.

use crate::db::models::stats::{CenterStatsDBResponse, DailyBookingCountDBRow};
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// Booking volume for one day.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DailyBookingCount {
    pub date: NaiveDate,
    pub count: i64,
}

impl From<DailyBookingCountDBRow> for DailyBookingCount {
    fn from(db: DailyBookingCountDBRow) -> Self {
        Self { date: db.date, count: db.count }
    }
}

/// Dashboard aggregates for one fitness center.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsResponse {
    pub new_members_this_month: i64,
    pub new_members_today: i64,
    pub total_members: i64,
    pub total_boxes: i64,
    pub checkins_today: i64,
    /// Bookings per day over the trailing 30 days; days without bookings are
    /// omitted
    pub daily_bookings: Vec<DailyBookingCount>,
}

impl StatsResponse {
    pub fn new(stats: CenterStatsDBResponse, daily: Vec<DailyBookingCountDBRow>) -> Self {
        Self {
            new_members_this_month: stats.new_members_this_month,
            new_members_today: stats.new_members_today,
            total_members: stats.total_members,
            total_boxes: stats.total_boxes,
            checkins_today: stats.checkins_today,
            daily_bookings: daily.into_iter().map(DailyBookingCount::from).collect(),
        }
    }
}
