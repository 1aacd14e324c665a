//! Database models for admin dashboard aggregates.

use chrono::NaiveDate;
use sqlx::FromRow;

/// Headline counters for one fitness center.
#[derive(Debug, Clone)]
pub struct CenterStatsDBResponse {
    pub new_members_this_month: i64,
    pub new_members_today: i64,
    pub total_members: i64,
    pub total_boxes: i64,
    pub checkins_today: i64,
}

/// One day's booking volume, for the trailing-window chart.
#[derive(Debug, Clone, FromRow)]
pub struct DailyBookingCountDBRow {
    pub date: NaiveDate,
    pub count: i64,
}
