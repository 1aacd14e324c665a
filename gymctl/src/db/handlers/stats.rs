//! Aggregate queries for the admin dashboard.
//!
//! Read-only reporting over users, boxes and bookings for one fitness center.
//! These are bespoke aggregates rather than entity CRUD, so they live on
//! their own struct instead of the [`crate::db::handlers::Repository`] trait.

use crate::db::{
    errors::Result,
    models::stats::{CenterStatsDBResponse, DailyBookingCountDBRow},
};
use crate::types::FitnessCenterId;
use sqlx::PgConnection;
use tracing::instrument;

/// Length of the booking-volume window, in days.
const DAILY_WINDOW_DAYS: i32 = 30;

pub struct Stats<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Stats<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Headline counters: member totals and growth, box count, and today's
    /// check-ins.
    #[instrument(skip(self), err)]
    pub async fn center_stats(&mut self, fitness_center_id: FitnessCenterId) -> Result<CenterStatsDBResponse> {
        let (new_members_this_month, new_members_today, total_members): (i64, i64, i64) =
            sqlx::query_as(
                "SELECT
                     COUNT(*) FILTER (WHERE created_at >= date_trunc('month', CURRENT_DATE)),
                     COUNT(*) FILTER (WHERE created_at::date = CURRENT_DATE),
                     COUNT(*)
                 FROM users
                 WHERE fitness_center_id = $1 AND is_member",
            )
            .bind(fitness_center_id)
            .fetch_one(&mut *self.db)
            .await?;

        let total_boxes = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM boxes WHERE fitness_center_id = $1",
        )
        .bind(fitness_center_id)
        .fetch_one(&mut *self.db)
        .await?;

        let checkins_today = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bookings b
             JOIN users u ON u.id = b.user_id
             WHERE u.fitness_center_id = $1 AND b.date = CURRENT_DATE",
        )
        .bind(fitness_center_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(CenterStatsDBResponse {
            new_members_this_month,
            new_members_today,
            total_members,
            total_boxes,
            checkins_today,
        })
    }

    /// Bookings per day over the trailing 30-day window, ascending by date.
    /// Days with no bookings are absent; the chart layer decides how to render
    /// gaps.
    #[instrument(skip(self), err)]
    pub async fn daily_bookings(&mut self, fitness_center_id: FitnessCenterId) -> Result<Vec<DailyBookingCountDBRow>> {
        let rows = sqlx::query_as::<_, DailyBookingCountDBRow>(
            "SELECT b.date AS date, COUNT(*) AS count
             FROM bookings b
             JOIN boxes x ON x.id = b.box_id
             WHERE x.fitness_center_id = $1
               AND b.date >= CURRENT_DATE - $2
             GROUP BY b.date
             ORDER BY b.date",
        )
        .bind(fitness_center_id)
        .bind(DAILY_WINDOW_DAYS)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }
}
