//! Database repository for bookings.
//!
//! Bookings are the engine's input and the subject of the no-double-booking
//! invariant, and their access patterns are all date- or range-scoped rather
//! than generic CRUD, so this repository does not implement the shared
//! [`crate::db::handlers::Repository`] trait.

use crate::db::{
    errors::Result,
    models::bookings::{BookingCreateDBRequest, BookingDBResponse, BookingDetailDBResponse},
};
use crate::types::{BookingId, BoxId, FitnessCenterId, UserId};
use chrono::NaiveDate;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Bookings<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Bookings<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Insert a booking.
    ///
    /// The `bookings_no_overlap` exclusion constraint is the authoritative
    /// guard against two callers claiming the same hours: the losing insert
    /// fails with [`crate::db::errors::DbError::BookingConflict`], which
    /// callers surface as an HTTP conflict.
    #[instrument(
        skip(self, request),
        fields(box_id = request.box_id, date = %request.date, start_hour = request.start_hour),
        err
    )]
    pub async fn create(&mut self, request: &BookingCreateDBRequest) -> Result<BookingDBResponse> {
        let row = sqlx::query_as::<_, BookingDBResponse>(
            "INSERT INTO bookings (user_id, box_id, date, code, start_hour, duration_hours, end_hour)
             VALUES ($1, $2, $3, $4, $5, $6, $5 + $6)
             RETURNING *",
        )
        .bind(request.user_id)
        .bind(request.box_id)
        .bind(request.date)
        .bind(&request.code)
        .bind(request.start_hour)
        .bind(request.duration_hours)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(row)
    }

    /// All bookings on one date across every box of a fitness center — the
    /// availability engine's input set.
    #[instrument(skip(self), err)]
    pub async fn for_center_date(
        &mut self,
        fitness_center_id: FitnessCenterId,
        date: NaiveDate,
    ) -> Result<Vec<BookingDBResponse>> {
        let rows = sqlx::query_as::<_, BookingDBResponse>(
            "SELECT b.* FROM bookings b
             JOIN boxes x ON x.id = b.box_id
             WHERE x.fitness_center_id = $1 AND b.date = $2
             ORDER BY b.box_id, b.start_hour",
        )
        .bind(fitness_center_id)
        .bind(date)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }

    /// One box's bookings over a closed date range, for the schedule grid.
    #[instrument(skip(self), err)]
    pub async fn for_box_between(
        &mut self,
        box_id: BoxId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<BookingDBResponse>> {
        let rows = sqlx::query_as::<_, BookingDBResponse>(
            "SELECT * FROM bookings
             WHERE box_id = $1 AND date >= $2 AND date <= $3
             ORDER BY date, start_hour",
        )
        .bind(box_id)
        .bind(from)
        .bind(to)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }

    /// Bookings of one box-day whose hour range covers the given hour, i.e.
    /// the reservation currently holding the box. Used when reopening a box to
    /// evict the active closure.
    #[instrument(skip(self), err)]
    pub async fn covering_hour(
        &mut self,
        box_id: BoxId,
        date: NaiveDate,
        hour: i16,
    ) -> Result<Vec<BookingDBResponse>> {
        let rows = sqlx::query_as::<_, BookingDBResponse>(
            "SELECT * FROM bookings
             WHERE box_id = $1 AND date = $2 AND start_hour <= $3 AND end_hour > $3
             ORDER BY start_hour",
        )
        .bind(box_id)
        .bind(date)
        .bind(hour)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }

    /// A user's bookings, newest day first.
    #[instrument(skip(self), err)]
    pub async fn for_user(&mut self, user_id: UserId) -> Result<Vec<BookingDBResponse>> {
        let rows = sqlx::query_as::<_, BookingDBResponse>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY date DESC, start_hour",
        )
        .bind(user_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }

    /// A booking joined with its owning user, for the admin detail view.
    #[instrument(skip(self), err)]
    pub async fn get_detail(&mut self, id: BookingId) -> Result<Option<BookingDetailDBResponse>> {
        let row = sqlx::query_as::<_, BookingDetailDBResponse>(
            "SELECT b.*,
                    u.email AS user_email,
                    u.first_name AS user_first_name,
                    u.last_name AS user_last_name,
                    u.phone AS user_phone
             FROM bookings b
             JOIN users u ON u.id = b.user_id
             WHERE b.id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(row)
    }

    #[instrument(skip(self), err)]
    pub async fn delete(&mut self, id: BookingId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
