//! HTTP handlers for booking endpoints.

use crate::{
    api::models::bookings::{BookingCreate, BookingDetailResponse, BookingResponse},
    db::{
        handlers::{Bookings, Boxes, Repository, Users},
        models::bookings::BookingCreateDBRequest,
    },
    errors::{Error, Result},
    scheduling::{HourOfDay, SlotDuration, DAY_END_HOUR},
    types::{BookingId, UserId},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use rand::RngExt;

/// Four-digit check-in code shown at the box door.
pub(crate) fn generate_booking_code() -> String {
    format!("{:04}", rand::rng().random_range(0..10_000))
}

/// Create a booking.
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    summary = "Create a booking",
    description = "Reserves a box for a contiguous hour range on one day. The hours are validated \
                   up front and re-checked against the day's bookings; the database exclusion \
                   constraint settles concurrent claims, so a lost race returns 409.",
    request_body = BookingCreate,
    responses(
        (status = 201, description = "Booking created", body = BookingResponse),
        (status = 400, description = "Out-of-range hours or a slot running past the end of the day"),
        (status = 404, description = "User or box not found"),
        (status = 409, description = "The hours overlap an existing booking"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all, fields(box_id = data.box_id, date = %data.date, start_hour = data.start_hour))]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(data): Json<BookingCreate>,
) -> Result<(StatusCode, Json<BookingResponse>)> {
    let start = HourOfDay::new(data.start_hour)?;
    let duration = SlotDuration::new(data.duration_hours)?;
    let end = start.get() + duration.hours();
    if end > DAY_END_HOUR {
        return Err(Error::BadRequest {
            message: format!(
                "a {} hour booking starting at {:02}:00 would run past the end of the day",
                duration.hours(),
                start.get()
            ),
        });
    }

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    Users::new(&mut conn)
        .get_by_id(data.user_id)
        .await?
        .ok_or_else(|| Error::not_found("User", data.user_id))?;

    Boxes::new(&mut conn)
        .get_by_id(data.box_id)
        .await?
        .ok_or_else(|| Error::not_found("Box", data.box_id))?;

    // Advisory pre-check for a friendly message; the exclusion constraint is
    // what actually guarantees the invariant under concurrency.
    let mut bookings = Bookings::new(&mut conn);
    let day = bookings.for_box_between(data.box_id, data.date, data.date).await?;
    if day.iter().any(|b| b.booked_hours().overlaps(start.get(), end)) {
        return Err(Error::Conflict {
            message: format!(
                "box {} is already booked between {:02}:00 and {:02}:00 on {}",
                data.box_id,
                start.get(),
                end,
                data.date
            ),
        });
    }

    let created = bookings
        .create(&BookingCreateDBRequest {
            user_id: data.user_id,
            box_id: data.box_id,
            date: data.date,
            code: generate_booking_code(),
            start_hour: i16::from(start.get()),
            duration_hours: i16::from(duration.hours()),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(BookingResponse::from(created))))
}

/// List a user's bookings.
#[utoipa::path(
    get,
    path = "/users/{user_id}/bookings",
    tag = "bookings",
    summary = "List a user's bookings",
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Bookings, newest day first", body = Vec<BookingResponse>),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all, fields(user_id = user_id))]
pub async fn list_user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Vec<BookingResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    Users::new(&mut conn)
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| Error::not_found("User", user_id))?;

    let bookings = Bookings::new(&mut conn).for_user(user_id).await?;
    Ok(Json(bookings.into_iter().map(BookingResponse::from).collect()))
}

/// Get a booking with its owning user, for the admin detail view.
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    summary = "Get a booking with user details",
    params(("id" = i64, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking detail", body = BookingDetailResponse),
        (status = 404, description = "Booking not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all, fields(id = id))]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<BookingId>,
) -> Result<Json<BookingDetailResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let detail = Bookings::new(&mut conn)
        .get_detail(id)
        .await?
        .ok_or_else(|| Error::not_found("Booking", id))?;

    Ok(Json(BookingDetailResponse::from(detail)))
}

/// Cancel a booking.
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    summary = "Cancel a booking",
    params(("id" = i64, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all, fields(id = id))]
pub async fn delete_booking(State(state): State<AppState>, Path(id): Path<BookingId>) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    if Bookings::new(&mut conn).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::not_found("Booking", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_codes_are_four_digits() {
        for _ in 0..100 {
            let code = generate_booking_code();
            assert_eq!(code.len(), 4);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
