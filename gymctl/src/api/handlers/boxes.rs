//! HTTP handlers for box endpoints: the live floor view, the schedule grid,
//! and open/close transitions.

use crate::{
    api::models::boxes::{
        BoxResponse, BoxScheduleResponse, BoxStatus, BoxStatusUpdate, BoxSummary, DaySchedule,
        HourOccupancy, ScheduleBooking, ScheduleQueryParams,
    },
    db::{
        handlers::{Bookings, Boxes, FitnessCenters, Repository},
        models::{
            bookings::{BookingCreateDBRequest, BookingDBResponse},
            boxes::{BoxDBResponse, BoxFilter},
        },
    },
    errors::{Error, Result},
    scheduling::{self, BookedHours, ClockTime, SlotDuration, DAY_END_HOUR},
    types::{BoxId, FitnessCenterId},
    AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{Duration, Local, NaiveDate};
use sqlx::PgConnection;

/// Longest schedule grid a client may request, in days.
const MAX_SCHEDULE_DAYS: u8 = 31;

/// Default schedule grid length, in days.
const DEFAULT_SCHEDULE_DAYS: u8 = 7;

/// List a center's boxes with their occupancy at the next clock hour.
#[utoipa::path(
    get,
    path = "/centers/{center_id}/boxes",
    tag = "boxes",
    summary = "Live floor view",
    description = "All boxes of a fitness center, each flagged with whether a booking covers the \
                   upcoming clock hour. After 23:00 no next hour remains today and the flag is \
                   false across the board.",
    params(("center_id" = i64, Path, description = "Fitness center ID")),
    responses(
        (status = 200, description = "Boxes with live occupancy", body = Vec<BoxSummary>),
        (status = 404, description = "Fitness center not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all, fields(center_id = center_id))]
pub async fn list_boxes(
    State(state): State<AppState>,
    Path(center_id): Path<FitnessCenterId>,
) -> Result<Json<Vec<BoxSummary>>> {
    let now = Local::now();
    let next_hour = scheduling::first_open_hour(ClockTime::from(now.time()));

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    FitnessCenters::new(&mut conn)
        .get_by_id(center_id)
        .await?
        .ok_or_else(|| Error::not_found("Fitness center", center_id))?;

    let boxes = Boxes::new(&mut conn)
        .list(&BoxFilter { fitness_center_id: center_id })
        .await?;

    let today_bookings = Bookings::new(&mut conn)
        .for_center_date(center_id, now.date_naive())
        .await?;

    let summaries = boxes
        .into_iter()
        .map(|b| {
            let occupied_next_hour = next_hour.is_some_and(|hour| {
                today_bookings
                    .iter()
                    .any(|booking| booking.box_id == b.id && booking.booked_hours().covers(hour.get()))
            });
            BoxSummary {
                id: b.id,
                box_number: b.box_number,
                status: b.status,
                occupied_next_hour,
            }
        })
        .collect();

    Ok(Json(summaries))
}

/// Hour-by-hour occupancy of one box over the coming days.
#[utoipa::path(
    get,
    path = "/centers/{center_id}/boxes/{box_id}/schedule",
    tag = "boxes",
    summary = "Schedule grid for one box",
    params(
        ("center_id" = i64, Path, description = "Fitness center ID"),
        ("box_id" = i64, Path, description = "Box ID"),
        ScheduleQueryParams,
    ),
    responses(
        (status = 200, description = "Per-hour occupancy grid", body = BoxScheduleResponse),
        (status = 400, description = "Day count outside 1-31"),
        (status = 404, description = "Box not found in this fitness center"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all, fields(center_id = center_id, box_id = box_id))]
pub async fn get_box_schedule(
    State(state): State<AppState>,
    Path((center_id, box_id)): Path<(FitnessCenterId, BoxId)>,
    Query(params): Query<ScheduleQueryParams>,
) -> Result<Json<BoxScheduleResponse>> {
    let days = params.days.unwrap_or(DEFAULT_SCHEDULE_DAYS);
    if days == 0 || days > MAX_SCHEDULE_DAYS {
        return Err(Error::BadRequest {
            message: format!("days must be between 1 and {MAX_SCHEDULE_DAYS}"),
        });
    }

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let boks = get_center_box(&mut conn, center_id, box_id).await?;

    let today = Local::now().date_naive();
    let until = today + Duration::days(i64::from(days) - 1);

    let bookings = Bookings::new(&mut conn).for_box_between(boks.id, today, until).await?;

    let days = (0..i64::from(days))
        .map(|offset| day_schedule(today + Duration::days(offset), &bookings))
        .collect();

    Ok(Json(BoxScheduleResponse { box_id: boks.id, days }))
}

fn day_schedule(date: NaiveDate, bookings: &[BookingDBResponse]) -> DaySchedule {
    let day_rows: Vec<&BookingDBResponse> = bookings.iter().filter(|b| b.date == date).collect();
    let booked: Vec<BookedHours> = day_rows.iter().map(|b| b.booked_hours()).collect();
    let grid = scheduling::hourly_occupancy(&booked);

    let hours = (0..DAY_END_HOUR)
        .map(|hour| {
            let covering = grid[usize::from(hour)];
            HourOccupancy {
                hour,
                available: covering.is_none(),
                booking: covering.map(|idx| ScheduleBooking::from(day_rows[idx])),
            }
        })
        .collect();

    DaySchedule { date, hours }
}

/// Open or close a box.
#[utoipa::path(
    patch,
    path = "/centers/{center_id}/boxes/{box_id}/status",
    tag = "boxes",
    summary = "Open or close a box",
    description = "Closing books the box out from the nearest whole hour for the requested number \
                   of hours (truncated at the end of the day) and evicts whoever held the current \
                   hour. Reopening evicts the covering closure booking.",
    request_body = BoxStatusUpdate,
    params(
        ("center_id" = i64, Path, description = "Fitness center ID"),
        ("box_id" = i64, Path, description = "Box ID"),
    ),
    responses(
        (status = 200, description = "Updated box", body = BoxResponse),
        (status = 400, description = "Missing or out-of-range closure hours, or no whole hour remains today"),
        (status = 404, description = "Box not found in this fitness center"),
        (status = 409, description = "Closure lost a race against a concurrent booking"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all, fields(center_id = center_id, box_id = box_id, status = ?data.status))]
pub async fn update_box_status(
    State(state): State<AppState>,
    Path((center_id, box_id)): Path<(FitnessCenterId, BoxId)>,
    Json(data): Json<BoxStatusUpdate>,
) -> Result<Json<BoxResponse>> {
    // Validate the payload shape before any database work.
    let closure = match data.status {
        BoxStatus::Closed => {
            let hours = data.closed_hours.ok_or_else(|| Error::BadRequest {
                message: "closed_hours is required when closing a box".to_string(),
            })?;
            Some(SlotDuration::new(hours)?)
        }
        BoxStatus::Open => None,
    };

    let now = Local::now();
    let today = now.date_naive();
    let hour = scheduling::nearest_hour(ClockTime::from(now.time()));

    if closure.is_some() && hour >= DAY_END_HOUR {
        return Err(Error::BadRequest {
            message: "no whole hour remains today to close the box".to_string(),
        });
    }

    // Eviction, the closure booking, and the status flip land together or not
    // at all.
    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;
    let boks = get_center_box(&mut tx, center_id, box_id).await?;

    // Whoever holds the surrounding hour is evicted: a closure takes the box
    // away, a reopening removes the closure itself.
    if hour < DAY_END_HOUR {
        let mut bookings = Bookings::new(&mut tx);
        let covering = bookings.covering_hour(boks.id, today, i16::from(hour)).await?;
        for booking in covering {
            bookings.delete(booking.id).await?;
        }
    }

    if let Some(duration) = closure {
        // Truncate at the day boundary rather than wrapping past midnight.
        let hours = duration.hours().min(DAY_END_HOUR - hour);

        Bookings::new(&mut tx)
            .create(&BookingCreateDBRequest {
                user_id: data.user_id,
                box_id: boks.id,
                date: today,
                code: super::bookings::generate_booking_code(),
                start_hour: i16::from(hour),
                duration_hours: i16::from(hours),
            })
            .await?;
    }

    let updated = Boxes::new(&mut tx).set_status(boks.id, data.status).await?;
    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok(Json(BoxResponse::from(updated)))
}

/// Remove a box from a center.
#[utoipa::path(
    delete,
    path = "/centers/{center_id}/boxes/{box_id}",
    tag = "boxes",
    summary = "Delete a box",
    params(
        ("center_id" = i64, Path, description = "Fitness center ID"),
        ("box_id" = i64, Path, description = "Box ID"),
    ),
    responses(
        (status = 204, description = "Box deleted"),
        (status = 404, description = "Box not found in this fitness center"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all, fields(center_id = center_id, box_id = box_id))]
pub async fn delete_box(
    State(state): State<AppState>,
    Path((center_id, box_id)): Path<(FitnessCenterId, BoxId)>,
) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let boks = get_center_box(&mut conn, center_id, box_id).await?;

    Boxes::new(&mut conn).delete(boks.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fetch a box and verify it belongs to the addressed fitness center; a box
/// reached through the wrong tenant is reported as absent, not forbidden.
async fn get_center_box(
    conn: &mut PgConnection,
    center_id: FitnessCenterId,
    box_id: BoxId,
) -> Result<BoxDBResponse> {
    let boks = Boxes::new(conn)
        .get_by_id(box_id)
        .await?
        .filter(|b| b.fitness_center_id == center_id)
        .ok_or_else(|| Error::not_found("Box", box_id))?;

    Ok(boks)
}
