//! HTTP handler for availability queries.

use crate::{
    api::models::availability::{AvailabilityQueryParams, AvailabilityResponse},
    db::{
        handlers::{Bookings, Boxes, FitnessCenters, Repository},
        models::boxes::BoxFilter,
    },
    errors::{Error, Result},
    scheduling::{self, AvailabilityQuery, BookedHours, ClockTime, SlotDuration},
    types::{BoxId, FitnessCenterId},
    AppState,
};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use std::collections::BTreeMap;

/// Compute open slots for every box of a fitness center on one day.
#[utoipa::path(
    get,
    path = "/centers/{center_id}/availability",
    tag = "availability",
    summary = "Open slots per box for one day",
    description = "Enumerates every start hour at which a booking of the requested duration would \
                   fit, per box, given the day's existing bookings. Returns an explicit day-closed \
                   message once no start hour remains.",
    params(
        ("center_id" = i64, Path, description = "Fitness center ID"),
        AvailabilityQueryParams,
    ),
    responses(
        (status = 200, description = "Per-box availability or the day-closed message", body = AvailabilityResponse),
        (status = 400, description = "Malformed time, date, or out-of-range duration"),
        (status = 404, description = "Fitness center not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all, fields(center_id = center_id, date = %params.date, duration = params.duration))]
pub async fn get_center_availability(
    State(state): State<AppState>,
    Path(center_id): Path<FitnessCenterId>,
    Query(params): Query<AvailabilityQueryParams>,
) -> Result<Json<AvailabilityResponse>> {
    // Validate before doing any work; out-of-range values are rejected, not
    // clamped.
    let duration = SlotDuration::new(params.duration)?;
    let now: ClockTime = params.time.parse()?;

    // Bookings start on the next whole hour. Past 23:00 the day is over, and
    // the short-circuit answers without touching the database.
    let Some(earliest) = scheduling::first_open_hour(now) else {
        return Ok(Json(AvailabilityResponse::day_closed()));
    };

    let query = AvailabilityQuery::new(earliest, duration);
    if query.latest_start().is_none() {
        return Ok(Json(AvailabilityResponse::day_closed()));
    }

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let mut centers = FitnessCenters::new(&mut conn);
    centers
        .get_by_id(center_id)
        .await?
        .ok_or_else(|| Error::not_found("Fitness center", center_id))?;

    let boxes = Boxes::new(&mut conn)
        .list(&BoxFilter { fitness_center_id: center_id })
        .await?;

    // Every box participates, including ones with no bookings yet.
    let mut existing: BTreeMap<BoxId, Vec<BookedHours>> =
        boxes.iter().map(|b| (b.id, Vec::new())).collect();

    let bookings = Bookings::new(&mut conn)
        .for_center_date(center_id, params.date)
        .await?;
    for booking in bookings {
        if let Some(booked) = existing.get_mut(&booking.box_id) {
            booked.push(booking.booked_hours());
        }
    }

    let availability = scheduling::compute_availability(query, &existing);
    Ok(Json(AvailabilityResponse::from_engine(earliest, duration, availability)))
}
