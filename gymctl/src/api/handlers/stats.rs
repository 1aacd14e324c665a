//! HTTP handler for the admin dashboard aggregates.

use crate::{
    api::models::stats::StatsResponse,
    db::handlers::{FitnessCenters, Stats},
    errors::{Error, Result},
    types::FitnessCenterId,
    AppState,
};
use axum::{
    extract::{Path, State},
    response::Json,
};

/// Dashboard aggregates for one fitness center.
#[utoipa::path(
    get,
    path = "/centers/{center_id}/stats",
    tag = "stats",
    summary = "Dashboard aggregates",
    description = "Member totals and growth, box count, today's check-ins, and booking volume per \
                   day over the trailing 30 days.",
    params(("center_id" = i64, Path, description = "Fitness center ID")),
    responses(
        (status = 200, description = "Aggregates", body = StatsResponse),
        (status = 404, description = "Fitness center not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all, fields(center_id = center_id))]
pub async fn get_center_stats(
    State(state): State<AppState>,
    Path(center_id): Path<FitnessCenterId>,
) -> Result<Json<StatsResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    FitnessCenters::new(&mut conn)
        .get_by_id(center_id)
        .await?
        .ok_or_else(|| Error::not_found("Fitness center", center_id))?;

    let mut stats = Stats::new(&mut conn);
    let counters = stats.center_stats(center_id).await?;
    let daily = stats.daily_bookings(center_id).await?;

    Ok(Json(StatsResponse::new(counters, daily)))
}
