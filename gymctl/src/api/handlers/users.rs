//! HTTP handlers for member administration.
//!
//! Account creation and login live in the external authentication layer;
//! these endpoints cover what front-desk staff need: finding members,
//! toggling membership, and removing accounts.

use crate::{
    api::models::{
        pagination::Paginated,
        users::{ListUsersQuery, MembershipUpdate, UserSummary},
    },
    db::{
        handlers::{FitnessCenters, Repository, Users},
        models::users::UserFilter,
    },
    errors::{Error, Result},
    types::{FitnessCenterId, UserId},
    AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};

/// List a center's members, optionally filtered by a search string.
#[utoipa::path(
    get,
    path = "/centers/{center_id}/users",
    tag = "users",
    summary = "List or search members",
    description = "Paginated member listing for one fitness center. With `search`, matches name, \
                   email and phone case-insensitively.",
    params(
        ("center_id" = i64, Path, description = "Fitness center ID"),
        ListUsersQuery,
    ),
    responses(
        (status = 200, description = "One page of members", body = Paginated<UserSummary>),
        (status = 404, description = "Fitness center not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all, fields(center_id = center_id))]
pub async fn list_center_users(
    State(state): State<AppState>,
    Path(center_id): Path<FitnessCenterId>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Paginated<UserSummary>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    FitnessCenters::new(&mut conn)
        .get_by_id(center_id)
        .await?
        .ok_or_else(|| Error::not_found("Fitness center", center_id))?;

    let filter = UserFilter {
        fitness_center_id: center_id,
        skip: query.pagination.offset(),
        limit: query.pagination.page_size(),
        search: query.search.clone().filter(|s| !s.trim().is_empty()),
    };

    let mut users = Users::new(&mut conn);
    let total = users.count(&filter).await?;
    let rows = users.list(&filter).await?;

    let items = rows.into_iter().map(UserSummary::from).collect();
    Ok(Json(Paginated::new(items, total, &query.pagination)))
}

/// Toggle a user's membership.
#[utoipa::path(
    patch,
    path = "/users/{id}/membership",
    tag = "users",
    summary = "Update membership status",
    request_body = MembershipUpdate,
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Updated member", body = UserSummary),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all, fields(id = id, is_member = data.is_member))]
pub async fn update_membership(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Json(data): Json<MembershipUpdate>,
) -> Result<Json<UserSummary>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let updated = Users::new(&mut conn).set_membership(id, data.is_member).await?;
    Ok(Json(UserSummary::from(updated)))
}

/// Remove a member account. Their bookings go with them (cascade).
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    summary = "Delete a member",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[tracing::instrument(skip_all, fields(id = id))]
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<UserId>) -> Result<StatusCode> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    if Users::new(&mut conn).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::not_found("User", id))
    }
}
