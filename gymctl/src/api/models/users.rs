//! API models for member reporting.

use super::pagination::Pagination;
use crate::db::models::users::UserDBResponse;
use crate::types::{FitnessCenterId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Role of an account within its fitness center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "member_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Member,
}

/// A member row in the admin listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserSummary {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub is_member: bool,
    pub role: MemberRole,
    pub fitness_center_id: FitnessCenterId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserDBResponse> for UserSummary {
    fn from(db: UserDBResponse) -> Self {
        Self {
            id: db.id,
            first_name: db.first_name,
            last_name: db.last_name,
            email: db.email,
            phone: db.phone,
            is_member: db.is_member,
            role: db.role,
            fitness_center_id: db.fitness_center_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

/// Query parameters for the member listing.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListUsersQuery {
    /// Pagination parameters
    #[serde(flatten)]
    #[param(inline)]
    pub pagination: Pagination,

    /// Case-insensitive substring filter over name, email and phone
    pub search: Option<String>,
}

/// Request body for toggling a user's membership.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MembershipUpdate {
    pub is_member: bool,
}
