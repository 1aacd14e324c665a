//! Database models for users.

use crate::api::models::users::MemberRole;
use crate::types::{FitnessCenterId, UserId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database request for creating a user.
///
/// Account provisioning happens in the external authentication layer; this
/// request exists for seeding and for mirroring externally-created accounts.
#[derive(Debug, Clone)]
pub struct UserCreateDBRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub is_member: bool,
    pub role: MemberRole,
    pub fitness_center_id: FitnessCenterId,
}

/// Database response for a user
#[derive(Debug, Clone, FromRow)]
pub struct UserDBResponse {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub is_member: bool,
    pub role: MemberRole,
    pub fitness_center_id: FitnessCenterId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filter for listing users within a fitness center.
///
/// `search` matches name, email and phone case-insensitively as a substring.
#[derive(Debug, Clone)]
pub struct UserFilter {
    pub fitness_center_id: FitnessCenterId,
    pub skip: i64,
    pub limit: i64,
    pub search: Option<String>,
}
