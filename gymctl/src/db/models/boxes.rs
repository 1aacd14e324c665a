//! Database models for boxes.

use crate::api::models::boxes::BoxStatus;
use crate::types::{BoxId, FitnessCenterId};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database request for creating a box
#[derive(Debug, Clone)]
pub struct BoxCreateDBRequest {
    pub box_number: i32,
    pub fitness_center_id: FitnessCenterId,
    pub status: BoxStatus,
}

/// Database response for a box
#[derive(Debug, Clone, FromRow)]
pub struct BoxDBResponse {
    pub id: BoxId,
    pub box_number: i32,
    pub fitness_center_id: FitnessCenterId,
    pub status: BoxStatus,
    pub created_at: DateTime<Utc>,
}

/// Filter for listing boxes
#[derive(Debug, Clone)]
pub struct BoxFilter {
    pub fitness_center_id: FitnessCenterId,
}
