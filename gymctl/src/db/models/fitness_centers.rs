//! Database models for fitness centers.

use crate::types::FitnessCenterId;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database request for creating a fitness center
#[derive(Debug, Clone)]
pub struct FitnessCenterCreateDBRequest {
    pub name: String,
    pub address: String,
}

/// Database response for a fitness center
#[derive(Debug, Clone, FromRow)]
pub struct FitnessCenterDBResponse {
    pub id: FitnessCenterId,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}
