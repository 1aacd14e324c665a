//! Database repository for fitness centers.

use crate::db::{
    errors::Result,
    models::fitness_centers::{FitnessCenterCreateDBRequest, FitnessCenterDBResponse},
};
use crate::types::FitnessCenterId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct FitnessCenters<'c> {
    db: &'c mut PgConnection,
}

impl<'c> FitnessCenters<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    pub async fn create(&mut self, request: &FitnessCenterCreateDBRequest) -> Result<FitnessCenterDBResponse> {
        let center = sqlx::query_as::<_, FitnessCenterDBResponse>(
            "INSERT INTO fitness_centers (name, address) VALUES ($1, $2) RETURNING *",
        )
        .bind(&request.name)
        .bind(&request.address)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(center)
    }

    #[instrument(skip(self), err)]
    pub async fn get_by_id(&mut self, id: FitnessCenterId) -> Result<Option<FitnessCenterDBResponse>> {
        let center = sqlx::query_as::<_, FitnessCenterDBResponse>("SELECT * FROM fitness_centers WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(center)
    }

    /// Used by idempotent seeding to decide whether demo data already exists.
    #[instrument(skip(self, name), err)]
    pub async fn get_by_name(&mut self, name: &str) -> Result<Option<FitnessCenterDBResponse>> {
        let center = sqlx::query_as::<_, FitnessCenterDBResponse>("SELECT * FROM fitness_centers WHERE name = $1")
            .bind(name)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(center)
    }
}
