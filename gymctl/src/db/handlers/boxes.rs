//! Database repository for boxes.

use crate::api::models::boxes::BoxStatus;
use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::boxes::{BoxCreateDBRequest, BoxDBResponse, BoxFilter},
};
use crate::types::BoxId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Boxes<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Boxes<'c> {
    type CreateRequest = BoxCreateDBRequest;
    type Response = BoxDBResponse;
    type Id = BoxId;
    type Filter = BoxFilter;

    #[instrument(skip(self, request), fields(box_number = request.box_number), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let row = sqlx::query_as::<_, BoxDBResponse>(
            "INSERT INTO boxes (box_number, fitness_center_id, status)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(request.box_number)
        .bind(request.fitness_center_id)
        .bind(request.status)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(row)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let row = sqlx::query_as::<_, BoxDBResponse>("SELECT * FROM boxes WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(row)
    }

    #[instrument(skip(self, filter), fields(fitness_center_id = filter.fitness_center_id), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let rows = sqlx::query_as::<_, BoxDBResponse>(
            "SELECT * FROM boxes WHERE fitness_center_id = $1 ORDER BY box_number",
        )
        .bind(filter.fitness_center_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM boxes WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl<'c> Boxes<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Transition a box between open and closed.
    #[instrument(skip(self), err)]
    pub async fn set_status(&mut self, id: BoxId, status: BoxStatus) -> Result<BoxDBResponse> {
        let row = sqlx::query_as::<_, BoxDBResponse>(
            "UPDATE boxes SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(row)
    }
}
