//! Database repository for users.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::users::{UserCreateDBRequest, UserDBResponse, UserFilter},
};
use crate::types::UserId;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Users<'c> {
    db: &'c mut PgConnection,
}

#[async_trait::async_trait]
impl<'c> Repository for Users<'c> {
    type CreateRequest = UserCreateDBRequest;
    type Response = UserDBResponse;
    type Id = UserId;
    type Filter = UserFilter;

    #[instrument(skip(self, request), fields(email = %request.email), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let row = sqlx::query_as::<_, UserDBResponse>(
            "INSERT INTO users (email, first_name, last_name, phone, is_member, role, fitness_center_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(&request.email)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.phone)
        .bind(request.is_member)
        .bind(request.role)
        .bind(request.fitness_center_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(row)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let row = sqlx::query_as::<_, UserDBResponse>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(row)
    }

    #[instrument(
        skip(self, filter),
        fields(fitness_center_id = filter.fitness_center_id, limit = filter.limit, skip = filter.skip),
        err
    )]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        let rows = sqlx::query_as::<_, UserDBResponse>(
            "SELECT * FROM users
             WHERE fitness_center_id = $1
               AND ($2::text IS NULL
                    OR first_name ILIKE $2
                    OR last_name ILIKE $2
                    OR email ILIKE $2
                    OR phone ILIKE $2)
             ORDER BY last_name, first_name
             LIMIT $3 OFFSET $4",
        )
        .bind(filter.fitness_center_id)
        .bind(filter.search.as_ref().map(|s| format!("%{}%", s.trim())))
        .bind(filter.limit)
        .bind(filter.skip)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl<'c> Users<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Total rows the filter matches, ignoring pagination — pairs with
    /// [`Repository::list`] for page-count responses.
    #[instrument(skip(self, filter), fields(fitness_center_id = filter.fitness_center_id), err)]
    pub async fn count(&mut self, filter: &UserFilter) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users
             WHERE fitness_center_id = $1
               AND ($2::text IS NULL
                    OR first_name ILIKE $2
                    OR last_name ILIKE $2
                    OR email ILIKE $2
                    OR phone ILIKE $2)",
        )
        .bind(filter.fitness_center_id)
        .bind(filter.search.as_ref().map(|s| format!("%{}%", s.trim())))
        .fetch_one(&mut *self.db)
        .await?;

        Ok(total)
    }

    /// Toggle membership for a user.
    #[instrument(skip(self), err)]
    pub async fn set_membership(&mut self, id: UserId, is_member: bool) -> Result<UserDBResponse> {
        let row = sqlx::query_as::<_, UserDBResponse>(
            "UPDATE users SET is_member = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(is_member)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(row)
    }
}
