use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::errors::AuthError;
use crate::domain::auth::models::PasswordResetRequest;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::PasswordResetRepository;

pub struct PostgresPasswordResetRepository {
    pool: PgPool,
}

impl PostgresPasswordResetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PasswordResetRow {
    token: String,
    user_id: Uuid,
    requested_at: DateTime<Utc>,
    request_ip: String,
}

impl From<PasswordResetRow> for PasswordResetRequest {
    fn from(row: PasswordResetRow) -> Self {
        Self {
            token: row.token,
            user_id: UserId(row.user_id),
            requested_at: row.requested_at,
            request_ip: row.request_ip,
        }
    }
}

#[async_trait]
impl PasswordResetRepository for PostgresPasswordResetRepository {
    async fn create(
        &self,
        request: PasswordResetRequest,
    ) -> Result<PasswordResetRequest, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO password_reset_requests (token, user_id, requested_at, request_ip)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&request.token)
        .bind(request.user_id.0)
        .bind(request.requested_at)
        .bind(&request.request_ip)
        .execute(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(request)
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PasswordResetRequest>, AuthError> {
        let rows: Vec<PasswordResetRow> = sqlx::query_as(
            r#"
            SELECT token, user_id, requested_at, request_ip
            FROM password_reset_requests
            WHERE user_id = $1
            ORDER BY requested_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(PasswordResetRequest::from).collect())
    }

    async fn delete_by_token(
        &self,
        token: &str,
    ) -> Result<Option<PasswordResetRequest>, AuthError> {
        // DELETE .. RETURNING claims the row in one statement, so only one
        // of two concurrent redemptions can see it.
        let row: Option<PasswordResetRow> = sqlx::query_as(
            r#"
            DELETE FROM password_reset_requests
            WHERE token = $1
            RETURNING token, user_id, requested_at, request_ip
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(row.map(PasswordResetRequest::from))
    }
}
