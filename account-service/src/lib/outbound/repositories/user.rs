use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::errors::AuthError;
use crate::domain::auth::models::AuthType;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::Role;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::models::UserProfile;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    username: String,
    display_name: Option<String>,
    password_hash: String,
    role: String,
    auth_type: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, AuthError> {
        Ok(User {
            id: UserId(self.id),
            email: EmailAddress::new(self.email)?,
            username: Username::new(self.username)?,
            display_name: self.display_name,
            password_hash: self.password_hash,
            role: Role::from_str(&self.role)?,
            auth_type: AuthType::from_str(&self.auth_type)?,
            created_at: self.created_at,
        })
    }
}

const SELECT_USER: &str = "
    SELECT id, email, username, display_name, password_hash, role, auth_type, created_at
    FROM users
";

fn map_unique_violation(e: sqlx::Error, user: &User) -> AuthError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if db_err.constraint() == Some("users_username_key") {
                return AuthError::UsernameAlreadyExists(user.username.as_str().to_string());
            }
            if db_err.constraint() == Some("users_email_key") {
                return AuthError::EmailAlreadyExists(user.email.as_str().to_string());
            }
        }
    }
    AuthError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, username, display_name, password_hash, role, auth_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id.0)
        .bind(user.email.as_str())
        .bind(user.username.as_str())
        .bind(user.display_name.as_deref())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.auth_type.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &user))?;

        Ok(user)
    }

    async fn create_with_profile(
        &self,
        user: User,
        profile: UserProfile,
    ) -> Result<(User, UserProfile), AuthError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO users (id, email, username, display_name, password_hash, role, auth_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id.0)
        .bind(user.email.as_str())
        .bind(user.username.as_str())
        .bind(user.display_name.as_deref())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.auth_type.as_str())
        .bind(user.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, &user))?;

        sqlx::query(
            r#"
            INSERT INTO user_profiles (user_id, department, semester, credits)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(profile.user_id.0)
        .bind(profile.department.as_deref())
        .bind(profile.semester)
        .bind(profile.credits)
        .execute(&mut *tx)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok((user, profile))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        let row: Option<UserRow> = sqlx::query_as(&format!("{} WHERE id = $1", SELECT_USER))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let row: Option<UserRow> = sqlx::query_as(&format!("{} WHERE email = $1", SELECT_USER))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError> {
        let row: Option<UserRow> = sqlx::query_as(&format!("{} WHERE username = $1", SELECT_USER))
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn update_password_hash(
        &self,
        id: &UserId,
        password_hash: &str,
    ) -> Result<(), AuthError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound);
        }

        Ok(())
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, AuthError> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            "{} WHERE role = $1 ORDER BY created_at DESC",
            SELECT_USER
        ))
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(UserRow::into_user).collect()
    }
}
