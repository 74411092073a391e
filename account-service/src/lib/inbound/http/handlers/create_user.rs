use std::str::FromStr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::sign_in::UserData;
use crate::auth::errors::EmailError;
use crate::auth::errors::RoleError;
use crate::auth::errors::UsernameError;
use crate::domain::auth::models::CreateUserCommand;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::Role;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Administrative account provisioning. No tokens are minted; the new
/// user signs in on their own.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequestBody>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .auth_service
        .create_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for creating a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequestBody {
    role: String,
    email: String,
    username: String,
    password: String,
    display_name: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateUserRequestError {
    #[error("Invalid role: {0}")]
    Role(#[from] RoleError),

    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl CreateUserRequestBody {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseCreateUserRequestError> {
        let role = Role::from_str(&self.role)?;
        let email = EmailAddress::new(self.email)?;
        let username = Username::new(self.username)?;
        Ok(CreateUserCommand {
            role,
            email,
            username,
            password: self.password,
            display_name: self.display_name,
        })
    }
}

impl From<ParseCreateUserRequestError> for ApiError {
    fn from(err: ParseCreateUserRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
