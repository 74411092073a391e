use std::str::FromStr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::sign_in::UserData;
use crate::auth::errors::EmailError;
use crate::auth::errors::RoleError;
use crate::auth::errors::UsernameError;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::Role;
use crate::domain::auth::models::SignUpCommand;
use crate::domain::auth::models::UserProfile;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequestBody>,
) -> Result<ApiSuccess<SignUpResponseData>, ApiError> {
    let account = state
        .auth_service
        .sign_up(body.try_into_command()?)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        SignUpResponseData {
            user: (&account.user).into(),
            profile: (&account.profile).into(),
            access_token: account.tokens.access_token,
            refresh_token: account.tokens.refresh_token,
        },
    ))
}

/// HTTP request body for account registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequestBody {
    role: String,
    email: String,
    username: String,
    password: String,
    display_name: Option<String>,
    department: Option<String>,
    semester: Option<i32>,
    credits: Option<i32>,
}

#[derive(Debug, Clone, Error)]
enum ParseSignUpRequestError {
    #[error("Invalid role: {0}")]
    Role(#[from] RoleError),

    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl SignUpRequestBody {
    fn try_into_command(self) -> Result<SignUpCommand, ParseSignUpRequestError> {
        let role = Role::from_str(&self.role)?;
        let email = EmailAddress::new(self.email)?;
        let username = Username::new(self.username)?;
        Ok(SignUpCommand {
            role,
            email,
            username,
            password: self.password,
            display_name: self.display_name,
            department: self.department,
            semester: self.semester,
            credits: self.credits,
        })
    }
}

impl From<ParseSignUpRequestError> for ApiError {
    fn from(err: ParseSignUpRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponseData {
    pub user: UserData,
    pub profile: ProfileData,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub credits: Option<i32>,
}

impl From<&UserProfile> for ProfileData {
    fn from(profile: &UserProfile) -> Self {
        Self {
            department: profile.department.clone(),
            semester: profile.semester,
            credits: profile.credits,
        }
    }
}
