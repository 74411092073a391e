use std::str::FromStr;

use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::sign_in::UserData;
use crate::domain::auth::models::Role;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn users_by_role(
    State(state): State<AppState>,
    Query(query): Query<UsersByRoleQuery>,
) -> Result<ApiSuccess<Vec<UserData>>, ApiError> {
    let role = Role::from_str(&query.role).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let users = state
        .auth_service
        .users_by_role(role)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        users.iter().map(UserData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UsersByRoleQuery {
    role: String,
}
