use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::sign_in::UserData;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn google_sign_in(
    State(state): State<AppState>,
    Json(body): Json<GoogleSignInRequestBody>,
) -> Result<ApiSuccess<GoogleSignInResponseData>, ApiError> {
    let session = state
        .auth_service
        .oauth_sign_in(&body.code)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        GoogleSignInResponseData {
            user: (&session.user).into(),
            access_token: session.tokens.access_token,
            refresh_token: session.tokens.refresh_token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoogleSignInRequestBody {
    code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSignInResponseData {
    pub user: UserData,
    pub access_token: String,
    pub refresh_token: String,
}
