use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::client_ip;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::ResetIdentifier;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn forgot_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ForgotPasswordRequestBody>,
) -> Result<ApiSuccess<ForgotPasswordResponseData>, ApiError> {
    let identifier = body.try_into_identifier()?;
    let request_ip = client_ip(&headers);

    let masked_email = state
        .auth_service
        .request_password_reset(identifier, &request_ip)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ForgotPasswordResponseData { masked_email },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForgotPasswordRequestBody {
    email: Option<String>,
    username: Option<String>,
}

impl ForgotPasswordRequestBody {
    fn try_into_identifier(self) -> Result<ResetIdentifier, ApiError> {
        if self.email.is_none() && self.username.is_none() {
            return Err(ApiError::BadRequest(
                "Either email or username is required".to_string(),
            ));
        }

        let email = self
            .email
            .map(EmailAddress::new)
            .transpose()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        let username = self
            .username
            .map(Username::new)
            .transpose()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ResetIdentifier { email, username })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordResponseData {
    pub masked_email: String,
}
