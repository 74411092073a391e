use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::client_ip;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn redeem_password_reset(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<RedeemPasswordResetRequestBody>,
) -> Result<ApiSuccess<RedeemPasswordResetResponseData>, ApiError> {
    let request_ip = client_ip(&headers);

    let masked_email = state
        .auth_service
        .redeem_password_reset(&body.token, &body.new_password, &request_ip)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RedeemPasswordResetResponseData { masked_email },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemPasswordResetRequestBody {
    token: String,
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemPasswordResetResponseData {
    pub masked_email: String,
}
