use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Echo the verified identity carried by the access token.
///
/// Answers purely from claims; no database round trip.
pub async fn whoami(
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<WhoamiResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        WhoamiResponseData {
            id: user.user_id.to_string(),
            email: user.email,
            username: user.username,
            display_name: user.display_name,
            role: user.role.as_str().to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoamiResponseData {
    pub id: String,
    pub email: String,
    pub username: String,
    pub display_name: Option<String>,
    pub role: String,
}
