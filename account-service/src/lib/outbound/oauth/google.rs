use async_trait::async_trait;
use serde::Deserialize;

use crate::auth::errors::OAuthError;
use crate::auth::ports::OAuthClient;
use crate::config::Config;
use crate::domain::auth::models::FederatedProfile;

const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Google OAuth 2.0 client for the authorization-code flow.
///
/// Exchanges the code server-side and reads the profile from the OpenID
/// Connect userinfo endpoint, so no provider token ever reaches the
/// browser.
pub struct GoogleOAuthClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    email: String,
    #[serde(default)]
    email_verified: bool,
    name: Option<String>,
}

impl GoogleOAuthClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id: config.oauth.client_id.clone(),
            client_secret: config.oauth.client_secret.clone(),
            redirect_uri: config.oauth.redirect_uri.clone(),
        }
    }
}

#[async_trait]
impl OAuthClient for GoogleOAuthClient {
    async fn exchange_code(&self, code: &str) -> Result<FederatedProfile, OAuthError> {
        let response = self
            .http
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("code", code),
                ("client_id", &self.client_id),
                ("client_secret", &self.client_secret),
                ("redirect_uri", &self.redirect_uri),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| OAuthError::ExchangeFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OAuthError::ExchangeFailed(format!(
                "Token endpoint returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| OAuthError::MalformedResponse(e.to_string()))?;

        let response = self
            .http
            .get(USERINFO_ENDPOINT)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| OAuthError::ProfileFetchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OAuthError::ProfileFetchFailed(format!(
                "Userinfo endpoint returned {}",
                response.status()
            )));
        }

        let info: UserInfoResponse = response
            .json()
            .await
            .map_err(|e| OAuthError::MalformedResponse(e.to_string()))?;

        Ok(FederatedProfile {
            email: info.email,
            email_verified: info.email_verified,
            name: info.name,
        })
    }
}
