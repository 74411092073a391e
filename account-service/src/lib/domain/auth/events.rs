use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::auth::models::User;

/// Domain event published when a new account is created.
///
/// Emitted for both local sign-ups and first federated sign-ins.
#[derive(Debug, Clone)]
pub struct UserRegisteredEvent {
    pub event_id: String,
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub registered_at: DateTime<Utc>,
}

impl UserRegisteredEvent {
    pub fn new(user: &User) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            user_id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            role: user.role.as_str().to_string(),
            registered_at: user.created_at,
        }
    }
}

/// Domain event published when a password reset is requested.
///
/// Carries the raw reset token so the notification pipeline can deliver it;
/// the token never appears in the HTTP response.
#[derive(Debug, Clone)]
pub struct PasswordResetRequestedEvent {
    pub event_id: String,
    pub user_id: String,
    pub email: String,
    pub token: String,
    pub request_ip: String,
    pub requested_at: DateTime<Utc>,
}

impl PasswordResetRequestedEvent {
    pub fn new(user: &User, token: &str, request_ip: &str, requested_at: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            user_id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            token: token.to_string(),
            request_ip: request_ip.to_string(),
            requested_at,
        }
    }
}

/// Domain event published after a password reset is redeemed.
#[derive(Debug, Clone)]
pub struct PasswordResetConfirmedEvent {
    pub event_id: String,
    pub user_id: String,
    pub email: String,
    pub confirmed_at: DateTime<Utc>,
}

impl PasswordResetConfirmedEvent {
    pub fn new(user: &User) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            user_id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            confirmed_at: Utc::now(),
        }
    }
}
