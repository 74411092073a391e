use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::auth::events::PasswordResetConfirmedEvent;
use crate::domain::auth::events::PasswordResetRequestedEvent;
use crate::domain::auth::events::UserRegisteredEvent;

/// Serializable envelope for all auth-related events.
///
/// Infrastructure representation for event publishing (Kafka, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum AuthEventMessage {
    UserRegistered(UserRegisteredMessage),
    PasswordResetRequested(PasswordResetRequestedMessage),
    PasswordResetConfirmed(PasswordResetConfirmedMessage),
}

/// Serializable message for UserRegistered domain event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegisteredMessage {
    pub event_id: String,
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub registered_at: DateTime<Utc>,
}

impl From<&UserRegisteredEvent> for UserRegisteredMessage {
    fn from(event: &UserRegisteredEvent) -> Self {
        Self {
            event_id: event.event_id.clone(),
            user_id: event.user_id.clone(),
            username: event.username.clone(),
            email: event.email.clone(),
            role: event.role.clone(),
            registered_at: event.registered_at,
        }
    }
}

impl From<&UserRegisteredEvent> for AuthEventMessage {
    fn from(event: &UserRegisteredEvent) -> Self {
        AuthEventMessage::UserRegistered(UserRegisteredMessage::from(event))
    }
}

/// Serializable message for PasswordResetRequested domain event.
///
/// Carries the raw reset token for the notification pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequestedMessage {
    pub event_id: String,
    pub user_id: String,
    pub email: String,
    pub token: String,
    pub request_ip: String,
    pub requested_at: DateTime<Utc>,
}

impl From<&PasswordResetRequestedEvent> for PasswordResetRequestedMessage {
    fn from(event: &PasswordResetRequestedEvent) -> Self {
        Self {
            event_id: event.event_id.clone(),
            user_id: event.user_id.clone(),
            email: event.email.clone(),
            token: event.token.clone(),
            request_ip: event.request_ip.clone(),
            requested_at: event.requested_at,
        }
    }
}

impl From<&PasswordResetRequestedEvent> for AuthEventMessage {
    fn from(event: &PasswordResetRequestedEvent) -> Self {
        AuthEventMessage::PasswordResetRequested(PasswordResetRequestedMessage::from(event))
    }
}

/// Serializable message for PasswordResetConfirmed domain event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetConfirmedMessage {
    pub event_id: String,
    pub user_id: String,
    pub email: String,
    pub confirmed_at: DateTime<Utc>,
}

impl From<&PasswordResetConfirmedEvent> for PasswordResetConfirmedMessage {
    fn from(event: &PasswordResetConfirmedEvent) -> Self {
        Self {
            event_id: event.event_id.clone(),
            user_id: event.user_id.clone(),
            email: event.email.clone(),
            confirmed_at: event.confirmed_at,
        }
    }
}

impl From<&PasswordResetConfirmedEvent> for AuthEventMessage {
    fn from(event: &PasswordResetConfirmedEvent) -> Self {
        AuthEventMessage::PasswordResetConfirmed(PasswordResetConfirmedMessage::from(event))
    }
}
