use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for role and auth-type parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown auth type: {0}")]
    UnknownAuthType(String),
}

/// Error for event publishing operations
#[derive(Debug, Clone, Error)]
pub enum EventPublisherError {
    #[error("Failed to serialize event: {0}")]
    SerializationFailed(String),

    #[error("Failed to publish event to broker: {0}")]
    PublishFailed(String),
}

/// Error for the federated identity exchange
#[derive(Debug, Clone, Error)]
pub enum OAuthError {
    #[error("Authorization code exchange failed: {0}")]
    ExchangeFailed(String),

    #[error("Failed to fetch federated profile: {0}")]
    ProfileFetchFailed(String),

    #[error("Provider returned a malformed response: {0}")]
    MalformedResponse(String),
}

/// Top-level error for all authentication operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid role: {0}")]
    InvalidRole(#[from] RoleError),

    // Domain-level errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No account matches the supplied identifier")]
    UserNotFound,

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("A password reset was already requested recently")]
    Throttled,

    #[error("Password reset token is invalid or already used")]
    ResetTokenNotFound,

    #[error("Unsupported grant type: {0}")]
    UnsupportedGrantType(String),

    #[error("Token is invalid or expired")]
    InvalidToken,

    #[error("Expected a refresh token")]
    TokenKindMismatch,

    #[error("Token no longer matches a live account")]
    StaleToken,

    // Infrastructure errors
    #[error("OAuth provider error: {0}")]
    OAuth(#[from] OAuthError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError::Unknown(err.to_string())
    }
}
