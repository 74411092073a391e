use thiserror::Error;

/// Error type for token signing and verification.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Invalid key material: {0}")]
    InvalidKey(String),

    #[error("Signing key not available (verify-only codec)")]
    SigningKeyUnavailable,

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token verification failed: {0}")]
    VerificationFailed(String),
}
