use async_trait::async_trait;

use crate::auth::errors::AuthError;
use crate::auth::errors::EventPublisherError;
use crate::auth::errors::OAuthError;
use crate::domain::auth::events::PasswordResetConfirmedEvent;
use crate::domain::auth::events::PasswordResetRequestedEvent;
use crate::domain::auth::events::UserRegisteredEvent;
use crate::domain::auth::models::AuthenticatedSession;
use crate::domain::auth::models::CreateUserCommand;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::FederatedProfile;
use crate::domain::auth::models::PasswordResetRequest;
use crate::domain::auth::models::RegisteredAccount;
use crate::domain::auth::models::ResetIdentifier;
use crate::domain::auth::models::Role;
use crate::domain::auth::models::SignUpCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::models::UserProfile;
use crate::domain::auth::models::Username;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate with email and password, minting an access/refresh pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or password mismatch
    /// * `DatabaseError` - Database operation failed
    async fn sign_in(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<AuthenticatedSession, AuthError>;

    /// Register a local account plus its academic profile.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` / `UsernameAlreadyExists` - Uniqueness violation
    /// * `DatabaseError` - Database operation failed
    async fn sign_up(&self, command: SignUpCommand) -> Result<RegisteredAccount, AuthError>;

    /// Start a password reset, returning the masked email of the account.
    ///
    /// # Errors
    /// * `UserNotFound` - Neither identifier resolves to a user
    /// * `Throttled` - A prior request exists inside the throttle window
    /// * `DatabaseError` - Database operation failed
    async fn request_password_reset(
        &self,
        identifier: ResetIdentifier,
        request_ip: &str,
    ) -> Result<String, AuthError>;

    /// Redeem a single-use reset token, returning the masked email.
    ///
    /// # Errors
    /// * `ResetTokenNotFound` - Token unknown or already redeemed
    /// * `DatabaseError` - Database operation failed
    async fn redeem_password_reset(
        &self,
        token: &str,
        new_password: &str,
        request_ip: &str,
    ) -> Result<String, AuthError>;

    /// Exchange a refresh token for a fresh access token.
    ///
    /// # Errors
    /// * `UnsupportedGrantType` - grant_type is not "refresh_token"
    /// * `InvalidToken` - Signature or expiry check failed
    /// * `TokenKindMismatch` - An access token was presented
    /// * `StaleToken` - Embedded email no longer resolves to a user
    async fn refresh_access_token(
        &self,
        grant_type: &str,
        refresh_token: &str,
    ) -> Result<String, AuthError>;

    /// Sign in through the federated identity provider, creating the
    /// account on first contact.
    ///
    /// # Errors
    /// * `OAuth` - Code exchange or profile fetch failed
    /// * `DatabaseError` - Database operation failed
    async fn oauth_sign_in(&self, code: &str) -> Result<AuthenticatedSession, AuthError>;

    /// Provision an account directly (administrative path, no tokens).
    ///
    /// # Errors
    /// * `EmailAlreadyExists` / `UsernameAlreadyExists` - Uniqueness violation
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, AuthError>;

    /// List users holding the given role, for administrative views.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn users_by_role(&self, role: Role) -> Result<Vec<User>, AuthError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` / `UsernameAlreadyExists` - Uniqueness violation
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Persist a new user and profile as a single unit.
    ///
    /// Both rows commit together or neither does.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` / `UsernameAlreadyExists` - Uniqueness violation
    /// * `DatabaseError` - Database operation failed
    async fn create_with_profile(
        &self,
        user: User,
        profile: UserProfile,
    ) -> Result<(User, UserProfile), AuthError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError>;

    /// Replace the stored password hash for a user.
    ///
    /// # Errors
    /// * `UserNotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_password_hash(
        &self,
        id: &UserId,
        password_hash: &str,
    ) -> Result<(), AuthError>;

    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, AuthError>;
}

/// Persistence operations for password-reset tickets.
#[async_trait]
pub trait PasswordResetRepository: Send + Sync + 'static {
    async fn create(
        &self,
        request: PasswordResetRequest,
    ) -> Result<PasswordResetRequest, AuthError>;

    /// All historical requests for a user, newest first.
    ///
    /// The throttle check scans the full history; rows are never pruned.
    async fn find_by_user(&self, user_id: &UserId)
        -> Result<Vec<PasswordResetRequest>, AuthError>;

    /// Atomically claim and delete a ticket by token.
    ///
    /// Returns the deleted row, or None when the token never existed or was
    /// already redeemed. This is the single-use guarantee.
    async fn delete_by_token(
        &self,
        token: &str,
    ) -> Result<Option<PasswordResetRequest>, AuthError>;
}

/// Event publishing for auth domain events.
///
/// All emissions are fire-and-forget from the caller's perspective: the
/// service logs failures and never surfaces them to the request.
#[async_trait]
pub trait AuthEventPublisher: Send + Sync + 'static {
    async fn publish_user_registered(
        &self,
        event: &UserRegisteredEvent,
    ) -> Result<(), EventPublisherError>;

    async fn publish_password_reset_requested(
        &self,
        event: &PasswordResetRequestedEvent,
    ) -> Result<(), EventPublisherError>;

    async fn publish_password_reset_confirmed(
        &self,
        event: &PasswordResetConfirmedEvent,
    ) -> Result<(), EventPublisherError>;
}

/// Port for the federated identity provider.
#[async_trait]
pub trait OAuthClient: Send + Sync + 'static {
    /// Exchange an authorization code for the federated profile.
    async fn exchange_code(&self, code: &str) -> Result<FederatedProfile, OAuthError>;
}
