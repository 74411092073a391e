use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::errors::EmailError;
use crate::auth::errors::RoleError;
use crate::auth::errors::UserIdError;
use crate::auth::errors::UsernameError;

/// User aggregate entity.
///
/// Identity record for both locally-registered and federated accounts.
/// An empty `password_hash` marks a federated-only account that can never
/// authenticate with a password.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub username: Username,
    pub display_name: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub auth_type: AuthType,
    pub created_at: DateTime<Utc>,
}

/// Academic profile created alongside a local sign-up.
///
/// Opaque to the auth rules; stored atomically with the user row.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user_id: UserId,
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub credits: Option<i32>,
}

/// Single-use password-reset ticket.
///
/// The token doubles as the primary lookup key. Redemption deletes the row,
/// so "unknown token" covers both never-issued and already-redeemed.
#[derive(Debug, Clone)]
pub struct PasswordResetRequest {
    pub token: String,
    pub user_id: UserId,
    pub requested_at: DateTime<Utc>,
    pub request_ip: String,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures username is 3-32 characters and contains only alphanumeric,
/// underscore, and hyphen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 32;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    /// * `TooLong` - Username longer than 32 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters (except _ and -)
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.len();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates format using an RFC 5322 compliant parser and normalizes to
/// lowercase, so uniqueness checks are case-insensitive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated, lowercase-normalized email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email.to_lowercase()))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mask the local part for display in reset flows.
    ///
    /// Keeps the first character of the local part and the full domain;
    /// every other local-part character becomes `*`. There is deliberately
    /// no exception for the last character before the `@`.
    pub fn masked(&self) -> String {
        mask_email(&self.0)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Mask an email as `first char + "*" * (len(local) - 1) + "@" + domain`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            match chars.next() {
                Some(first) => {
                    let stars = "*".repeat(chars.count());
                    format!("{}{}@{}", first, stars, domain)
                }
                None => format!("@{}", domain),
            }
        }
        None => email.to_string(),
    }
}

/// Closed set of account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Student,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Student => "STUDENT",
            Role::Staff => "STAFF",
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "STUDENT" => Ok(Role::Student),
            "STAFF" => Ok(Role::Staff),
            other => Err(RoleError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an account authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthType {
    #[serde(rename = "LOCAL")]
    Local,
    #[serde(rename = "OAUTH")]
    OAuth,
}

impl AuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::Local => "LOCAL",
            AuthType::OAuth => "OAUTH",
        }
    }
}

impl FromStr for AuthType {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOCAL" => Ok(AuthType::Local),
            "OAUTH" => Ok(AuthType::OAuth),
            other => Err(RoleError::UnknownAuthType(other.to_string())),
        }
    }
}

/// Tag distinguishing access from refresh tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    #[serde(rename = "ACCESS_TOKEN")]
    Access,
    #[serde(rename = "REFRESH_TOKEN")]
    Refresh,
}

/// Signed claim set embedded in both token kinds.
///
/// Carries a slimmed user projection; the email is the staleness anchor
/// used on refresh. Access and refresh claims share this shape but differ
/// in `kind` and expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub role: Role,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// Build claims for a user with the given kind and time-to-live.
    pub fn for_user(user: &User, kind: TokenKind, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user.id.to_string(),
            email: user.email.as_str().to_string(),
            username: user.username.as_str().to_string(),
            display_name: user.display_name.clone(),
            role: user.role,
            kind,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

/// Access/refresh token lifetimes.
///
/// The two kinds deliberately expire on different schedules: access tokens
/// are short-lived API credentials, refresh tokens are the long-lived
/// renewal grant.
#[derive(Debug, Clone, Copy)]
pub struct TokenLifetimes {
    pub access: Duration,
    pub refresh: Duration,
}

/// Freshly minted access/refresh token pair.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Result of a successful sign-in (local or federated).
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: User,
    pub tokens: TokenPair,
}

/// Result of a successful local sign-up.
#[derive(Debug, Clone)]
pub struct RegisteredAccount {
    pub user: User,
    pub profile: UserProfile,
    pub tokens: TokenPair,
}

/// Command to register a local account with domain types.
#[derive(Debug)]
pub struct SignUpCommand {
    pub role: Role,
    pub email: EmailAddress,
    pub username: Username,
    pub password: String,
    pub display_name: Option<String>,
    pub department: Option<String>,
    pub semester: Option<i32>,
    pub credits: Option<i32>,
}

/// Command used by administrators to provision an account directly.
#[derive(Debug)]
pub struct CreateUserCommand {
    pub role: Role,
    pub email: EmailAddress,
    pub username: Username,
    pub password: String,
    pub display_name: Option<String>,
}

/// Identifier supplied to the password-reset request flow.
///
/// At least one of the two fields must be present; email wins when both are.
#[derive(Debug, Clone)]
pub struct ResetIdentifier {
    pub email: Option<EmailAddress>,
    pub username: Option<Username>,
}

/// Profile returned by the federated identity provider.
#[derive(Debug, Clone)]
pub struct FederatedProfile {
    pub email: String,
    pub email_verified: bool,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("user@example.com"), "u***@example.com");
        assert_eq!(mask_email("ab@x.io"), "a*@x.io");
        assert_eq!(mask_email("a@x.io"), "a@x.io");
    }

    #[test]
    fn test_mask_never_reveals_middle_of_local_part() {
        let masked = mask_email("charlie.dean@campus.edu");
        assert_eq!(masked, "c***********@campus.edu");
        assert!(!masked.contains("harlie"));
    }

    #[test]
    fn test_email_is_lowercase_normalized() {
        let email = EmailAddress::new("Alice@Example.COM".to_string()).unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_email_rejects_invalid_format() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }

    #[test]
    fn test_username_length_bounds() {
        assert!(matches!(
            Username::new("ab".to_string()),
            Err(UsernameError::TooShort { .. })
        ));
        assert!(matches!(
            Username::new("a".repeat(33)),
            Err(UsernameError::TooLong { .. })
        ));
        assert!(Username::new("abc_def-1".to_string()).is_ok());
    }

    #[test]
    fn test_username_rejects_special_characters() {
        assert!(matches!(
            Username::new("abc!def".to_string()),
            Err(UsernameError::InvalidCharacters)
        ));
    }

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::Student, Role::Staff] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("TEACHER".parse::<Role>().is_err());
    }

    #[test]
    fn test_token_claims_expiry_follows_ttl() {
        let user = User {
            id: UserId::new(),
            email: EmailAddress::new("a@b.com".to_string()).unwrap(),
            username: Username::new("abc".to_string()).unwrap(),
            display_name: None,
            password_hash: String::new(),
            role: Role::Student,
            auth_type: AuthType::Local,
            created_at: Utc::now(),
        };

        let claims = TokenClaims::for_user(&user, TokenKind::Access, Duration::minutes(60));
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(claims.kind, TokenKind::Access);
        assert_eq!(claims.email, "a@b.com");
    }
}
