//! Authentication infrastructure library
//!
//! Provides reusable building blocks for the account service:
//! - Password hashing (Argon2id, configurable cost)
//! - Asymmetric JWT signing and verification (RS256)
//!
//! The service defines its own claim types and adapts these implementations.
//! Keeping this crate free of domain types avoids coupling it to any one
//! service's user model.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use authkit::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenCodec;
pub use token::TokenError;
