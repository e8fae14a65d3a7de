//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the brain service:
//! - Password hashing (Argon2id)
//! - Bearer token generation and verification (HS256 JWT)
//! - Authentication coordination
//!
//! The service injects a single process-wide signing secret at construction;
//! there is no global state and no token expiry (a token stays valid until
//! the secret changes or the caller discards it).
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Signup: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Signin: verify and generate token
//! let claims = Claims::for_subject("user123");
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Gate: verify token
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
