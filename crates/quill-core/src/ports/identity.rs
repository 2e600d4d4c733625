//! Identity provider port.

use async_trait::async_trait;

use crate::domain::Account;

/// An authenticated session as issued by the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub account: Account,
    pub access_token: String,
}

/// Identity service trait.
///
/// Implementations either proxy the hosted auth service or serve seeded
/// fixture accounts. Which one runs is decided by configuration at
/// startup; they are never mixed within one call path.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticate with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Register a new account and sign it in.
    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError>;

    /// Rebuild a session from a previously issued token.
    async fn resume(&self, token: &str) -> Result<Session, AuthError>;

    /// Invalidate a token.
    async fn sign_out(&self, token: &str) -> Result<(), AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Email already registered")]
    EmailTaken,

    #[error("Identity provider error: {0}")]
    Provider(String),
}
