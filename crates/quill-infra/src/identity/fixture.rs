//! In-memory fixture identity provider for demos and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Account, Role};
use quill_core::ports::{AuthError, IdentityProvider, Session};

/// The password every seeded demo account accepts.
const DEMO_PASSWORD: &str = "password";

/// Identity provider serving seeded fixture accounts.
///
/// Sign-ups are kept in memory for the lifetime of the process. Tokens are
/// random per sign-in and invalidated by sign-out.
pub struct FixtureIdentityProvider {
    accounts: RwLock<Vec<(Account, String)>>,
    tokens: RwLock<HashMap<String, Uuid>>,
}

impl FixtureIdentityProvider {
    /// A provider seeded with the demo accounts.
    pub fn new() -> Self {
        let seeds = [
            ("Admin User", "admin@example.com", Role::Admin),
            ("John Doe", "john@example.com", Role::User),
            ("Jane Smith", "jane@example.com", Role::User),
        ];

        let accounts = seeds
            .into_iter()
            .map(|(name, email, role)| {
                (
                    Account::new(name.to_string(), email.to_string(), role),
                    DEMO_PASSWORD.to_string(),
                )
            })
            .collect();

        Self {
            accounts: RwLock::new(accounts),
            tokens: RwLock::new(HashMap::new()),
        }
    }

    fn mint_token() -> String {
        format!("fixture-token-{}", Uuid::new_v4())
    }

    async fn issue(&self, account: Account) -> Session {
        let token = Self::mint_token();
        self.tokens.write().await.insert(token.clone(), account.id);
        Session {
            account,
            access_token: token,
        }
    }
}

impl Default for FixtureIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for FixtureIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let account = {
            let accounts = self.accounts.read().await;
            accounts
                .iter()
                .find(|(account, stored)| account.email == email && stored == password)
                .map(|(account, _)| account.clone())
        };

        match account {
            Some(account) => Ok(self.issue(account).await),
            None => Err(AuthError::InvalidCredentials),
        }
    }

    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|(account, _)| account.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let account = Account::new(name.to_string(), email.to_string(), Role::User);
        accounts.push((account.clone(), password.to_string()));
        drop(accounts);

        Ok(self.issue(account).await)
    }

    async fn resume(&self, token: &str) -> Result<Session, AuthError> {
        let account_id = self
            .tokens
            .read()
            .await
            .get(token)
            .copied()
            .ok_or_else(|| AuthError::InvalidToken("unknown token".to_string()))?;

        let accounts = self.accounts.read().await;
        let account = accounts
            .iter()
            .find(|(account, _)| account.id == account_id)
            .map(|(account, _)| account.clone())
            .ok_or_else(|| AuthError::InvalidToken("account no longer exists".to_string()))?;

        Ok(Session {
            account,
            access_token: token.to_string(),
        })
    }

    async fn sign_out(&self, token: &str) -> Result<(), AuthError> {
        self.tokens.write().await.remove(token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_in_with_demo_password() {
        let provider = FixtureIdentityProvider::new();
        let session = provider
            .sign_in("john@example.com", "password")
            .await
            .unwrap();

        assert_eq!(session.account.name, "John Doe");
        assert_eq!(session.account.role, Role::User);
        assert!(session.access_token.starts_with("fixture-token-"));
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password_fails() {
        let provider = FixtureIdentityProvider::new();
        let err = provider
            .sign_in("john@example.com", "nope")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_sign_up_then_resume() {
        let provider = FixtureIdentityProvider::new();
        let session = provider
            .sign_up("New User", "new@example.com", "secret")
            .await
            .unwrap();

        let resumed = provider.resume(&session.access_token).await.unwrap();
        assert_eq!(resumed.account, session.account);
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_email_fails() {
        let provider = FixtureIdentityProvider::new();
        let err = provider
            .sign_up("Imposter", "john@example.com", "secret")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_sign_out_invalidates_token() {
        let provider = FixtureIdentityProvider::new();
        let session = provider
            .sign_in("jane@example.com", "password")
            .await
            .unwrap();

        provider.sign_out(&session.access_token).await.unwrap();

        let err = provider.resume(&session.access_token).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }
}
