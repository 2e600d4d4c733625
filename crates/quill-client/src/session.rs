//! Session lifecycle - an explicit object threaded through view
//! construction instead of ambient global state.
//!
//! Hydrated at startup from a persisted token, replaced on sign-in and
//! sign-up, cleared on sign-out.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::Account;
use quill_core::ports::{AuthError, IdentityProvider, Session};

/// Persistence for the access token between runs.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Option<String>;
    async fn save(&self, token: &str);
    async fn clear(&self);
}

/// Token store that lives only as long as the process.
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self {
            token: RwLock::new(None),
        }
    }
}

impl Default for InMemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn load(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    async fn save(&self, token: &str) {
        *self.token.write().await = Some(token.to_string());
    }

    async fn clear(&self) {
        *self.token.write().await = None;
    }
}

/// Owns the current session and drives the identity provider.
pub struct SessionManager {
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn TokenStore>,
    current: RwLock<Option<Session>>,
}

impl SessionManager {
    pub fn new(provider: Arc<dyn IdentityProvider>, store: Arc<dyn TokenStore>) -> Self {
        Self {
            provider,
            store,
            current: RwLock::new(None),
        }
    }

    /// Rebuild the session from the persisted token, if any. A token the
    /// provider rejects is discarded so the next start is a clean slate.
    pub async fn hydrate(&self) -> Option<Session> {
        let token = self.store.load().await?;

        match self.provider.resume(&token).await {
            Ok(session) => {
                *self.current.write().await = Some(session.clone());
                Some(session)
            }
            Err(e) => {
                tracing::warn!("Discarding persisted token: {}", e);
                self.store.clear().await;
                None
            }
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self.provider.sign_in(email, password).await?;
        self.store.save(&session.access_token).await;
        *self.current.write().await = Some(session.clone());
        Ok(session)
    }

    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let session = self.provider.sign_up(name, email, password).await?;
        self.store.save(&session.access_token).await;
        *self.current.write().await = Some(session.clone());
        Ok(session)
    }

    /// Clear the session. The provider is told to invalidate the token,
    /// but local state is cleared even if that call fails.
    pub async fn sign_out(&self) {
        let taken = self.current.write().await.take();
        if let Some(session) = taken {
            if let Err(e) = self.provider.sign_out(&session.access_token).await {
                tracing::warn!("Provider sign-out failed: {}", e);
            }
        }
        self.store.clear().await;
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn account(&self) -> Option<Account> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|s| s.account.clone())
    }

    /// Update the locally held profile. The identity service is not
    /// consulted; only the session copy changes.
    pub async fn update_profile(
        &self,
        name: String,
        bio: Option<String>,
        avatar: Option<String>,
    ) -> Option<Account> {
        let mut current = self.current.write().await;
        let session = current.as_mut()?;
        session.account.name = name;
        session.account.bio = bio;
        session.account.avatar = avatar;
        Some(session.account.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_infra::FixtureIdentityProvider;

    fn manager() -> SessionManager {
        SessionManager::new(
            Arc::new(FixtureIdentityProvider::new()),
            Arc::new(InMemoryTokenStore::new()),
        )
    }

    #[tokio::test]
    async fn test_sign_in_persists_token_and_session() {
        let manager = manager();
        let session = manager.sign_in("john@example.com", "password").await.unwrap();

        assert_eq!(manager.store.load().await, Some(session.access_token));
        assert_eq!(manager.account().await.unwrap().email, "john@example.com");
    }

    #[tokio::test]
    async fn test_hydrate_restores_session_from_persisted_token() {
        let provider = Arc::new(FixtureIdentityProvider::new());
        let store = Arc::new(InMemoryTokenStore::new());

        let first = SessionManager::new(provider.clone(), store.clone());
        let session = first.sign_in("jane@example.com", "password").await.unwrap();

        // A fresh manager over the same store picks the session back up.
        let second = SessionManager::new(provider, store);
        let restored = second.hydrate().await.unwrap();
        assert_eq!(restored.account, session.account);
    }

    #[tokio::test]
    async fn test_hydrate_discards_rejected_token() {
        let manager = manager();
        manager.store.save("fixture-token-stale").await;

        assert!(manager.hydrate().await.is_none());
        assert_eq!(manager.store.load().await, None);
    }

    #[tokio::test]
    async fn test_sign_out_clears_session_and_token() {
        let manager = manager();
        manager.sign_in("john@example.com", "password").await.unwrap();

        manager.sign_out().await;

        assert!(manager.current().await.is_none());
        assert_eq!(manager.store.load().await, None);
    }

    #[tokio::test]
    async fn test_update_profile_is_local_only() {
        let manager = manager();
        manager.sign_in("john@example.com", "password").await.unwrap();

        let account = manager
            .update_profile("Johnny".to_string(), Some("Writes about Rust".to_string()), None)
            .await
            .unwrap();

        assert_eq!(account.name, "Johnny");
        assert_eq!(manager.account().await.unwrap().name, "Johnny");
    }
}
