//! HTTP client for the hosted identity service.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{Account, Role};
use quill_core::ports::{AuthError, IdentityProvider, Session};

/// Hosted identity service configuration.
#[derive(Debug, Clone)]
pub struct HostedIdentityConfig {
    pub base_url: String,
    pub api_key: String,
}

impl HostedIdentityConfig {
    /// Load from `IDENTITY_BASE_URL` / `IDENTITY_API_KEY`.
    /// Returns `None` unless both are set.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("IDENTITY_BASE_URL").ok()?;
        let api_key = std::env::var("IDENTITY_API_KEY").ok()?;
        Some(Self { base_url, api_key })
    }
}

/// Identity provider backed by the hosted auth service.
pub struct HostedIdentityProvider {
    http: reqwest::Client,
    config: HostedIdentityConfig,
}

/// A user record as the hosted service reports it.
#[derive(Debug, Deserialize)]
struct RemoteUser {
    id: Uuid,
    email: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    user_metadata: RemoteMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct RemoteMetadata {
    full_name: Option<String>,
}

/// Token grant response from sign-in and sign-up.
#[derive(Debug, Deserialize)]
struct TokenGrant {
    access_token: String,
    user: RemoteUser,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Debug, Serialize)]
struct SignUpMetadata<'a> {
    full_name: &'a str,
}

impl RemoteUser {
    /// The service stores the display name in metadata; fall back to the
    /// local part of the email when it is absent.
    fn into_account(self) -> Account {
        let name = self
            .user_metadata
            .full_name
            .unwrap_or_else(|| self.email.split('@').next().unwrap_or("User").to_string());

        Account {
            id: self.id,
            name,
            email: self.email,
            role: Role::User,
            bio: None,
            avatar: None,
            created_at: self.created_at,
        }
    }
}

impl HostedIdentityProvider {
    pub fn new(config: HostedIdentityConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn provider_err(response: reqwest::Response) -> AuthError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!(%status, "Identity service request failed: {}", body);
        AuthError::Provider(format!("{status}: {body}"))
    }
}

#[async_trait]
impl IdentityProvider for HostedIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .http
            .post(self.url("/token?grant_type=password"))
            .header("apikey", &self.config.api_key)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        match response.status() {
            s if s.is_success() => {
                let grant: TokenGrant = response
                    .json()
                    .await
                    .map_err(|e| AuthError::Provider(e.to_string()))?;
                Ok(Session {
                    account: grant.user.into_account(),
                    access_token: grant.access_token,
                })
            }
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                Err(AuthError::InvalidCredentials)
            }
            _ => Err(Self::provider_err(response).await),
        }
    }

    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let response = self
            .http
            .post(self.url("/signup"))
            .header("apikey", &self.config.api_key)
            .json(&SignUpBody {
                email,
                password,
                data: SignUpMetadata { full_name: name },
            })
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        match response.status() {
            s if s.is_success() => {
                let grant: TokenGrant = response
                    .json()
                    .await
                    .map_err(|e| AuthError::Provider(e.to_string()))?;
                Ok(Session {
                    account: grant.user.into_account(),
                    access_token: grant.access_token,
                })
            }
            StatusCode::UNPROCESSABLE_ENTITY => Err(AuthError::EmailTaken),
            _ => Err(Self::provider_err(response).await),
        }
    }

    async fn resume(&self, token: &str) -> Result<Session, AuthError> {
        let response = self
            .http
            .get(self.url("/user"))
            .header("apikey", &self.config.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        match response.status() {
            s if s.is_success() => {
                let user: RemoteUser = response
                    .json()
                    .await
                    .map_err(|e| AuthError::Provider(e.to_string()))?;
                Ok(Session {
                    account: user.into_account(),
                    access_token: token.to_string(),
                })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(AuthError::InvalidToken("token rejected".to_string()))
            }
            _ => Err(Self::provider_err(response).await),
        }
    }

    async fn sign_out(&self, token: &str) -> Result<(), AuthError> {
        let response = self
            .http
            .post(self.url("/logout"))
            .header("apikey", &self.config.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::provider_err(response).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_user(full_name: Option<&str>) -> RemoteUser {
        RemoteUser {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            created_at: Utc::now(),
            user_metadata: RemoteMetadata {
                full_name: full_name.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_account_name_from_metadata() {
        let account = remote_user(Some("Ada Lovelace")).into_account();
        assert_eq!(account.name, "Ada Lovelace");
    }

    #[test]
    fn test_account_name_falls_back_to_email_local_part() {
        let account = remote_user(None).into_account();
        assert_eq!(account.name, "ada");
        assert_eq!(account.email, "ada@example.com");
    }

    #[test]
    fn test_urls_tolerate_trailing_slash() {
        let provider = HostedIdentityProvider::new(HostedIdentityConfig {
            base_url: "https://id.example.com/".to_string(),
            api_key: "key".to_string(),
        });
        assert_eq!(
            provider.url("/logout"),
            "https://id.example.com/auth/v1/logout"
        );
    }
}
