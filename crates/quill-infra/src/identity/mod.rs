//! Identity provider implementations - hosted service and in-memory fixture.
//!
//! The running provider is chosen by configuration at startup; the fixture
//! never acts as a silent fallback for the hosted service.

use std::sync::Arc;

use quill_core::ports::IdentityProvider;

mod fixture;

#[cfg(feature = "hosted-identity")]
mod hosted;

pub use fixture::FixtureIdentityProvider;

#[cfg(feature = "hosted-identity")]
pub use hosted::{HostedIdentityConfig, HostedIdentityProvider};

/// Select the identity provider from configuration.
///
/// `IDENTITY_PROVIDER=hosted` requires the hosted service settings and
/// fails loudly when they are missing; anything else selects the fixture
/// provider.
#[cfg(feature = "hosted-identity")]
pub fn provider_from_env() -> Result<Arc<dyn IdentityProvider>, String> {
    match std::env::var("IDENTITY_PROVIDER").as_deref() {
        Ok("hosted") => {
            let config = HostedIdentityConfig::from_env().ok_or_else(|| {
                "IDENTITY_PROVIDER=hosted requires IDENTITY_BASE_URL and IDENTITY_API_KEY"
                    .to_string()
            })?;
            Ok(Arc::new(HostedIdentityProvider::new(config)))
        }
        _ => {
            tracing::info!("Using fixture identity provider");
            Ok(Arc::new(FixtureIdentityProvider::new()))
        }
    }
}

#[cfg(not(feature = "hosted-identity"))]
pub fn provider_from_env() -> Result<Arc<dyn IdentityProvider>, String> {
    if matches!(std::env::var("IDENTITY_PROVIDER").as_deref(), Ok("hosted")) {
        return Err("IDENTITY_PROVIDER=hosted but this build has no hosted-identity support"
            .to_string());
    }

    tracing::info!("Using fixture identity provider");
    Ok(Arc::new(FixtureIdentityProvider::new()))
}
