//! Ambient AWS credential resolution.
//!
//! The step never manages credentials itself; it asks an injected
//! resolver for a usable set right before publishing. The production
//! resolver walks the SDK's default provider chain: environment
//! variables, shared profile files, then the instance/container role
//! metadata endpoint. The first source that yields credentials wins.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use aws_config::default_provider::credentials::DefaultCredentialsChain;
use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::Credentials;
use tracing::debug;

/// Resolves a usable AWS credential set, or fails.
#[async_trait]
pub trait CredentialsResolver: Send + Sync {
    /// Returns credentials the publish call can sign with.
    async fn resolve(&self) -> Result<Credentials>;
}

/// The default ambient provider chain.
pub struct DefaultChainResolver;

#[async_trait]
impl CredentialsResolver for DefaultChainResolver {
    async fn resolve(&self) -> Result<Credentials> {
        let chain = DefaultCredentialsChain::builder().build().await;
        let credentials = chain
            .provide_credentials()
            .await
            .map_err(|e| anyhow!("no usable AWS credentials found: {}", e))?;
        debug!("resolved credentials from the default provider chain");
        Ok(credentials)
    }
}
