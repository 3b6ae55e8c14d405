pub mod memory_log;
pub mod mock_sns;

use anyhow::Result;
use async_trait::async_trait;
use aws_credential_types::Credentials;
use snsnotify::notification::CredentialsResolver;

/// A resolver that always yields a fixed test credential set.
pub struct StaticCredentials;

#[async_trait]
impl CredentialsResolver for StaticCredentials {
    async fn resolve(&self) -> Result<Credentials> {
        Ok(Credentials::new("AKIDEXAMPLE", "secret", None, None, "test"))
    }
}
