//! A client for publishing messages to Amazon SNS.

use crate::region::RegionId;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_sns::config::retry::RetryConfig;
use aws_sdk_sns::config::{BehaviorVersion, Region};
use aws_sdk_sns::error::DisplayErrorContext;
use tracing::{error, info, instrument};

/// Everything one publish call needs: the resolved credentials, the
/// validated region, and the message itself.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    /// Credentials the call signs with.
    pub credentials: Credentials,
    /// Region the client endpoint is bound to.
    pub region: RegionId,
    /// ARN of the destination topic. Passed through as-is, even when
    /// blank; the service rejects what it does not accept.
    pub topic_arn: String,
    /// Message subject.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// A trait for clients that can publish a notification message.
#[async_trait]
pub trait SnsPublisher: Send + Sync {
    /// Publishes one message and returns the remote-assigned message id.
    async fn publish(&self, request: PublishRequest) -> Result<String>;
}

/// The production SNS client, backed by `aws-sdk-sns`.
///
/// A fresh SDK client is built per call, bound to the request's region
/// and credentials. Retries are disabled: a failed publish is the step's
/// failure, not something to paper over locally.
pub struct SnsClient {
    endpoint_url: Option<String>,
}

impl SnsClient {
    /// Creates a new `SnsClient`.
    ///
    /// `endpoint_url` overrides the regional endpoint, for local stacks
    /// and tests; `None` uses the real region-scoped endpoint.
    pub fn new(endpoint_url: Option<String>) -> Self {
        Self { endpoint_url }
    }

    fn sdk_client(&self, request: &PublishRequest) -> aws_sdk_sns::Client {
        let mut builder = aws_sdk_sns::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .retry_config(RetryConfig::disabled())
            .region(Region::new(request.region.name()))
            .credentials_provider(request.credentials.clone());
        if let Some(url) = &self.endpoint_url {
            builder = builder.endpoint_url(url.clone());
        }
        aws_sdk_sns::Client::from_conf(builder.build())
    }
}

#[async_trait]
impl SnsPublisher for SnsClient {
    #[instrument(skip(self, request), fields(topic_arn = %request.topic_arn, region = %request.region))]
    async fn publish(&self, request: PublishRequest) -> Result<String> {
        let client = self.sdk_client(&request);
        let output = client
            .publish()
            .topic_arn(&request.topic_arn)
            .subject(&request.subject)
            .message(&request.message)
            .send()
            .await
            .map_err(|e| {
                error!(error = %DisplayErrorContext(&e), "SNS publish failed");
                anyhow!("{}", DisplayErrorContext(&e))
            })?;

        let message_id = output.message_id().unwrap_or_default().to_string();
        info!(%message_id, "published message to SNS");
        Ok(message_id)
    }
}
