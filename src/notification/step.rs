//! The publish step: the unit of work the host runs once per job
//! completion.

use crate::core::{LogSink, PublishOutcome, StepConfig};
use crate::defaults::GlobalDefaults;
use crate::notification::credentials::CredentialsResolver;
use crate::notification::sns::{PublishRequest, SnsPublisher};
use crate::notification::NotifyError;
use crate::region::RegionId;
use std::sync::Arc;
use tracing::{info, instrument};

/// Returns the local value when it is non-blank, else the global default.
///
/// Non-blank local values are used verbatim, untrimmed.
fn effective(local: &str, global: &str) -> String {
    if local.trim().is_empty() {
        global.to_string()
    } else {
        local.to_string()
    }
}

/// One configured publish step.
pub struct PublishStep {
    config: StepConfig,
    credentials: Arc<dyn CredentialsResolver>,
    publisher: Arc<dyn SnsPublisher>,
}

impl PublishStep {
    /// Creates a step from its bound configuration and collaborators.
    pub fn new(
        config: StepConfig,
        credentials: Arc<dyn CredentialsResolver>,
        publisher: Arc<dyn SnsPublisher>,
    ) -> Self {
        Self {
            config,
            credentials,
            publisher,
        }
    }

    /// Runs the step once.
    ///
    /// Resolves the effective topic and region against `globals`, writes
    /// the three diagnostic lines to `log`, then resolves credentials,
    /// maps the region and publishes. On success a fourth line carries
    /// the remote message id. Errors propagate as-is: no catch, no retry,
    /// no rollback. Blank topic, subject and message are passed through
    /// for the remote service to judge.
    #[instrument(skip_all)]
    pub async fn execute(
        &self,
        globals: &GlobalDefaults,
        log: &dyn LogSink,
    ) -> Result<PublishOutcome, NotifyError> {
        let topic_arn = effective(&self.config.topic_arn, &globals.topic_arn);
        let region_name = effective(&self.config.region, &globals.region);

        log.append(&format!("Amazon SNS: {} ({})", topic_arn, region_name));
        log.append(&format!("Subject: {}", self.config.subject));
        log.append(&format!("Message: {}", self.config.message));

        metrics::counter!("publish.attempts").increment(1);

        let credentials = self.credentials.resolve().await.map_err(|e| {
            metrics::counter!("publish.failures").increment(1);
            NotifyError::Credentials(format!("{:#}", e))
        })?;

        let region = RegionId::from_name(&region_name).map_err(|e| {
            metrics::counter!("publish.failures").increment(1);
            e
        })?;

        let message_id = self
            .publisher
            .publish(PublishRequest {
                credentials,
                region,
                topic_arn: topic_arn.clone(),
                subject: self.config.subject.clone(),
                message: self.config.message.clone(),
            })
            .await
            .map_err(|e| {
                metrics::counter!("publish.failures").increment(1);
                NotifyError::Remote(format!("{:#}", e))
            })?;

        log.append(&format!("Sent message: {}", message_id));
        metrics::counter!("publish.sent").increment(1);
        info!(%topic_arn, %region, %message_id, "publish step completed");

        Ok(PublishOutcome {
            topic_arn,
            region,
            message_id,
        })
    }
}
