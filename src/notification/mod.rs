//! Publishing build notifications to Amazon SNS.
//!
//! This module holds the publish step and its two injected collaborators:
//! the credential resolver and the SNS client. Both sit behind traits so
//! the step can be exercised without touching real cloud credentials or
//! endpoints.
pub mod credentials;
pub mod sns;
pub mod step;

use thiserror::Error;

pub use credentials::{CredentialsResolver, DefaultChainResolver};
pub use sns::{PublishRequest, SnsClient, SnsPublisher};
pub use step::PublishStep;

/// Errors a publish step execution can fail with.
///
/// None of these are caught or retried locally; they propagate to the
/// host, which marks the step failed and shows the detail to the
/// operator.
#[derive(Error, Debug, Clone)]
pub enum NotifyError {
    /// Unknown region name, or a missing/malformed form field.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The ambient provider chain yielded no usable credentials.
    #[error("credential resolution failed: {0}")]
    Credentials(String),

    /// The publish call itself failed (auth, malformed ARN, throttling,
    /// network).
    #[error("publish request failed: {0}")]
    Remote(String),
}
