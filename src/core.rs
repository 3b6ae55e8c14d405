//! Core domain types and service traits for SnsNotify
//!
//! This module defines the fundamental data structures and trait contracts
//! that govern component interactions throughout the application.

use crate::region::RegionId;
use serde::{Deserialize, Serialize};

/// The per-job configuration of a publish step.
///
/// Bound once when the job form is submitted and read-only at execution
/// time. An empty `topic_arn` or `region` means "use the global default".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StepConfig {
    /// ARN of the topic to publish to, or empty to use the global default.
    pub topic_arn: String,
    /// Region name the publish call is bound to, or empty to use the
    /// global default.
    pub region: String,
    /// Subject of the notification message.
    pub subject: String,
    /// Body of the notification message.
    pub message: String,
}

/// The result of one successful publish step execution.
///
/// Carries the effective values the step resolved and the message id the
/// remote service assigned. Produced once per execution and discarded
/// after logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    /// The topic ARN actually published to.
    pub topic_arn: String,
    /// The region the publish call was bound to.
    pub region: RegionId,
    /// The message id returned by the remote service.
    pub message_id: String,
}

/// An append-only, line-oriented log visible to the job's operator.
///
/// The publish step writes its diagnostic lines here; the order of lines
/// is part of the step's observable behavior.
pub trait LogSink: Send + Sync {
    /// Appends one line to the log.
    fn append(&self, line: &str);
}

/// A `LogSink` that writes to the process stdout, the operator-visible
/// build log when running standalone.
pub struct ConsoleLog;

impl LogSink for ConsoleLog {
    fn append(&self, line: &str) {
        println!("{}", line);
    }
}
