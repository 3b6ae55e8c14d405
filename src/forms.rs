//! Binding of submitted form payloads to configuration values.
//!
//! The host framework hands both the administrator's defaults form and
//! the per-job step form over as JSON key/value payloads. Every field
//! must be present as a string; empty strings are legal values (they mean
//! "fall back to the default" for the override fields). Anything else is
//! a fatal configuration error surfaced to whoever submitted the form.

use crate::core::StepConfig;
use crate::notification::NotifyError;
use serde_json::Value;

fn form_string(form: &Value, key: &str) -> Result<String, NotifyError> {
    form.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            NotifyError::Configuration(format!("missing or non-string form field: {}", key))
        })
}

/// Binds a submitted job form to a [`StepConfig`].
pub fn step_from_form(form: &Value) -> Result<StepConfig, NotifyError> {
    Ok(StepConfig {
        topic_arn: form_string(form, "topic_arn")?,
        region: form_string(form, "region")?,
        subject: form_string(form, "subject")?,
        message: form_string(form, "message")?,
    })
}

/// Extracts the `(topic_arn, region)` pair from a submitted admin
/// defaults form.
pub fn defaults_from_form(form: &Value) -> Result<(String, String), NotifyError> {
    Ok((form_string(form, "topic_arn")?, form_string(form, "region")?))
}
