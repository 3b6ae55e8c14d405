//! Integration tests for the form → defaults → publish pipeline.

mod helpers;

use crate::helpers::{memory_log::MemoryLog, mock_sns::MockSnsPublisher, StaticCredentials};
use anyhow::Result;
use serde_json::json;
use snsnotify::defaults::DefaultsStore;
use snsnotify::forms::{defaults_from_form, step_from_form};
use snsnotify::notification::PublishStep;
use std::sync::Arc;
use tempfile::tempdir;

#[tokio::test]
async fn blank_job_fields_publish_with_the_stored_defaults() -> Result<()> {
    // 1. The administrator saves the global defaults.
    let dir = tempdir()?;
    let path = dir.path().join("defaults.json");
    let admin_form = json!({
        "topic_arn": "arn:aws:sns:us-east-1:123:alerts",
        "region": "us-east-1",
    });
    {
        let store = DefaultsStore::load(&path)?;
        let (topic_arn, region) = defaults_from_form(&admin_form)?;
        store.update(&topic_arn, &region)?;
    }

    // 2. A fresh process start reloads them from disk.
    let store = DefaultsStore::load(&path)?;

    // 3. A job form with blank overrides is bound and executed.
    let job_form = json!({
        "topic_arn": "",
        "region": "",
        "subject": "Build",
        "message": "OK",
    });
    let publisher = Arc::new(MockSnsPublisher::new());
    let step = PublishStep::new(
        step_from_form(&job_form)?,
        Arc::new(StaticCredentials),
        publisher.clone(),
    );
    let log = MemoryLog::new();

    let outcome = step.execute(&store.read(), &log).await?;

    // 4. The publish call used the stored defaults and the log carries
    // the three diagnostic lines plus the message id line, in order.
    let requests = publisher.requests();
    assert_eq!(requests.len(), 1, "expected exactly one publish call");
    assert_eq!(requests[0].topic_arn, "arn:aws:sns:us-east-1:123:alerts");
    assert_eq!(requests[0].region.name(), "us-east-1");

    let lines = log.lines();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("arn:aws:sns:us-east-1:123:alerts"));
    assert!(lines[0].contains("us-east-1"));
    assert!(lines[1].contains("Build"));
    assert!(lines[2].contains("OK"));
    assert!(lines[3].contains(&outcome.message_id));

    assert_eq!(outcome.topic_arn, "arn:aws:sns:us-east-1:123:alerts");
    assert_eq!(outcome.region.name(), "us-east-1");
    Ok(())
}

#[tokio::test]
async fn job_overrides_beat_the_stored_defaults() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("defaults.json");
    let store = DefaultsStore::load(&path)?;
    store.update("arn:aws:sns:us-east-1:123:alerts", "us-east-1")?;

    let job_form = json!({
        "topic_arn": "arn:aws:sns:eu-west-1:456:deploys",
        "region": "eu-west-1",
        "subject": "Deploy",
        "message": "done",
    });
    let publisher = Arc::new(MockSnsPublisher::new());
    let step = PublishStep::new(
        step_from_form(&job_form)?,
        Arc::new(StaticCredentials),
        publisher.clone(),
    );

    step.execute(&store.read(), &MemoryLog::new()).await?;

    let requests = publisher.requests();
    assert_eq!(requests[0].topic_arn, "arn:aws:sns:eu-west-1:456:deploys");
    assert_eq!(requests[0].region.name(), "eu-west-1");
    Ok(())
}

#[tokio::test]
async fn unknown_region_from_defaults_fails_without_publishing() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("defaults.json");
    let store = DefaultsStore::load(&path)?;
    store.update("arn:aws:sns:us-east-1:123:alerts", "mars-west-1")?;

    let job_form = json!({
        "topic_arn": "",
        "region": "",
        "subject": "Build",
        "message": "OK",
    });
    let publisher = Arc::new(MockSnsPublisher::new());
    let step = PublishStep::new(
        step_from_form(&job_form)?,
        Arc::new(StaticCredentials),
        publisher.clone(),
    );
    let log = MemoryLog::new();

    let result = step.execute(&store.read(), &log).await;

    assert!(result.is_err());
    assert_eq!(publisher.requests().len(), 0);
    assert_eq!(log.lines().len(), 3);
    Ok(())
}
