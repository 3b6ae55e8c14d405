//! SnsNotify - Build-completion notifier for Amazon SNS
//!
//! Standalone runner that stands in for the build host: it binds the
//! submitted form fields to a publish step and runs it once, or saves
//! new global defaults. A non-zero exit is how the host sees a failed
//! step.

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use snsnotify::{
    cli::Cli,
    config::Config,
    core::ConsoleLog,
    defaults::DefaultsStore,
    forms,
    notification::{DefaultChainResolver, PublishStep, SnsClient},
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file,
    // environment, and CLI args.
    let config = Config::load(&cli)?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("SnsNotify starting up...");
    info!("Log Level: {}", config.log_level);
    info!("Defaults File: {}", config.defaults_file.display());
    if let Some(url) = &config.sns.endpoint_url {
        info!("SNS Endpoint Override: {}", url);
    }

    let store = DefaultsStore::load(&config.defaults_file)?;

    if cli.save_defaults {
        // The administrator path: the two submitted fields overwrite the
        // stored globals.
        let form = json!({
            "topic_arn": cli.topic_arn.clone().unwrap_or_default(),
            "region": cli.region.clone().unwrap_or_default(),
        });
        let (topic_arn, region) = forms::defaults_from_form(&form)?;
        store.update(&topic_arn, &region)?;
        return Ok(());
    }

    // The job path: bind the four submitted fields to a step and run it
    // once against the stored defaults.
    let form = json!({
        "topic_arn": cli.topic_arn.clone().unwrap_or_default(),
        "region": cli.region.clone().unwrap_or_default(),
        "subject": cli.subject.clone().unwrap_or_default(),
        "message": cli.message.clone().unwrap_or_default(),
    });
    let step = PublishStep::new(
        forms::step_from_form(&form)?,
        Arc::new(DefaultChainResolver),
        Arc::new(SnsClient::new(config.sns.endpoint_url.clone())),
    );

    let outcome = step.execute(&store.read(), &ConsoleLog).await?;
    info!(message_id = %outcome.message_id, "step succeeded");

    Ok(())
}
