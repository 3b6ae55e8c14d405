//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application
//! using the `clap` crate. The binary stands in for the build host: the
//! four step fields arrive here the way they would arrive from a job
//! form, and `--save-defaults` plays the administrator submitting the
//! defaults form. Application-level flags are merged into the layered
//! configuration via the `figment::Provider` impl below.

use clap::Parser;
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Publishes a build notification to an Amazon SNS topic.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Topic ARN to publish to. Blank falls back to the stored default.
    #[arg(long, value_name = "ARN")]
    pub topic_arn: Option<String>,

    /// Region to bind the publish call to. Blank falls back to the
    /// stored default.
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Subject of the notification message.
    #[arg(long, value_name = "TEXT")]
    pub subject: Option<String>,

    /// Body of the notification message.
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Save --topic-arn and --region as the global defaults instead of
    /// publishing.
    #[arg(long)]
    pub save_defaults: bool,

    /// Logging level override.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Path override for the persisted defaults file.
    #[arg(long, value_name = "FILE")]
    pub defaults_file: Option<PathBuf>,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(level) = &self.log_level {
            dict.insert("log_level".into(), Value::from(level.clone()));
        }

        if let Some(path) = &self.defaults_file {
            dict.insert(
                "defaults_file".into(),
                Value::from(path.display().to_string()),
            );
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
