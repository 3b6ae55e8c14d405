//! Configuration management for SnsNotify
//!
//! This module defines the application `Config` struct, responsible for
//! holding the runtime settings of the notifier itself (not the per-job
//! step fields). It uses the `figment` crate to layer defaults, a
//! `snsnotify.toml` file, environment variables and command-line
//! arguments.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Cli;

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Where the global topic/region defaults are persisted.
    pub defaults_file: PathBuf,
    /// Settings for the SNS client.
    pub sns: SnsConfig,
}

/// Settings for the SNS client.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct SnsConfig {
    /// Overrides the region-scoped endpoint, for local stacks and tests.
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Loads the application configuration by layering sources:
    /// defaults, TOML file, environment, and CLI arguments.
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from("snsnotify.toml"));
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            // Allow overriding with environment variables, e.g.
            // SNSNOTIFY_LOG_LEVEL=debug
            .merge(Env::prefixed("SNSNOTIFY_"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

// Provide a default implementation for tests and easy setup.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            defaults_file: PathBuf::from("snsnotify-defaults.json"),
            sns: SnsConfig::default(),
        }
    }
}
