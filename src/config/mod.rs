use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_CONCURRENT_REQUESTS_DEFAULT: usize = 2;

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_max_concurrent_requests() -> usize {
    MAX_CONCURRENT_REQUESTS_DEFAULT
}

/// Client configuration, settable from CLI flags or a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
pub struct ClientConfig {
    /// Base URL of the Pythia backend.
    #[cfg_attr(feature = "cli", arg(long, default_value = "http://localhost:8000"))]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Cap on simultaneously outstanding requests; excess requests queue.
    #[cfg_attr(feature = "cli", arg(long, default_value = "2"))]
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    #[serde(default)]
    pub verbose: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_concurrent_requests: default_max_concurrent_requests(),
            verbose: false,
        }
    }
}

impl ClientConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl ConfigProvider for ClientConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn max_concurrent_requests(&self) -> usize {
        self.max_concurrent_requests
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("max_concurrent_requests", self.max_concurrent_requests, 1)?;
        Ok(())
    }
}
