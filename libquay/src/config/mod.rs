//! Tool configuration.
//!
//! Defaults are built in and a YAML file can be merged on top of them.
//! Environment and CLI overrides are applied by the caller.

use crate::client::{ClientConfig, DEFAULT_QUAY_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::error::{QuayError, Result};
use crate::query::LimitMapping;
use config::{Config as ConfigRs, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;


/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub registry: Registry,
    #[serde(default)]
    pub compat: Compat,
}

impl Config {
    /// Parses a `Config` from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = ConfigRs::builder()
            .add_source(ConfigRs::try_from(&Config::default())?)
            .add_source(File::from_str(s, FileFormat::Yaml));

        Self::from_builder(builder, None)
    }

    /// Loads a `Config`, merging the file at `path` over the defaults.
    ///
    /// With no path the defaults are returned. A path that does not exist is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigRs::builder().add_source(ConfigRs::try_from(&Config::default())?);

        if let Some(p) = path {
            builder = builder.add_source(File::from(p).format(FileFormat::Yaml).required(true));
        }

        Self::from_builder(builder, path)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: Option<&Path>,
    ) -> Result<Self> {
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                QuayError::config_with_source(
                    "Failed to load configuration".to_string(),
                    path.map(|p| p.display().to_string()),
                    e,
                )
            })
    }

    /// Endpoint configuration derived from the registry section.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_base_url(self.registry.url.clone())
            .with_timeout(self.registry.timeout)
    }

    pub fn limit_mapping(&self) -> LimitMapping {
        if self.compat.legacy_limit {
            LimitMapping::Legacy
        } else {
            LimitMapping::Limit
        }
    }
}

/// Registry endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registry {
    #[serde(default = "default_registry_url")]
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_registry_timeout")]
    pub timeout: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            url: default_registry_url(),
            timeout: default_registry_timeout(),
        }
    }
}

fn default_registry_url() -> String {
    DEFAULT_QUAY_URL.to_string()
}

fn default_registry_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

/// Compatibility switches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Compat {
    /// Map `limit` the way the first tag_info release did
    #[serde(default)]
    pub legacy_limit: bool,
}
