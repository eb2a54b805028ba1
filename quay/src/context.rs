//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables
//! 4. CLI flags (applied per command)
//!
//! Once built, the context is passed as read-only throughout the application.

use libquay::Config;
use std::path::{Path, PathBuf};

/// Environment variable overriding the Quay API base URL
pub const ENV_URL: &str = "QUAY_URL";
/// Environment variable overriding the request timeout in seconds
pub const ENV_TIMEOUT: &str = "QUAY_TIMEOUT";

/// How much diagnostic output goes to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    Normal,
    Verbose,
    VeryVerbose,
    Trace,
}

impl VerbosityLevel {
    /// Maps the number of `-v` flags to a level.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::VeryVerbose,
            _ => VerbosityLevel::Trace,
        }
    }

    /// Log filter directive used when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        match self {
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "info",
            VerbosityLevel::VeryVerbose => "debug",
            VerbosityLevel::Trace => "trace",
        }
    }
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    /// Build context with precedence: defaults > config file > env vars.
    ///
    /// An explicit `config_path` must load. The default location is only
    /// read when a file exists there.
    pub fn build(config_path: Option<&Path>, verbosity: VerbosityLevel) -> libquay::Result<Self> {
        let config = match config_path {
            Some(path) => Config::load(Some(path))?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => Config::load(Some(&path))?,
                None => Config::default(),
            },
        };

        let config = apply_env_overrides(config, |key| std::env::var(key).ok());
        tracing::debug!(?config, "resolved configuration");

        Ok(Self { config, verbosity })
    }
}

/// Default config file location: `<config dir>/quay/config.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quay").join("config.yaml"))
}

/// Applies `QUAY_URL` and `QUAY_TIMEOUT` using `lookup` to read variables.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_URL) {
        config.registry.url = url;
    }
    if let Some(raw) = lookup(ENV_TIMEOUT) {
        match raw.trim().parse::<u64>() {
            Ok(timeout) => config.registry.timeout = timeout,
            Err(_) => tracing::warn!("ignoring {}={:?}: not a number of seconds", ENV_TIMEOUT, raw),
        }
    }
    config
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
