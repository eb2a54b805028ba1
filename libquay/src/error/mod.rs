//! Error types for libquay
//!
//! Registry status codes are not errors here: a non-200 answer from Quay is
//! recorded in the invocation's [`ErrorLog`](crate::outcome::ErrorLog). This
//! type covers everything that stops an invocation outright.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// Main error type for libquay operations
#[derive(Error, Debug)]
pub enum QuayError {
    /// Transport failures (DNS, connection refused, timeout, body read)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The registry answered 200 but the body is not a tag page
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid or missing invocation parameters
    #[error("Invalid parameters: {message}")]
    Params { message: String },

    /// Configuration errors (bad base URL, unreadable config file)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for libquay operations
pub type Result<T> = std::result::Result<T, QuayError>;

impl QuayError {
    /// Creates a new network error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libquay::error::QuayError;
    ///
    /// let err = QuayError::network("connection refused");
    /// assert!(matches!(err, QuayError::Network { .. }));
    /// ```
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new network error with a source error.
    pub fn network_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new validation error with a source error.
    pub fn validation_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new parameter error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libquay::error::QuayError;
    ///
    /// let err = QuayError::params("repository is required");
    /// assert_eq!(err.to_string(), "Invalid parameters: repository is required");
    /// ```
    pub fn params<S: Into<String>>(message: S) -> Self {
        Self::Params {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S, P>(message: S, path: Option<P>) -> Self
    where
        S: Into<String>,
        P: Into<String>,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    pub fn config_with_source<S, P, E>(message: S, path: Option<P>, source: E) -> Self
    where
        S: Into<String>,
        P: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }
}

impl From<config::ConfigError> for QuayError {
    fn from(err: config::ConfigError) -> Self {
        QuayError::config_with_source("Failed to build configuration", None::<String>, err)
    }
}
