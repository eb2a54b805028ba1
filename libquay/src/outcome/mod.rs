//! Invocation results.
//!
//! An invocation collects recoverable problems in an [`ErrorLog`] and ends as
//! an [`Outcome`]. Both variants serialize to the JSON object an Ansible
//! binary module prints on stdout.

use crate::tag::Tag;
use serde::Serialize;


/// Message used when data was fetched but errors were also recorded.
pub const FAILURES_OCCURRED: &str = "Failures occurred";

/// Ordered list of error messages collected during one invocation.
///
/// Recording an error never stops the invocation. Whoever builds the
/// [`Outcome`] checks [`ErrorLog::is_empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorLog {
    messages: Vec<String>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use libquay::outcome::ErrorLog;
    ///
    /// let mut errors = ErrorLog::new();
    /// errors.record("Cannot fetch repository tags for acme/widgets");
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn record<S: Into<String>>(&mut self, message: S) {
        let message = message.into();
        tracing::warn!("{}", message);
        self.messages.push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// The first message recorded, if any.
    pub fn first(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.messages
    }
}

/// Payload of a successful invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagReport {
    /// Always false: listing tags changes nothing
    pub changed: bool,
    pub quay_tags: Vec<Tag>,
    pub errors: Vec<String>,
}

/// Payload of a failed invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub failed: bool,
    pub changed: bool,
    pub msg: String,
    pub errors: Vec<String>,
    /// Tags fetched before the failure was detected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quay_tags: Option<Vec<Tag>>,
}

/// Result of one invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Success(TagReport),
    Failure(Failure),
}

impl Outcome {
    pub fn success(tags: Vec<Tag>) -> Self {
        Outcome::Success(TagReport {
            changed: false,
            quay_tags: tags,
            errors: Vec::new(),
        })
    }

    pub fn failure<S: Into<String>>(msg: S, errors: ErrorLog, partial: Option<Vec<Tag>>) -> Self {
        Outcome::Failure(Failure {
            failed: true,
            changed: false,
            msg: msg.into(),
            errors: errors.into_vec(),
            quay_tags: partial,
        })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Always false for both variants.
    pub fn changed(&self) -> bool {
        match self {
            Outcome::Success(report) => report.changed,
            Outcome::Failure(failure) => failure.changed,
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            Outcome::Success(report) => &report.errors,
            Outcome::Failure(failure) => &failure.errors,
        }
    }

    /// Tags carried by the outcome, partial ones included.
    pub fn tags(&self) -> &[Tag] {
        match self {
            Outcome::Success(report) => &report.quay_tags,
            Outcome::Failure(failure) => failure.quay_tags.as_deref().unwrap_or(&[]),
        }
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.is_failure() { 1 } else { 0 }
    }
}
