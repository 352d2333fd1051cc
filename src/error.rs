//! Error types for scanning and rendering.

use std::fmt;
use thiserror::Error;

/// Raised by a support probe that cannot answer for the current host.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{0}")]
pub struct ProbeFault(pub String);

impl ProbeFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Error)]
pub enum ScanError {
    /// A capability flag that cannot be evaluated means the host and the
    /// catalog disagree; the run stops instead of guessing a value.
    #[error("support check for {group} failed")]
    SupportProbe {
        group: String,
        #[source]
        source: ProbeFault,
    },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unable to serialize capability report")]
    Serialize(#[from] serde_json::Error),
    #[error("unable to write capability report")]
    Write(#[from] fmt::Error),
}
