//! Error category classification.
//!
//! Categories decide where a failure is reported. Every category here is
//! diagnostic-only: the storefront never shows errors to the user and never
//! retries.

use std::fmt;

/// High-level classification of a [`super::StorefrontError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Request failed in transport or returned a non-OK status.
    Network,

    /// Response body was not the expected JSON shape.
    Parse,

    /// Event delivery to the logging endpoint failed.
    Logging,

    /// Filesystem errors while reading or writing sales reports.
    System,

    /// Bad command-line input.
    Usage,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Parse => "parse",
            ErrorCategory::Logging => "logging",
            ErrorCategory::System => "system",
            ErrorCategory::Usage => "usage",
        }
    }

    /// Whether the failure is only ever written to diagnostics.
    ///
    /// Usage errors are the exception: they abort a CLI command.
    pub fn is_silent(&self) -> bool {
        !matches!(self, ErrorCategory::Usage)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
