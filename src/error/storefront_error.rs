//! Unified error type for the storefront.

use std::path::PathBuf;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Every failure the storefront can produce.
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    /// The request never produced a response.
    #[error("request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: HttpError,
    },

    /// The server answered with a non-2xx status.
    #[error("'{url}' returned HTTP {status}: {body}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },

    /// The response body did not decode.
    #[error("could not parse response from '{url}': {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// An event could not be delivered to the logging endpoint.
    #[error("event delivery to '{endpoint}' failed: {message}")]
    Logging { endpoint: String, message: String },

    /// Filesystem failure.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid command-line input.
    #[error("{0}")]
    Usage(String),
}

impl StorefrontError {
    pub fn network(url: &str, source: HttpError) -> Self {
        StorefrontError::Network {
            url: url.to_string(),
            source,
        }
    }

    pub fn parse(url: &str, source: serde_json::Error) -> Self {
        StorefrontError::Parse {
            url: url.to_string(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorefrontError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StorefrontError::Network { .. } | StorefrontError::HttpStatus { .. } => {
                ErrorCategory::Network
            }
            StorefrontError::Parse { .. } => ErrorCategory::Parse,
            StorefrontError::Logging { .. } => ErrorCategory::Logging,
            StorefrontError::Io { .. } => ErrorCategory::System,
            StorefrontError::Usage(_) => ErrorCategory::Usage,
        }
    }

    /// Short error code for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            StorefrontError::Network { source, .. } => match source {
                HttpError::Timeout(_) => "E_NET_TIMEOUT",
                HttpError::ConnectionFailed(_) => "E_NET_CONN",
                HttpError::InvalidUrl(_) => "E_NET_URL",
                HttpError::Other(_) => "E_NET_OTHER",
            },
            StorefrontError::HttpStatus { .. } => "E_NET_HTTP",
            StorefrontError::Parse { .. } => "E_PARSE",
            StorefrontError::Logging { .. } => "E_LOG_DELIVERY",
            StorefrontError::Io { .. } => "E_SYS_IO",
            StorefrontError::Usage(_) => "E_USAGE",
        }
    }
}
