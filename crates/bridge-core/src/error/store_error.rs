//! Store errors - every backend failure collapses into this type

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Which backing store an operation ran against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Chatwoot PostgreSQL database
    Chatwoot,
    /// LibreChat MongoDB database
    LibreChat,
}

impl StoreKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chatwoot => "chatwoot",
            Self::LibreChat => "librechat",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend failure.
///
/// The display text is the driver's own message so callers see the raw cause.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not reach the store or obtain a session
    #[error("{0}")]
    Connection(String),

    /// The store rejected or failed the query
    #[error("{0}")]
    Query(String),

    /// A returned row or document could not be converted
    #[error("{0}")]
    Decode(String),

    /// The query did not finish within the configured budget
    #[error("{store} query timed out after {}s", .elapsed.as_secs())]
    Timeout { store: StoreKind, elapsed: Duration },
}

impl StoreError {
    /// Short machine-readable category, used for logging
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Connection(_) => "connection",
            Self::Query(_) => "query",
            Self::Decode(_) => "decode",
            Self::Timeout { .. } => "timeout",
        }
    }
}
