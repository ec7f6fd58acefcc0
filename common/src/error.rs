use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while parsing or loading scope information.
///
/// Scope correctness is safety-critical, so none of these are ever
/// downgraded to a default value by the library.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// An address or prefix length that could not be parsed.
    #[error("malformed network expression '{expression}': {reason}")]
    MalformedNetworkExpression { expression: String, reason: String },

    /// A scope source that contained no usable entries.
    #[error("scope list from {source_name} contains no entries")]
    EmptyScopeList { source_name: String },

    /// Reading a scope or address file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScopeError {
    pub fn malformed(expression: &str, reason: impl Into<String>) -> Self {
        Self::MalformedNetworkExpression {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedNetworkExpression { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScopeError>;
