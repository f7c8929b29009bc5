//! Error types for promstatic
//!
//! Resolution problems (unmatched selectors, missing ports, ...) are not
//! errors: the compiler reports them as diagnostics. The variants here cover
//! input that cannot be read at all and output that cannot be written.

use thiserror::Error;

use crate::yaml::YamlError;

/// Main error type for promstatic operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input could not be parsed as YAML
    #[error("yaml error: {0}")]
    Yaml(#[from] YamlError),

    /// A document violates the basic shape of its resource kind
    #[error("invalid {kind} '{name}': {message}")]
    Shape {
        /// Resource kind (e.g. "ServiceMonitor")
        kind: String,
        /// Resource name, or "?" when the name itself is missing
        name: String,
        /// Description of the violation
        message: String,
    },

    /// Serialization of an output artifact failed
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of what failed
        message: String,
    },
}

impl Error {
    /// Create a shape error for a resource of the given kind and name
    pub fn shape(
        kind: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Shape {
            kind: kind.into(),
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error with the given message
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}
