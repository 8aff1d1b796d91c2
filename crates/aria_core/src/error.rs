//! Error types for aria_core
//!
//! The widget engines never produce errors on their own: a negative hook answer
//! is a control-flow gate, not a failure. Errors only come from host hooks and
//! from loading configuration, and are handed back to the caller untouched.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by aria_core operations
#[derive(Error, Debug)]
pub enum AriaError {
    /// A host-supplied hook failed
    #[error("hook `{hook}` failed: {message}")]
    Hook {
        /// Name of the hook that failed
        hook: &'static str,
        /// Host-provided description of the failure
        message: String,
    },

    /// Failed to read a configuration file
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a configuration document
    #[error("invalid config: {0}")]
    ConfigParse(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl AriaError {
    /// Build a hook failure for the named hook
    pub fn hook(hook: &'static str, message: impl Into<String>) -> Self {
        AriaError::Hook {
            hook,
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for AriaError {
    fn from(err: anyhow::Error) -> Self {
        AriaError::Other(err.to_string())
    }
}

impl From<toml::de::Error> for AriaError {
    fn from(err: toml::de::Error) -> Self {
        AriaError::ConfigParse(err.to_string())
    }
}

/// Result type for aria_core operations
pub type Result<T> = std::result::Result<T, AriaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_error_message() {
        let err = AriaError::hook("prepare_options", "network unreachable");
        assert_eq!(
            err.to_string(),
            "hook `prepare_options` failed: network unreachable"
        );
    }

    #[test]
    fn test_from_anyhow() {
        let err: AriaError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AriaError::Other(ref m) if m == "boom"));
    }
}
