//! Error types for binding and configuration.

use thiserror::Error;

/// Failure while attaching a click handler or a load subscription.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The page has no element with this id at bind time.
    #[error("element not found: #{id}")]
    ElementNotFound { id: String },

    /// The host refused to register a listener.
    #[error("failed to attach listener to {target}: {reason}")]
    Listener { target: String, reason: String },
}

/// Failure while reading or validating the navigation config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid navigation config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize navigation config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid path template {template:?}: {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("path template {template:?} for #{element_id} needs a placeholder for the record key")]
    MissingPlaceholder { element_id: String, template: String },

    #[error("path template {template:?} for #{element_id} is fixed and cannot contain placeholders")]
    UnexpectedPlaceholder { element_id: String, template: String },

    #[error("base path {0:?} must be empty or start with '/'")]
    InvalidBasePath(String),
}
