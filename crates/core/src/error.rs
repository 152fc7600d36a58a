use thiserror::Error;

/// Errors raised while validating input or generating markup.
///
/// Every variant is scoped to the single request that produced it. Callers at
/// the tool boundary turn these into text results instead of propagating them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// Malformed component identifier.
    #[error("{message}")]
    InvalidName {
        /// Human-readable reason
        message: String,
    },
    /// Attribute bag is not a plain mapping.
    #[error("{0}")]
    InvalidShape(String),
    /// Color literal matches none of the accepted syntaxes.
    #[error("Invalid color format: {value}. Use hex (#fff), rgb(), or rgba() format")]
    InvalidColor {
        /// The rejected input
        value: String,
    },
    /// Component name not present in the registry.
    #[error("Component \"{name}\" not found in registry")]
    UnknownComponent {
        /// The requested identifier
        name: String,
    },
}

impl UiError {
    /// Create an invalid name error
    pub fn invalid_name(message: impl Into<String>) -> Self {
        Self::InvalidName {
            message: message.into(),
        }
    }

    /// Create an invalid shape error
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape(message.into())
    }

    /// Create an invalid color error
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }

    /// Create an unknown component error
    pub fn unknown_component(name: impl Into<String>) -> Self {
        Self::UnknownComponent { name: name.into() }
    }

    /// Short machine-readable tag for this error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            UiError::InvalidName { .. } => "invalid_name",
            UiError::InvalidShape(_) => "invalid_shape",
            UiError::InvalidColor { .. } => "invalid_color",
            UiError::UnknownComponent { .. } => "unknown_component",
        }
    }
}

/// Result alias used throughout the uigen crates.
pub type Result<T> = std::result::Result<T, UiError>;
