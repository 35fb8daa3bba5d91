use thiserror::Error;

/// Errors raised by layer construction, forward and backward passes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    #[error("Shape mismatch in operation '{operation}': expected {expected}, got {got}")]
    ShapeMismatch {
        operation: String,
        expected: String,
        got: String,
    },

    #[error("Invalid shape in operation '{operation}': {reason}")]
    InvalidShape {
        operation: String,
        reason: String,
        shape: Option<Vec<usize>>,
    },

    #[error("Invalid argument in operation '{operation}': {reason}")]
    InvalidArgument { operation: String, reason: String },

    #[error("Invalid configuration for '{component}': {reason}")]
    InvalidConfiguration { component: String, reason: String },

    #[error("Operation '{operation}' called before initialization: {reason}")]
    NotInitialized { operation: String, reason: String },

    #[error("Forward context does not match inputs in operation '{operation}': {reason}")]
    ContextMismatch { operation: String, reason: String },
}

impl TensorError {
    /// Create a shape mismatch error with context
    pub fn shape_mismatch(operation: &str, expected: &str, got: &str) -> Self {
        Self::ShapeMismatch {
            operation: operation.to_string(),
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }

    /// Create an invalid shape error carrying the offending shape
    pub fn invalid_shape(operation: &str, reason: &str, shape: &[usize]) -> Self {
        Self::InvalidShape {
            operation: operation.to_string(),
            reason: reason.to_string(),
            shape: Some(shape.to_vec()),
        }
    }

    pub fn invalid_argument(operation: &str, reason: &str) -> Self {
        Self::InvalidArgument {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_configuration(component: &str, reason: &str) -> Self {
        Self::InvalidConfiguration {
            component: component.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn not_initialized(operation: &str, reason: &str) -> Self {
        Self::NotInitialized {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn context_mismatch(operation: &str, reason: &str) -> Self {
        Self::ContextMismatch {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the operation (or component) name for this error
    pub fn operation(&self) -> &str {
        match self {
            Self::ShapeMismatch { operation, .. } => operation,
            Self::InvalidShape { operation, .. } => operation,
            Self::InvalidArgument { operation, .. } => operation,
            Self::InvalidConfiguration { component, .. } => component,
            Self::NotInitialized { operation, .. } => operation,
            Self::ContextMismatch { operation, .. } => operation,
        }
    }
}

pub type Result<T> = std::result::Result<T, TensorError>;

/// Convert from ndarray::ShapeError to TensorError
impl From<ndarray::ShapeError> for TensorError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::InvalidShape {
            operation: "array_creation".to_string(),
            reason: format!("Shape error: {err}"),
            shape: None,
        }
    }
}
