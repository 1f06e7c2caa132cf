//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool registration and dispatch.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A tool with the same name is already registered.
    #[error("Duplicate tool name: {0}")]
    DuplicateToolName(String),

    /// A required parameter was not supplied.
    #[error("Invalid arguments: missing required parameter '{0}'")]
    MissingArgument(String),

    /// A parameter was supplied but could not be decoded to its declared type.
    #[error("Invalid arguments: parameter '{name}' {reason}")]
    InvalidArgument { name: String, reason: String },

    /// The arguments as a whole could not be decoded.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool execution failed.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "duplicate tool name" error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateToolName(name.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }

    /// Create a new "invalid argument" error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "invalid arguments" error not tied to one parameter.
    pub fn invalid_arguments(reason: impl Into<String>) -> Self {
        Self::InvalidArguments(reason.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
