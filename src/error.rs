//! Error handling for passforge

use thiserror::Error;

/// Main error type for passforge
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PassForgeError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Prompt error: {message}")]
    Prompt { message: String },
}

impl PassForgeError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Whether the error was caused by bad caller input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { message } => {
                format!("❌ Invalid input: {}\n💡 Check the company and city arguments", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Serialization { message } => {
                format!("❌ Could not encode output: {}", message)
            }
            Self::Prompt { message } => {
                format!("❌ Prompt failed: {}\n💡 Pass the company name as an argument instead", message)
            }
        }
    }
}

impl From<std::io::Error> for PassForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<serde_json::Error> for PassForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<inquire::InquireError> for PassForgeError {
    fn from(err: inquire::InquireError) -> Self {
        Self::prompt(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PassForgeError>;

/// Build an [`PassForgeError::InvalidInput`] from a message or format string
#[macro_export]
macro_rules! invalid_input {
    ($msg:expr) => {
        $crate::error::PassForgeError::invalid_input($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::PassForgeError::invalid_input(format!($fmt, $($arg)*))
    };
}
