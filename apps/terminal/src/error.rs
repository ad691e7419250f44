//! # App Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Registro                               │
//! │                                                                         │
//! │  stdin line                                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Command::from_str ──── unknown verb / bad id ───────┐                 │
//! │       │                                              │                 │
//! │       ▼                                              ▼                 │
//! │  AppState::*  ──── CoreError (wrong screen, cart) ── AppError ──► "! …" │
//! │                                                                         │
//! │  Nothing here ends the process: the error is printed and the loop      │
//! │  reads the next line. Fetch failures never get here; they end up in    │
//! │  the list's own state.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation failures are not errors at this level: a rejected submit is
//! a normal outcome and shows up in the form snapshot.

use serde::Serialize;
use thiserror::Error;

use registro_core::CoreError;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message, printed to the user
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input line did not parse as a command
    UnknownCommand,

    /// Command not available on the current screen
    InvalidState,

    /// Referenced product is not loaded / not in the cart
    NotFound,

    /// Argument out of bounds
    ValidationError,

    /// Cart limits
    CartError,
}

/// Result alias for command handlers.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn unknown_command(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::UnknownCommand, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::AlreadyAuthenticated | CoreError::NotAuthenticated => {
                ErrorCode::InvalidState
            }
            CoreError::ProductNotFound(_) | CoreError::NotInCart(_) => ErrorCode::NotFound,
            CoreError::CartTooLarge { .. } => ErrorCode::CartError,
            CoreError::InvalidQuantity { .. } => ErrorCode::ValidationError,
        };
        AppError::new(code, err.to_string())
    }
}
