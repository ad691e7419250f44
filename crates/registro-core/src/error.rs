//! # Error Types
//!
//! Domain-specific error types for registro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  registro-core errors (this file)                                      │
//! │  ├── CoreError        - Gate / cart rule violations                    │
//! │  └── ValidationError  - Per-field form failures (inline messages)      │
//! │                                                                         │
//! │  registro-catalog errors (separate crate)                              │
//! │  └── CatalogError     - Fetch and configuration failures               │
//! │                                                                         │
//! │  Terminal app errors                                                   │
//! │  └── AppError         - What the user sees for a failed command        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display Strings
//! `ValidationError` renders the exact inline message shown under a form
//! field. The registration screen is in Spanish, so these are too.

use serde::Serialize;
use thiserror::Error;

use crate::{EMPLOYEE_CODE_LEN, MAX_AGE, MIN_AGE};

// =============================================================================
// Validation Error
// =============================================================================

/// A single field's validation failure.
///
/// Exactly one of these is reported per field; the variant decides the
/// inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// Email does not look like `local@domain.tld`.
    #[error("El formato del correo electrónico no es válido")]
    InvalidFormat,

    /// Age is unparseable or outside `[MIN_AGE, MAX_AGE]`.
    #[error("La edad debe ser un número entre {} y {}", MIN_AGE, MAX_AGE)]
    OutOfRange,

    /// Age is a valid number but below `ADULT_AGE`.
    #[error("Lo sentimos, no tienes edad suficiente para registrarte")]
    TooYoung,

    /// Employee code missing or not exactly `EMPLOYEE_CODE_LEN` characters.
    #[error("El código de empleado debe tener exactamente {} caracteres", EMPLOYEE_CODE_LEN)]
    WrongLength,
}

impl ValidationError {
    /// Machine-readable kind, stable across message wording changes.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidFormat => "invalid_format",
            ValidationError::OutOfRange => "out_of_range",
            ValidationError::TooYoung => "too_young",
            ValidationError::WrongLength => "wrong_length",
        }
    }
}

/// Form-level message shown when a submit is rejected.
pub const SUBMIT_ERROR_MESSAGE: &str = "Por favor, corrige los errores en el formulario";

// =============================================================================
// Core Error
// =============================================================================

/// Rule violations outside of per-field validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Form operations are only valid before a session starts.
    #[error("A session is already active; log out first")]
    AlreadyAuthenticated,

    /// Catalog operations need an active session.
    #[error("Register first to access the catalog")]
    NotAuthenticated,

    /// Product id is not part of the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Product id is not in the cart.
    #[error("Product {0} is not in the cart")]
    NotInCart(i64),

    /// Cart has exceeded maximum allowed lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity outside `1..=max`.
    #[error("Quantity {requested} must be between 1 and {max}")]
    InvalidQuantity { requested: i64, max: i64 },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::OutOfRange.to_string(),
            "La edad debe ser un número entre 1 y 120"
        );
        assert_eq!(
            ValidationError::WrongLength.to_string(),
            "El código de empleado debe tener exactamente 6 caracteres"
        );
        assert_eq!(
            ValidationError::InvalidFormat.to_string(),
            "El formato del correo electrónico no es válido"
        );
    }

    #[test]
    fn test_kinds_are_distinct() {
        let kinds = [
            ValidationError::InvalidFormat.kind(),
            ValidationError::OutOfRange.kind(),
            ValidationError::TooYoung.kind(),
            ValidationError::WrongLength.kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_core_error_messages() {
        let err = CoreError::InvalidQuantity {
            requested: 0,
            max: 99,
        };
        assert_eq!(err.to_string(), "Quantity 0 must be between 1 and 99");
        assert_eq!(
            CoreError::ProductNotFound(7).to_string(),
            "Product not found: 7"
        );
    }
}
