//! # Catalog Error Types
//!
//! Error types for fetching and configuration.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Payload             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  RequestFailed  │  │  DecodeFailed           │ │
//! │  │  InvalidUrl     │  │  HttpStatus     │  │                         │ │
//! │  │  ConfigLoad/Save│  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The screens never tell these apart: a failed list shows one generic
//! message (see [`CatalogError::user_message`]). The detail is for logs.

use registro_core::ListKind;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog error type covering fetch and configuration failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid configuration value.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Base URL could not be parsed or has the wrong scheme.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Request never produced a response (DNS, TLS, connection reset...).
    #[error("Request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    /// Server answered with a non-success status.
    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // =========================================================================
    // Payload Errors
    // =========================================================================
    /// Body was not the expected JSON collection.
    #[error("Could not decode response from {url}: {reason}")]
    DecodeFailed { url: String, reason: String },
}

impl CatalogError {
    /// The one message a list view shows for any failure.
    pub fn user_message(kind: ListKind) -> String {
        format!("Error fetching {}. Please try again later.", kind.noun())
    }

    /// True for failures of the remote call itself (as opposed to config).
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            CatalogError::RequestFailed { .. }
                | CatalogError::HttpStatus { .. }
                | CatalogError::DecodeFailed { .. }
        )
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidUrl(err.to_string())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();
        if err.is_decode() {
            CatalogError::DecodeFailed {
                url,
                reason: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            CatalogError::HttpStatus {
                url,
                status: status.as_u16(),
            }
        } else {
            CatalogError::RequestFailed {
                url,
                reason: err.to_string(),
            }
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for CatalogError {
    fn from(err: toml::ser::Error) -> Self {
        CatalogError::ConfigSaveFailed(err.to_string())
    }
}
