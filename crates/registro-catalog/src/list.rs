//! # List State
//!
//! What a list view shows at any moment.
//!
//! ```text
//!   ┌─────────┐  fetch ok   ┌────────────────┐
//!   │ Loading │ ──────────► │ Loaded(items)  │
//!   │         │             └────────────────┘
//!   │         │  fetch err  ┌────────────────┐
//!   │         │ ──────────► │ Failed(msg)    │
//!   └─────────┘             └────────────────┘
//! ```
//!
//! Both outcomes are terminal for the life of a session. A new session
//! starts again from `Loading`.

use serde::Serialize;
use tracing::{error, warn};

use registro_core::ListKind;

use crate::error::{CatalogError, CatalogResult};

/// Fetch lifecycle of one list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ListState<T> {
    Loading,
    /// Generic user-facing message; the detail went to the log.
    Failed(String),
    /// May be empty, which renders as an empty list (not an error).
    Loaded(Vec<T>),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Loading
    }
}

impl<T> ListState<T> {
    /// Collapses a fetch result into a terminal state.
    pub fn from_result(kind: ListKind, result: CatalogResult<Vec<T>>) -> Self {
        match result {
            Ok(items) => ListState::Loaded(items),
            Err(err) => {
                if err.is_fetch_error() {
                    warn!(list = kind.noun(), error = %err, "List fetch failed");
                } else {
                    error!(list = kind.noun(), error = %err, "List fetch misconfigured");
                }
                ListState::Failed(CatalogError::user_message(kind))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    /// Loaded items, or `None` while loading or after a failure.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            ListState::Loaded(items) => Some(items),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ListState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: ListState<u32> = ListState::default();
        assert!(state.is_loading());
        assert!(state.items().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_success_becomes_loaded() {
        let state = ListState::from_result(ListKind::Products, Ok(vec![1, 2, 3]));
        assert_eq!(state.items(), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn test_empty_success_is_not_an_error() {
        let state: ListState<u32> = ListState::from_result(ListKind::Employees, Ok(vec![]));
        assert_eq!(state, ListState::Loaded(vec![]));
    }

    #[test]
    fn test_any_failure_collapses_to_generic_message() {
        let refused: ListState<u32> = ListState::from_result(
            ListKind::Products,
            Err(CatalogError::RequestFailed {
                url: "http://x/products".into(),
                reason: "connection refused".into(),
            }),
        );
        let bad_body: ListState<u32> = ListState::from_result(
            ListKind::Products,
            Err(CatalogError::DecodeFailed {
                url: "http://x/products".into(),
                reason: "expected value".into(),
            }),
        );

        assert_eq!(refused, bad_body);
        assert_eq!(
            refused.error(),
            Some("Error fetching products. Please try again later.")
        );
    }

    #[test]
    fn test_config_failure_shows_same_message() {
        let state: ListState<u32> =
            ListState::from_result(ListKind::Products, Err(CatalogError::InvalidUrl("x".into())));
        assert_eq!(
            state.error(),
            Some("Error fetching products. Please try again later.")
        );
    }

    #[test]
    fn test_employee_failure_names_employees() {
        let state: ListState<u32> = ListState::from_result(
            ListKind::Employees,
            Err(CatalogError::HttpStatus {
                url: "http://x/users".into(),
                status: 502,
            }),
        );
        assert_eq!(
            state.error(),
            Some("Error fetching employees. Please try again later.")
        );
    }
}
