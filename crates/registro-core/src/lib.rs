//! # registro-core: Pure Registration Logic
//!
//! This crate holds every rule behind the registration gate as pure,
//! deterministic code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Registro Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal front-end (apps/terminal)              │   │
//! │  │    Form screen ──► submit ──► Catalog screen ──► logout         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ registro-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │  │   form    │  │   gate    │  │   types   │  │   │
//! │  │   │  email    │  │ Editing   │  │  Unauth   │  │  Product  │  │   │
//! │  │   │  age      │  │ Rejected  │  │  Auth     │  │  Employee │  │   │
//! │  │   │  code     │  │ Accepted  │  │  logout   │  │  Money    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              registro-catalog (Network Layer)                   │   │
//! │  │          HTTP fetch of products / users, list states            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - Field rules (email pattern, age range, employee code)
//! - [`form`] - Registration form state machine
//! - [`gate`] - Session gate (unauthenticated / authenticated switch)
//! - [`types`] - Remote records (Product, Employee)
//! - [`money`] - Integer-cent money type
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use registro_core::form::{FormField, SubmitOutcome};
//! use registro_core::gate::SessionGate;
//!
//! let mut gate = SessionGate::new();
//! gate.edit(FormField::Email, "ana@umg.com").unwrap();
//! gate.edit(FormField::Age, "25").unwrap();
//! gate.edit(FormField::EmployeeCode, "AB1234").unwrap();
//!
//! match gate.submit().unwrap() {
//!     SubmitOutcome::Accepted(session) => assert!(session.is_employee_role),
//!     SubmitOutcome::Rejected(errors) => panic!("unexpected: {:?}", errors),
//! }
//! assert!(gate.session_state().is_authenticated);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod form;
pub mod gate;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use form::{FieldErrors, FormField, FormFields, FormSnapshot, FormStatus, RegistrationForm, SubmitOutcome};
pub use gate::{GateSnapshot, ListKind, Session, SessionGate, SessionState};
pub use money::Money;
pub use types::{Category, Employee, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lowest age accepted as a number at all.
pub const MIN_AGE: i64 = 1;

/// Highest age accepted as a number at all.
pub const MAX_AGE: i64 = 120;

/// Minimum age required to register.
pub const ADULT_AGE: i64 = 18;

/// Exact length of an employee code.
pub const EMPLOYEE_CODE_LEN: usize = 6;

/// Email suffix that marks a registrant as staff.
///
/// This is a plain `ends_with` test, so `someone@notumg.com` also matches.
/// Known coarse behavior; kept as is.
pub const EMPLOYEE_DOMAIN_SUFFIX: &str = "umg.com";

/// Maximum distinct products in a cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single product in a cart.
pub const MAX_ITEM_QUANTITY: i64 = 99;
