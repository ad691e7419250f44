//! # Session Gate
//!
//! The top-level switch between the registration screen and the catalog.
//!
//! ## Gate States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Session Gate                                    │
//! │                                                                         │
//! │   ┌──────────────────────┐   submit() accepted   ┌──────────────────┐  │
//! │   │   Unauthenticated    │ ────────────────────► │  Authenticated   │  │
//! │   │                      │                       │                  │  │
//! │   │  RegistrationForm    │ ◄──────────────────── │  Session         │  │
//! │   └──────────────────────┘   logout()            └──────────────────┘  │
//! │                              (fresh empty form)                         │
//! │                                                                         │
//! │   Authenticated views:                                                  │
//! │     employee session  →  [Employees, Products]                          │
//! │     everyone else     →  [Products]                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The gate is owned by exactly one root controller. Nothing in here is
//! global; the session travels by value out of [`SessionGate::submit`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::form::{FormField, FormSnapshot, RegistrationForm, SubmitOutcome};

// =============================================================================
// Session
// =============================================================================

/// An authenticated session, created by an accepted submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Random id used to correlate logs and to spot stale fetch results.
    pub id: Uuid,

    /// True when the registrant's email ended with the staff suffix.
    pub is_employee_role: bool,

    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Starts a new session.
    pub fn start(is_employee_role: bool) -> Self {
        Session {
            id: Uuid::new_v4(),
            is_employee_role,
            started_at: Utc::now(),
        }
    }
}

/// The two flags the rest of the app cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub is_employee_role: bool,
}

// =============================================================================
// List Kinds
// =============================================================================

/// The remote collections an authenticated session can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Products,
    Employees,
}

impl ListKind {
    /// Section heading.
    pub fn title(&self) -> &'static str {
        match self {
            ListKind::Products => "Lista de productos",
            ListKind::Employees => "Lista de usuarios",
        }
    }

    /// Plural noun used in the fetch failure message.
    pub fn noun(&self) -> &'static str {
        match self {
            ListKind::Products => "products",
            ListKind::Employees => "employees",
        }
    }
}

// =============================================================================
// Gate
// =============================================================================

/// Unauthenticated / authenticated switch.
#[derive(Debug, Clone)]
pub enum SessionGate {
    Unauthenticated(RegistrationForm),
    Authenticated(Session),
}

impl Default for SessionGate {
    fn default() -> Self {
        SessionGate::Unauthenticated(RegistrationForm::new())
    }
}

impl SessionGate {
    /// Starts unauthenticated, with an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Edits a form field.
    ///
    /// ## Errors
    /// `AlreadyAuthenticated` while a session is active.
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) -> CoreResult<()> {
        match self {
            SessionGate::Unauthenticated(form) => {
                form.edit(field, value);
                Ok(())
            }
            SessionGate::Authenticated(_) => Err(CoreError::AlreadyAuthenticated),
        }
    }

    /// Submits the form. On acceptance the gate flips to authenticated.
    ///
    /// ## Errors
    /// `AlreadyAuthenticated` while a session is active.
    pub fn submit(&mut self) -> CoreResult<SubmitOutcome> {
        let SessionGate::Unauthenticated(form) = self else {
            return Err(CoreError::AlreadyAuthenticated);
        };

        let outcome = form.submit();
        if let SubmitOutcome::Accepted(session) = &outcome {
            *self = SessionGate::Authenticated(session.clone());
        }
        Ok(outcome)
    }

    /// Ends the session and shows a fresh, empty form.
    ///
    /// Returns the session that ended, or `None` if there was none. No
    /// confirmation and no undo.
    pub fn logout(&mut self) -> Option<Session> {
        match std::mem::take(self) {
            SessionGate::Authenticated(session) => Some(session),
            unauthenticated => {
                *self = unauthenticated;
                None
            }
        }
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionGate::Authenticated(session) => Some(session),
            SessionGate::Unauthenticated(_) => None,
        }
    }

    pub fn session_state(&self) -> SessionState {
        match self {
            SessionGate::Authenticated(session) => SessionState {
                is_authenticated: true,
                is_employee_role: session.is_employee_role,
            },
            SessionGate::Unauthenticated(_) => SessionState::default(),
        }
    }

    /// Lists to show, top to bottom.
    pub fn visible_lists(&self) -> Vec<ListKind> {
        match self.session() {
            Some(session) if session.is_employee_role => {
                vec![ListKind::Employees, ListKind::Products]
            }
            Some(_) => vec![ListKind::Products],
            None => Vec::new(),
        }
    }

    /// Immutable view of the gate for rendering.
    pub fn snapshot(&self) -> GateSnapshot {
        match self {
            SessionGate::Unauthenticated(form) => GateSnapshot::Registration(form.snapshot()),
            SessionGate::Authenticated(session) => GateSnapshot::Catalog {
                session_id: session.id,
                state: self.session_state(),
                lists: self.visible_lists(),
            },
        }
    }
}

/// Rendering snapshot of the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum GateSnapshot {
    Registration(FormSnapshot),
    Catalog {
        session_id: Uuid,
        state: SessionState,
        lists: Vec<ListKind>,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================
