//! # Root Controller
//!
//! Owns every piece of mutable state and publishes immutable snapshots.
//!
//! ## Dispatch Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Unidirectional Dispatch                          │
//! │                                                                         │
//! │   command ──► AppState::edit / submit / add_to_cart / logout            │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │              ┌─────────────────────┐                                    │
//! │              │ Mutex<Inner>        │                                    │
//! │              │  gate               │                                    │
//! │              │  products: ListState│◄──── fetch task (session-checked)  │
//! │              │  employees:ListState│◄──── fetch task (session-checked)  │
//! │              │  cart               │                                    │
//! │              └─────────┬───────────┘                                    │
//! │                        │ snapshot()                                     │
//! │                        ▼                                                │
//! │              watch::Sender<AppSnapshot> ──► renderer                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each mutation publishes while still holding the lock, so subscribers
//! always see snapshots in mutation order.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

use registro_catalog::{CatalogSource, ListState};
use registro_core::{
    CoreError, Employee, FormField, GateSnapshot, ListKind, Product, Session, SessionGate,
    SubmitOutcome,
};

use super::cart::Cart;
use crate::error::AppResult;

// =============================================================================
// Snapshot
// =============================================================================

/// Everything the renderer needs, by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSnapshot {
    pub gate: GateSnapshot,
    pub products: ListState<Product>,
    pub employees: ListState<Employee>,
    pub cart: Cart,
}

impl AppSnapshot {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.gate, GateSnapshot::Catalog { .. })
    }
}

// =============================================================================
// Inner State
// =============================================================================

#[derive(Debug, Default)]
struct Inner {
    gate: SessionGate,
    products: ListState<Product>,
    employees: ListState<Employee>,
    cart: Cart,
}

impl Inner {
    fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            gate: self.gate.snapshot(),
            products: self.products.clone(),
            employees: self.employees.clone(),
            cart: self.cart.clone(),
        }
    }

    fn session_id(&self) -> Option<Uuid> {
        self.gate.session().map(|s| s.id)
    }

    fn reset_catalog(&mut self) {
        self.products = ListState::Loading;
        self.employees = ListState::Loading;
        self.cart.clear();
    }
}

// =============================================================================
// App State
// =============================================================================

/// The single root controller.
///
/// Cloning is cheap and every clone drives the same state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Mutex<Inner>>,
    snapshots: Arc<watch::Sender<AppSnapshot>>,
    source: Arc<dyn CatalogSource>,
}

impl AppState {
    /// Starts on the registration screen.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let inner = Inner::default();
        let (tx, _rx) = watch::channel(inner.snapshot());

        AppState {
            inner: Arc::new(Mutex::new(inner)),
            snapshots: Arc::new(tx),
            source,
        }
    }

    /// Receiver that sees every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<AppSnapshot> {
        self.snapshots.subscribe()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> AppSnapshot {
        self.snapshots.borrow().clone()
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Edits a form field.
    pub fn edit(&self, field: FormField, value: impl Into<String>) -> AppResult<()> {
        self.mutate(|inner| inner.gate.edit(field, value).map_err(Into::into))
    }

    /// Submits the form. An accepted submit starts a session and kicks off
    /// one fetch per visible list.
    pub fn submit(&self) -> AppResult<SubmitOutcome> {
        let (outcome, email, lists) = self.mutate(|inner| {
            let email = match &inner.gate {
                SessionGate::Unauthenticated(form) => form.fields().email.clone(),
                SessionGate::Authenticated(_) => String::new(),
            };
            let outcome = inner.gate.submit()?;
            if matches!(outcome, SubmitOutcome::Accepted(_)) {
                inner.reset_catalog();
            }
            Ok((outcome, email, inner.gate.visible_lists()))
        })?;

        match &outcome {
            SubmitOutcome::Accepted(session) => {
                info!(
                    session_id = %session.id,
                    is_employee_role = session.is_employee_role,
                    email = %email,
                    "Registration accepted"
                );
                for kind in lists {
                    self.spawn_fetch(session.id, kind);
                }
            }
            SubmitOutcome::Rejected(errors) => {
                debug!(?errors, "Registration rejected");
            }
        }

        Ok(outcome)
    }

    /// Ends the session. Lists and cart are discarded.
    pub fn logout(&self) -> Option<Session> {
        let ended = self.mutate_infallible(|inner| {
            let ended = inner.gate.logout();
            if ended.is_some() {
                inner.reset_catalog();
            }
            ended
        });

        if let Some(session) = &ended {
            info!(session_id = %session.id, "Session ended");
        }
        ended
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Adds a loaded product to the cart.
    ///
    /// ## Errors
    /// - `NotAuthenticated` on the registration screen
    /// - `ProductNotFound` if the id is not in the loaded product list
    ///   (including while the list is still loading)
    pub fn add_to_cart(&self, product_id: i64, quantity: i64) -> AppResult<()> {
        self.mutate(|inner| {
            require_session(inner)?;
            let product = inner
                .products
                .items()
                .and_then(|items| items.iter().find(|p| p.id == product_id))
                .cloned()
                .ok_or(CoreError::ProductNotFound(product_id))?;

            inner.cart.add_item(&product, quantity)?;
            debug!(product_id, quantity, "Added to cart");
            Ok(())
        })
    }

    pub fn remove_from_cart(&self, product_id: i64) -> AppResult<()> {
        self.mutate(|inner| {
            require_session(inner)?;
            inner.cart.remove_item(product_id)?;
            Ok(())
        })
    }

    pub fn clear_cart(&self) -> AppResult<()> {
        self.mutate(|inner| {
            require_session(inner)?;
            inner.cart.clear();
            Ok(())
        })
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> AppResult<Cart> {
        let inner = self.lock();
        require_session(&inner)?;
        Ok(inner.cart.clone())
    }

    // -------------------------------------------------------------------------
    // Fetching
    // -------------------------------------------------------------------------

    fn spawn_fetch(&self, session_id: Uuid, kind: ListKind) {
        let state = self.clone();
        tokio::spawn(async move {
            match kind {
                ListKind::Products => {
                    let result = state.source.fetch_products().await;
                    state.apply_fetch(session_id, kind, move |inner| {
                        inner.products = ListState::from_result(kind, result);
                    });
                }
                ListKind::Employees => {
                    let result = state.source.fetch_employees().await;
                    state.apply_fetch(session_id, kind, move |inner| {
                        inner.employees = ListState::from_result(kind, result);
                    });
                }
            }
        });
    }

    /// Applies a fetch result only if its session is still the active one.
    fn apply_fetch(&self, session_id: Uuid, kind: ListKind, apply: impl FnOnce(&mut Inner)) {
        let mut inner = self.lock();
        if inner.session_id() != Some(session_id) {
            debug!(%session_id, list = kind.noun(), "Discarding result for ended session");
            return;
        }

        apply(&mut inner);
        self.snapshots.send_replace(inner.snapshot());
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Runs a mutation and publishes the result, success or not.
    fn mutate<R>(&self, f: impl FnOnce(&mut Inner) -> AppResult<R>) -> AppResult<R> {
        let mut inner = self.lock();
        let result = f(&mut inner);
        self.snapshots.send_replace(inner.snapshot());
        result
    }

    fn mutate_infallible<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> R {
        let mut inner = self.lock();
        let result = f(&mut inner);
        self.snapshots.send_replace(inner.snapshot());
        result
    }
}

fn require_session(inner: &Inner) -> Result<(), CoreError> {
    match inner.gate.session() {
        Some(_) => Ok(()),
        None => Err(CoreError::NotAuthenticated),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
