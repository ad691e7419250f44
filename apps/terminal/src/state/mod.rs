//! # State Module
//!
//! Application state for the terminal front-end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  AppState (app.rs)                                              │   │
//! │  │  ┌──────────────┐ ┌──────────────────────┐ ┌──────────────────┐ │   │
//! │  │  │ SessionGate  │ │ ListState<Product>   │ │ Cart (cart.rs)   │ │   │
//! │  │  │ (core)       │ │ ListState<Employee>  │ │                  │ │   │
//! │  │  └──────────────┘ └──────────────────────┘ └──────────────────┘ │   │
//! │  └───────────────────────────────┬─────────────────────────────────┘   │
//! │                                  │ watch                                │
//! │                                  ▼                                      │
//! │                            AppSnapshot                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One controller, one lock. Session and lists change together on submit
//! and logout.

mod app;
mod cart;

pub use app::{AppSnapshot, AppState};
pub use cart::{Cart, CartItem};
