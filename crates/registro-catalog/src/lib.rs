//! # registro-catalog: Remote Collections for Registro
//!
//! Fetches the product and staff collections and tracks their load state.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         registro-catalog                                │
//! │                                                                         │
//! │  ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐    │
//! │  │ RegistroConfig  │───►│  CatalogClient   │───►│  ListState<T>   │    │
//! │  │ (config.rs)     │    │  (client.rs)     │    │  (list.rs)      │    │
//! │  │                 │    │                  │    │                 │    │
//! │  │ api base URL    │    │ impl             │    │ Loading         │    │
//! │  │ paths, timeout  │    │  CatalogSource   │    │ Failed(msg)     │    │
//! │  │ skeleton cards  │    │                  │    │ Loaded(items)   │    │
//! │  └─────────────────┘    └──────────────────┘    └─────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use registro_catalog::{CatalogClient, CatalogSource, ListState, RegistroConfig};
//! use registro_core::ListKind;
//!
//! let config = RegistroConfig::load_or_default(None);
//! let client = CatalogClient::from_settings(config.api.clone())?;
//!
//! let products = ListState::from_result(ListKind::Products, client.fetch_products().await);
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod list;

pub use client::{CatalogClient, CatalogSource};
pub use config::{ApiSettings, DisplaySettings, RegistroConfig};
pub use error::{CatalogError, CatalogResult};
pub use list::ListState;
