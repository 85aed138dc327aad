//! Catalog Domain
//!
//! In-memory products and categories served over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, one router per resource family
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Chain    │  ← Validation and lookup steps run before each handler
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Products and categories, owned by one Catalog
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Records
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{handlers, Catalog, CatalogState};
//!
//! let state = CatalogState::new(Catalog::new(vec![], vec![]));
//! let router: axum::Router = handlers::router(state);
//! ```

pub mod chain;
pub mod error;
pub mod handlers;
pub mod ids;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use chain::{Flow, RequestContext, Step};
pub use error::{CatalogError, CatalogResult};
pub use ids::{IdGenerator, SequentialIds, TimeOrderedIds, ID_LENGTH};
pub use models::{Category, CollectionKind, Product, Record};
pub use state::CatalogState;
pub use store::{Catalog, Collection};
