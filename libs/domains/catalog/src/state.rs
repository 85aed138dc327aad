//! Shared state injected into the catalog routers

use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::ids::{IdGenerator, TimeOrderedIds};
use crate::store::Catalog;

/// Handle to the catalog and the identifier generator.
///
/// Cloning is cheap; all clones point at the same catalog. Read-only routes
/// take the read lock, mutating routes take the write lock, and both keep it
/// for the whole request.
#[derive(Clone)]
pub struct CatalogState {
    catalog: Arc<RwLock<Catalog>>,
    ids: Arc<dyn IdGenerator>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_ids(catalog, TimeOrderedIds)
    }

    pub fn with_ids(catalog: Catalog, ids: impl IdGenerator + 'static) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            ids: Arc::new(ids),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().await
    }

    pub fn generate_id(&self) -> String {
        self.ids.generate_id()
    }
}

