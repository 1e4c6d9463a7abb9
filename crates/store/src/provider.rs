//! Catalog loading with an explicit degrade-gracefully policy.
//!
//! The calculator must stay usable when the live store is unreachable, so
//! the provider owns the fallback decision instead of hiding it in a branch
//! at the call site. Both paths are independently testable.

use std::sync::Arc;

use sitequote_catalog::{Catalog, CatalogKind, default_catalog};

use crate::error::StoreError;
use crate::traits::CatalogStore;

/// Where a loaded snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fresh read from the live store.
    Live,
    /// The live store failed; this is the hardcoded default snapshot.
    Fallback,
}

impl CatalogSource {
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogSource::Live => "live",
            CatalogSource::Fallback => "fallback",
        }
    }
}

pub struct CatalogProvider {
    store: Arc<dyn CatalogStore>,
    default: Catalog,
}

impl CatalogProvider {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            store,
            default: default_catalog(),
        }
    }

    /// Override the fallback snapshot (tests, staging seeds).
    pub fn with_default(mut self, default: Catalog) -> Self {
        self.default = default;
        self
    }

    /// Load a snapshot of all four collections.
    ///
    /// Any store failure degrades to the default snapshot; the error is
    /// logged, not propagated, and the source is reported to the caller.
    pub async fn load(&self) -> (Catalog, CatalogSource) {
        match self.load_live().await {
            Ok(catalog) => (catalog, CatalogSource::Live),
            Err(err) => {
                tracing::warn!(error = %err, "catalog load failed; serving default catalog");
                (self.default.clone(), CatalogSource::Fallback)
            }
        }
    }

    async fn load_live(&self) -> Result<Catalog, StoreError> {
        let website_types = self.store.list(CatalogKind::WebsiteType).await?;
        let page_types = self.store.list(CatalogKind::PageType).await?;
        let payment_systems = self.store.list(CatalogKind::PaymentSystem).await?;
        let pro_services = self.store.list(CatalogKind::ProService).await?;
        Ok(Catalog::new(
            website_types,
            page_types,
            payment_systems,
            pro_services,
        ))
    }
}
