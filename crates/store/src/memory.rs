//! In-memory store for tests and development.
//!
//! Backs all three collaborator traits with `RwLock`ed maps. Server-assigned
//! fields (`id`, `createdAt`, `status`) follow the same rules as the hosted
//! document store so API behavior is identical in dev mode.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use sitequote_applications::{Application, ApplicationStatus, NewApplication};
use sitequote_catalog::{Catalog, CatalogEntry, CatalogKind, EntryPatch, NewEntry};
use sitequote_core::{ApplicationId, EntryId, QuoteId};
use sitequote_pricing::Quote;

use crate::error::{StoreError, StoreResult};
use crate::records::PersistedQuote;
use crate::traits::{ApplicationStore, CatalogStore, QuoteStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    catalog: RwLock<HashMap<(CatalogKind, EntryId), CatalogEntry>>,
    quotes: RwLock<Vec<PersistedQuote>>,
    applications: RwLock<Vec<Application>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the catalog collections from a snapshot (dev mode).
    pub fn seeded(snapshot: &Catalog) -> Self {
        let store = Self::new();
        {
            let mut map = store.catalog.write().unwrap();
            for kind in CatalogKind::ALL {
                for entry in snapshot.entries(kind) {
                    map.insert((kind, entry.id.clone()), entry.clone());
                }
            }
        }
        store
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list(&self, kind: CatalogKind) -> StoreResult<Vec<CatalogEntry>> {
        let map = self.catalog.read().unwrap();
        let mut entries: Vec<CatalogEntry> = map
            .iter()
            .filter_map(|((k, _), v)| (*k == kind).then(|| v.clone()))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn create(&self, kind: CatalogKind, entry: &NewEntry) -> StoreResult<EntryId> {
        let id = EntryId::mint();
        let record = CatalogEntry {
            id: id.clone(),
            name: entry.name.clone(),
            price: entry.price,
            included_page_ids: entry.included_page_ids.clone(),
        };
        self.catalog.write().unwrap().insert((kind, id.clone()), record);
        Ok(id)
    }

    async fn update(&self, kind: CatalogKind, id: &EntryId, patch: &EntryPatch) -> StoreResult<()> {
        let mut map = self.catalog.write().unwrap();
        let entry = map
            .get_mut(&(kind, id.clone()))
            .ok_or(StoreError::NotFound)?;
        patch.apply(entry);
        Ok(())
    }

    async fn delete(&self, kind: CatalogKind, id: &EntryId) -> StoreResult<()> {
        self.catalog
            .write()
            .unwrap()
            .remove(&(kind, id.clone()))
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl QuoteStore for MemoryStore {
    async fn save_quote(&self, quote: &Quote) -> StoreResult<QuoteId> {
        let id = QuoteId::mint();
        let record = PersistedQuote {
            id: id.clone(),
            quote: quote.clone(),
            created_at: Utc::now(),
            status: "pending".to_string(),
        };
        self.quotes.write().unwrap().push(record);
        Ok(id)
    }

    async fn list_quotes(&self) -> StoreResult<Vec<PersistedQuote>> {
        // Insertion order is creation order; newest first.
        let quotes = self.quotes.read().unwrap();
        Ok(quotes.iter().rev().cloned().collect())
    }
}

#[async_trait]
impl ApplicationStore for MemoryStore {
    async fn save_application(
        &self,
        application: &NewApplication,
        submitted_at: DateTime<Utc>,
    ) -> StoreResult<ApplicationId> {
        let id = ApplicationId::mint();
        let record = Application {
            id: id.clone(),
            details: application.clone(),
            submitted_at,
            status: ApplicationStatus::Pending,
        };
        self.applications.write().unwrap().push(record);
        Ok(id)
    }

    async fn list_applications(&self) -> StoreResult<Vec<Application>> {
        let applications = self.applications.read().unwrap();
        Ok(applications.iter().rev().cloned().collect())
    }

    async fn set_application_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> StoreResult<()> {
        let mut applications = self.applications.write().unwrap();
        let record = applications
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or(StoreError::NotFound)?;
        record.status = status;
        Ok(())
    }
}
