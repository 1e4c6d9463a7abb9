//! Collaborator traits consumed by the API layer.
//!
//! Implementations perform exactly one attempt per invocation: no retries,
//! no queueing. A failed write is reported and otherwise lost; the caller
//! may rebuild and resubmit.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use sitequote_applications::{Application, ApplicationStatus, NewApplication};
use sitequote_catalog::{CatalogEntry, CatalogKind, EntryPatch, NewEntry};
use sitequote_core::{ApplicationId, EntryId, QuoteId};
use sitequote_pricing::Quote;

use crate::error::StoreResult;
use crate::records::PersistedQuote;

/// Read/write access to the four catalog collections.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// List all entries of a kind, ordered by name.
    async fn list(&self, kind: CatalogKind) -> StoreResult<Vec<CatalogEntry>>;

    /// Create an entry; the store assigns and returns the id.
    async fn create(&self, kind: CatalogKind, entry: &NewEntry) -> StoreResult<EntryId>;

    /// Apply a partial update to an existing entry.
    async fn update(&self, kind: CatalogKind, id: &EntryId, patch: &EntryPatch) -> StoreResult<()>;

    async fn delete(&self, kind: CatalogKind, id: &EntryId) -> StoreResult<()>;
}

/// Write path for quote submissions plus the admin read path.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Persist a quote. The store assigns `createdAt` and the initial
    /// `"pending"` status.
    async fn save_quote(&self, quote: &Quote) -> StoreResult<QuoteId>;

    /// All persisted quotes, newest first.
    async fn list_quotes(&self) -> StoreResult<Vec<PersistedQuote>>;
}

/// Career-page application persistence.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn save_application(
        &self,
        application: &NewApplication,
        submitted_at: DateTime<Utc>,
    ) -> StoreResult<ApplicationId>;

    /// All applications, newest first.
    async fn list_applications(&self) -> StoreResult<Vec<Application>>;

    async fn set_application_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> StoreResult<()>;
}
