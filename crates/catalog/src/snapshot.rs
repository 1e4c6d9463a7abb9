use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use sitequote_core::EntryId;

use crate::entry::{CatalogEntry, CatalogKind};

/// Immutable snapshot of the full catalog, as loaded from the store.
///
/// Pricing functions take `&Catalog`; nothing mutates a snapshot after
/// construction. Admin edits land in the store and are only visible to the
/// next `load` (stale reads during an edit are accepted).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub website_types: Vec<CatalogEntry>,
    pub page_types: Vec<CatalogEntry>,
    pub payment_systems: Vec<CatalogEntry>,
    pub pro_services: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a snapshot, name-ordering each list the way the store does.
    pub fn new(
        website_types: Vec<CatalogEntry>,
        page_types: Vec<CatalogEntry>,
        payment_systems: Vec<CatalogEntry>,
        pro_services: Vec<CatalogEntry>,
    ) -> Self {
        let mut catalog = Self {
            website_types,
            page_types,
            payment_systems,
            pro_services,
        };
        for list in [
            &mut catalog.website_types,
            &mut catalog.page_types,
            &mut catalog.payment_systems,
            &mut catalog.pro_services,
        ] {
            list.sort_by(|a, b| a.name.cmp(&b.name));
        }
        catalog
    }

    pub fn entries(&self, kind: CatalogKind) -> &[CatalogEntry] {
        match kind {
            CatalogKind::WebsiteType => &self.website_types,
            CatalogKind::PageType => &self.page_types,
            CatalogKind::PaymentSystem => &self.payment_systems,
            CatalogKind::ProService => &self.pro_services,
        }
    }

    pub fn find(&self, kind: CatalogKind, id: &EntryId) -> Option<&CatalogEntry> {
        self.entries(kind).iter().find(|e| &e.id == id)
    }

    pub fn website_type(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.find(CatalogKind::WebsiteType, id)
    }

    pub fn page_type(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.find(CatalogKind::PageType, id)
    }

    pub fn payment_system(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.find(CatalogKind::PaymentSystem, id)
    }

    pub fn pro_service(&self, id: &EntryId) -> Option<&CatalogEntry> {
        self.find(CatalogKind::ProService, id)
    }

    /// Page ids bundled into the given website type's base price.
    ///
    /// Empty set when the id is `None` or not in the snapshot, so callers can
    /// treat "no website type selected" and "type since deleted" uniformly.
    pub fn included_pages(&self, website_type: Option<&EntryId>) -> BTreeSet<EntryId> {
        website_type
            .and_then(|id| self.website_type(id))
            .map(|e| e.included_page_ids.clone())
            .unwrap_or_default()
    }
}
