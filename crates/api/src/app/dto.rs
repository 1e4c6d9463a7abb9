use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use sitequote_catalog::Catalog;
use sitequote_core::{DomainError, DomainResult, EntryId};
use sitequote_pricing::{CustomPage, MAX_EXTRA_PAGES, Selection};

/// Quote submission body. Every field is optional; an empty body is a valid
/// (zero-priced) submission. Ids that no longer resolve against the catalog
/// are silently excluded downstream rather than rejected here, but the
/// extra-page count is bounded: it sizes an allocation and the persisted
/// document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteSubmissionRequest {
    pub website_type: Option<EntryId>,
    pub selected_pages: BTreeSet<EntryId>,
    pub payment_systems: BTreeSet<EntryId>,
    pub pro_services: BTreeSet<EntryId>,
    pub extra_page_count: u32,
    pub custom_pages: Vec<CustomPage>,
}

impl QuoteSubmissionRequest {
    pub fn validate(&self) -> DomainResult<()> {
        if self.extra_page_count > MAX_EXTRA_PAGES {
            return Err(DomainError::validation(format!(
                "extraPageCount must be at most {MAX_EXTRA_PAGES}"
            )));
        }
        if self.custom_pages.len() > MAX_EXTRA_PAGES as usize {
            return Err(DomainError::validation(format!(
                "customPages must have at most {MAX_EXTRA_PAGES} entries"
            )));
        }
        Ok(())
    }

    pub fn into_selection(self) -> Selection {
        Selection::from_parts(
            self.website_type,
            self.selected_pages,
            self.payment_systems,
            self.pro_services,
            self.extra_page_count,
            self.custom_pages,
        )
    }
}

/// The public catalog payload: the four collections plus where they came
/// from ("live" or "fallback").
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub source: &'static str,
    #[serde(flatten)]
    pub catalog: Catalog,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}
