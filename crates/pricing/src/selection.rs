use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use sitequote_catalog::Catalog;
use sitequote_core::EntryId;

/// Upper bound on flat-rate extra pages in one selection. The count arrives
/// from untrusted request bodies and drives a `Vec` allocation, so it must
/// stay bounded.
pub const MAX_EXTRA_PAGES: u32 = 100;

/// A user-described custom page (flat-rate, counted not cataloged).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPage {
    pub title: String,
    pub description: String,
}

/// Transient in-session user choices driving quote computation.
///
/// Mutated only through the methods below so two invariants always hold:
/// - every page bundled into the chosen website type is selected and not
///   user-toggleable;
/// - `custom_pages.len()` equals `extra_page_count`, which never exceeds
///   [`MAX_EXTRA_PAGES`] (named page toggles and the positional custom-page
///   sequence are deliberately kept as two distinct collections).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    website_type: Option<EntryId>,
    selected_pages: BTreeSet<EntryId>,
    selected_payments: BTreeSet<EntryId>,
    selected_services: BTreeSet<EntryId>,
    extra_page_count: u32,
    custom_pages: Vec<CustomPage>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reassemble a selection from boundary input (e.g. a submission request).
    ///
    /// The custom-page list is reconciled to `extra_page_count`: preserved by
    /// index, padded with empty entries on growth, truncated on shrink. The
    /// count is clamped to [`MAX_EXTRA_PAGES`]; callers that want to reject
    /// oversized counts instead must validate before constructing.
    pub fn from_parts(
        website_type: Option<EntryId>,
        selected_pages: BTreeSet<EntryId>,
        selected_payments: BTreeSet<EntryId>,
        selected_services: BTreeSet<EntryId>,
        extra_page_count: u32,
        mut custom_pages: Vec<CustomPage>,
    ) -> Self {
        let extra_page_count = extra_page_count.min(MAX_EXTRA_PAGES);
        custom_pages.resize(extra_page_count as usize, CustomPage::default());
        Self {
            website_type,
            selected_pages,
            selected_payments,
            selected_services,
            extra_page_count,
            custom_pages,
        }
    }

    pub fn website_type(&self) -> Option<&EntryId> {
        self.website_type.as_ref()
    }

    /// Manually selected page types (excludes pages bundled by the website
    /// type; those are implied).
    pub fn selected_pages(&self) -> &BTreeSet<EntryId> {
        &self.selected_pages
    }

    pub fn selected_payments(&self) -> &BTreeSet<EntryId> {
        &self.selected_payments
    }

    pub fn selected_services(&self) -> &BTreeSet<EntryId> {
        &self.selected_services
    }

    pub fn extra_page_count(&self) -> u32 {
        self.extra_page_count
    }

    pub fn custom_pages(&self) -> &[CustomPage] {
        &self.custom_pages
    }

    /// Change (or clear) the chosen website type.
    ///
    /// Full replace, not a merge: `selected_pages` becomes exactly the new
    /// type's included set and prior manual page selections are discarded.
    /// Unknown ids behave like "no type chosen" (empty included set).
    pub fn select_website_type(&mut self, catalog: &Catalog, website_type: Option<EntryId>) {
        self.selected_pages = catalog.included_pages(website_type.as_ref());
        self.website_type = website_type;
    }

    /// Flip a page-type toggle. Silently a no-op for pages bundled into the
    /// chosen website type; those are forced on and not user-toggleable.
    pub fn toggle_page(&mut self, catalog: &Catalog, page_id: &EntryId) {
        if catalog.included_pages(self.website_type.as_ref()).contains(page_id) {
            return;
        }
        if !self.selected_pages.remove(page_id) {
            self.selected_pages.insert(page_id.clone());
        }
    }

    pub fn toggle_payment(&mut self, payment_id: &EntryId) {
        if !self.selected_payments.remove(payment_id) {
            self.selected_payments.insert(payment_id.clone());
        }
    }

    pub fn toggle_service(&mut self, service_id: &EntryId) {
        if !self.selected_services.remove(service_id) {
            self.selected_services.insert(service_id.clone());
        }
    }

    /// Set the number of flat-rate extra pages, reconciling the custom-page
    /// descriptions: preserve by index, pad on growth, truncate on shrink.
    /// Counts above [`MAX_EXTRA_PAGES`] are clamped.
    pub fn set_extra_page_count(&mut self, count: u32) {
        let count = count.min(MAX_EXTRA_PAGES);
        self.extra_page_count = count;
        self.custom_pages.resize(count as usize, CustomPage::default());
    }

    /// Edit one custom-page slot. Out-of-range indexes are a no-op.
    pub fn set_custom_page(&mut self, index: usize, page: CustomPage) {
        if let Some(slot) = self.custom_pages.get_mut(index) {
            *slot = page;
        }
    }
}
