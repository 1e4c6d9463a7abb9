//! Itemized total computation.
//!
//! Pure function over a catalog snapshot and a selection; integer arithmetic
//! only (prices are whole minor-currency units, never floating point).

use sitequote_catalog::Catalog;

use crate::selection::Selection;

/// Flat rate charged per generic extra page, in minor currency units.
pub const FLAT_EXTRA_PAGE_PRICE: u64 = 1000;

/// Compute the quote total for the current selection.
///
/// Sum of: base website-type price (0 if unset), prices of selected pages not
/// bundled into the chosen type, `extra_page_count * FLAT_EXTRA_PAGE_PRICE`,
/// selected payment systems, and enabled pro services. Selected ids missing
/// from the snapshot contribute nothing (the catalog may have been edited
/// since the selection was made). Admin-entered prices are unbounded, so the
/// sum saturates at `u64::MAX` rather than wrapping.
pub fn total(catalog: &Catalog, selection: &Selection) -> u64 {
    let mut sum = 0u64;

    let included = catalog.included_pages(selection.website_type());

    if let Some(id) = selection.website_type() {
        if let Some(website_type) = catalog.website_type(id) {
            sum = sum.saturating_add(website_type.price);
        }
    }

    for page_id in selection.selected_pages() {
        if included.contains(page_id) {
            continue;
        }
        if let Some(page) = catalog.page_type(page_id) {
            sum = sum.saturating_add(page.price);
        }
    }

    sum = sum.saturating_add(
        u64::from(selection.extra_page_count()).saturating_mul(FLAT_EXTRA_PAGE_PRICE),
    );

    for payment_id in selection.selected_payments() {
        if let Some(payment) = catalog.payment_system(payment_id) {
            sum = sum.saturating_add(payment.price);
        }
    }

    for service_id in selection.selected_services() {
        if let Some(service) = catalog.pro_service(service_id) {
            sum = sum.saturating_add(service.price);
        }
    }

    sum
}
