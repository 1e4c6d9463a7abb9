use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sitequote_catalog::Catalog;
use sitequote_core::EntryId;

use crate::engine;
use crate::selection::{CustomPage, Selection};

/// A priced line item embedded into a quote (name + price resolved against
/// the catalog snapshot at build time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    pub name: String,
    pub price: u64,
}

/// An unpriced line item (pages bundled into the website type's base price).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    pub name: String,
}

/// The computed, itemized price breakdown for a selection.
///
/// Immutable once built; handed to the store and discarded regardless of
/// outcome (no client-side quote history). Field names follow the persisted
/// record layout consumed by the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub website_type: Option<QuoteLine>,
    pub included_pages: Vec<QuoteItem>,
    pub additional_pages: Vec<QuoteLine>,
    pub custom_additional_pages: Vec<CustomPage>,
    pub payment_systems: Vec<QuoteLine>,
    pub pro_services: Vec<QuoteLine>,
    pub total_price: u64,
    pub submitted_at: DateTime<Utc>,
}

/// Build an immutable quote from the current selection and catalog snapshot.
///
/// Every selected id is resolved against the snapshot to embed name and
/// price; ids no longer in the catalog are silently dropped (entries may
/// have been deleted since the selection was made), matching `total`'s
/// treatment so the embedded lines always sum to `total_price`.
pub fn build_quote(catalog: &Catalog, selection: &Selection, submitted_at: DateTime<Utc>) -> Quote {
    let included = catalog.included_pages(selection.website_type());

    let website_type = selection
        .website_type()
        .and_then(|id| catalog.website_type(id))
        .map(|t| QuoteLine {
            id: Some(t.id.clone()),
            name: t.name.clone(),
            price: t.price,
        });

    let included_pages = included
        .iter()
        .filter_map(|id| catalog.page_type(id))
        .map(|p| QuoteItem {
            id: Some(p.id.clone()),
            name: p.name.clone(),
        })
        .collect();

    let additional_pages = selection
        .selected_pages()
        .iter()
        .filter(|id| !included.contains(*id))
        .filter_map(|id| catalog.page_type(id))
        .map(line)
        .collect();

    let payment_systems = selection
        .selected_payments()
        .iter()
        .filter_map(|id| catalog.payment_system(id))
        .map(line)
        .collect();

    let pro_services = selection
        .selected_services()
        .iter()
        .filter_map(|id| catalog.pro_service(id))
        .map(line)
        .collect();

    Quote {
        website_type,
        included_pages,
        additional_pages,
        custom_additional_pages: selection.custom_pages().to_vec(),
        payment_systems,
        pro_services,
        total_price: engine::total(catalog, selection),
        submitted_at,
    }
}

fn line(entry: &sitequote_catalog::CatalogEntry) -> QuoteLine {
    QuoteLine {
        id: Some(entry.id.clone()),
        name: entry.name.clone(),
        price: entry.price,
    }
}
