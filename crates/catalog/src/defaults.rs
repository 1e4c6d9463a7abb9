//! Hardcoded default catalog.
//!
//! Used when the live catalog store is unreachable: the calculator must stay
//! usable, so the provider falls back to this snapshot instead of erroring.
//! Prices are in the minor currency unit.

use crate::entry::CatalogEntry;
use crate::snapshot::Catalog;

/// The built-in offering list (mirrors the seeded store content).
pub fn default_catalog() -> Catalog {
    Catalog::new(
        vec![
            CatalogEntry::new("basic", "Basic Company", 7000),
            CatalogEntry::new("ecommerce", "E-commerce website", 20000),
            CatalogEntry::new("realestate", "Real Estate website", 25000),
            CatalogEntry::new("mobile", "Mobile App", 40000),
        ],
        vec![
            CatalogEntry::new("about", "About Us", 1000),
            CatalogEntry::new("contact", "Contact Us", 1000),
            CatalogEntry::new("service", "Service Page", 1000),
        ],
        vec![
            CatalogEntry::new("chapa", "Chapa", 10000),
            CatalogEntry::new("telebirr", "Tele Birr", 10000),
            CatalogEntry::new("international", "International Payment Gateway", 10000),
        ],
        vec![
            CatalogEntry::new("seo", "SEO (Search Engine Optimization)", 4000),
            CatalogEntry::new("analytics", "Google Analytics", 3000),
            CatalogEntry::new("content", "Website Content Creation", 2000),
            CatalogEntry::new("blog", "Blog Platform", 3000),
            CatalogEntry::new("membership", "Membership", 2500),
            CatalogEntry::new("booking", "Booking", 5000),
            CatalogEntry::new("multivendor", "Multi Vendor for E-commerce", 4000),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_all_four_kinds_populated() {
        let catalog = default_catalog();
        assert_eq!(catalog.website_types.len(), 4);
        assert_eq!(catalog.page_types.len(), 3);
        assert_eq!(catalog.payment_systems.len(), 3);
        assert_eq!(catalog.pro_services.len(), 7);
    }

    #[test]
    fn default_website_types_bundle_no_pages() {
        let catalog = default_catalog();
        assert!(catalog.website_types.iter().all(|t| t.included_page_ids.is_empty()));
    }
}
