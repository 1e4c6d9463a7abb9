//! Catalog domain module.
//!
//! The catalog is the set of priced, nameable offerings (website types, page
//! types, payment systems, pro services) used to build a quote. This crate
//! contains the typed records, the immutable snapshot handed to the pricing
//! engine, and the hardcoded defaults used when the live store is down.

pub mod defaults;
pub mod entry;
pub mod snapshot;

pub use defaults::default_catalog;
pub use entry::{CatalogEntry, CatalogKind, EntryPatch, NewEntry};
pub use snapshot::Catalog;
