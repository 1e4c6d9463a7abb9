//! Quote Engine domain module.
//!
//! This crate contains the price-estimation business rules, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage): the
//! session `Selection` state and its normalization rules, the itemized total,
//! and construction of the immutable `Quote` handed to the store.

pub mod engine;
pub mod quote;
pub mod selection;

pub use engine::{FLAT_EXTRA_PAGE_PRICE, total};
pub use quote::{Quote, QuoteItem, QuoteLine, build_quote};
pub use selection::{CustomPage, MAX_EXTRA_PAGES, Selection};
