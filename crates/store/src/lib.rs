//! Persistence boundary: document-store collaborators.
//!
//! The engine and the API only ever see the traits in [`traits`]; concrete
//! backends are the hosted document store ([`firestore`]) and an in-memory
//! implementation for tests and development ([`memory`]). Untyped documents
//! are coerced into typed records at this boundary so the domain crates never
//! handle loose JSON.

pub mod error;
pub mod firestore;
pub mod memory;
pub mod provider;
pub mod records;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use firestore::FirestoreStore;
pub use memory::MemoryStore;
pub use provider::{CatalogProvider, CatalogSource};
pub use records::PersistedQuote;
pub use traits::{ApplicationStore, CatalogStore, QuoteStore};
