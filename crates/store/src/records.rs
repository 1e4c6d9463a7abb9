use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sitequote_core::QuoteId;
use sitequote_pricing::Quote;

/// A quote request as read back from the store for the admin dashboard.
///
/// The store assigns `id`, `createdAt` and the initial `"pending"` status on
/// save; the embedded quote fields are exactly what was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedQuote {
    pub id: QuoteId,
    #[serde(flatten)]
    pub quote: Quote,
    pub created_at: DateTime<Utc>,
    /// Store-assigned review status; `"pending"` on creation.
    pub status: String,
}
