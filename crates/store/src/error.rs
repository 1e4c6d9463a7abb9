//! Store boundary error model.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure at the persistence boundary.
///
/// Every collaborator failure is converted into one of these at the boundary;
/// nothing below this layer panics or retries. Callers decide whether to
/// surface the error (submissions) or degrade to defaults (catalog loads).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure reaching the store.
    #[error("store request failed: {0}")]
    Http(String),

    /// The store answered with a non-success status.
    #[error("store rejected request ({status}): {message}")]
    Backend { status: u16, message: String },

    /// A document could not be coerced into its typed record.
    #[error("malformed document: {0}")]
    Decode(String),

    /// The addressed document does not exist.
    #[error("document not found")]
    NotFound,
}

impl StoreError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Http(err.to_string())
    }
}
