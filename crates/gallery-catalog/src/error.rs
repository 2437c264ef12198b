//! Catalog error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur while building catalog values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Price is negative, NaN or infinite.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// Fixture JSON could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
