//! Product catalog types for the product gallery.
//!
//! This crate holds everything the gallery knows about its data:
//!
//! - **Ids**: `ProductId`, the render key of a card
//! - **Money**: cents-based prices with two-digit dollar formatting
//! - **Products**: `Product` and its `StockStatus`
//! - **Catalog**: an ordered, immutable product list plus the seeded fixture
//!
//! # Example
//!
//! ```
//! use gallery_catalog::prelude::*;
//!
//! let catalog = seed_catalog();
//! assert_eq!(catalog.len(), 3);
//!
//! let headphones = &catalog.products()[0];
//! assert_eq!(headphones.price.display(), "$199.50");
//! assert_eq!(headphones.stock_status().badge_label(), "In Stock");
//! ```

pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod ids;
pub mod money;
pub mod product;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use fixtures::{seed_catalog, SeedProduct, SEED_PRODUCTS};
pub use ids::ProductId;
pub use money::Money;
pub use product::{Product, StockStatus};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::error::CatalogError;
    pub use crate::fixtures::seed_catalog;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;
    pub use crate::product::{Product, StockStatus};
}
