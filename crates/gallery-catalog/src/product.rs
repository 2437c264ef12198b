//! Product and stock status types.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::Money;

/// Binary availability of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// Whether the product can be added to the cart.
    pub fn is_in_stock(&self) -> bool {
        matches!(self, StockStatus::InStock)
    }

    /// Text shown on the card badge.
    pub fn badge_label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Text shown on the card's action button.
    pub fn action_label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "Add to Cart",
            StockStatus::OutOfStock => "Sold Out",
        }
    }
}

impl From<bool> for StockStatus {
    fn from(in_stock: bool) -> Self {
        if in_stock {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }
}

/// A sellable item shown as one card in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Render key, unique within a catalog.
    pub id: ProductId,
    /// Display name, also used as the image alt text.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Free-form description, displayed verbatim.
    pub description: String,
    /// Image URL. Not validated.
    pub image: String,
    /// Availability flag.
    pub in_stock: bool,
}

impl Product {
    /// Create a product from a decimal price.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        image: impl Into<String>,
        in_stock: bool,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            id: id.into(),
            name: name.into(),
            price: Money::from_decimal(price)?,
            description: description.into(),
            image: image.into(),
            in_stock,
        })
    }

    /// Availability as a status value.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from(self.in_stock)
    }
}
