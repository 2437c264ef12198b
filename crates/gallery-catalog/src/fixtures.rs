//! Seeded product fixture shown by the gallery.

use crate::catalog::Catalog;
use crate::ids::ProductId;
use crate::money::Money;
use crate::product::Product;

/// A literal product record.
#[derive(Debug, Clone, Copy)]
pub struct SeedProduct {
    pub id: u32,
    pub name: &'static str,
    pub price: Money,
    pub description: &'static str,
    pub image: &'static str,
    pub in_stock: bool,
}

impl SeedProduct {
    /// Convert into an owned product.
    pub fn to_product(&self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name.to_string(),
            price: self.price,
            description: self.description.to_string(),
            image: self.image.to_string(),
            in_stock: self.in_stock,
        }
    }
}

/// The three products of the gallery, in display order.
pub const SEED_PRODUCTS: [SeedProduct; 3] = [
    SeedProduct {
        id: 1,
        name: "Wireless Headphones",
        price: Money::from_cents(19950),
        description: "Premium noise-cancelling headphones with 20h battery life.",
        image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500",
        in_stock: true,
    },
    SeedProduct {
        id: 2,
        name: "Smart Watch",
        price: Money::from_cents(29900),
        description: "Track your fitness and stay connected on the go.",
        image: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500",
        in_stock: false,
    },
    SeedProduct {
        id: 3,
        name: "Running Shoes",
        price: Money::from_cents(8999),
        description: "Lightweight mesh shoes perfect for long distance running.",
        image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=500",
        in_stock: true,
    },
];

/// Build the seeded catalog.
pub fn seed_catalog() -> Catalog {
    // Ids in SEED_PRODUCTS are distinct.
    Catalog {
        products: SEED_PRODUCTS.iter().map(SeedProduct::to_product).collect(),
    }
}
