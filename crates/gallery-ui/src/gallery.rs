//! Gallery container: one card per catalog product.

use gallery_catalog::{seed_catalog, Catalog, Product};
use leptos::prelude::*;

use crate::card::ProductCard;
use crate::styles;

/// Wrapping, centered grid of product cards, keyed by product id.
///
/// Renders the seeded catalog unless another one is passed in.
#[component]
pub fn ProductGallery(#[prop(default = seed_catalog())] catalog: Catalog) -> impl IntoView {
    log::debug!("rendering gallery with {} products", catalog.len());

    view! {
        <div style=styles::APP_CONTAINER>
            <For
                each=move || catalog.products().to_vec()
                key=|product: &Product| product.id
                children=move |product: Product| view! { <ProductCard product=product/> }
            />
        </div>
    }
}
