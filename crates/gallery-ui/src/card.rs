//! Product card: one product rendered as a self-contained card.

use gallery_catalog::Product;
use leptos::prelude::*;

use crate::notify::{Notifier, NotifierHandle};
use crate::styles;

/// Everything a card displays, derived from one product.
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub name: String,
    pub description: String,
    pub image: String,
    pub alt: String,
    pub badge_label: &'static str,
    pub badge_color: &'static str,
    pub badge_style: String,
    pub price_text: String,
    pub action_label: &'static str,
    pub action_enabled: bool,
    pub action_style: String,
}

impl CardModel {
    pub fn from_product(product: &Product) -> Self {
        let status = product.stock_status();
        let in_stock = status.is_in_stock();

        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            alt: product.name.clone(),
            badge_label: status.badge_label(),
            badge_color: styles::badge_color(in_stock),
            badge_style: styles::badge_style(in_stock),
            price_text: product.price.display(),
            action_label: status.action_label(),
            action_enabled: in_stock,
            action_style: styles::action_style(in_stock),
        }
    }
}

/// Message shown when a product is added to the cart.
pub fn added_message(name: &str) -> String {
    format!("Added {name} to cart!")
}

/// Handle a click on a card's action button.
///
/// Sends one notification and returns `true` for in-stock products. Out of
/// stock products send nothing; their button is disabled anyway.
pub fn add_to_cart(product: &Product, notifier: &dyn Notifier) -> bool {
    if !product.stock_status().is_in_stock() {
        log::debug!("ignoring add to cart for sold out product {}", product.id);
        return false;
    }
    log::debug!("add to cart: product {}", product.id);
    notifier.notify(&added_message(&product.name));
    true
}

/// Notifier a card sends its add-to-cart message to: the one in context, or
/// `BrowserAlert` when the host provided none.
pub fn card_notifier() -> NotifierHandle {
    use_context::<NotifierHandle>().unwrap_or_default()
}

/// Card with badge, image, title, description, price and action button.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let model = CardModel::from_product(&product);
    let notifier = card_notifier();
    let sold_out = !model.action_enabled;

    let on_add = move |_| {
        add_to_cart(&product, &notifier);
    };

    view! {
        <div style=styles::CARD>
            <div style=model.badge_style>{model.badge_label}</div>

            <div style=styles::IMAGE_CONTAINER>
                <img src=model.image alt=model.alt style=styles::IMAGE/>
            </div>

            <div style=styles::CONTENT>
                <h2 style=styles::TITLE>{model.name}</h2>
                <p style=styles::DESCRIPTION>{model.description}</p>

                <div style=styles::FOOTER>
                    <span style=styles::PRICE>{model.price_text}</span>
                    <button
                        disabled=sold_out
                        style=model.action_style
                        on:click=on_add
                    >
                        {model.action_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
