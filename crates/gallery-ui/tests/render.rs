//! Server-side rendering of the gallery components.

use futures::executor::block_on;
use futures::stream::{self, StreamExt};
use gallery_catalog::{seed_catalog, Catalog, Product};
use gallery_ui::styles;
use gallery_ui::{App, GalleryConfig, ProductCard, ProductGallery};
use leptos::prelude::*;
use leptos_meta::ServerMetaContext;

fn render_gallery(catalog: Catalog) -> String {
    let owner = Owner::new();
    owner.with(|| view! { <ProductGallery catalog=catalog/> }.to_html())
}

fn render_card(product: Product) -> String {
    let owner = Owner::new();
    owner.with(|| view! { <ProductCard product=product/> }.to_html())
}

/// Render `App` inside a full page so `<head>` content gets injected.
fn render_app(config: Option<GalleryConfig>) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let (meta, output) = ServerMetaContext::new();
        provide_context(meta);
        if let Some(config) = config {
            provide_context(config);
        }

        let body = view! { <App/> }.to_html();
        let page = format!("<html><head></head><body>{body}</body></html>");

        block_on(async move {
            output
                .inject_meta_context(stream::iter([page]))
                .await
                .collect::<String>()
                .await
        })
    })
}

fn seeded(index: usize) -> Product {
    seed_catalog().products()[index].clone()
}

#[test]
fn test_gallery_renders_one_card_per_product_in_order() {
    let html = render_gallery(seed_catalog());

    assert_eq!(html.matches("<button").count(), 3);

    let headphones = html.find("Wireless Headphones").unwrap();
    let watch = html.find("Smart Watch").unwrap();
    let shoes = html.find("Running Shoes").unwrap();
    assert!(headphones < watch && watch < shoes);
}

#[test]
fn test_gallery_uses_wrapping_centered_layout() {
    let html = render_gallery(seed_catalog());
    assert!(html.contains(styles::APP_CONTAINER));
}

#[test]
fn test_gallery_defaults_to_seeded_catalog() {
    let owner = Owner::new();
    let html = owner.with(|| view! { <ProductGallery/> }.to_html());

    assert_eq!(html.matches("<button").count(), 3);
    assert!(html.contains("Running Shoes"));
}

#[test]
fn test_gallery_renders_empty_catalog_without_cards() {
    let html = render_gallery(Catalog::default());

    assert!(html.contains(styles::APP_CONTAINER));
    assert_eq!(html.matches("<button").count(), 0);
}

#[test]
fn test_in_stock_card_shows_green_badge_and_enabled_action() {
    let html = render_card(seeded(0));

    assert!(html.contains("In Stock"));
    assert!(!html.contains("Out of Stock"));
    assert!(html.contains(&styles::badge_style(true)));
    assert!(html.contains("$199.50"));
    assert!(html.contains("Add to Cart"));
    assert!(html.contains(&styles::action_style(true)));
    assert!(!html.contains("disabled"));
}

#[test]
fn test_out_of_stock_card_shows_red_badge_and_disabled_action() {
    let html = render_card(seeded(1));

    assert!(html.contains("Out of Stock"));
    assert!(html.contains(&styles::badge_style(false)));
    assert!(html.contains("$299.00"));
    assert!(html.contains("Sold Out"));
    assert!(!html.contains("Add to Cart"));
    assert!(html.contains(&styles::action_style(false)));
    assert!(html.contains("disabled"));
}

#[test]
fn test_card_formats_price_with_two_decimals() {
    let html = render_card(seeded(2));
    assert!(html.contains("$89.99"));
}

#[test]
fn test_card_image_uses_name_as_alt_text() {
    let product = seeded(0);
    let image = product.image.clone();
    let html = render_card(product);

    assert!(html.contains(&format!(r#"src="{image}""#)));
    assert!(html.contains(r#"alt="Wireless Headphones""#));
    assert!(html.contains(styles::IMAGE));
}

#[test]
fn test_card_shows_description_verbatim() {
    let html = render_card(seeded(1));
    assert!(html.contains("Track your fitness and stay connected on the go."));
}

#[test]
fn test_app_renders_gallery_with_configured_head() {
    let config = GalleryConfig::new("shop")
        .with_title("Featured")
        .with_css("/pkg/gallery.css");
    let html = render_app(Some(config));

    assert_eq!(html.matches("<button").count(), 3);
    assert!(html.contains("<title>Featured</title>"));
    assert!(html.contains(r#"rel="stylesheet""#));
    assert!(html.contains(r#"href="/pkg/gallery.css""#));

    let head_end = html.find("</head>").unwrap();
    assert!(html.find(r#"href="/pkg/gallery.css""#).unwrap() < head_end);
}

#[test]
fn test_app_falls_back_to_default_config() {
    let html = render_app(None);

    assert_eq!(html.matches("<button").count(), 3);
    assert!(html.contains("<title>Product Gallery</title>"));
    assert!(!html.contains(r#"rel="stylesheet""#));
}
