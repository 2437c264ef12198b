//! Leptos components for the product gallery.
//!
//! The component tree is two levels deep:
//!
//! - `ProductGallery` lays out one card per catalog product
//! - `ProductCard` shows badge, image, title, description, price and the
//!   add-to-cart button
//!
//! `App` wraps the gallery with document metadata. Inline styles live in
//! [`styles`]; the add-to-cart click goes through the [`Notifier`] seam.
//!
//! # Example
//!
//! ```rust,ignore
//! use gallery_ui::prelude::*;
//!
//! leptos::mount::mount_to_body(App);
//! ```

mod app;
mod card;
mod config;
mod gallery;
mod notify;
pub mod styles;

pub use app::*;
pub use card::*;
pub use config::*;
pub use gallery::*;
pub use notify::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::app::App;
    pub use crate::card::{add_to_cart, card_notifier, CardModel, ProductCard};
    pub use crate::config::GalleryConfig;
    pub use crate::gallery::ProductGallery;
    pub use crate::notify::{BrowserAlert, Notifier, NotifierHandle};
    pub use gallery_catalog::prelude::*;
}
