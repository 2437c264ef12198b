//! Root application component.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};

use crate::config::GalleryConfig;
use crate::gallery::ProductGallery;
use crate::notify::NotifierHandle;

/// Root component: document metadata, notifier context and the gallery.
///
/// Reads `GalleryConfig` and `NotifierHandle` from context when the host
/// provides them, and falls back to the defaults otherwise.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<GalleryConfig>().unwrap_or_default();
    if use_context::<NotifierHandle>().is_none() {
        provide_context(NotifierHandle::default());
    }

    let stylesheet = config
        .css_path
        .map(|href| view! { <Stylesheet id="gallery" href=href/> });

    view! {
        {stylesheet}
        <Title text=config.title/>
        <ProductGallery/>
    }
}
