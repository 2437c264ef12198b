//! Product Gallery - client-side rendered workload.
//!
//! Mounts the gallery to `<body>`. Built with Trunk (`trunk serve` in this
//! directory), which turns on the `csr` feature through `index.html`.

use gallery_ui::{App, GalleryConfig, NotifierHandle};
use leptos::prelude::*;

/// Configuration this workload mounts the gallery with.
pub fn gallery_config() -> GalleryConfig {
    GalleryConfig::new("product-gallery").with_title("Product Gallery")
}

/// Provides workload configuration, then renders the gallery app.
#[component]
pub fn Root() -> impl IntoView {
    provide_context(gallery_config());
    provide_context(NotifierHandle::default());

    view! { <App/> }
}

/// Console message used when the logger cannot be installed.
pub fn logger_warning(err: &log::SetLoggerError) -> String {
    format!("console logger not installed: {err}")
}

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&logger_warning(&err).into());
    }

    log::info!("mounting {}", gallery_config().name);
    leptos::mount::mount_to_body(Root);
}
