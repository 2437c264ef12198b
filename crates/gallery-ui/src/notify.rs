//! User-visible notifications raised by card actions.

use std::fmt;
use std::sync::Arc;

/// Sink for blocking, user-visible messages.
pub trait Notifier {
    /// Show `message` to the user.
    fn notify(&self, message: &str);
}

/// Shows messages with the browser's `window.alert`.
///
/// Outside the browser (server rendering, tests) the message is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.alert_with_message(message) {
                    log::warn!("alert failed: {e:?}");
                }
                return;
            }
        }
        log::info!("{message}");
    }
}

/// Shared notifier stored in Leptos context.
#[derive(Clone)]
pub struct NotifierHandle(Arc<dyn Notifier + Send + Sync>);

impl NotifierHandle {
    pub fn new(notifier: impl Notifier + Send + Sync + 'static) -> Self {
        Self(Arc::new(notifier))
    }
}

impl Default for NotifierHandle {
    fn default() -> Self {
        Self::new(BrowserAlert)
    }
}

impl Notifier for NotifierHandle {
    fn notify(&self, message: &str) {
        self.0.notify(message);
    }
}

impl fmt::Debug for NotifierHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotifierHandle(..)")
    }
}
