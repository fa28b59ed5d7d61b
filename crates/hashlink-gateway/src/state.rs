use std::sync::Arc;

use hashlink_core::Store;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn Store>,
    base_url: String,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: public_base_url.into(),
        }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Base URL prepended to keys in shortened links.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
