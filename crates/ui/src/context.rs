use std::sync::Arc;

use content::ContentStore;

/// Shared, immutable dependencies of every view.
///
/// The quiz content is loaded once at startup; views reach it through
/// this context instead of threading the store through props.
#[derive(Clone)]
pub struct AppContext {
    store: Arc<ContentStore>,
}

impl AppContext {
    #[must_use]
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &ContentStore {
        &self.store
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` around a loaded content store.
#[must_use]
pub fn build_app_context(store: Arc<ContentStore>) -> AppContext {
    AppContext::new(store)
}
