//! Application state for the web server.

use std::sync::Arc;

use medifind::{Directory, RecordStore};

/// Store handle shared by every request.
pub type SharedStore = Arc<dyn RecordStore>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The provider directory, backed by the injected store.
    pub directory: Arc<Directory<SharedStore>>,
}

impl AppState {
    /// Create application state over `store`.
    pub fn new(store: SharedStore) -> Self {
        Self {
            directory: Arc::new(Directory::new(store)),
        }
    }

    /// Where provider records are kept, for startup output.
    pub fn store_location(&self) -> String {
        self.directory.store().location()
    }
}
