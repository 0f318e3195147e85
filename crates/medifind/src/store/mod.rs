//! Whole-collection persistence for provider records.
//!
//! A store reads and writes the entire collection as one unit. There is no
//! per-record CRUD at this layer: callers load everything, work on the
//! vector, and hand the full result back to [`RecordStore::save_all`].
//!
//! ```text
//! data/
//! └── doctors.json        # JSON array of provider records
//! ```

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::provider::Provider;

/// Backing medium for the provider collection.
pub trait RecordStore: Send + Sync {
    /// Load the full collection.
    ///
    /// A store that has never been written returns an empty vector.
    fn load_all(&self) -> Result<Vec<Provider>>;

    /// Replace the persisted collection with `records`.
    ///
    /// Either the whole collection is replaced or nothing changes.
    fn save_all(&self, records: &[Provider]) -> Result<()>;

    /// Short human-readable description of where records live.
    fn location(&self) -> String;
}

impl<S: RecordStore + ?Sized> RecordStore for std::sync::Arc<S> {
    fn load_all(&self) -> Result<Vec<Provider>> {
        (**self).load_all()
    }

    fn save_all(&self, records: &[Provider]) -> Result<()> {
        (**self).save_all(records)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
