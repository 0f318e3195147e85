//! MediFind: a searchable directory of healthcare providers.
//!
//! The library holds the directory core that the HTTP server and CLI sit on:
//!
//! - **Record store**: the whole provider collection, read and written as a unit
//! - **Query pipeline**: filter, stable sort, and paginate a listing
//! - **Validation gate**: every field of a creation payload checked at once
//! - **Directory**: the listing controller wiring the three together
//!
//! # Example
//!
//! ```
//! use medifind::{Directory, MemoryStore, RawListingParams};
//!
//! let directory = Directory::new(MemoryStore::new());
//! let created = directory
//!     .create(serde_json::json!({
//!         "name": "Dr. Kavya Nair",
//!         "specialization": "Pediatrics",
//!         "experience": 8,
//!         "languages": ["English", "Malayalam"],
//!         "location": "Kochi",
//!         "availability": ["mon", "thu"],
//!         "consultationFee": 600,
//!         "imageUrl": "https://example.com/kavya.png"
//!     }))
//!     .unwrap();
//!
//! let page = directory.list(&RawListingParams::default()).unwrap();
//! assert_eq!(page.doctors, vec![created]);
//! assert_eq!(page.total_pages, 1);
//! ```

pub mod error;
pub mod provider;
pub mod query;
pub mod store;
pub mod validation;

mod directory;
mod id;

pub use directory::{Directory, ListingPage};
pub use error::{MedifindError, Result};
pub use id::generate_provider_id;
pub use provider::{Gender, NewProvider, Provider, Weekday};
pub use query::{Facets, ListingQuery, PagedResult, RawListingParams, SortField, SortOrder};
pub use store::{JsonFileStore, MemoryStore, RecordStore};
pub use validation::{validate, FieldErrors};
