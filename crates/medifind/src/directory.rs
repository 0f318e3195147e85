//! Listing controller: ties the store, query pipeline, and validation gate
//! together for the read and create paths.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{MedifindError, Result};
use crate::id::generate_provider_id;
use crate::provider::Provider;
use crate::query::{self, Facets, ListingQuery, PagedResult, RawListingParams};
use crate::store::RecordStore;
use crate::validation::validate;

/// Response body for a listing request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    pub doctors: Vec<Provider>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_doctors: usize,
}

impl From<PagedResult> for ListingPage {
    fn from(result: PagedResult) -> Self {
        Self {
            doctors: result.records,
            current_page: result.current_page,
            total_pages: result.total_pages,
            total_doctors: result.total_items,
        }
    }
}

/// The provider directory over an injected [`RecordStore`].
///
/// Every call loads the full collection. Creations made through one
/// `Directory` are serialized, so concurrent creates in the same process do
/// not overwrite each other; writers in other processes are not coordinated.
#[derive(Debug)]
pub struct Directory<S> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: RecordStore> Directory<S> {
    /// Create a directory backed by `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read path with raw query-string parameters.
    pub fn list(&self, params: &RawListingParams) -> Result<ListingPage> {
        self.list_with(&ListingQuery::from_raw(params))
    }

    /// Read path with an already resolved query.
    pub fn list_with(&self, listing: &ListingQuery) -> Result<ListingPage> {
        let records = self.store.load_all()?;
        let result = query::query(&records, listing);
        debug!(
            total = records.len(),
            matched = result.total_items,
            page = result.current_page,
            sort_by = listing.sort_by.as_str(),
            sort_order = listing.sort_order.as_str(),
            "listed providers"
        );
        Ok(result.into())
    }

    /// Distinct specializations, locations, and languages.
    pub fn facets(&self) -> Result<Facets> {
        let records = self.store.load_all()?;
        Ok(Facets::from_records(&records))
    }

    /// Create path from a raw request body.
    ///
    /// A body that is not a JSON object fails with
    /// [`MedifindError::MalformedPayload`] before any field is validated.
    pub fn create_from_slice(&self, body: &[u8]) -> Result<Provider> {
        let payload: Value = serde_json::from_slice(body)
            .map_err(|e| MedifindError::MalformedPayload(e.to_string()))?;
        self.create(payload)
    }

    /// Create path from a parsed JSON value.
    pub fn create(&self, payload: Value) -> Result<Provider> {
        let Value::Object(fields) = payload else {
            return Err(MedifindError::MalformedPayload(
                "expected a JSON object".to_string(),
            ));
        };

        let new_provider = validate(&fields).map_err(|errors| {
            warn!(fields = errors.len(), "rejected provider payload: {}", errors);
            MedifindError::Validation(errors)
        })?;

        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut records = self.store.load_all()?;

        let mut id = generate_provider_id();
        while records.iter().any(|r| r.id == id) {
            id = generate_provider_id();
        }

        let provider = new_provider.into_provider(id);
        records.push(provider.clone());
        self.store.save_all(&records)?;

        info!(id = %provider.id, name = %provider.name, "created provider");
        Ok(provider)
    }
}
