//! Provider listing and creation handlers.
//!
//! `Directory` does synchronous file I/O, so every call runs on tokio's
//! blocking pool.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use medifind::{Directory, Facets, ListingPage, Provider, RawListingParams};

use crate::server::error::ApiError;
use crate::server::state::{AppState, SharedStore};

/// Run `op` against the directory off the async worker threads.
async fn with_directory<T, F>(state: &AppState, context: &str, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&Directory<SharedStore>) -> medifind::Result<T> + Send + 'static,
{
    let directory = Arc::clone(&state.directory);
    match tokio::task::spawn_blocking(move || op(&directory)).await {
        Ok(result) => result.map_err(|e| ApiError::with_context(context, e)),
        Err(e) => Err(ApiError::Internal {
            message: context.to_string(),
            detail: e.to_string(),
        }),
    }
}

/// GET /api/doctors
///
/// Query values are taken as raw text; anything malformed falls back to its
/// default rather than rejecting the request.
pub async fn list_doctors(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ListingPage>, ApiError> {
    let params = RawListingParams::from_pairs(pairs);
    debug!(?params, "Listing doctors");

    let page = with_directory(&state, "Failed to fetch doctors", move |directory| {
        directory.list(&params)
    })
    .await?;

    Ok(Json(page))
}

/// POST /api/doctors
pub async fn create_doctor(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Provider>), ApiError> {
    let provider = with_directory(&state, "Failed to add doctor", move |directory| {
        directory.create_from_slice(&body)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(provider)))
}

/// GET /api/doctors/facets
pub async fn doctor_facets(State(state): State<AppState>) -> Result<Json<Facets>, ApiError> {
    let facets = with_directory(&state, "Failed to fetch filter options", |directory| {
        directory.facets()
    })
    .await?;

    Ok(Json(facets))
}
