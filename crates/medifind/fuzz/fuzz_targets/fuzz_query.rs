//! Fuzz target for listing query parameters.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use medifind::query::{query, ListingQuery, RawListingParams};

#[derive(Debug, Arbitrary)]
struct Params {
    specialization: Option<String>,
    location: Option<String>,
    availability: Option<String>,
    gender: Option<String>,
    min_experience: Option<String>,
    max_fee: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

fuzz_target!(|params: Params| {
    let raw = RawListingParams {
        specialization: params.specialization,
        location: params.location,
        availability: params.availability,
        gender: params.gender,
        min_experience: params.min_experience,
        max_fee: params.max_fee,
        sort_by: params.sort_by,
        sort_order: params.sort_order,
        page: params.page,
        limit: params.limit,
    };
    let listing = ListingQuery::from_raw(&raw);
    let result = query(&[], &listing);

    assert!(listing.limit >= 1);
    assert_eq!(result.total_pages, 0);
});
