//! Distinct values of filterable fields, used to populate filter choices.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::provider::Provider;

/// A field whose distinct values can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetField {
    Specialization,
    Location,
    Language,
}

/// Distinct values of `field` across `records`, sorted ascending.
pub fn distinct_values(records: &[Provider], field: FacetField) -> Vec<String> {
    let mut values = BTreeSet::new();
    for record in records {
        match field {
            FacetField::Specialization => {
                values.insert(record.specialization.as_str());
            }
            FacetField::Location => {
                values.insert(record.location.as_str());
            }
            FacetField::Language => values.extend(record.languages.iter().map(String::as_str)),
        }
    }
    values.into_iter().map(str::to_string).collect()
}

/// Filter choices for the listing sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub specializations: Vec<String>,
    pub locations: Vec<String>,
    pub languages: Vec<String>,
}

impl Facets {
    pub fn from_records(records: &[Provider]) -> Self {
        Self {
            specializations: distinct_values(records, FacetField::Specialization),
            locations: distinct_values(records, FacetField::Location),
            languages: distinct_values(records, FacetField::Language),
        }
    }
}
