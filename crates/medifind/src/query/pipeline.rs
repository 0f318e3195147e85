//! Filter, sort, and paginate a provider collection.

use std::cmp::Ordering;

use serde::Serialize;

use crate::provider::Provider;

use super::params::{Filters, ListingQuery, SortField, SortOrder};

/// One page of a listing plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult {
    /// Records on the requested page.
    pub records: Vec<Provider>,
    /// The page that was requested (1-based).
    pub current_page: usize,
    /// `ceil(total_items / limit)`; zero when nothing matched.
    pub total_pages: usize,
    /// Number of records that passed the filters.
    pub total_items: usize,
}

/// Run the full pipeline over `records`.
///
/// Pure: the same collection and query always give the same result.
pub fn query(records: &[Provider], query: &ListingQuery) -> PagedResult {
    let mut matched: Vec<&Provider> = records
        .iter()
        .filter(|record| matches(record, &query.filters))
        .collect();

    sort(&mut matched, query.sort_by, query.sort_order);

    let limit = query.limit.max(1);
    let total_items = matched.len();
    let total_pages = total_items.div_ceil(limit);

    let start = query.page.saturating_sub(1).saturating_mul(limit);
    let end = start.saturating_add(limit).min(total_items);
    let page = if start < total_items {
        matched[start..end].iter().map(|r| (*r).clone()).collect()
    } else {
        Vec::new()
    };

    PagedResult {
        records: page,
        current_page: query.page,
        total_pages,
        total_items,
    }
}

/// Whether `record` passes every active predicate.
pub fn matches(record: &Provider, filters: &Filters) -> bool {
    if let Some(needle) = &filters.specialization {
        if !contains_ignore_case(&record.specialization, needle) {
            return false;
        }
    }
    if let Some(needle) = &filters.location {
        if !contains_ignore_case(&record.location, needle) {
            return false;
        }
    }
    if !filters.availability.iter().all(|token| {
        record
            .availability
            .iter()
            .any(|day| day.as_str() == token.as_str())
    }) {
        return false;
    }
    if let Some(gender) = &filters.gender {
        if record.gender.map(|g| g.as_str()) != Some(gender.as_str()) {
            return false;
        }
    }
    if let Some(min) = filters.min_experience {
        if i64::from(record.experience_years) < min {
            return false;
        }
    }
    if let Some(max) = filters.max_fee {
        if record.consultation_fee > max {
            return false;
        }
    }
    true
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Comparable value extracted from a record for one sort field.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Text(String),
    Number(f64),
    Missing,
}

impl SortKey {
    fn of(record: &Provider, field: SortField) -> Self {
        fn text(value: &str) -> SortKey {
            SortKey::Text(value.to_lowercase())
        }

        match field {
            SortField::Name => text(&record.name),
            SortField::Specialization => text(&record.specialization),
            SortField::Location => text(&record.location),
            SortField::Experience => SortKey::Number(f64::from(record.experience_years)),
            SortField::ConsultationFee => SortKey::Number(record.consultation_fee),
            SortField::Rating => record.rating.map_or(SortKey::Missing, SortKey::Number),
            SortField::Reviews => record
                .review_count
                .map_or(SortKey::Missing, |n| SortKey::Number(f64::from(n))),
            SortField::ClinicName => record.clinic_name.as_deref().map_or(SortKey::Missing, text),
            SortField::Gender => record.gender.map_or(SortKey::Missing, |g| text(g.as_str())),
        }
    }
}

/// Order two keys. Missing keys go last in both directions and tie with
/// each other, which keeps this a total order.
fn compare_keys(a: &SortKey, b: &SortKey, order: SortOrder) -> Ordering {
    let ordering = match (a, b) {
        (SortKey::Missing, SortKey::Missing) => return Ordering::Equal,
        (SortKey::Missing, _) => return Ordering::Greater,
        (_, SortKey::Missing) => return Ordering::Less,
        (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
        (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
        // A field yields one key kind, so mixed pairs do not occur.
        (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
    };

    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Stable sort: records with equal keys keep their filtered order.
fn sort(records: &mut Vec<&Provider>, field: SortField, order: SortOrder) {
    let mut keyed: Vec<(SortKey, &Provider)> = records
        .iter()
        .map(|record| (SortKey::of(record, field), *record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, order));

    records.clear();
    records.extend(keyed.into_iter().map(|(_, record)| record));
}
