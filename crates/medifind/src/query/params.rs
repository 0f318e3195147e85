//! Listing query parameters and their defaulting rules.

use serde::{Deserialize, Serialize};

/// Page size used when `limit` is absent or unusable.
pub const DEFAULT_LIMIT: usize = 6;

/// Page used when `page` is absent or unusable.
pub const DEFAULT_PAGE: usize = 1;

/// Query string parameters exactly as received.
///
/// Every value is kept as text so that a malformed number falls back to its
/// default instead of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListingParams {
    pub specialization: Option<String>,
    pub location: Option<String>,
    /// Comma-separated day tokens, e.g. `mon,tue`.
    pub availability: Option<String>,
    pub gender: Option<String>,
    pub min_experience: Option<String>,
    pub max_fee: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl RawListingParams {
    /// Build from decoded query-string pairs. Unknown keys are ignored and
    /// the first occurrence of a repeated key wins.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "specialization" => &mut params.specialization,
                "location" => &mut params.location,
                "availability" => &mut params.availability,
                "gender" => &mut params.gender,
                "minExperience" => &mut params.min_experience,
                "maxFee" => &mut params.max_fee,
                "sortBy" => &mut params.sort_by,
                "sortOrder" => &mut params.sort_order,
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

/// Field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Specialization,
    Experience,
    Location,
    ConsultationFee,
    Rating,
    Reviews,
    ClinicName,
    Gender,
}

impl SortField {
    /// Parse a `sortBy` value. Both the wire names and a few short aliases
    /// are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "name" => Some(SortField::Name),
            "specialization" => Some(SortField::Specialization),
            "experience" | "experienceYears" => Some(SortField::Experience),
            "location" => Some(SortField::Location),
            "consultationFee" | "fee" => Some(SortField::ConsultationFee),
            "rating" => Some(SortField::Rating),
            "reviews" | "reviewCount" => Some(SortField::Reviews),
            "clinicName" => Some(SortField::ClinicName),
            "gender" => Some(SortField::Gender),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Specialization => "specialization",
            SortField::Experience => "experience",
            SortField::Location => "location",
            SortField::ConsultationFee => "consultationFee",
            SortField::Rating => "rating",
            SortField::Reviews => "reviews",
            SortField::ClinicName => "clinicName",
            SortField::Gender => "gender",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Filter predicates. `None` or empty means the predicate is not applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    /// Case-insensitive substring of the specialization.
    pub specialization: Option<String>,
    /// Case-insensitive substring of the location.
    pub location: Option<String>,
    /// Lower-cased day tokens; a record must offer all of them.
    pub availability: Vec<String>,
    /// Exact gender token.
    pub gender: Option<String>,
    pub min_experience: Option<i64>,
    pub max_fee: Option<f64>,
}

/// A fully resolved listing query.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub filters: Filters,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    /// 1-based page number.
    pub page: usize,
    /// Page size, always at least 1.
    pub limit: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            filters: Filters::default(),
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListingQuery {
    /// Resolve raw parameters, applying the fallback for every absent or
    /// unusable value.
    pub fn from_raw(raw: &RawListingParams) -> Self {
        let filters = Filters {
            specialization: non_empty(raw.specialization.as_deref()),
            location: non_empty(raw.location.as_deref()),
            availability: raw
                .availability
                .as_deref()
                .map(split_days)
                .unwrap_or_default(),
            gender: non_empty(raw.gender.as_deref()),
            min_experience: raw.min_experience.as_deref().and_then(leading_integer),
            max_fee: raw.max_fee.as_deref().and_then(leading_decimal),
        };

        Self {
            filters,
            sort_by: raw
                .sort_by
                .as_deref()
                .and_then(SortField::parse)
                .unwrap_or_default(),
            sort_order: raw
                .sort_order
                .as_deref()
                .and_then(SortOrder::parse)
                .unwrap_or_default(),
            page: positive(raw.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            limit: positive(raw.limit.as_deref()).unwrap_or(DEFAULT_LIMIT),
        }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        self
    }

    pub fn with_sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = field;
        self.sort_order = order;
        self
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parse a strictly positive integer prefix.
fn positive(value: Option<&str>) -> Option<usize> {
    leading_integer(value?)
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
}

/// Length of an optional sign followed by ASCII digits at the start of `s`.
fn signed_digits(s: &str) -> usize {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 { 0 } else { sign + digits }
}

/// Integer at the start of `value`, ignoring leading whitespace and any
/// trailing text: `"5.5"` is 5, `"500abc"` is 500, `"abc"` is nothing.
fn leading_integer(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let end = signed_digits(s);
    if end == 0 {
        return None;
    }
    let digits = &s[..end];
    // Out of range saturates in the direction of the sign.
    let saturated = if digits.starts_with('-') { i64::MIN } else { i64::MAX };
    Some(digits.parse::<i64>().unwrap_or(saturated))
}

/// Decimal number at the start of `value`: `"499.5"` is 499.5, `"500abc"`
/// is 500, `"NaN"` and `"abc"` are nothing.
fn leading_decimal(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let mut end = signed_digits(s);
    let int_end = if end == 0 {
        usize::from(matches!(s.as_bytes().first(), Some(b'+' | b'-')))
    } else {
        end
    };
    let rest = &s[int_end..];
    if let Some(fraction) = rest.strip_prefix('.') {
        let digits = fraction.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 || end > 0 {
            end = int_end + 1 + digits;
        }
    }
    if end == 0 {
        return None;
    }
    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Split a comma-separated availability list into normalized tokens.
pub fn split_days(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|day| day.trim().to_ascii_lowercase())
        .filter(|day| !day.is_empty())
        .collect()
}
