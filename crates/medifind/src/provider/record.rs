//! The provider record as stored and as submitted for creation.

use serde::{Deserialize, Serialize};

use super::number;
use super::types::{Gender, Weekday};

/// A healthcare provider listed in the directory.
///
/// The serialized shape is the persisted layout: one JSON object per
/// provider with camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Unique identifier, assigned at creation and never changed.
    pub id: String,

    pub name: String,

    /// Free-text specialty, e.g. "Cardiology".
    pub specialization: String,

    /// Years in practice.
    #[serde(rename = "experience", alias = "experienceYears")]
    pub experience_years: u32,

    /// Spoken languages, in the order given at creation.
    pub languages: Vec<String>,

    /// City or area.
    pub location: String,

    /// Days the provider takes appointments.
    pub availability: Vec<Weekday>,

    #[serde(serialize_with = "number::serialize")]
    pub consultation_fee: f64,

    pub image_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic_name: Option<String>,

    /// Average rating out of 5.
    #[serde(
        default,
        serialize_with = "number::serialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,

    #[serde(
        rename = "reviews",
        alias = "reviewCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub review_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Degrees and certifications, e.g. "MBBS, MD".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
}

impl Provider {
    /// Whether the provider is available on every one of `days`.
    ///
    /// An empty request is trivially satisfied.
    pub fn available_on_all(&self, days: &[Weekday]) -> bool {
        days.iter().all(|day| self.availability.contains(day))
    }
}

/// A validated creation payload that has not yet been assigned an id.
///
/// Only the validation gate constructs these, so every required field is
/// present and within its constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProvider {
    pub name: String,
    pub specialization: String,
    #[serde(rename = "experience")]
    pub experience_years: u32,
    pub languages: Vec<String>,
    pub location: String,
    pub availability: Vec<Weekday>,
    #[serde(serialize_with = "number::serialize")]
    pub consultation_fee: f64,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_name: Option<String>,
    #[serde(
        serialize_with = "number::serialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,
    #[serde(rename = "reviews", skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<String>,
}

impl NewProvider {
    /// Attach an identifier, producing a storable record.
    pub fn into_provider(self, id: impl Into<String>) -> Provider {
        Provider {
            id: id.into(),
            name: self.name,
            specialization: self.specialization,
            experience_years: self.experience_years,
            languages: self.languages,
            location: self.location,
            availability: self.availability,
            consultation_fee: self.consultation_fee,
            image_url: self.image_url,
            clinic_name: self.clinic_name,
            rating: self.rating,
            review_count: self.review_count,
            gender: self.gender,
            qualifications: self.qualifications,
        }
    }
}
