//! Validation gate for provider creation payloads.
//!
//! Every field is checked independently and every violation is collected,
//! so a client sees all problems with a payload in one response.
//!
//! # Example
//!
//! ```
//! use medifind::validation::validate;
//!
//! let payload = serde_json::json!({ "name": "" });
//! let errors = validate(payload.as_object().unwrap()).unwrap_err();
//!
//! assert_eq!(errors.get("name").unwrap(), ["Name is required"]);
//! assert!(errors.contains("imageUrl"));
//! ```

mod field_errors;

pub use field_errors::FieldErrors;

use serde_json::{Map, Value};

use crate::provider::{Gender, NewProvider, Weekday};

/// Upper bound for `rating`.
pub const MAX_RATING: f64 = 5.0;

/// Validate a creation payload.
///
/// Unknown keys are ignored. A JSON `null` is treated the same as an absent
/// key. Text is stored exactly as submitted; required text only has to be
/// non-empty.
pub fn validate(payload: &Map<String, Value>) -> Result<NewProvider, FieldErrors> {
    let mut gate = Gate {
        payload,
        errors: FieldErrors::new(),
    };

    let name = gate.required_text("name", "Name is required");
    let specialization = gate.required_text("specialization", "Specialization is required");
    let experience_years = gate.experience();
    let languages = gate.languages();
    let location = gate.required_text("location", "Location is required");
    let availability = gate.availability();
    let consultation_fee = gate.consultation_fee();
    let image_url = gate.image_url();
    let clinic_name = gate.optional_text("clinicName");
    let rating = gate.rating();
    let review_count = gate.review_count();
    let gender = gate.gender();
    let qualifications = gate.optional_text("qualifications");

    if !gate.errors.is_empty() {
        return Err(gate.errors);
    }

    let (
        Some(name),
        Some(specialization),
        Some(experience_years),
        Some(languages),
        Some(location),
        Some(availability),
        Some(consultation_fee),
        Some(image_url),
    ) = (
        name,
        specialization,
        experience_years,
        languages,
        location,
        availability,
        consultation_fee,
        image_url,
    )
    else {
        return Err(gate.errors);
    };

    Ok(NewProvider {
        name,
        specialization,
        experience_years,
        languages,
        location,
        availability,
        consultation_fee,
        image_url,
        clinic_name,
        rating,
        review_count,
        gender,
        qualifications,
    })
}

/// Collects violations while extracting typed values from the payload.
struct Gate<'a> {
    payload: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> Gate<'a> {
    /// Look up a field, treating `null` as absent.
    fn field(&self, keys: &[&str]) -> Option<&'a Value> {
        let payload: &'a Map<String, Value> = self.payload;
        keys.iter()
            .filter_map(|key| payload.get(*key))
            .find(|value| !value.is_null())
    }

    fn mismatch(&mut self, field: &str, expected: &str, found: &Value) {
        self.errors.add(
            field,
            format!("Expected {}, received {}", expected, type_name(found)),
        );
    }

    fn required_text(&mut self, field: &str, required: &str) -> Option<String> {
        match self.field(&[field]) {
            None => {
                self.errors.add(field, required);
                None
            }
            Some(Value::String(s)) if s.is_empty() => {
                self.errors.add(field, required);
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.mismatch(field, "string", other);
                None
            }
        }
    }

    fn optional_text(&mut self, field: &str) -> Option<String> {
        match self.field(&[field])? {
            Value::String(s) => Some(s.clone()),
            other => {
                self.mismatch(field, "string", other);
                None
            }
        }
    }

    /// Extract a non-negative integer, reporting under `field`.
    fn count(&mut self, field: &str, value: &Value, negative: &str) -> Option<u32> {
        let Value::Number(number) = value else {
            self.mismatch(field, "number", value);
            return None;
        };

        if let Some(n) = number.as_u64() {
            return match u32::try_from(n) {
                Ok(n) => Some(n),
                Err(_) => {
                    self.errors.add(field, format!("Must be at most {}", u32::MAX));
                    None
                }
            };
        }

        match number.as_f64() {
            Some(n) if n.fract() != 0.0 => {
                self.errors.add(field, "Expected integer, received float");
                if n < 0.0 {
                    self.errors.add(field, negative);
                }
                None
            }
            Some(n) if n >= 0.0 && n <= f64::from(u32::MAX) => Some(n as u32),
            Some(n) if n >= 0.0 => {
                self.errors.add(field, format!("Must be at most {}", u32::MAX));
                None
            }
            _ => {
                self.errors.add(field, negative);
                None
            }
        }
    }

    fn experience(&mut self) -> Option<u32> {
        let Some(value) = self.field(&["experience", "experienceYears"]) else {
            self.errors.add("experience", "Experience is required");
            return None;
        };
        self.count("experience", value, "Experience must be non-negative")
    }

    fn languages(&mut self) -> Option<Vec<String>> {
        const REQUIRED: &str = "At least one language is required";

        match self.field(&["languages"]) {
            None => {
                self.errors.add("languages", REQUIRED);
                None
            }
            Some(Value::Array(items)) => {
                if items.is_empty() {
                    self.errors.add("languages", REQUIRED);
                    return None;
                }
                let mut languages = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => languages.push(s.clone()),
                        other => self.mismatch("languages", "string", other),
                    }
                }
                (languages.len() == items.len()).then_some(languages)
            }
            Some(other) => {
                self.mismatch("languages", "array", other);
                None
            }
        }
    }

    fn availability(&mut self) -> Option<Vec<Weekday>> {
        const REQUIRED: &str = "At least one availability day is required";

        match self.field(&["availability"]) {
            None => {
                self.errors.add("availability", REQUIRED);
                None
            }
            Some(Value::Array(items)) => {
                if items.is_empty() {
                    self.errors.add("availability", REQUIRED);
                    return None;
                }
                let mut days = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => match s.parse::<Weekday>() {
                            Ok(day) => days.push(day),
                            Err(message) => self.errors.add("availability", message),
                        },
                        other => self.mismatch("availability", "string", other),
                    }
                }
                (days.len() == items.len()).then_some(days)
            }
            Some(other) => {
                self.mismatch("availability", "array", other);
                None
            }
        }
    }

    fn consultation_fee(&mut self) -> Option<f64> {
        match self.field(&["consultationFee"]) {
            None => {
                self.errors.add("consultationFee", "Consultation fee is required");
                None
            }
            Some(Value::Number(n)) => match n.as_f64() {
                Some(fee) if fee >= 0.0 => Some(fee),
                _ => {
                    self.errors
                        .add("consultationFee", "Consultation fee must be non-negative");
                    None
                }
            },
            Some(other) => {
                self.mismatch("consultationFee", "number", other);
                None
            }
        }
    }

    fn image_url(&mut self) -> Option<String> {
        match self.field(&["imageUrl"]) {
            None => {
                self.errors.add("imageUrl", "Image URL is required");
                None
            }
            Some(Value::String(s)) => match url::Url::parse(s) {
                Ok(_) => Some(s.clone()),
                Err(_) => {
                    self.errors.add("imageUrl", "Image URL must be a valid URL");
                    None
                }
            },
            Some(other) => {
                self.mismatch("imageUrl", "string", other);
                None
            }
        }
    }

    fn rating(&mut self) -> Option<f64> {
        match self.field(&["rating"])? {
            Value::Number(n) => match n.as_f64() {
                Some(rating) if (0.0..=MAX_RATING).contains(&rating) => Some(rating),
                _ => {
                    self.errors.add("rating", "Rating must be between 0 and 5");
                    None
                }
            },
            other => {
                self.mismatch("rating", "number", other);
                None
            }
        }
    }

    fn review_count(&mut self) -> Option<u32> {
        let value = self.field(&["reviews", "reviewCount"])?;
        self.count("reviews", value, "Reviews must be non-negative")
    }

    fn gender(&mut self) -> Option<Gender> {
        match self.field(&["gender"])? {
            Value::String(s) => match s.parse::<Gender>() {
                Ok(gender) => Some(gender),
                Err(message) => {
                    self.errors.add("gender", message);
                    None
                }
            },
            other => {
                self.mismatch("gender", "string", other);
                None
            }
        }
    }
}

/// JSON type name used in mismatch messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "name": "Dr. Meera Iyer",
            "specialization": "Cardiology",
            "experience": 15,
            "languages": ["English", "Tamil"],
            "location": "Chennai",
            "availability": ["mon", "wed", "fri"],
            "consultationFee": 900,
            "imageUrl": "https://images.example.com/meera.jpg",
            "clinicName": "Heart Care",
            "rating": 4.7,
            "reviews": 210,
            "gender": "female",
            "qualifications": "MBBS, MD, DM"
        })
    }

    fn run(payload: Value) -> Result<NewProvider, FieldErrors> {
        validate(payload.as_object().expect("test payload is an object"))
    }

    fn with(mut payload: Value, key: &str, value: Value) -> Value {
        payload[key] = value;
        payload
    }

    fn without(mut payload: Value, key: &str) -> Value {
        payload.as_object_mut().unwrap().remove(key);
        payload
    }

    #[test]
    fn test_valid_payload_passes() {
        let provider = run(valid_payload()).unwrap();

        assert_eq!(provider.name, "Dr. Meera Iyer");
        assert_eq!(provider.experience_years, 15);
        assert_eq!(provider.availability, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
        assert_eq!(provider.consultation_fee, 900.0);
        assert_eq!(provider.review_count, Some(210));
        assert_eq!(provider.gender, Some(Gender::Female));
    }

    #[test]
    fn test_missing_name_reports_name_is_required() {
        let errors = run(without(valid_payload(), "name")).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name").unwrap(), ["Name is required"]);
    }

    #[test]
    fn test_empty_name_is_required() {
        let errors = run(with(valid_payload(), "name", json!(""))).unwrap_err();
        assert_eq!(errors.get("name").unwrap(), ["Name is required"]);
    }

    #[test]
    fn test_whitespace_name_is_not_empty() {
        let provider = run(with(valid_payload(), "name", json!("   "))).unwrap();
        assert_eq!(provider.name, "   ");
    }

    #[test]
    fn test_null_counts_as_missing() {
        let errors = run(with(valid_payload(), "location", Value::Null)).unwrap_err();
        assert_eq!(errors.get("location").unwrap(), ["Location is required"]);
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let errors = run(with(valid_payload(), "imageUrl", json!("not-a-url"))).unwrap_err();
        assert_eq!(errors.get("imageUrl").unwrap(), ["Image URL must be a valid URL"]);
    }

    #[test]
    fn test_empty_payload_reports_every_required_field() {
        let errors = run(json!({})).unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                "name",
                "specialization",
                "experience",
                "languages",
                "location",
                "availability",
                "consultationFee",
                "imageUrl",
            ]
        );
    }

    #[test]
    fn test_every_bad_day_is_reported() {
        let payload = with(valid_payload(), "availability", json!(["mon", "funday", 3, "xyz"]));
        let errors = run(payload).unwrap_err();

        assert_eq!(
            errors.get("availability").unwrap(),
            [
                "Invalid availability day 'funday'",
                "Expected string, received number",
                "Invalid availability day 'xyz'",
            ]
        );
    }

    #[test]
    fn test_empty_lists_are_rejected() {
        let payload = with(valid_payload(), "languages", json!([]));
        let payload = with(payload, "availability", json!([]));
        let errors = run(payload).unwrap_err();

        assert_eq!(errors.get("languages").unwrap(), ["At least one language is required"]);
        assert_eq!(
            errors.get("availability").unwrap(),
            ["At least one availability day is required"]
        );
    }

    #[test]
    fn test_numeric_constraints() {
        let payload = with(valid_payload(), "experience", json!(-1));
        let payload = with(payload, "consultationFee", json!(-0.5));
        let payload = with(payload, "rating", json!(5.5));
        let payload = with(payload, "reviews", json!(2.5));
        let errors = run(payload).unwrap_err();

        assert_eq!(errors.get("experience").unwrap(), ["Experience must be non-negative"]);
        assert_eq!(
            errors.get("consultationFee").unwrap(),
            ["Consultation fee must be non-negative"]
        );
        assert_eq!(errors.get("rating").unwrap(), ["Rating must be between 0 and 5"]);
        assert_eq!(errors.get("reviews").unwrap(), ["Expected integer, received float"]);
    }

    #[test]
    fn test_whole_number_float_counts_as_integer() {
        let provider = run(with(valid_payload(), "experience", json!(7.0))).unwrap();
        assert_eq!(provider.experience_years, 7);
    }

    #[test]
    fn test_type_mismatch_messages() {
        let payload = with(valid_payload(), "experience", json!("ten"));
        let payload = with(payload, "languages", json!("English"));
        let errors = run(payload).unwrap_err();

        assert_eq!(errors.get("experience").unwrap(), ["Expected number, received string"]);
        assert_eq!(errors.get("languages").unwrap(), ["Expected array, received string"]);
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let mut payload = valid_payload();
        for key in ["clinicName", "rating", "reviews", "gender", "qualifications"] {
            payload = without(payload, key);
        }

        let provider = run(payload).unwrap();
        assert_eq!(provider.clinic_name, None);
        assert_eq!(provider.rating, None);
        assert_eq!(provider.gender, None);
    }

    #[test]
    fn test_invalid_gender() {
        let errors = run(with(valid_payload(), "gender", json!("robot"))).unwrap_err();
        assert_eq!(errors.get("gender").unwrap(), ["Invalid gender 'robot'"]);
    }

    #[test]
    fn test_long_aliases_are_accepted() {
        let payload = without(without(valid_payload(), "experience"), "reviews");
        let payload = with(payload, "experienceYears", json!(3));
        let payload = with(payload, "reviewCount", json!(11));

        let provider = run(payload).unwrap();
        assert_eq!(provider.experience_years, 3);
        assert_eq!(provider.review_count, Some(11));
    }

    #[test]
    fn test_text_is_kept_as_submitted() {
        let payload = with(valid_payload(), "name", json!("  Dr. Padded  "));
        let payload = with(payload, "clinicName", json!(""));
        let payload = with(payload, "qualifications", json!("  MBBS "));

        let provider = run(payload).unwrap();
        assert_eq!(provider.name, "  Dr. Padded  ");
        assert_eq!(provider.clinic_name.as_deref(), Some(""));
        assert_eq!(provider.qualifications.as_deref(), Some("  MBBS "));
    }
}
