//! Seed command - fill the data file with sample providers.

use std::collections::HashSet;
use std::path::PathBuf;

use colored::Colorize;
use medifind::{generate_provider_id, validate, JsonFileStore, Provider, RecordStore};
use serde_json::{json, Value};

pub fn run(data: PathBuf, force: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonFileStore::new(&data);

    let existing = store.load_all()?;
    if !existing.is_empty() && !force {
        return Err(format!(
            "{} already holds {} doctors\nUse --force to replace them.",
            data.display(),
            existing.len()
        )
        .into());
    }

    let providers = build_samples()?;
    store.save_all(&providers)?;

    if verbose {
        if !existing.is_empty() {
            println!("Replaced {} existing doctors", existing.len());
        }
        for provider in &providers {
            println!("  {} {}", provider.id.dimmed(), provider.name);
        }
    }

    println!(
        "{} {} doctors into {}",
        "Seeded".green().bold(),
        providers.len(),
        data.display()
    );
    Ok(())
}

/// Validate every sample and assign distinct ids. Nothing is written, so a
/// bad sample leaves the data file as it was.
fn build_samples() -> Result<Vec<Provider>, Box<dyn std::error::Error>> {
    let mut ids = HashSet::new();
    let mut providers = Vec::new();

    for payload in sample_payloads() {
        let fields = payload
            .as_object()
            .ok_or("Sample payload is not a JSON object")?;
        let new_provider =
            validate(fields).map_err(|errors| format!("Invalid sample payload: {}", errors))?;

        let id = loop {
            let candidate = generate_provider_id();
            if ids.insert(candidate.clone()) {
                break candidate;
            }
        };
        providers.push(new_provider.into_provider(id));
    }

    Ok(providers)
}

fn sample_payloads() -> Vec<Value> {
    vec![
        json!({
            "name": "Dr. Meera Iyer",
            "specialization": "Cardiology",
            "experience": 15,
            "languages": ["English", "Tamil"],
            "location": "Chennai",
            "availability": ["mon", "wed", "fri"],
            "consultationFee": 900,
            "imageUrl": "https://images.example.com/doctors/meera-iyer.jpg",
            "clinicName": "Heart Care Centre",
            "rating": 4.8,
            "reviews": 212,
            "gender": "female",
            "qualifications": "MBBS, MD, DM (Cardiology)"
        }),
        json!({
            "name": "Dr. Arjun Rao",
            "specialization": "Orthopedics",
            "experience": 9,
            "languages": ["English", "Telugu", "Hindi"],
            "location": "Hyderabad",
            "availability": ["tue", "thu", "sat"],
            "consultationFee": 700,
            "imageUrl": "https://images.example.com/doctors/arjun-rao.jpg",
            "clinicName": "Bone & Joint Clinic",
            "rating": 4.5,
            "reviews": 98,
            "gender": "male",
            "qualifications": "MBBS, MS (Ortho)"
        }),
        json!({
            "name": "Dr. Sana Qureshi",
            "specialization": "Dermatology",
            "experience": 6,
            "languages": ["English", "Urdu", "Hindi"],
            "location": "Mumbai",
            "availability": ["mon", "tue", "wed", "thu"],
            "consultationFee": 600,
            "imageUrl": "https://images.example.com/doctors/sana-qureshi.jpg",
            "rating": 4.6,
            "reviews": 143,
            "gender": "female",
            "qualifications": "MBBS, MD (Dermatology)"
        }),
        json!({
            "name": "Dr. Vikram Singh",
            "specialization": "General Medicine",
            "experience": 22,
            "languages": ["English", "Hindi", "Punjabi"],
            "location": "Delhi",
            "availability": ["mon", "tue", "wed", "thu", "fri", "sat"],
            "consultationFee": 400,
            "imageUrl": "https://images.example.com/doctors/vikram-singh.jpg",
            "clinicName": "City Family Practice",
            "rating": 4.3,
            "reviews": 380,
            "gender": "male"
        }),
        json!({
            "name": "Dr. Priya Nair",
            "specialization": "Pediatrics",
            "experience": 11,
            "languages": ["English", "Malayalam"],
            "location": "Kochi",
            "availability": ["wed", "thu", "fri", "sun"],
            "consultationFee": 550,
            "imageUrl": "https://images.example.com/doctors/priya-nair.jpg",
            "clinicName": "Little Steps Clinic",
            "rating": 4.9,
            "reviews": 265,
            "gender": "female",
            "qualifications": "MBBS, DCH"
        }),
        json!({
            "name": "Dr. Rahul Deshmukh",
            "specialization": "Neurology",
            "experience": 18,
            "languages": ["English", "Marathi", "Hindi"],
            "location": "Pune",
            "availability": ["mon", "thu"],
            "consultationFee": 1200,
            "imageUrl": "https://images.example.com/doctors/rahul-deshmukh.jpg",
            "rating": 4.7,
            "reviews": 156,
            "gender": "male",
            "qualifications": "MBBS, MD, DM (Neurology)"
        }),
        json!({
            "name": "Dr. Ananya Bose",
            "specialization": "Psychiatry",
            "experience": 7,
            "languages": ["English", "Bengali"],
            "location": "Kolkata",
            "availability": ["tue", "fri", "sat"],
            "consultationFee": 800,
            "imageUrl": "https://images.example.com/doctors/ananya-bose.jpg",
            "gender": "female"
        }),
        json!({
            "name": "Dr. Karthik Menon",
            "specialization": "Cardiology",
            "experience": 4,
            "languages": ["English", "Kannada"],
            "location": "Bengaluru",
            "availability": ["mon", "wed", "sat"],
            "consultationFee": 650,
            "imageUrl": "https://images.example.com/doctors/karthik-menon.jpg",
            "clinicName": "Pulse Clinic",
            "rating": 4.1,
            "reviews": 37,
            "gender": "male",
            "qualifications": "MBBS, MD"
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_payloads_are_valid() {
        for payload in sample_payloads() {
            let object = payload.as_object().unwrap();
            assert!(validate(object).is_ok(), "invalid sample: {}", payload);
        }
    }

    #[test]
    fn test_samples_get_distinct_ids() {
        let providers = build_samples().unwrap();
        let ids: HashSet<&str> = providers.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), sample_payloads().len());
    }

    #[test]
    fn test_force_replaces_existing_collection() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("doctors.json");
        let store = JsonFileStore::new(&data);
        let old = build_samples().unwrap().remove(0);
        let old = Provider {
            id: "doc-old".to_string(),
            ..old
        };
        store.save_all(std::slice::from_ref(&old)).unwrap();

        run(data.clone(), true, false).unwrap();

        let stored = store.load_all().unwrap();
        assert_eq!(stored.len(), sample_payloads().len());
        assert!(stored.iter().all(|p| p.id != "doc-old"));
    }

    #[test]
    fn test_seed_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("doctors.json");

        run(data.clone(), false, false).unwrap();
        assert!(run(data.clone(), false, false).is_err());

        run(data.clone(), true, false).unwrap();
        let stored = JsonFileStore::new(&data).load_all().unwrap();
        assert_eq!(stored.len(), sample_payloads().len());
    }
}
