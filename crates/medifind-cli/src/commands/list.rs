//! List command - query providers the same way the API does.

use std::path::PathBuf;

use colored::Colorize;
use medifind::{Directory, JsonFileStore, ListingPage, Provider, RawListingParams};

pub fn run(
    data: PathBuf,
    params: RawListingParams,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directory = Directory::new(JsonFileStore::new(&data));
    let page = directory.list(&params)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    print_page(&page, verbose);
    Ok(())
}

fn print_page(page: &ListingPage, verbose: bool) {
    if page.total_doctors == 0 {
        println!("{}", "No doctors match these filters.".yellow());
        return;
    }

    println!(
        "{} {} (page {}/{})",
        page.total_doctors.to_string().white().bold(),
        if page.total_doctors == 1 { "doctor" } else { "doctors" },
        page.current_page,
        page.total_pages.max(1)
    );
    println!();

    if page.doctors.is_empty() {
        println!("{}", "This page is past the last result.".yellow());
        return;
    }

    for doctor in &page.doctors {
        print_doctor(doctor, verbose);
    }
}

fn print_doctor(doctor: &Provider, verbose: bool) {
    let rating = doctor
        .rating
        .map(|r| format!("{:.1}★", r))
        .unwrap_or_else(|| "unrated".to_string());

    println!(
        "{} {} {}",
        doctor.name.white().bold(),
        format!("({})", doctor.specialization).cyan(),
        rating.yellow()
    );
    println!(
        "  {} · {} yrs · fee {:.2}",
        doctor.location, doctor.experience_years, doctor.consultation_fee
    );

    let days: Vec<&str> = doctor.availability.iter().map(|d| d.label()).collect();
    println!("  Available: {}", days.join(", "));

    if verbose {
        println!("  Languages: {}", doctor.languages.join(", "));
        if let Some(clinic) = &doctor.clinic_name {
            println!("  Clinic: {}", clinic);
        }
        if let Some(qualifications) = &doctor.qualifications {
            println!("  Qualifications: {}", qualifications);
        }
        println!("  ID: {}", doctor.id.dimmed());
    }
    println!();
}
