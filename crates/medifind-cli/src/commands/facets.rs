//! Facets command - distinct values available for filtering.

use std::path::PathBuf;

use colored::Colorize;
use medifind::{Directory, JsonFileStore};

pub fn run(data: PathBuf, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let directory = Directory::new(JsonFileStore::new(&data));
    let facets = directory.facets()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&facets)?);
        return Ok(());
    }

    for (title, values) in [
        ("Specializations", &facets.specializations),
        ("Locations", &facets.locations),
        ("Languages", &facets.languages),
    ] {
        println!("{} ({})", title.cyan().bold(), values.len());
        for value in values {
            println!("  {}", value);
        }
        println!();
    }

    Ok(())
}
