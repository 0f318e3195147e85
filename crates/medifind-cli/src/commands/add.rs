//! Add command - validate a JSON payload and append it to the data file.

use std::io::Read;
use std::path::{Path, PathBuf};

use colored::Colorize;
use medifind::{Directory, JsonFileStore, MedifindError};

pub fn run(
    data: PathBuf,
    file: PathBuf,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = read_payload(&file)?;
    let directory = Directory::new(JsonFileStore::new(&data));

    let provider = match directory.create_from_slice(&body) {
        Ok(provider) => provider,
        Err(MedifindError::Validation(errors)) if !json_output => {
            eprintln!("{}", "Invalid doctor data:".red().bold());
            for (field, messages) in errors.iter() {
                for message in messages {
                    eprintln!("  {} {}", format!("{}:", field).yellow(), message);
                }
            }
            return Err(format!("{} field(s) failed validation", errors.len()).into());
        }
        Err(e) if e.is_client_error() => return Err(e.into()),
        Err(e) => return Err(format!("Failed to add doctor: {}", e).into()),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&provider)?);
    } else {
        println!(
            "{} {} {}",
            "Added".green().bold(),
            provider.name.white().bold(),
            format!("({})", provider.id).dimmed()
        );
        if verbose {
            println!("  Saved to {}", data.display());
        }
    }

    Ok(())
}

/// Read the payload from `path`, or from stdin when `path` is `-`.
fn read_payload(path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if path == Path::new("-") {
        let mut buffer = Vec::new();
        std::io::stdin().read_to_end(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read(path)
            .map_err(|e| format!("Could not read payload '{}': {}", path.display(), e).into())
    }
}
