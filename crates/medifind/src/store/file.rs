//! JSON file store.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MedifindError, Result};
use crate::provider::Provider;

use super::RecordStore;

/// Stores the collection as a pretty-printed JSON array in a single file.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// target, so readers never observe a half-written collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, message: impl Into<String>) -> MedifindError {
        MedifindError::StoreRead {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    fn write_error(&self, message: impl Into<String>) -> MedifindError {
        MedifindError::StoreWrite {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        let suffix: String = std::iter::repeat_with(fastrand::alphanumeric)
            .take(8)
            .collect();
        self.path.with_file_name(format!(".{}.{}.tmp", name, suffix))
    }
}

impl RecordStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Provider>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store not initialized, returning empty collection");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.read_error(format!("Failed to open file: {}", e))),
        };

        let reader = BufReader::new(file);
        let records: Vec<Provider> = serde_json::from_reader(reader)
            .map_err(|e| self.read_error(format!("Failed to parse provider data: {}", e)))?;

        debug!(path = %self.path.display(), count = records.len(), "loaded providers");
        Ok(records)
    }

    fn save_all(&self, records: &[Provider]) -> Result<()> {
        // Create parent directory if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    self.write_error(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let temp_path = self.temp_path();
        let written = (|| -> io::Result<()> {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, records)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
            Ok(())
        })();

        if let Err(e) = written.and_then(|()| fs::rename(&temp_path, &self.path)) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.write_error(format!("Failed to write provider data: {}", e)));
        }

        debug!(path = %self.path.display(), count = records.len(), "saved providers");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Weekday;
    use tempfile::TempDir;

    fn provider(id: &str) -> Provider {
        Provider {
            id: id.to_string(),
            name: format!("Dr. {}", id),
            specialization: "General Physician".to_string(),
            experience_years: 3,
            languages: vec!["English".to_string()],
            location: "Delhi".to_string(),
            availability: vec![Weekday::Tue],
            consultation_fee: 250.5,
            image_url: "https://example.com/a.png".to_string(),
            clinic_name: Some("City Clinic".to_string()),
            rating: None,
            review_count: None,
            gender: None,
            qualifications: Some("MBBS".to_string()),
        }
    }

    #[test]
    fn test_missing_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("doctors.json"));

        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_returns_same_records() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/data/doctors.json"));
        let records = vec![provider("a"), provider("b")];

        store.save_all(&records).unwrap();

        assert_eq!(store.load_all().unwrap(), records);
    }

    #[test]
    fn test_save_replaces_whole_collection() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("doctors.json"));

        store.save_all(&[provider("a"), provider("b")]).unwrap();
        store.save_all(&[provider("c")]).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "c");
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("doctors.json"));

        store.save_all(&[provider("a")]).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["doctors.json".to_string()]);
    }

    #[test]
    fn test_corrupt_file_is_read_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doctors.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load_all().unwrap_err();
        assert!(matches!(err, MedifindError::StoreRead { .. }));
    }

    #[test]
    fn test_unwritable_target_is_write_failure() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the final rename fail.
        let path = dir.path().join("doctors.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = JsonFileStore::new(&path)
            .save_all(&[provider("a")])
            .unwrap_err();
        assert!(matches!(err, MedifindError::StoreWrite { .. }));
    }
}
