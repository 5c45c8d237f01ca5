//! CSV-backed roster storage.
//!
//! The roster lives in a single CSV file with a fixed five-column header.
//! Reads and writes always cover the whole file; there are no partial
//! updates. A missing file is not an error: the store creates it with
//! the header row on first load so the operator always has a valid
//! spreadsheet to open.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::ParticipantRecord;
use crate::error::CheckinError;

/// Column order of the roster file.
const HEADERS: [&str; 5] = ["name", "affiliation", "position", "code", "preregistered"];

/// Whole-file CSV store for participant records.
#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    /// Creates a store backed by the given file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every record from the roster file.
    ///
    /// If the file does not exist yet, it is created with the header row
    /// and an empty record set is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CheckinError::Storage`] if the file cannot be read or a
    /// row fails to parse.
    pub async fn load(&self) -> Result<Vec<ParticipantRecord>, CheckinError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.save(&[]).await?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(CheckinError::Storage(e.to_string())),
        };

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: ParticipantRecord = row.map_err(|e| CheckinError::Storage(e.to_string()))?;
            records.push(record);
        }
        Ok(records)
    }

    /// Writes the full record set to the roster file, replacing it.
    ///
    /// The header row is written explicitly so an empty record set still
    /// produces a well-formed file.
    ///
    /// # Errors
    ///
    /// Returns [`CheckinError::Storage`] if serialization or the file
    /// write fails.
    pub async fn save(&self, records: &[ParticipantRecord]) -> Result<(), CheckinError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer
            .write_record(HEADERS)
            .map_err(|e| CheckinError::Storage(e.to_string()))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| CheckinError::Storage(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CheckinError::Storage(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CheckinError::Storage(e.to_string()))?;
        }
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| CheckinError::Storage(e.to_string()))
    }
}
