use std::fs;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

use crate::store::schema::Entry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no data file found (looked for {working} and {seed})")]
    MissingDataFile { working: String, seed: String },
    #[error("{path} is not a valid lesson file: {source}")]
    CorruptDataFile {
        path: String,
        source: serde_json::Error,
    },
    #[error("could not read {path}: {source}")]
    ReadFailure {
        path: String,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteFailure {
        path: String,
        source: std::io::Error,
    },
}

/// Persistence for the lesson document. Reads prefer the working file;
/// the seed file is a read-only fallback for first runs and is never
/// written back.
pub struct DataStore {
    working: PathBuf,
    seed: PathBuf,
}

impl DataStore {
    pub fn new(working: impl Into<PathBuf>, seed: impl Into<PathBuf>) -> Self {
        Self {
            working: working.into(),
            seed: seed.into(),
        }
    }

    /// Load the full document. Working file wins; seed file is the
    /// fallback; neither existing is `MissingDataFile`. A file that
    /// exists but does not parse as an entry array is `CorruptDataFile`.
    pub fn load(&self) -> Result<Vec<Entry>, StoreError> {
        let path = if self.working.exists() {
            &self.working
        } else if self.seed.exists() {
            &self.seed
        } else {
            return Err(StoreError::MissingDataFile {
                working: self.working.display().to_string(),
                seed: self.seed.display().to_string(),
            });
        };

        let content = fs::read_to_string(path).map_err(|source| StoreError::ReadFailure {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| StoreError::CorruptDataFile {
            path: path.display().to_string(),
            source,
        })
    }

    /// Overwrite the working file with the whole document as pretty
    /// JSON. Write-then-rename so a crash mid-write leaves the previous
    /// version intact.
    pub fn save(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let write_failure = |source| StoreError::WriteFailure {
            path: self.working.display().to_string(),
            source,
        };

        let json = serde_json::to_string_pretty(entries).map_err(|e| StoreError::WriteFailure {
            path: self.working.display().to_string(),
            source: std::io::Error::other(e),
        })?;

        let tmp_path = self.working.with_extension("json.tmp");
        let result = (|| {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()?;
            fs::rename(&tmp_path, &self.working)
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result.map_err(write_failure)
    }
}
