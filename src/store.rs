use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use crate::model::record::AttendanceRecord;

/// Flat-file persistence for the attendance list.
///
/// The backing file holds a single JSON array and is rewritten in full after
/// every mutation. The file is the durable source of truth; the in-memory
/// copy held by the handlers is a working cache.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full record sequence. Never fails the caller: a missing,
    /// empty, or malformed file all come back as an empty list.
    pub fn load(&self) -> Vec<AttendanceRecord> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    warn!(path = %self.path.display(), error = %e, "Could not read attendance file, starting empty");
                }
                return Vec::new();
            }
        };

        if contents.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Malformed attendance file, starting empty");
                Vec::new()
            }
        }
    }

    /// Replaces the file contents with the full sequence. The JSON goes to a
    /// sibling temp file first and is renamed into place, so a failed save
    /// leaves the previous contents intact.
    pub fn save(&self, records: &[AttendanceRecord]) -> Result<()> {
        let json =
            serde_json::to_string_pretty(records).context("serializing attendance records")?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;

        Ok(())
    }
}
