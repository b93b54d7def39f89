//! File record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted metadata for one uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Opaque unique id.
    pub id: String,
    pub display_name: String,
    /// Pre-formatted size, e.g. `1.9 MB`.
    pub human_size: String,
    /// Pre-formatted upload date, e.g. `Mar 7, 2024`.
    pub uploaded_at: String,
    pub shared: bool,
    /// Present iff `shared` is true.
    pub share_url: Option<String>,
    /// Opaque locator for the object storage backend.
    pub storage_path: String,
}

/// Metadata for a record about to be created.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    pub display_name: String,
    pub size_bytes: u64,
    pub storage_path: String,
    pub uploaded_at: DateTime<Utc>,
}

impl NewFileRecord {
    /// Build the persisted record, formatting size and date for display.
    pub fn into_record(self, id: String) -> FileRecord {
        FileRecord {
            id,
            display_name: self.display_name,
            human_size: fileshare_utils::human_size(self.size_bytes),
            uploaded_at: fileshare_utils::format_uploaded_at(self.uploaded_at),
            shared: false,
            share_url: None,
            storage_path: self.storage_path,
        }
    }
}

/// Error type for file index operations.
#[derive(Debug, thiserror::Error)]
pub enum FileIndexError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Index error: {0}")]
    Index(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    #[test]
    fn into_record_formats_size_and_date() {
        let new_record = NewFileRecord {
            display_name: "photo.png".to_owned(),
            size_bytes: 2_000_000,
            storage_path: "uploads/abc/photo.png".to_owned(),
            uploaded_at: Utc.with_ymd_and_hms(2024, 3, 7, 9, 0, 0).unwrap(),
        };

        let record = new_record.into_record("id-1".to_owned());
        assert_eq!(record.human_size, "1.9 MB");
        assert_eq!(record.uploaded_at, "Mar 7, 2024");
        assert!(!record.shared);
        assert!(record.share_url.is_none());
    }

    #[test]
    fn file_record_serde_round_trip() {
        let record = FileRecord {
            id: "id-1".to_owned(),
            display_name: "report.pdf".to_owned(),
            human_size: "4.2 MB".to_owned(),
            uploaded_at: "Jan 2, 2025".to_owned(),
            shared: true,
            share_url: Some("https://share.example/abc".to_owned()),
            storage_path: "uploads/x/report.pdf".to_owned(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: FileRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
