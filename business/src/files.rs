//! File list state.
//!
//! Holds the canonical in-memory set of file records for the current
//! session; persistence lives in the file index collaborator. New records
//! arrive from the upload pipeline via [`FilesState::push_record`], a full
//! refresh arrives via [`FilesState::update_records`].

use chrono::{DateTime, Duration, Utc};
use log::error;
use ustr::Ustr;

use crate::Effect;
use fileshare_storage::{FileRecord, ObjectStore};

/// How long the "copied" badge stays on a row after copying a share link.
const COPIED_BADGE_SECONDS: i64 = 2;

/// Projection of the file list for rendering.
///
/// Loading takes precedence over the empty state; the two are never shown
/// together.
#[derive(Debug, PartialEq, Eq)]
pub enum FilesView<'a> {
    Loading,
    Empty,
    Rows(&'a [FileRecord]),
}

/// State for the file list panel.
#[derive(Debug, Default)]
pub struct FilesState {
    records: Vec<FileRecord>,
    loading: bool,
    error: Option<String>,
    last_fetch: Option<DateTime<Utc>>,
    /// Row showing the transient "copied" badge, with the copy time.
    copied: Option<(Ustr, DateTime<Utc>)>,
}

impl FilesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the record set from a fetch.
    pub fn update_records(&mut self, records: Vec<FileRecord>, now: DateTime<Utc>) {
        self.records = records;
        self.loading = false;
        self.error = None;
        self.last_fetch = Some(now);
    }

    /// Append a record emitted by the upload pipeline.
    pub fn push_record(&mut self, record: FileRecord) {
        self.records.push(record);
    }

    /// Remove a record by id. Removes exactly one entry; unknown ids are a
    /// no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(position) = self.records.iter().position(|r| r.id == id) else {
            return false;
        };
        self.records.remove(position);
        true
    }

    /// Reflect a share produced by the index collaborator.
    pub fn mark_shared(&mut self, id: &str, share_url: String) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        record.shared = true;
        record.share_url = Some(share_url);
        true
    }

    pub fn set_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.loading = false;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn view(&self) -> FilesView<'_> {
        if self.loading {
            FilesView::Loading
        } else if self.records.is_empty() {
            FilesView::Empty
        } else {
            FilesView::Rows(&self.records)
        }
    }

    /// Copy a record's share link.
    ///
    /// Pure transition: marks the row as copied and returns the effects
    /// for the caller to execute. Records that are not shared (or unknown
    /// ids) produce no effects and no state change.
    pub fn copy_share_link(&mut self, id: &str, now: DateTime<Utc>) -> Vec<Effect> {
        let Some(record) = self.records.iter().find(|r| r.id == id) else {
            return Vec::new();
        };
        let Some(url) = record.share_url.clone().filter(|_| record.shared) else {
            return Vec::new();
        };

        self.copied = Some((Ustr::from(id), now));
        vec![
            Effect::CopyToClipboard(url),
            Effect::Notify("Share link copied".to_owned()),
        ]
    }

    /// Whether the "copied" badge is still active for the given row.
    pub fn copied_badge_active(&self, id: &str, now: DateTime<Utc>) -> bool {
        let Some((copied_id, at)) = self.copied else {
            return false;
        };
        copied_id.as_str() == id
            && now.signed_duration_since(at) < Duration::seconds(COPIED_BADGE_SECONDS)
    }
}

/// Error surfaced to the user when a download fails.
///
/// Deliberately carries no structured detail; the underlying cause is
/// logged instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to download file")]
pub struct DownloadError;

/// Fetch a record's bytes from the object store for a client-side save.
///
/// Delegates to `get_object` with the record's storage path. The record is
/// never mutated; a failure degrades to the generic [`DownloadError`].
pub async fn download<S: ObjectStore>(
    store: &S,
    record: &FileRecord,
) -> Result<Effect, DownloadError> {
    match store.get_object(&record.storage_path).await {
        Ok(bytes) => Ok(Effect::SaveFile {
            name: record.display_name.clone(),
            bytes,
        }),
        Err(err) => {
            error!("download failed for {}: {err}", record.storage_path);
            Err(DownloadError)
        }
    }
}
