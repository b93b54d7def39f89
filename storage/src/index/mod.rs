//! File metadata index.
//!
//! The index is the metadata-finalization collaborator of the upload
//! pipeline: after the object bytes are durably stored, the pipeline writes
//! one [`FileRecord`] here. It is also the source of truth the file list is
//! loaded from.

mod mock;
mod types;

pub use mock::MemFileIndex;
pub use types::{FileIndexError, FileRecord, NewFileRecord};

use std::future::Future;

/// Trait for file metadata operations.
pub trait FileIndex: Clone + Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist metadata for a freshly uploaded object.
    fn create_record(
        &self,
        record: NewFileRecord,
    ) -> impl Future<Output = Result<FileRecord, Self::Error>> + Send;

    fn list_records(&self) -> impl Future<Output = Result<Vec<FileRecord>, Self::Error>> + Send;

    /// Delete a record by id. Returns whether anything was removed.
    fn delete_record(&self, id: &str)
    -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Mark a record as shared and attach its share URL.
    fn set_shared(
        &self,
        id: &str,
        share_url: String,
    ) -> impl Future<Output = Result<FileRecord, Self::Error>> + Send;
}
