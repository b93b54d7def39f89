//! Upload pipeline state machine.
//!
//! Drives one file through `validating → uploading → processing →
//! complete`, emitting a snapshot of the task after every observable
//! change. Terminal stages are `complete` and `error`; once a task reaches
//! either, it accepts no further events and the caller discards it.
//!
//! Progress is clamped to 99 while the transfer and finalization are in
//! flight — the last percent is reserved for the `processing → complete`
//! transition so the bar never shows 100% before the file record is
//! durably created.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use log::{error, info};
use serde::Serialize;

use fileshare_storage::{FileIndex, FileRecord, NewFileRecord, ObjectStore, PutObjectRequest};

/// Default upload size limit: 100 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// Highest progress value reported before the task completes.
const MAX_IN_FLIGHT_PROGRESS: u8 = 99;

/// Stage of an upload task. Ordering is strictly linear; there is no
/// skipping and no re-entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStage {
    Validating,
    Uploading,
    Processing,
    Complete,
    Error,
}

impl UploadStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Error)
    }

    /// Short status line shown while the task is on this stage.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validating => "Validating file...",
            Self::Uploading => "Uploading to cloud...",
            Self::Processing => "Processing file...",
            Self::Complete => "Upload complete!",
            Self::Error => "Upload failed",
        }
    }

    /// Longer description shown under the status line.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Validating => "Checking file integrity and permissions",
            Self::Uploading => "Transferring file to secure cloud storage",
            Self::Processing => "Finalizing and indexing your file",
            Self::Complete => "File is now available in your dashboard",
            Self::Error => "Please try again or contact support",
        }
    }
}

/// One in-flight transfer. Snapshots of this are what observers receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadTask {
    pub file_name: String,
    pub size_bytes: u64,
    pub stage: UploadStage,
    /// 0-100; monotonically non-decreasing, 100 only on `Complete`.
    pub progress_percent: u8,
    /// Present iff `stage` is `Error`.
    pub error_message: Option<String>,
}

impl UploadTask {
    fn new(file_name: String, size_bytes: u64) -> Self {
        Self {
            file_name,
            size_bytes,
            stage: UploadStage::Validating,
            progress_percent: 0,
            error_message: None,
        }
    }
}

/// A file the user selected or dropped, before any validation.
#[derive(Debug, Clone)]
pub struct PendingFile {
    pub name: String,
    pub size_bytes: u64,
    pub bytes: Vec<u8>,
}

impl PendingFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size_bytes = bytes.len() as u64;
        Self {
            name: name.into(),
            size_bytes,
            bytes,
        }
    }
}

/// Pipeline-imposed limits, checked before any storage I/O.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_bytes: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Terminal failure of an upload. The display string of each variant is
/// exactly what lands in `UploadTask::error_message`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// A second `begin_upload` while a task is active is rejected; the
    /// active task is left untouched and no snapshot is emitted.
    #[error("another upload is already in progress")]
    Busy,

    #[error("invalid file")]
    InvalidFile,

    #[error("file exceeds size limit")]
    SizeLimitExceeded,

    #[error("{0}")]
    Transfer(String),

    #[error("{0}")]
    Finalize(String),
}

/// Drives one upload at a time against an object store and a file index.
///
/// Observers receive every [`UploadTask`] snapshot over the receiver
/// returned by [`UploadPipeline::new`]; the sequence for a task always
/// terminates in a `Complete` or `Error` snapshot.
pub struct UploadPipeline<S: ObjectStore, I: FileIndex> {
    store: S,
    index: I,
    limits: UploadLimits,
    active: Arc<AtomicBool>,
    events: flume::Sender<UploadTask>,
}

impl<S: ObjectStore, I: FileIndex> UploadPipeline<S, I> {
    pub fn new(store: S, index: I) -> (Self, flume::Receiver<UploadTask>) {
        Self::with_limits(store, index, UploadLimits::default())
    }

    pub fn with_limits(
        store: S,
        index: I,
        limits: UploadLimits,
    ) -> (Self, flume::Receiver<UploadTask>) {
        let (events, receiver) = flume::unbounded();
        (
            Self {
                store,
                index,
                limits,
                active: Arc::new(AtomicBool::new(false)),
                events,
            },
            receiver,
        )
    }

    /// Whether a task is currently in flight.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Run one file through the full pipeline.
    ///
    /// Returns the created [`FileRecord`] on success. Validation failures
    /// never touch the object store. There is no retry and no
    /// cancellation; once started, the task runs to completion or failure.
    pub async fn begin_upload(&self, file: PendingFile) -> Result<FileRecord, UploadError> {
        if self.active.swap(true, Ordering::SeqCst) {
            info!("upload rejected: another task is in flight");
            return Err(UploadError::Busy);
        }
        let _guard = ActiveGuard(&self.active);

        let mut task = UploadTask::new(file.name.clone(), file.size_bytes);
        self.emit(&task);

        // Validation: cheap fail-fast before any I/O.
        if file.name.trim().is_empty() {
            return Err(self.fail(&mut task, UploadError::InvalidFile));
        }
        if file.size_bytes > self.limits.max_bytes {
            info!(
                "upload rejected: {} is {} bytes, limit {}",
                task.file_name, file.size_bytes, self.limits.max_bytes
            );
            return Err(self.fail(&mut task, UploadError::SizeLimitExceeded));
        }

        task.stage = UploadStage::Uploading;
        task.progress_percent = 0;
        self.emit(&task);

        let storage_path = format!("uploads/{}/{}", uuid::Uuid::new_v4(), task.file_name);
        let locator = match self.transfer(&mut task, &storage_path, file.bytes).await {
            Ok(locator) => locator,
            Err(err) => return Err(self.fail(&mut task, err)),
        };

        task.stage = UploadStage::Processing;
        task.progress_percent = MAX_IN_FLIGHT_PROGRESS;
        self.emit(&task);

        let new_record = NewFileRecord {
            display_name: task.file_name.clone(),
            size_bytes: task.size_bytes,
            storage_path: locator,
            uploaded_at: Utc::now(),
        };
        let record = match self.index.create_record(new_record).await {
            Ok(record) => record,
            Err(err) => {
                error!("metadata write failed for {}: {err}", task.file_name);
                return Err(self.fail(&mut task, UploadError::Finalize(err.to_string())));
            }
        };

        task.stage = UploadStage::Complete;
        task.progress_percent = 100;
        self.emit(&task);
        info!("upload complete: {} -> {}", task.file_name, record.id);
        Ok(record)
    }

    /// Transfer stage: one `put_object` call, relaying backend progress
    /// into clamped, monotonic task snapshots.
    async fn transfer(
        &self,
        task: &mut UploadTask,
        storage_path: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError> {
        let (progress_tx, progress_rx) = flume::unbounded::<u8>();
        let request = PutObjectRequest::new(storage_path, bytes, "application/octet-stream")
            .with_progress(progress_tx);

        let put = self.store.put_object(request);
        let relay = async {
            // Ends when the backend drops its progress sender.
            while let Ok(pct) = progress_rx.recv_async().await {
                let clamped = pct.min(MAX_IN_FLIGHT_PROGRESS);
                if clamped > task.progress_percent {
                    task.progress_percent = clamped;
                    self.emit(task);
                }
            }
        };

        let (result, ()) = tokio::join!(put, relay);
        result.map_err(|err| {
            error!("transfer failed for {storage_path}: {err}");
            let message = err.to_string();
            if message.is_empty() {
                UploadError::Transfer("upload failed".to_owned())
            } else {
                UploadError::Transfer(message)
            }
        })
    }

    fn fail(&self, task: &mut UploadTask, err: UploadError) -> UploadError {
        task.stage = UploadStage::Error;
        task.error_message = Some(err.to_string());
        self.emit(task);
        err
    }

    fn emit(&self, task: &UploadTask) {
        // Observer may have gone away; the pipeline result still carries
        // the outcome.
        let _ = self.events.send(task.clone());
    }
}

/// Clears the active flag when a `begin_upload` call finishes, on every
/// return path.
struct ActiveGuard<'a>(&'a AtomicBool);

impl Drop for ActiveGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
