//! Object storage request and error types.

/// Request to store one object.
#[derive(Debug, Clone)]
pub struct PutObjectRequest {
    /// Destination path; returned as the object locator on success.
    pub path: String,
    pub content: Vec<u8>,
    pub content_type: String,
    /// Optional sink for transfer progress, in whole percent (0-100).
    ///
    /// Backends report progress best-effort; a backend that cannot observe
    /// partial writes sends a single 100 when the transfer finishes.
    pub progress: Option<flume::Sender<u8>>,
}

impl PutObjectRequest {
    pub fn new(path: impl Into<String>, content: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content,
            content_type: content_type.into(),
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: flume::Sender<u8>) -> Self {
        self.progress = Some(progress);
        self
    }
}

/// Error type for object storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Object too large: {size} bytes exceeds maximum {max_size} bytes")]
    TooLarge { size: u64, max_size: u64 },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Connection error: {0}")]
    Connection(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_object_request_builder() {
        let (tx, _rx) = flume::unbounded();
        let request = PutObjectRequest::new("uploads/a.txt", b"hi".to_vec(), "text/plain")
            .with_progress(tx);

        assert_eq!(request.path, "uploads/a.txt");
        assert_eq!(request.content_type, "text/plain");
        assert!(request.progress.is_some());
    }

    #[test]
    fn storage_error_messages() {
        let err = StorageError::TooLarge {
            size: 200,
            max_size: 100,
        };
        assert_eq!(
            err.to_string(),
            "Object too large: 200 bytes exceeds maximum 100 bytes"
        );
        assert_eq!(
            StorageError::NotFound("a/b".to_owned()).to_string(),
            "Object not found: a/b"
        );
    }
}
