//! In-memory object store for testing.

use super::traits::ObjectStore;
use super::types::{PutObjectRequest, StorageError};

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Number of progress ticks a mock transfer reports.
const PROGRESS_STEPS: u8 = 8;

/// In-memory implementation of [`ObjectStore`] for tests.
///
/// Counts `put_object` calls so tests can assert that validation failures
/// never reach storage, and supports one-shot failure injection for the
/// transfer and download error paths.
#[derive(Clone, Default)]
pub struct MemObjectStore {
    objects: Arc<RwLock<HashMap<String, StoredObject>>>,
    put_calls: Arc<AtomicUsize>,
    fail_next_put: Arc<AtomicBool>,
    fail_next_get: Arc<AtomicBool>,
}

#[derive(Clone)]
struct StoredObject {
    content: Vec<u8>,
    content_type: String,
}

impl MemObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `put_object` calls made so far, including failed ones.
    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    /// Make the next `put_object` call fail with a storage error.
    pub fn fail_next_put(&self) {
        self.fail_next_put.store(true, Ordering::SeqCst);
    }

    /// Make the next `get_object` call fail with a storage error.
    pub fn fail_next_get(&self) {
        self.fail_next_get.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectStore for MemObjectStore {
    type Error = StorageError;

    async fn put_object(&self, request: PutObjectRequest) -> Result<String, Self::Error> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_next_put.swap(false, Ordering::SeqCst) {
            return Err(StorageError::Storage("injected put failure".to_owned()));
        }

        // Report progress in fixed steps so pipeline progress handling is
        // actually exercised.
        if let Some(progress) = &request.progress {
            for step in 1..=PROGRESS_STEPS {
                let pct = (u32::from(step) * 100 / u32::from(PROGRESS_STEPS)) as u8;
                // Receiver may have gone away; progress is best-effort.
                let _ = progress.send(pct);
            }
        }

        let mut objects = self.objects.write().expect("lock poisoned");
        objects.insert(
            request.path.clone(),
            StoredObject {
                content: request.content,
                content_type: request.content_type,
            },
        );
        Ok(request.path)
    }

    async fn get_object(&self, locator: &str) -> Result<Vec<u8>, Self::Error> {
        if self.fail_next_get.swap(false, Ordering::SeqCst) {
            return Err(StorageError::Storage("injected get failure".to_owned()));
        }

        let objects = self.objects.read().expect("lock poisoned");
        objects
            .get(locator)
            .map(|object| object.content.clone())
            .ok_or_else(|| StorageError::NotFound(locator.to_owned()))
    }

    async fn delete_object(&self, locator: &str) -> Result<bool, Self::Error> {
        let mut objects = self.objects.write().expect("lock poisoned");
        Ok(objects.remove(locator).is_some())
    }

    async fn object_exists(&self, locator: &str) -> Result<bool, Self::Error> {
        let objects = self.objects.read().expect("lock poisoned");
        Ok(objects.contains_key(locator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trip() {
        let store = MemObjectStore::new();
        let locator = store
            .put_object(PutObjectRequest::new(
                "uploads/photo.png",
                b"image bytes".to_vec(),
                "image/png",
            ))
            .await
            .unwrap();

        assert_eq!(locator, "uploads/photo.png");
        assert_eq!(store.get_object(&locator).await.unwrap(), b"image bytes");
        assert_eq!(store.put_calls(), 1);

        let objects = store.objects.read().unwrap();
        assert_eq!(objects[&locator].content_type, "image/png");
    }

    #[tokio::test]
    async fn get_missing_object_is_not_found() {
        let store = MemObjectStore::new();
        let result = store.get_object("missing").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn progress_is_reported_in_increasing_steps() {
        let store = MemObjectStore::new();
        let (tx, rx) = flume::unbounded();

        store
            .put_object(
                PutObjectRequest::new("a.bin", vec![0u8; 1024], "application/octet-stream")
                    .with_progress(tx),
            )
            .await
            .unwrap();

        let reported: Vec<u8> = rx.drain().collect();
        assert!(!reported.is_empty());
        assert!(reported.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*reported.last().unwrap(), 100);
    }

    #[tokio::test]
    async fn injected_put_failure_fails_once() {
        let store = MemObjectStore::new();
        store.fail_next_put();

        let request = PutObjectRequest::new("a", b"x".to_vec(), "text/plain");
        assert!(store.put_object(request.clone()).await.is_err());
        assert!(store.put_object(request).await.is_ok());
        assert_eq!(store.put_calls(), 2);
    }

    #[tokio::test]
    async fn delete_reports_whether_object_existed() {
        let store = MemObjectStore::new();
        store
            .put_object(PutObjectRequest::new("a", b"x".to_vec(), "text/plain"))
            .await
            .unwrap();

        assert!(store.delete_object("a").await.unwrap());
        assert!(!store.delete_object("a").await.unwrap());
        assert!(store.is_empty());
    }
}
