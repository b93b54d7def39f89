//! In-memory file index for testing.

use super::FileIndex;
use super::types::{FileIndexError, FileRecord, NewFileRecord};

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory implementation of [`FileIndex`] for tests.
///
/// Insertion order is preserved for `list_records` so tests can assert on
/// stable listings. Supports one-shot failure injection for the
/// finalization error path.
#[derive(Clone, Default)]
pub struct MemFileIndex {
    inner: Arc<RwLock<Inner>>,
    fail_next_create: Arc<AtomicBool>,
}

#[derive(Default)]
struct Inner {
    records: HashMap<String, FileRecord>,
    order: Vec<String>,
}

impl MemFileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `create_record` call fail with an index error.
    pub fn fail_next_create(&self) {
        self.fail_next_create.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FileIndex for MemFileIndex {
    type Error = FileIndexError;

    async fn create_record(&self, record: NewFileRecord) -> Result<FileRecord, Self::Error> {
        if self.fail_next_create.swap(false, Ordering::SeqCst) {
            return Err(FileIndexError::Index(
                "injected create failure".to_owned(),
            ));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let record = record.into_record(id.clone());

        let mut inner = self.inner.write().expect("lock poisoned");
        inner.records.insert(id.clone(), record.clone());
        inner.order.push(id);
        Ok(record)
    }

    async fn list_records(&self) -> Result<Vec<FileRecord>, Self::Error> {
        let inner = self.inner.read().expect("lock poisoned");
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect())
    }

    async fn delete_record(&self, id: &str) -> Result<bool, Self::Error> {
        let mut inner = self.inner.write().expect("lock poisoned");
        let removed = inner.records.remove(id).is_some();
        if removed {
            inner.order.retain(|existing| existing != id);
        }
        Ok(removed)
    }

    async fn set_shared(&self, id: &str, share_url: String) -> Result<FileRecord, Self::Error> {
        let mut inner = self.inner.write().expect("lock poisoned");
        let record = inner
            .records
            .get_mut(id)
            .ok_or_else(|| FileIndexError::NotFound(id.to_owned()))?;
        record.shared = true;
        record.share_url = Some(share_url);
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn new_record(name: &str) -> NewFileRecord {
        NewFileRecord {
            display_name: name.to_owned(),
            size_bytes: 1024,
            storage_path: format!("uploads/{name}"),
            uploaded_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_assigns_unique_ids() {
        let index = MemFileIndex::new();
        let a = index.create_record(new_record("a.txt")).await.unwrap();
        let b = index.create_record(new_record("b.txt")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(index.len(), 2);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let index = MemFileIndex::new();
        for name in ["first.txt", "second.txt", "third.txt"] {
            index.create_record(new_record(name)).await.unwrap();
        }

        let listed = index.list_records().await.unwrap();
        let names: Vec<_> = listed.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, ["first.txt", "second.txt", "third.txt"]);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let index = MemFileIndex::new();
        let a = index.create_record(new_record("a.txt")).await.unwrap();
        index.create_record(new_record("b.txt")).await.unwrap();

        assert!(index.delete_record(&a.id).await.unwrap());
        assert_eq!(index.len(), 1);
        // Deleting again is a no-op, not an error.
        assert!(!index.delete_record(&a.id).await.unwrap());
    }

    #[tokio::test]
    async fn set_shared_attaches_url() {
        let index = MemFileIndex::new();
        let record = index.create_record(new_record("a.txt")).await.unwrap();

        let shared = index
            .set_shared(&record.id, "https://share.example/a".to_owned())
            .await
            .unwrap();
        assert!(shared.shared);
        assert_eq!(shared.share_url.as_deref(), Some("https://share.example/a"));
    }

    #[tokio::test]
    async fn set_shared_unknown_id_is_not_found() {
        let index = MemFileIndex::new();
        let result = index.set_shared("missing", "url".to_owned()).await;
        assert!(matches!(result, Err(FileIndexError::NotFound(_))));
    }

    #[tokio::test]
    async fn injected_create_failure_fails_once() {
        let index = MemFileIndex::new();
        index.fail_next_create();

        assert!(index.create_record(new_record("a.txt")).await.is_err());
        assert!(index.create_record(new_record("a.txt")).await.is_ok());
    }
}
