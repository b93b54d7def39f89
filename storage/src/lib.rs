//! Storage collaborators for the FileShare client.
//!
//! Two seams are defined here:
//!
//! - [`ObjectStore`]: binary object storage (put/get/delete by opaque
//!   locator), with an OpenDAL S3 implementation and an in-memory mock.
//! - [`FileIndex`]: the file metadata index written after a successful
//!   transfer and read to populate the file list.
//!
//! Both are trait-based so the upload pipeline and presenters can be tested
//! entirely against in-memory implementations.

pub mod index;
mod mock;
mod remote;
mod traits;
mod types;

pub use index::{FileIndex, FileIndexError, FileRecord, MemFileIndex, NewFileRecord};
pub use mock::MemObjectStore;
pub use remote::{S3ObjectStore, S3StoreConfig};
pub use traits::ObjectStore;
pub use types::{PutObjectRequest, StorageError};

#[cfg(test)]
mod tests {
    use super::*;

    async fn generic_put<S: ObjectStore>(
        store: &S,
        path: &str,
        content: Vec<u8>,
    ) -> Result<String, S::Error> {
        let request = PutObjectRequest::new(path, content, "application/octet-stream");
        store.put_object(request).await
    }

    #[tokio::test]
    async fn object_store_is_usable_through_the_trait() {
        let store = MemObjectStore::new();
        let locator = generic_put(&store, "test/file.bin", b"binary data".to_vec())
            .await
            .unwrap();
        assert_eq!(locator, "test/file.bin");
        assert!(store.object_exists(&locator).await.unwrap());
    }
}
