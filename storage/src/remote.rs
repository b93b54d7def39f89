//! S3-compatible object store backed by OpenDAL.

use super::traits::ObjectStore;
use super::types::{PutObjectRequest, StorageError};

use opendal::Operator;
use tracing::debug;

/// Upload chunk size; one progress tick is reported per chunk.
const CHUNK_SIZE: usize = 256 * 1024;

/// Configuration for an S3-compatible bucket (AWS S3, Cloudflare R2, minio).
#[derive(Debug, Clone)]
pub struct S3StoreConfig {
    pub bucket: String,
    pub region: String,
    pub endpoint: Option<String>,
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Object store backed by an S3-compatible service through OpenDAL.
#[derive(Clone)]
pub struct S3ObjectStore {
    op: Operator,
}

impl S3ObjectStore {
    pub fn new(config: &S3StoreConfig) -> Result<Self, StorageError> {
        let mut builder = opendal::services::S3::default()
            .bucket(&config.bucket)
            .region(&config.region)
            .access_key_id(&config.access_key_id)
            .secret_access_key(&config.secret_access_key);

        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint(endpoint);
        }

        let op = Operator::new(builder)
            .map_err(|e| StorageError::Connection(e.to_string()))?
            .finish();
        Ok(Self { op })
    }

    /// Check whether the backend is reachable with the configured
    /// credentials.
    pub async fn check(&self) -> bool {
        self.op.check().await.is_ok()
    }
}

/// Whole-percent transfer progress.
///
/// Widens to `u64` so the intermediate product cannot overflow `usize` on
/// 32-bit targets.
fn percent(written: usize, total: usize) -> u8 {
    if total == 0 {
        100
    } else {
        (written as u64 * 100 / total as u64) as u8
    }
}

impl ObjectStore for S3ObjectStore {
    type Error = StorageError;

    async fn put_object(&self, request: PutObjectRequest) -> Result<String, Self::Error> {
        let total = request.content.len();
        debug!(path = %request.path, size = total, "uploading object");

        let mut writer = self
            .op
            .writer_with(&request.path)
            .content_type(&request.content_type)
            .await
            .map_err(|e| StorageError::Storage(e.to_string()))?;

        let mut written = 0usize;
        for chunk in request.content.chunks(CHUNK_SIZE) {
            writer
                .write(chunk.to_vec())
                .await
                .map_err(|e| StorageError::Storage(e.to_string()))?;
            written += chunk.len();
            if let Some(progress) = &request.progress {
                let _ = progress.send(percent(written, total));
            }
        }

        writer
            .close()
            .await
            .map_err(|e| StorageError::Storage(e.to_string()))?;

        if let Some(progress) = &request.progress {
            let _ = progress.send(100);
        }

        Ok(request.path)
    }

    async fn get_object(&self, locator: &str) -> Result<Vec<u8>, Self::Error> {
        let buffer = self.op.read(locator).await.map_err(|e| {
            if e.kind() == opendal::ErrorKind::NotFound {
                StorageError::NotFound(locator.to_owned())
            } else {
                StorageError::Storage(e.to_string())
            }
        })?;
        Ok(buffer.to_vec())
    }

    async fn delete_object(&self, locator: &str) -> Result<bool, Self::Error> {
        let existed = self.object_exists(locator).await?;
        if existed {
            self.op
                .delete(locator)
                .await
                .map_err(|e| StorageError::Storage(e.to_string()))?;
        }
        Ok(existed)
    }

    async fn object_exists(&self, locator: &str) -> Result<bool, Self::Error> {
        self.op
            .exists(locator)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_covers_the_full_range() {
        assert_eq!(percent(0, 1024), 0);
        assert_eq!(percent(512, 1024), 50);
        assert_eq!(percent(1024, 1024), 100);
        assert_eq!(percent(0, 0), 100);
    }

    #[test]
    fn percent_handles_large_objects() {
        let total = 100 * 1024 * 1024;
        assert_eq!(percent(total / 2, total), 50);
        assert_eq!(percent(total, total), 100);
        assert_eq!(percent(43 * 1024 * 1024, total), 43);
    }
}
