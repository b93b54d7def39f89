//! Object storage trait definition.

use super::types::PutObjectRequest;
use std::future::Future;

/// Generic interface to the binary object storage backend.
///
/// The upload pipeline's transfer stage maps 1:1 onto one [`put_object`]
/// call, and a download maps 1:1 onto one [`get_object`] call.
///
/// [`put_object`]: ObjectStore::put_object
/// [`get_object`]: ObjectStore::get_object
pub trait ObjectStore: Clone + Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Store an object and return its locator.
    fn put_object(
        &self,
        request: PutObjectRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Fetch an object's bytes by locator.
    fn get_object(
        &self,
        locator: &str,
    ) -> impl Future<Output = Result<Vec<u8>, Self::Error>> + Send;

    /// Delete an object. Returns whether anything was removed.
    fn delete_object(&self, locator: &str)
    -> impl Future<Output = Result<bool, Self::Error>> + Send;

    fn object_exists(&self, locator: &str)
    -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
