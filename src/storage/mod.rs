//! Object storage for uploaded files.
//!
//! Keys are flat file names inside a bucket. The default implementation
//! ([`FileObjectStore`]) keeps objects in a local directory and hands out
//! URLs under the site's public base URL; another backend only has to
//! implement [`ObjectStore`].

mod error;
mod file;

use async_trait::async_trait;

pub use error::StorageError;
pub use file::FileObjectStore;

/// Bucket holding site images.
pub const IMAGE_BUCKET: &str = "site-images";

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store an object, overwriting any existing one. Returns the stored path.
    async fn put(&self, key: &str, data: &[u8]) -> Result<String, StorageError>;

    /// Read an object. `None` if it does not exist.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Delete an object. No-op if it does not exist.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// URL visitors can load the object from.
    fn public_url(&self, key: &str) -> String;
}

/// Reject keys that are empty or could leave the bucket directory.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let invalid = key.is_empty()
        || key.starts_with('.')
        || key.contains('/')
        || key.contains('\\')
        || key.contains('\0');

    if invalid {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("logo.png", true)]
    #[case("hero banner (1).jpg", true)]
    #[case("", false)]
    #[case("../etc/passwd", false)]
    #[case(".hidden", false)]
    #[case("nested/logo.png", false)]
    #[case("c:\\logo.png", false)]
    fn test_validate_key(#[case] key: &str, #[case] ok: bool) {
        assert_eq!(validate_key(key).is_ok(), ok);
    }
}
