use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use url::Url;

use super::{validate_key, ObjectStore, StorageError};

/// Object store backed by the local filesystem.
///
/// key "logo.png" in bucket "site-images" → `{base_dir}/site-images/logo.png`,
/// served publicly as `{public_base}/images/logo.png`.
#[derive(Debug, Clone)]
pub struct FileObjectStore {
    bucket_dir: PathBuf,
    public_base: Url,
}

impl FileObjectStore {
    /// Open the bucket directory under `base_dir`, creating it if needed.
    pub async fn open(base_dir: &Path, bucket: &str, public_base: Url) -> Result<Self, StorageError> {
        validate_key(bucket)?;
        let bucket_dir = base_dir.join(bucket);
        fs::create_dir_all(&bucket_dir).await?;
        debug!("Object store at {}", bucket_dir.display());

        Ok(Self {
            bucket_dir,
            public_base,
        })
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.bucket_dir.join(key))
    }
}

#[async_trait]
impl ObjectStore for FileObjectStore {
    async fn put(&self, key: &str, data: &[u8]) -> Result<String, StorageError> {
        let path = self.resolve(key)?;
        fs::write(&path, data).await?;
        debug!("Stored object {} ({} bytes)", key, data.len());
        Ok(key.to_string())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.resolve(key)?;
        match fs::read(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn public_url(&self, key: &str) -> String {
        let mut url = self.public_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("images").push(key);
        }
        url.to_string()
    }
}
