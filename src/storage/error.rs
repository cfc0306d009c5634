use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("invalid object key: {0:?}")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
