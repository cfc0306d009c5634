//! Database module exports.

mod models;
mod mongo;
mod repository;
mod store;

pub use models::*;
pub use mongo::Database;
pub use repository::{ContentRepository, ImageRepository, SessionRepository};
pub use store::{ContentStore, ImageCatalog, SessionStore};
