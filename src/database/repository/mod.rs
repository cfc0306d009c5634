//! Repository module - MongoDB-backed implementations of the backend seams.

mod content_repository;
mod image_repository;
mod session_repository;

pub use content_repository::ContentRepository;
pub use image_repository::ImageRepository;
pub use session_repository::SessionRepository;
