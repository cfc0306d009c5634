//! Database models.

pub mod content;
pub mod image;
pub mod session;

pub use content::ContentRow;
pub use image::ImageRecord;
pub use session::SessionRecord;
