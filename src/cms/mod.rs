//! Admin operations behind the HTTP handlers.
//!
//! Each service owns the backend handles it needs and returns [`CmsError`]
//! so handlers only translate results into responses.
//!
//! [`CmsError`]: crate::error::CmsError

mod auth;
mod content;
mod images;

pub use auth::{AuthService, SessionTokens};
pub use content::{ContentChanges, ContentService};
pub use images::{ImageService, ImageUpload, MAX_IMAGE_BYTES};
