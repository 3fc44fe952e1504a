//! Data exchanged with the share backend.

pub mod auth;
pub mod id;
pub mod share;
pub mod timestamp;

pub use auth::LoginResponse;
pub use id::ShareId;
pub use share::{CreateShareRequest, CreatedShare, EditShareRequest, ShareRecord, VideoTitle};
