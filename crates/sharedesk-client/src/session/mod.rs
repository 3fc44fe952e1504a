//! Session ownership and token persistence.

pub mod manager;
pub mod store;

pub use manager::SessionManager;
pub use store::{FileTokenStore, MemoryTokenStore};
