//! # sharedesk-core
//!
//! Core crate for ShareDesk. Contains the configuration schemas, the share
//! record DTOs exchanged with the backend, the transport and token-store
//! traits, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ShareDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
