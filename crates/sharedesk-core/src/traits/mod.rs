//! Core traits defined in `sharedesk-core` and implemented by other crates.

pub mod token_store;
pub mod transport;

pub use token_store::TokenStore;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody};
