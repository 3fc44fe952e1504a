//! # sharedesk-client
//!
//! Everything the admin console does between a user action and the
//! backend: the owned [`session::SessionManager`], the [`gateway::ApiGateway`]
//! request contract, the pure share-table view model, form validation, and
//! the [`console::AdminConsole`] controller that ties them to a
//! [`view::ConsoleView`] adapter.

pub mod api;
pub mod console;
pub mod form;
pub mod gateway;
pub mod session;
pub mod transport;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use console::{AdminConsole, ViewState};
pub use gateway::ApiGateway;
pub use session::SessionManager;
pub use transport::ReqwestTransport;
