//! HTTP front end.
//!
//! - [`server`] - Server context, router construction and the listener loop
//! - [`handlers`] - Form page and result endpoint

mod handlers;
mod server;

pub use handlers::{ErrorBody, ResultForm};
pub use server::{create_app, serve, ServerContext};
