//! SupportME HTTP API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod server;
pub mod store;

pub use config::Config;
pub use server::{create_router, start_server};
pub use store::{PostgresSupportStore, SupportStore};
