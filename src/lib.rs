//! userstore — in-memory user record HTTP service (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod logging;
pub mod models;
pub mod server;
pub mod store;
