//! Shipdesk admin API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! the legacy upgrade runner) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
pub mod upgrade;
