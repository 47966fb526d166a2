//! Folio Server Library
//!
//! Serves the portfolio page and a read-only JSON API over the static
//! portfolio record, plus the contact submission endpoint.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod router;
pub mod state;
pub mod web;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
