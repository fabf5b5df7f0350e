//! # papershelf
//!
//! Typed client and terminal front-end for a paper-browsing web service.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Wire types (Paper, Stats, response envelopes, ListQuery)
//! - [`api`]: Typed HTTP client for the service's `/api` surface
//! - [`router`]: Path-to-page routing with lazy page construction
//! - [`pages`]: The page views behind the navigable paths
//! - [`ui`]: Terminal formatting helpers
//! - [`config`]: Configuration management

pub mod api;
pub mod config;
pub mod models;
pub mod pages;
pub mod router;
pub mod ui;

// Re-export commonly used types
pub use api::{ApiError, PaperApi};
pub use models::Paper;
pub use router::Router;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
