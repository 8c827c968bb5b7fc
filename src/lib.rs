//! # linkstore
//!
//! A minimal in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! The crate follows a layered structure with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Link creation and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory store
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - The browser-facing landing page
//!
//! ## Behavior
//!
//! - Short tokens are either caller-chosen custom names or 12-character
//!   random strings over the 52 ASCII letters
//! - Tokens are unique for the lifetime of the process; custom-name
//!   conflicts are rejected, random collisions are resampled
//! - The mapping is memory-resident only and is lost on restart
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional overrides
//! export LISTEN="0.0.0.0:8080"
//! export TOKEN_LENGTH="12"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryLinkRepository;
    pub use crate::state::AppState;
}
