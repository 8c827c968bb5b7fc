//! Utility functions shared across the application.
//!
//! - [`token_generator`] - Random short-token generation

pub mod token_generator;
