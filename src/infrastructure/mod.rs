//! Infrastructure layer with concrete repository implementations.

pub mod persistence;
