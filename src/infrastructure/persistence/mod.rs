//! Repository implementations backed by process memory.

pub mod memory_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
