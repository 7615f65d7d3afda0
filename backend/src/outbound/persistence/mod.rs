//! Persistence adapters.
//!
//! The service treats the durable store as an external collaborator reached
//! through the repository ports; these in-memory adapters stand in for it
//! with the same atomic per-record semantics.

mod memory;

pub use memory::{MemoryBlogRepository, MemoryUserRepository};
