//! Infrastructure adapters for Vipera.
//!
//! This crate implements the ports defined in `vipera-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod identity;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use identity::{GitAuthorLookup, StaticAuthor};
pub use renderer::SwiftRenderer;
