//! Application layer for Vipera.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All naming and layout rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerateService, GeneratedModule};

// Re-export port traits (for adapter implementation)
pub use ports::{ArtifactRenderer, AuthorSource, Filesystem};

pub use error::ApplicationError;
