//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `vipera-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and file writes
//!   - `AuthorSource`: Identity lookup for the file headers
//!   - `ArtifactRenderer`: Template registry rendering one role at a time
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

use std::path::Path;

use crate::domain::{RenderContext, Role};
use crate::error::ViperaResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `vipera_adapters::filesystem::LocalFilesystem` (production)
/// - `vipera_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir_all` is recursive and idempotent: pre-existing directories
///   are not an error
/// - `write_file` overwrites unconditionally; the generator's rerun
///   semantics are "last write wins"
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ViperaResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ViperaResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for resolving the current user's display name.
///
/// Implemented by:
/// - `vipera_adapters::identity::GitAuthorLookup` (git global config)
/// - `vipera_adapters::identity::StaticAuthor` (fixed value, config/tests)
///
/// `None` means the collaborator could not produce a name; the service falls
/// back to [`crate::domain::DEFAULT_AUTHOR`]. Lookup failure is never fatal
/// and never shown to the user.
#[cfg_attr(test, mockall::automock)]
pub trait AuthorSource: Send + Sync {
    fn author_name(&self) -> Option<String>;
}

/// Port for rendering one artifact.
///
/// Implemented by:
/// - `vipera_adapters::renderer::SwiftRenderer` (the built-in template registry)
///
/// Rendering is total: every (role, context) pair yields a string, and the
/// same context always yields byte-identical output.
pub trait ArtifactRenderer: Send + Sync {
    fn render(&self, role: Role, ctx: &RenderContext) -> String;
}
