//! Identity adapters implementing the core `AuthorSource` port.

pub mod fixed;
pub mod git;

pub use fixed::StaticAuthor;
pub use git::GitAuthorLookup;
