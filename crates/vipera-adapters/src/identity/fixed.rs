//! Fixed author source for configuration overrides and tests.

use vipera_core::application::ports::AuthorSource;

/// Always returns the same author name.
///
/// Used when the configuration pins an author explicitly, and by tests that
/// need byte-reproducible output.
#[derive(Debug, Clone)]
pub struct StaticAuthor {
    name: String,
}

impl StaticAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl AuthorSource for StaticAuthor {
    fn author_name(&self) -> Option<String> {
        Some(self.name.clone())
    }
}
