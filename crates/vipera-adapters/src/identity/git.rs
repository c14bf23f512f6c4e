//! Author lookup via the global git configuration.

use std::process::Command;

use tracing::debug;
use vipera_core::application::ports::AuthorSource;

/// Resolves the author name from `git config --global user.name`.
///
/// Any failure — git missing, non-zero exit, empty value — yields `None`;
/// the service substitutes its fallback constant. The lookup is a single
/// synchronous process call per invocation.
#[derive(Debug, Clone, Copy)]
pub struct GitAuthorLookup;

impl GitAuthorLookup {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GitAuthorLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorSource for GitAuthorLookup {
    fn author_name(&self) -> Option<String> {
        let output = match Command::new("git")
            .args(["config", "--global", "user.name"])
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                debug!(error = %e, "failed to spawn git for author lookup");
                return None;
            }
        };

        if !output.status.success() {
            debug!(status = %output.status, "git config returned non-zero status");
            return None;
        }

        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() {
            debug!("git user.name is unset or empty");
            None
        } else {
            Some(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_never_panics_and_never_returns_empty() {
        // Whether git is configured in the test environment or not, the
        // adapter must either produce a non-empty name or None.
        match GitAuthorLookup::new().author_name() {
            Some(name) => assert!(!name.trim().is_empty()),
            None => {}
        }
    }
}
