//! Render context: the value bundle every render function consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::identity::ModuleIdentity;

/// Author name used when the identity lookup yields nothing.
///
/// The lookup is an external collaborator (git global config); its failure
/// is recovered here and never surfaced to the user.
pub const DEFAULT_AUTHOR: &str = "GLOBEDR";

/// A calendar date as it appears in generated file headers.
///
/// Month and day render as two digits. Construction is infallible; the CLI
/// feeds in the current local date, tests feed in fixed values so rendering
/// stays byte-reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenDate {
    year: i32,
    month: u32,
    day: u32,
}

impl GenDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Zero-padded month, e.g. `08`.
    pub fn month_padded(&self) -> String {
        format!("{:02}", self.month)
    }

    /// Zero-padded day, e.g. `06`.
    pub fn day_padded(&self) -> String {
        format!("{:02}", self.day)
    }
}

impl fmt::Display for GenDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Everything a render function needs to produce one artifact.
///
/// Constructed once per invocation and shared by all seven render functions,
/// so no two artifacts can disagree on an identifier, the author, or the
/// date. Render functions never compute any of these themselves.
#[derive(Debug, Clone)]
pub struct RenderContext {
    identity: ModuleIdentity,
    author: String,
    date: GenDate,
}

impl RenderContext {
    pub fn new(identity: ModuleIdentity, author: impl Into<String>, date: GenDate) -> Self {
        Self {
            identity,
            author: author.into(),
            date,
        }
    }

    pub fn identity(&self) -> &ModuleIdentity {
        &self.identity
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> GenDate {
        self.date
    }
}
