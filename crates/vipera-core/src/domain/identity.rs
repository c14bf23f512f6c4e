//! Module identity: the single source of every generated name.
//!
//! # Design
//!
//! All type names, file names, and directory paths for one module are derived
//! here, once, from a single input string. Render functions and the layout
//! planner read names exclusively through [`ModuleIdentity`] — nothing
//! re-derives a name locally. This is what guarantees that the router's
//! assembly code, the contract's protocols, and every file header agree on
//! each shared identifier.
//!
//! # Normalization
//!
//! Exactly one rule: the first character of the input is uppercased, the rest
//! is left untouched. `payments` becomes `Payments`, `iTunes` becomes
//! `ITunes`. The rule is total and deterministic; derivation reads no
//! external state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::RelativePath;

/// File extension of generated sources (Swift/UIKit VIPER modules).
pub const SOURCE_EXTENSION: &str = "swift";

// ── Role ─────────────────────────────────────────────────────────────────────

/// One of the seven artifact roles a module is generated from.
///
/// Each role maps to exactly one generated file. The `Endpoint` and
/// `Service` roles share the `Common/Service` directory; every other role
/// owns a directory named after itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Contract,
    View,
    Interactor,
    Presenter,
    Router,
    Endpoint,
    Service,
}

impl Role {
    /// All roles, in generation order.
    pub const ALL: [Role; 7] = [
        Self::Contract,
        Self::View,
        Self::Interactor,
        Self::Presenter,
        Self::Router,
        Self::Endpoint,
        Self::Service,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::View => "view",
            Self::Interactor => "interactor",
            Self::Presenter => "presenter",
            Self::Router => "router",
            Self::Endpoint => "endpoint",
            Self::Service => "service",
        }
    }

    /// Directory segments for this role, relative to the module root.
    pub const fn dir_segments(&self) -> &'static [&'static str] {
        match self {
            Self::Contract => &["Contract"],
            Self::View => &["View"],
            Self::Interactor => &["Interactor"],
            Self::Presenter => &["Presenter"],
            Self::Router => &["Router"],
            Self::Endpoint | Self::Service => &["Common", "Service"],
        }
    }

    /// Suffix appended to the module base name to form the declared type.
    ///
    /// Two spellings are deliberate convention quirks carried by the entire
    /// generated codebase: the view role's concrete type is `…ViewController`
    /// and the interactor role's concrete type is `…Interacter` (while its
    /// directory stays `Interactor/`). Changing either would break every
    /// existing module in a consuming project.
    const fn type_suffix(&self) -> &'static str {
        match self {
            Self::Contract => "Contract",
            Self::View => "ViewController",
            Self::Interactor => "Interacter",
            Self::Presenter => "Presenter",
            Self::Router => "Router",
            Self::Endpoint => "Endpoint",
            Self::Service => "Service",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ModuleIdentity ───────────────────────────────────────────────────────────

/// The derived name set for one module.
///
/// Derived once per invocation, immutable thereafter. Every accessor is a
/// pure string concatenation over the normalized base name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleIdentity {
    base: String,
}

impl ModuleIdentity {
    /// Derive the canonical identity from a raw module name.
    ///
    /// The caller (CLI shell or service) guarantees a non-empty input;
    /// derivation itself never fails.
    pub fn derive(raw: &str) -> Self {
        let mut chars = raw.chars();
        let base = match chars.next() {
            Some(first) => {
                let mut s = String::with_capacity(raw.len());
                // to_uppercase handles Unicode correctly (may expand to
                // multiple characters)
                s.extend(first.to_uppercase());
                s.push_str(chars.as_str());
                s
            }
            None => String::new(),
        };
        Self { base }
    }

    /// The canonical module name (`payments` → `Payments`).
    pub fn base_name(&self) -> &str {
        &self.base
    }

    /// Concrete type declared by the given role's artifact.
    pub fn type_name(&self, role: Role) -> String {
        format!("{}{}", self.base, role.type_suffix())
    }

    /// File stem of the given role's artifact.
    ///
    /// Always equal to [`Self::type_name`] — the file is named after the
    /// type it declares.
    pub fn file_stem(&self, role: Role) -> String {
        self.type_name(role)
    }

    /// Full file name of the given role's artifact.
    pub fn file_name(&self, role: Role) -> String {
        format!("{}.{}", self.file_stem(role), SOURCE_EXTENSION)
    }

    /// Directory of the given role's artifact, relative to the module root.
    pub fn directory(&self, role: Role) -> RelativePath {
        let mut path = RelativePath::new("");
        for segment in role.dir_segments() {
            path = path.join(segment);
        }
        path
    }

    // ── Protocol names (declared by the contract, referenced everywhere) ──

    pub fn view_protocol(&self) -> String {
        format!("{}View", self.base)
    }

    pub fn presentation_protocol(&self) -> String {
        format!("{}Presentation", self.base)
    }

    pub fn use_case_protocol(&self) -> String {
        format!("{}UseCase", self.base)
    }

    pub fn interactor_output_protocol(&self) -> String {
        format!("{}InteractorOutputProtocol", self.base)
    }

    pub fn wireframe_protocol(&self) -> String {
        format!("{}WireFrame", self.base)
    }

    pub fn service_input_protocol(&self) -> String {
        format!("{}ServiceInputProtocol", self.base)
    }

    pub fn service_output_protocol(&self) -> String {
        format!("{}ServiceOutputProtocol", self.base)
    }
}

impl fmt::Display for ModuleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}
