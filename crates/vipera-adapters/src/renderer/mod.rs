//! The built-in template registry: seven Swift artifact templates.
//!
//! Rendering is plain placeholder substitution over fixed template text.
//! Every identifier a template emits comes from the shared
//! [`RenderContext`](vipera_core::domain::RenderContext) — templates never
//! derive a name locally, which is what keeps the router's assembly code,
//! the contract's protocols, and every header in agreement.

mod templates;

use vipera_core::{
    application::ports::ArtifactRenderer,
    domain::{RenderContext, Role},
};

/// One registry entry: an artifact role and its template text.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactTemplate {
    pub role: Role,
    pub source: &'static str,
}

/// The registry: one template per role, in generation order.
///
/// Process-wide immutable configuration; constructed at compile time,
/// never request-scoped.
pub const TEMPLATES: [ArtifactTemplate; 7] = [
    ArtifactTemplate {
        role: Role::Contract,
        source: templates::CONTRACT,
    },
    ArtifactTemplate {
        role: Role::View,
        source: templates::VIEW,
    },
    ArtifactTemplate {
        role: Role::Interactor,
        source: templates::INTERACTOR,
    },
    ArtifactTemplate {
        role: Role::Presenter,
        source: templates::PRESENTER,
    },
    ArtifactTemplate {
        role: Role::Router,
        source: templates::ROUTER,
    },
    ArtifactTemplate {
        role: Role::Endpoint,
        source: templates::ENDPOINT,
    },
    ArtifactTemplate {
        role: Role::Service,
        source: templates::SERVICE,
    },
];

const fn source_for(role: Role) -> &'static str {
    match role {
        Role::Contract => templates::CONTRACT,
        Role::View => templates::VIEW,
        Role::Interactor => templates::INTERACTOR,
        Role::Presenter => templates::PRESENTER,
        Role::Router => templates::ROUTER,
        Role::Endpoint => templates::ENDPOINT,
        Role::Service => templates::SERVICE,
    }
}

/// Renderer for the Swift/UIKit VIPER artifact set.
#[derive(Debug, Clone, Copy)]
pub struct SwiftRenderer;

impl SwiftRenderer {
    /// Create a new Swift renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SwiftRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactRenderer for SwiftRenderer {
    fn render(&self, role: Role, ctx: &RenderContext) -> String {
        templates::expand(source_for(role), role, ctx)
    }
}
