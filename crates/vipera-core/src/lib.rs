//! Vipera Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Vipera
//! module scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           vipera-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Filesystem, Author, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     vipera-adapters (Infrastructure)    │
//! │ (LocalFilesystem, GitAuthorLookup, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ModuleIdentity, ModuleLayout, Role)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vipera_core::{
//!     application::GenerateService,
//!     domain::GenDate,
//! };
//!
//! // Build the service with injected adapters, then generate a module.
//! let service = GenerateService::new(filesystem, renderer, author);
//! service.generate("payments", "./", GenDate::new(2026, 8, 6))?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GeneratedModule,
        ports::{ArtifactRenderer, AuthorSource, Filesystem},
    };
    pub use crate::domain::{GenDate, ModuleIdentity, ModuleLayout, RenderContext, Role};
    pub use crate::error::{ViperaError, ViperaResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
