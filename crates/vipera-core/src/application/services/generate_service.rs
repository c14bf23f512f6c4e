//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Derive the module identity from the raw name
//! 2. Resolve the author name (with fallback)
//! 3. Render all seven artifacts
//! 4. Plan the directory layout
//! 5. Materialize: create directories, then write files
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{ArtifactRenderer, AuthorSource, Filesystem},
    domain::{DEFAULT_AUTHOR, GenDate, ModuleIdentity, ModuleLayout, RenderContext},
    error::{ViperaError, ViperaResult},
};

/// Summary of a completed generation, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// The module root directory (`<target dir>/<base name>`).
    pub root: PathBuf,
    /// Every file written, in generation order.
    pub files: Vec<PathBuf>,
}

/// Main generation service.
///
/// Orchestrates identity derivation, rendering, layout planning, and
/// materialization.
///
/// Rerunning for the same module overwrites the previously generated files
/// (last write wins). On a filesystem failure the run stops immediately and
/// reports the failing path; directories and files created before the
/// failure are left in place. Concurrent runs for the same module name are
/// not arbitrated — callers must not start two.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn ArtifactRenderer>,
    author: Box<dyn AuthorSource>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn ArtifactRenderer>,
        author: Box<dyn AuthorSource>,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            author,
        }
    }

    /// Generate a module.
    ///
    /// This is the main use case - derives every name from `raw_name` and
    /// writes the artifact set under `target_dir`.
    #[instrument(
        skip_all,
        fields(
            module = %raw_name.as_ref(),
            target_dir = %target_dir.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        raw_name: impl AsRef<str>,
        target_dir: impl AsRef<Path>,
        date: GenDate,
    ) -> ViperaResult<GeneratedModule> {
        let raw_name = raw_name.as_ref();
        let target_dir = target_dir.as_ref();

        // 1. Derive identity
        if raw_name.is_empty() {
            return Err(
                crate::domain::DomainError::InvalidModuleName("name cannot be empty".into()).into(),
            );
        }
        let identity = ModuleIdentity::derive(raw_name);
        info!(module = %identity, "Module identity derived");

        // 2. Resolve author (lookup failure falls back, never fails the run)
        let author = self.author.author_name().unwrap_or_else(|| {
            debug!("author lookup yielded nothing, using fallback");
            DEFAULT_AUTHOR.to_string()
        });

        // 3. Render all artifacts before touching the filesystem
        let context = RenderContext::new(identity.clone(), author, date);
        let layout = ModuleLayout::plan(target_dir, &identity);
        layout.validate().map_err(ViperaError::Domain)?;

        let artifacts: Vec<(PathBuf, String)> = layout
            .files()
            .iter()
            .map(|file| {
                (
                    layout.root().join(file.path.as_path()),
                    self.renderer.render(file.role, &context),
                )
            })
            .collect();

        // 4. Materialize: every directory before any file write
        self.filesystem.create_dir_all(layout.root())?;
        for dir in layout.directories() {
            self.filesystem
                .create_dir_all(&layout.root().join(dir.as_path()))?;
        }

        let mut written = Vec::with_capacity(artifacts.len());
        for (path, content) in &artifacts {
            self.filesystem.write_file(path, content)?;
            written.push(path.clone());
        }

        info!(files = written.len(), "Module generated successfully");
        Ok(GeneratedModule {
            root: layout.root().to_path_buf(),
            files: written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockAuthorSource;
    use crate::domain::Role;
    use std::sync::{Arc, Mutex};

    /// Records every filesystem call, in order, without touching disk.
    /// Cloning shares the underlying log, so a test can hand one clone to the
    /// service and keep another for assertions.
    #[derive(Default, Clone)]
    struct RecordingFilesystem {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingFilesystem {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Filesystem for RecordingFilesystem {
        fn create_dir_all(&self, path: &Path) -> ViperaResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("mkdir {}", path.display()));
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> ViperaResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("write {} [{content}]", path.display()));
            Ok(())
        }

        fn exists(&self, _path: &Path) -> bool {
            false
        }
    }

    /// Minimal renderer: echoes role and author so tests can assert the
    /// context reached the renderer intact.
    struct EchoRenderer;

    impl ArtifactRenderer for EchoRenderer {
        fn render(&self, role: Role, ctx: &RenderContext) -> String {
            format!("{role} by {}", ctx.author())
        }
    }

    fn service_with_author(author: MockAuthorSource) -> (GenerateService, RecordingFilesystem) {
        let fs = RecordingFilesystem::default();
        let service =
            GenerateService::new(Box::new(fs.clone()), Box::new(EchoRenderer), Box::new(author));
        (service, fs)
    }

    #[test]
    fn empty_module_name_is_rejected_before_any_side_effect() {
        let mut author = MockAuthorSource::new();
        author.expect_author_name().never();
        let (service, fs) = service_with_author(author);

        let result = service.generate("", "out", GenDate::new(2026, 8, 6));
        assert!(matches!(
            result,
            Err(ViperaError::Domain(
                crate::domain::DomainError::InvalidModuleName(_)
            ))
        ));
        assert!(fs.calls().is_empty());
    }

    #[test]
    fn author_fallback_is_used_when_lookup_fails() {
        let mut author = MockAuthorSource::new();
        author.expect_author_name().returning(|| None);
        let (service, fs) = service_with_author(author);

        let generated = service
            .generate("payments", "out", GenDate::new(2026, 8, 6))
            .unwrap();
        assert_eq!(generated.files.len(), 7);

        // EchoRenderer embeds the author in every write; the fallback must
        // have reached the render context.
        let writes: Vec<_> = fs
            .calls()
            .into_iter()
            .filter(|c| c.starts_with("write"))
            .collect();
        assert_eq!(writes.len(), 7);
        assert!(writes.iter().all(|w| w.contains(DEFAULT_AUTHOR)));
    }

    #[test]
    fn provided_author_is_passed_through() {
        let mut author = MockAuthorSource::new();
        author
            .expect_author_name()
            .returning(|| Some("Alice".to_string()));
        let (service, fs) = service_with_author(author);

        service
            .generate("payments", "out", GenDate::new(2026, 8, 6))
            .unwrap();
        assert!(
            fs.calls()
                .iter()
                .filter(|c| c.starts_with("write"))
                .all(|w| w.contains("by Alice"))
        );
    }

    #[test]
    fn directories_are_created_before_any_file_is_written() {
        let mut author = MockAuthorSource::new();
        author
            .expect_author_name()
            .returning(|| Some("Alice".to_string()));
        let (service, fs) = service_with_author(author);

        service
            .generate("payments", "out", GenDate::new(2026, 8, 6))
            .unwrap();

        let calls = fs.calls();
        let first_write = calls.iter().position(|c| c.starts_with("write")).unwrap();
        let last_mkdir = calls.iter().rposition(|c| c.starts_with("mkdir")).unwrap();
        assert!(
            last_mkdir < first_write,
            "a write happened before all directories existed: {calls:?}"
        );
        // Root + six role directories, then seven files.
        assert_eq!(calls.iter().filter(|c| c.starts_with("mkdir")).count(), 7);
        assert_eq!(calls.iter().filter(|c| c.starts_with("write")).count(), 7);
    }

    #[test]
    fn generated_summary_lists_all_artifact_paths() {
        let mut author = MockAuthorSource::new();
        author
            .expect_author_name()
            .returning(|| Some("Alice".to_string()));
        let (service, _fs) = service_with_author(author);

        let generated = service
            .generate("payments", "out", GenDate::new(2026, 8, 6))
            .unwrap();

        assert_eq!(generated.root, PathBuf::from("out/Payments"));
        assert!(
            generated
                .files
                .contains(&PathBuf::from("out/Payments/Contract/PaymentsContract.swift"))
        );
        assert!(generated.files.contains(&PathBuf::from(
            "out/Payments/Common/Service/PaymentsService.swift"
        )));
    }
}

