//! Implementation of the module generation command.
//!
//! Responsibility: validate the module name, wire up the adapters, call the
//! core generate service, and display results. No naming or layout logic
//! lives here.

use chrono::Datelike;
use tracing::{debug, info, instrument};

use vipera_adapters::{GitAuthorLookup, LocalFilesystem, StaticAuthor, SwiftRenderer};
use vipera_core::{
    application::{GenerateService, ports::AuthorSource},
    domain::{GenDate, ModuleIdentity},
};

use crate::{
    cli::global::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the generation.
///
/// Dispatch sequence:
/// 1. Validate the module name (shell-level precondition)
/// 2. Build adapters (config may pin the author; otherwise ask git)
/// 3. Warn when the module directory already exists (files get overwritten)
/// 4. Execute generation via `GenerateService`
/// 5. Print the written files
#[instrument(skip_all, fields(module = %module))]
pub fn execute(
    module: String,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Shell-level validation: the core requires a non-empty plain name.
    validate_module_name(&module)?;

    // 2. Adapters
    let author: Box<dyn AuthorSource> = match &config.author {
        Some(name) => {
            debug!(author = %name, "using author from configuration");
            Box::new(StaticAuthor::new(name.clone()))
        }
        None => Box::new(GitAuthorLookup::new()),
    };
    let service = GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SwiftRenderer::new()),
        author,
    );

    let target_dir = std::env::current_dir()?;
    let today = chrono::Local::now().date_naive();
    let date = GenDate::new(today.year(), today.month(), today.day());

    // 3. Overwrite notice — rerunning for an existing module is supported,
    //    but the user should know files are about to be replaced.
    let identity = ModuleIdentity::derive(&module);
    let module_dir = target_dir.join(identity.base_name());
    if module_dir.exists() {
        output.warning(&format!(
            "'{}' already exists — its generated files will be overwritten",
            identity.base_name()
        ))?;
    }

    // 4. Generate
    output.header(&format!("Generating module '{}'...", identity.base_name()))?;
    info!(module = %identity.base_name(), "Generation started");

    let generated = service
        .generate(&module, &target_dir, date)
        .map_err(CliError::Core)?;

    info!(files = generated.files.len(), "Generation completed");

    // 5. Show what was written
    for file in &generated.files {
        let shown = file.strip_prefix(&target_dir).unwrap_or(file);
        output.print(&format!("  created {}", shown.display()))?;
    }
    output.success(&format!(
        "Module '{}' generated ({} files)",
        identity.base_name(),
        generated.files.len()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!(
            "  add the {}/ group to your Xcode project",
            identity.base_name()
        ))?;
    }

    Ok(())
}

/// Reject names the generator cannot turn into a sane module directory.
fn validate_module_name(name: &str) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidModuleName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidModuleName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidModuleName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            validate_module_name(""),
            Err(CliError::InvalidModuleName { .. })
        ));
        assert!(validate_module_name("   ").is_err());
    }

    #[test]
    fn dotfile_name_is_invalid() {
        assert!(matches!(
            validate_module_name(".hidden"),
            Err(CliError::InvalidModuleName { .. })
        ));
    }

    #[test]
    fn path_separator_in_name_is_invalid() {
        assert!(validate_module_name("a/b").is_err());
        assert!(validate_module_name("a\\b").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["payments", "Payments", "userProfile", "Checkout2", "x"] {
            assert!(validate_module_name(name).is_ok(), "failed for: {name}");
        }
    }
}
