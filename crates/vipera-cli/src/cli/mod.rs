//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value parsing.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// The tool has exactly one operation, so there are no subcommands: the
/// module name is the single positional argument.
#[derive(Debug, Parser)]
#[command(
    name    = "vipera",
    bin_name = "vipera",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Instant VIPER module scaffolding",
    long_about = "Vipera generates the source files for a VIPER feature module \
                  (contract, view, interactor, presenter, router, endpoint, \
                  service) from a single module name, with every cross-reference \
                  derived consistently.",
    after_help = "EXAMPLES:\n\
        \x20 vipera Payments          # creates Payments/ in the current directory\n\
        \x20 vipera userProfile       # module name is normalized to UserProfile\n\
        \x20 vipera -q Checkout       # no output except errors\n\n\
        Re-running for an existing module overwrites its generated files.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Name of the module to generate.
    ///
    /// The first character is uppercased; the rest is kept as typed.
    #[arg(value_name = "MODULE", help = "Module name (first letter is uppercased)")]
    pub module: String,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_module_name() {
        let cli = Cli::parse_from(["vipera", "payments"]);
        assert_eq!(cli.module, "payments");
    }

    #[test]
    fn missing_module_name_is_an_error() {
        assert!(Cli::try_parse_from(["vipera"]).is_err());
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::parse_from(["vipera", "-vv", "payments"]);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["vipera", "--quiet", "--verbose", "payments"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_flag_takes_a_path() {
        let cli = Cli::parse_from(["vipera", "--config", "custom.toml", "payments"]);
        assert_eq!(
            cli.global.config.as_deref(),
            Some(std::path::Path::new("custom.toml"))
        );
    }
}
