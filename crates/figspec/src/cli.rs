//! Command-line surface of the `figspec` binary.

use crate::commands::generate::{GenerateArgs, RenderArgs};
use clap::builder::styling::{AnsiColor, Styles};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "figspec")]
#[command(about = "Generate shell completion specs from argument-parser tool info dumps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log pipeline steps to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a tool info dump into a completion script
    Generate(GenerateArgs),

    /// Print the completion script for figspec itself
    Completions(RenderArgs),
}

/// Help output styling.
pub const HELP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().bold())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::Cyan.on_default().bold())
    .placeholder(AnsiColor::Cyan.on_default());

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "figspec",
            "generate",
            "dump.json",
            "--output",
            "spec.ts",
            "--skip-help",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.input.as_deref(), Some(std::path::Path::new("dump.json")));
                assert_eq!(args.output.as_deref(), Some(std::path::Path::new("spec.ts")));
                assert!(args.render.skip_help);
                assert!(!args.render.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::try_parse_from(["figspec", "completions", "--type-name", "Spec"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.type_name.as_deref(), Some("Spec")),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
