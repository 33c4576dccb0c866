//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use oadoc_core::OutputStyle;
use std::path::PathBuf;

/// Oadoc CLI - Documentation generator for OpenAPI documents
///
/// Turns OpenAPI 3.x and Swagger 2 documents, local or remote and possibly
/// split across several files, into Markdown or PlantUML documentation.
#[derive(Parser, Debug)]
#[command(
    name = "oadoc",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "OADOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate documentation for an OpenAPI document
    GenDocs(GenDocsArgs),

    /// List the available output styles
    ListStyles,

    /// Print the synthesized example of a component schema
    Example(ExampleArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the gen-docs command
#[derive(Parser, Debug)]
pub struct GenDocsArgs {
    /// Path or URL of the OpenAPI document (JSON or YAML)
    #[arg(short, long, value_name = "SOURCE")]
    pub source: String,

    /// File the documentation is written to
    #[arg(short, long, value_name = "DESTINATION")]
    pub destination: PathBuf,

    /// Output style, by name or number (see list-styles)
    #[arg(short = 't', long = "style", value_name = "STYLE")]
    pub style: Option<OutputStyle>,

    /// Leave out the table of contents
    #[arg(long)]
    pub no_toc: bool,

    /// Leave out request and response examples
    #[arg(long)]
    pub no_examples: bool,

    /// Leave out deprecated operations
    #[arg(long)]
    pub no_deprecated: bool,

    /// Reference depth at which synthesized examples stop expanding
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Timeout in seconds for remote documents
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Arguments for the example command
#[derive(Parser, Debug)]
pub struct ExampleArgs {
    /// Path or URL of the OpenAPI document (JSON or YAML)
    #[arg(short, long, value_name = "SOURCE")]
    pub source: String,

    /// Name of the component schema
    #[arg(value_name = "SCHEMA")]
    pub schema: String,

    /// Reference depth at which the example stops expanding
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
