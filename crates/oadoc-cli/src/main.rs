//! Oadoc CLI - Command-line interface for OpenAPI documentation generation
//!
//! This is the main entry point for the Oadoc CLI application, providing
//! commands for generating documentation, listing output styles and
//! inspecting synthesized examples.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    let use_color = cli.use_color();
    control::set_override(use_color);

    // Configuration is read first so that its logging section applies
    let config = Config::load_with_file(cli.config.as_deref());

    if let Err(e) = init_logging(&cli, config.as_ref().ok()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = config.and_then(|config| run(cli, &config));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", error::format_error(&e, use_color));

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let mut output = OutputWriter::new(cli.output, cli.use_color(), cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::GenDocs(args) => handlers::handle_gen_docs(args, config, &mut output),
        Commands::ListStyles => handlers::handle_list_styles(&mut output),
        Commands::Example(args) => handlers::handle_example(args, config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: Option<&Config>) -> Result<()> {
    // Create logging configuration from CLI args, the config file and environment
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());

    if let Some(config) = config {
        logging_config.merge_with_settings(&config.logging);
    }

    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["oadoc", "list-styles"]);
        assert_eq!(cli.verbosity_level(), 0);

        let cli = Cli::parse_from(["oadoc", "-vv", "gen-docs", "-s", "api.yaml", "-d", "api.md"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["oadoc", "--quiet", "list-styles"]);
        assert_eq!(cli.verbosity_level(), 0);
    }
}
