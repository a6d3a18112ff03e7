//! go2md — generate Markdown documentation from tagged Go doc comments.
//!
//! Three input modes:
//!
//! - **directory mode**: `go2md -r ./pkg -o API.md`
//! - **file mode**: `go2md -i main.go`
//! - **stdin mode**: `go2md < main.go`
//!
//! Package doc blocks use `// Package:`, `// Description:`,
//! `// Git Repository:` and `// License:`; function doc blocks use
//! `// Title:`, `// Description:`, `// Function:`, `// CalledWith:`,
//! `// Example:` and `// ExpectedOutput:`.

mod config;
mod error;
mod input;
mod model;
mod output;
mod parser;
mod pipeline;
mod render;
mod tags;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::Config;
use input::ScanOptions;
use render::PackageStyle;

#[derive(Parser)]
#[command(
    name = "go2md",
    version,
    about = "Generate Markdown documentation from tagged Go doc comments"
)]
struct Cli {
    /// Directory to scan recursively for source files
    #[arg(short = 'r', long = "recursive", value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Input source file. Non-empty piped stdin takes precedence.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file name. Writes to the file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Package doc template
    #[arg(long, value_enum, default_value_t = PackageStyle::Tagged)]
    package_style: PackageStyle,

    /// File name suffix of source files in directory mode
    #[arg(short = 'e', long, default_value = ".go")]
    extension: String,

    /// Skip paths matching this glob in directory mode (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "GLOB")]
    exclude: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = build_config(cli)?;
    let destination = config.output.clone();

    let document = pipeline::run(config).context("documentation run failed")?;
    output::write(&document.into_string(), destination.as_deref())?;
    Ok(())
}

fn build_config(cli: Cli) -> Result<Config> {
    let exclude = config::compile_excludes(&cli.exclude)?;
    let input = config::select_input(cli.dir, cli.input, piped_stdin)?;
    Ok(Config {
        input,
        output: cli.output,
        style: cli.package_style,
        scan: ScanOptions {
            extension: cli.extension,
            exclude,
        },
    })
}

/// Standard input contents, or `None` when it is an interactive terminal.
fn piped_stdin() -> error::Result<Option<Vec<u8>>> {
    if io::stdin().is_terminal() {
        return Ok(None);
    }
    input::read_stdin().map(Some)
}

/// Logs go to stderr; stdout carries the Markdown.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 if cli.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(cli.verbose >= 2)
        .without_time()
        .init();
}
