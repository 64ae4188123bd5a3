mod ambiguity;
mod commands;
mod compile;
mod config;
mod diagnostics;
mod error;
mod index;
mod locator;
mod matcher;
mod notation;
mod resolver;
mod roman;
mod specifier;
mod tree;
mod types;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bookref", version, about = "Resolve and compile targets in a LaTeX book tree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Project root containing the latex directory and `.bookref.toml`
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,
    /// Log resolution decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and typeset a target (default: main)
    Compile {
        /// Name, prefix, `3.5.13`, or `A.2.5`
        target: Option<String>,
        /// Also run the bibliography tool and two more engine passes
        #[arg(short, long)]
        bib: bool,
    },
    /// Print the numeric notation that reaches a file
    Notation {
        /// Path to a `.tex` file inside the latex directory, relative to `--root`
        file: PathBuf,
    },
    /// Print the file a target resolves to
    Resolve {
        /// Name, prefix, `3.5.13`, or `A.2.5`
        target: String,
        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compile { target, bib } => commands::compile(&cli.root, target.as_deref(), bib).map(|()| return ExitCode::SUCCESS),
        Commands::Notation { file } => commands::notation(&cli.root, &file).map(|()| return ExitCode::SUCCESS),
        Commands::Resolve { target, json } => commands::resolve(&cli.root, &target, json),
    };

    return match result {
        Ok(code) => code,
        Err(e) => {
            diagnostics::print_error(&e);
            match e {
                error::Error::AmbiguousTarget { .. } => ExitCode::from(commands::EXIT_AMBIGUOUS),
                _ => ExitCode::FAILURE,
            }
        },
    };
}

/// Log to stderr so stdout carries only results. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| return EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
