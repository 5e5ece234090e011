//! # Goney Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the `goney` CLI, a NestJS-style scaffolding tool for Go
//! web services. It parses arguments, configures logging from the verbosity
//! flag and dispatches to the command handlers.
//!
//! ## Architecture
//!
//! - `commands`: the `new`, `generate` and `start` command surface
//! - `codegen`: the code generation engine (naming, components, orchestration)
//! - `core`: errors, configuration, templating
//! - `common`: filesystem and process helpers
//!
//! Errors returned by a handler are printed as `Error: ...` and the process
//! exits with status 1. Argument errors are reported by clap (status 2).
//! Failures of individual generated files are reported by the generators and
//! do not change the exit status.
//!
//! ## Examples
//!
//! ```bash
//! goney new shop
//! cd shop
//! goney generate crud users
//! goney -vv g crud products --global
//! goney start
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod codegen;
mod commands;
mod common;
mod core;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "goney",
    about = "Go-ney: NestJS-style scaffolding for Go web services",
    long_about = "Scaffold Go projects and generate controllers, services, repositories,\n\
                  DTOs, models and modules that follow a NestJS-style layered layout.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Create a new Go-ney project.
    New(commands::new::NewArgs),
    /// Generate code inside the current project.
    #[command(alias = "g")]
    Generate(commands::generate::GenerateArgs),
    /// Install dependencies, build and run the current project.
    Start(commands::start::StartArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::New(args) => commands::new::handle_new(args).await,
        Commands::Generate(args) => commands::generate::handle_generate(args).await,
        Commands::Start(args) => commands::start::handle_start(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
