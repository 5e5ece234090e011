//! # Goney Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! Error types shared by every part of the `goney` CLI. Command handlers return
//! `anyhow::Result` so that context can be layered onto failures as they travel
//! upwards, while `GoneyError` names the failure categories the tool itself
//! distinguishes.
//!
//! ## Architecture
//!
//! - `GoneyError`: a `thiserror` enum for domain failures (configuration,
//!   filesystem, template rendering, Go toolchain invocations, missing project).
//! - `Result<T>`: alias for `anyhow::Result<T>`.
//!
//! ## Examples
//!
//! ```rust
//! if !main_go.is_file() {
//!     return Err(anyhow!(GoneyError::NotAProject(cwd.display().to_string())));
//! }
//!
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Domain errors raised by the `goney` CLI.
#[derive(Error, Debug)]
pub enum GoneyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("External command failed: {cmd}, Status: {status}, Output:\n{output}")]
    ExternalCommand {
        cmd: String,
        status: String,
        output: String,
    },

    #[error("'{0}' is not a Go-ney project (main.go not found). Run this command from the project root.")]
    NotAProject(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = anyhow::Result<T>;
