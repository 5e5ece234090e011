//! # Goney Process Execution (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs external programs (the Go toolchain and the built application) with
//! inherited standard streams, so their output appears directly in the
//! user's terminal. A non-zero exit status becomes
//! `GoneyError::ExternalCommand`.
//!
//! ```rust
//! process::run_command_streamed("go", &["mod", "tidy"], Some(project_dir)).await?;
//! ```
//!
use crate::core::error::{GoneyError, Result};
use anyhow::{anyhow, Context};
use std::path::Path;
use std::process::Stdio;
use tracing::{error, info};

/// Executes `program` with `args`, streaming its output, and waits for it.
///
/// ## Returns
///
/// * `Ok(())` if the process exits with status 0.
/// * `Err` if it cannot be spawned or exits non-zero (`GoneyError::ExternalCommand`).
pub async fn run_command_streamed(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
    let command_line = if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    };
    info!("Executing command: {}", command_line);

    let mut command = tokio::process::Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let status = command.status().await.with_context(|| {
        format!(
            "Failed to execute command '{}'. Is it installed and in PATH?",
            program
        )
    })?;

    if !status.success() {
        let exit_code = status.code().map_or("?".to_string(), |c| c.to_string());
        error!("Command '{}' failed with exit code {}", command_line, exit_code);
        return Err(anyhow!(GoneyError::ExternalCommand {
            cmd: command_line,
            status: exit_code,
            output: "Command failed. See terminal output above for details.".to_string(),
        }));
    }

    info!("Command '{}' completed successfully.", command_line);
    Ok(())
}
