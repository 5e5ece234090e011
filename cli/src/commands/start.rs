//! # Goney Start Command
//!
//! File: cli/src/commands/start.rs
//!
//! ## Overview
//!
//! `goney start` runs the project in the current directory:
//! 1. `go mod tidy`
//! 2. `go build -o app .`
//! 3. `./app`
//!
//! Each step streams its output to the terminal. The first failing step
//! aborts the command with a non-zero exit code. Running outside a project
//! (no `main.go`) is an error before anything is executed.
//!
use crate::common::process;
use crate::core::error::{GoneyError, Result};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::env;
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug)]
pub struct StartArgs {}

pub async fn handle_start(_args: StartArgs) -> Result<()> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    start_project(&cwd).await
}

async fn start_project(project_dir: &Path) -> Result<()> {
    ensure_project(project_dir)?;
    info!("Starting project in {}", project_dir.display());

    println!("📦 Installing dependencies...");
    process::run_command_streamed("go", &["mod", "tidy"], Some(project_dir))
        .await
        .context("Failed to install dependencies")?;

    println!("🔧 Building project...");
    process::run_command_streamed("go", &["build", "-o", "app", "."], Some(project_dir))
        .await
        .context("Failed to build project")?;

    println!("🚀 Starting server...");
    let binary = project_dir.join("app");
    process::run_command_streamed(&binary.to_string_lossy(), &[], Some(project_dir))
        .await
        .context("Failed to start server")?;
    Ok(())
}

fn ensure_project(project_dir: &Path) -> Result<()> {
    if project_dir.join("main.go").is_file() {
        Ok(())
    } else {
        Err(anyhow!(GoneyError::NotAProject(
            project_dir.display().to_string()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_start_outside_project_fails() {
        let dir = tempdir().unwrap();
        let err = start_project(dir.path()).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GoneyError>(),
            Some(GoneyError::NotAProject(_))
        ));
    }

    #[test]
    fn test_ensure_project_accepts_main_go() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("main.go"), "package main").unwrap();
        assert!(ensure_project(dir.path()).is_ok());
    }

    #[test]
    fn test_start_takes_no_arguments() {
        assert!(StartArgs::try_parse_from(["start"]).is_ok());
        assert!(StartArgs::try_parse_from(["start", "extra"]).is_err());
    }
}
