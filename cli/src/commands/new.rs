//! # Goney New Command
//!
//! File: cli/src/commands/new.rs
//!
//! ## Overview
//!
//! Implements `goney new <projectName>`: creates `./<projectName>/` with the
//! NestJS-style directory skeleton and the top-level Go, env and container
//! files, then prints next steps.
//!
//! An existing target directory is not an error. Files the scaffold owns are
//! overwritten and anything else in the directory is left alone.
//!
//! ## Examples
//!
//! ```bash
//! goney new shop
//! cd shop && goney start
//! ```
//!
use crate::codegen::project::ProjectScaffolder;
use crate::commands::session::{Session, TemplateArgs};
use crate::core::error::Result;
use clap::{builder::NonEmptyStringValueParser, Parser};
use std::env;
use std::path::Path;
use tracing::{info, warn};

#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Name of the project; also used as the Go module path and database name.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub project_name: String,

    #[command(flatten)]
    pub templates: TemplateArgs,
}

pub async fn handle_new(args: NewArgs) -> Result<()> {
    info!("Handling new command for project '{}'", args.project_name);
    let session = Session::load(&args.templates)?;
    let project_root = session.root.join(&args.project_name);

    if project_root.exists() {
        warn!("Target directory {} already exists", project_root.display());
        println!(
            "⚠️  Directory '{}' already exists; generated files will be overwritten.",
            args.project_name
        );
    }

    println!("🚀 Creating Go-ney project {}", args.project_name);
    let port = session.config.project.default_port.as_str();
    let report =
        ProjectScaffolder::new(&session.renderer, port).scaffold(&project_root, &args.project_name);
    report.print_summary(&project_root);

    if report.has_failures() {
        println!(
            "⚠️  Project {} created with errors; see the messages above.",
            args.project_name
        );
    } else {
        println!("✅ Go-ney project {} created successfully!", args.project_name);
    }
    print_completion_message(&project_root, port);
    Ok(())
}

/// Prints how to start the new project, using a path relative to the current
/// directory when one can be computed.
fn print_completion_message(project_root: &Path, port: &str) {
    let display_path = match env::current_dir() {
        Ok(cwd) => pathdiff::diff_paths(project_root, &cwd)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| project_root.display().to_string()),
        Err(_) => project_root.display().to_string(),
    };
    println!("🌐 To start: cd {} && goney start", display_path);
    println!("🔧 Default port: {}", port);
    println!("📝 Environment variables: .env");
    println!("📁 NestJS-style modules live in src/modules/");
}
