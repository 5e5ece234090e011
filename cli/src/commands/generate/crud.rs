//! # CRUD Module Command
//!
//! File: cli/src/commands/generate/crud.rs
//!
//! ## Overview
//!
//! `goney generate crud <name>` generates a full module. By default it uses
//! the flat module layout (`src/modules/<name>/`, one Go package). With
//! `--legacy` it writes the older top-level directory layout instead and adds
//! the status/type enum and a mock-based service test.
//!
//! - `--global`: reference the shared `Base*` DTOs and `NamedModel` instead of
//!   per-module types; the shared files are created once if missing. No
//!   per-module DTO or model is written, whatever the other flags say.
//! - `--no-dto` / `--no-model`: skip the per-module DTO / model file. The
//!   other files still reference those types.
//!
//! ## Examples
//!
//! ```bash
//! goney generate crud users
//! goney g crud products --global
//! goney g crud orders --no-dto
//! goney g crud invoice --legacy
//! ```
//!
use crate::codegen::module::ModuleOrchestrator;
use crate::codegen::request::{ArtifactKind, GenerationRequest, GeneratorFamily, OptionSet};
use crate::commands::session::{Session, TemplateArgs};
use crate::core::error::Result;
use clap::{builder::NonEmptyStringValueParser, Parser};
use tracing::info;

#[derive(Parser, Debug)]
pub struct CrudArgs {
    /// Module name, e.g. `users`.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    /// Use the shared DTO and model files instead of per-module ones.
    #[arg(long)]
    pub global: bool,

    /// Do not generate the module's DTO file.
    #[arg(long = "no-dto")]
    pub no_dto: bool,

    /// Do not generate the module's model file.
    #[arg(long = "no-model")]
    pub no_model: bool,

    /// Use the legacy flat layout (controllers/, services/, ...).
    #[arg(long)]
    pub legacy: bool,
}

impl CrudArgs {
    fn request(&self) -> GenerationRequest {
        let family = if self.legacy {
            GeneratorFamily::LegacyFlat
        } else {
            GeneratorFamily::FlatModule
        };
        GenerationRequest::new(ArtifactKind::Module, &self.name)
            .with_family(family)
            .with_options(OptionSet {
                global: self.global,
                no_dto: self.no_dto,
                no_model: self.no_model,
                crud: true,
            })
    }
}

pub async fn handle_crud(args: CrudArgs, templates: &TemplateArgs) -> Result<()> {
    let request = args.request();
    info!("Generating CRUD module: {:?}", request);
    let session = Session::load(templates)?;
    let project_module = session.project_module();
    let ctx = session.context(&project_module);

    println!("🚀 Generating CRUD module: {}", args.name);
    if args.global {
        println!("🌐 Global mode: using shared DTOs and models");
    }

    let report = ModuleOrchestrator::new(&ctx).run(&request);
    report.print_summary(&session.root);

    if report.has_failures() {
        println!("⚠️  Module {} generated with errors.", args.name);
    } else {
        println!("✅ Module {} generated successfully!", args.name);
    }
    Ok(())
}
