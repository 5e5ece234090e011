//! # Legacy Component Commands
//!
//! File: cli/src/commands/generate/legacy.rs
//!
//! `goney generate controller|service|repository <name>` write into the
//! top-level `controllers/`, `services/` and `repositories/` directories.
//! A controller brings its DTO along and a service brings its model; the
//! repository is gorm-backed.
//!
use crate::codegen::module::ModuleOrchestrator;
use crate::codegen::request::{ArtifactKind, GenerationRequest, GeneratorFamily};
use crate::commands::session::{Session, TemplateArgs};
use crate::core::error::Result;
use clap::{builder::NonEmptyStringValueParser, Parser};
use tracing::info;

#[derive(Parser, Debug)]
pub struct ComponentArgs {
    /// Entity name, e.g. `user`.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Controller,
    Service,
    Repository,
}

impl Component {
    fn kind(self) -> ArtifactKind {
        match self {
            Component::Controller => ArtifactKind::Controller,
            Component::Service => ArtifactKind::Service,
            Component::Repository => ArtifactKind::Repository,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Component::Controller => "Controller",
            Component::Service => "Service",
            Component::Repository => "Repository",
        }
    }
}

pub async fn handle_component(
    component: Component,
    args: ComponentArgs,
    templates: &TemplateArgs,
) -> Result<()> {
    info!("Generating legacy {:?} '{}'", component, args.name);
    let session = Session::load(templates)?;
    let project_module = session.project_module();
    let ctx = session.context(&project_module);

    let request = GenerationRequest::new(component.kind(), &args.name)
        .with_family(GeneratorFamily::LegacyFlat);
    let report = ModuleOrchestrator::new(&ctx).run(&request);
    report.print_summary(&session.root);

    if !report.has_failures() {
        println!("✅ {} {} generated", component.label(), args.name);
    }
    Ok(())
}
