//! # Module Orchestration
//!
//! File: cli/src/codegen/module.rs
//!
//! ## Overview
//!
//! Runs a `GenerationRequest` end to end: ensures shared artifacts in global
//! mode, creates the module directory, then invokes the component generators
//! in a fixed order. Every step is best effort. A failed step is reported on
//! stderr, recorded in the `GenerationReport` and skipped; nothing already
//! written is rolled back.
//!
//! ## Step order
//!
//! - FlatModule CRUD: controller, service, repository, module wiring,
//!   model (unless global / `--no-model`), DTO (unless global / `--no-dto`),
//!   test.
//! - LegacyFlat CRUD: controller, service, repository, model, DTO, enum,
//!   mock-based service test.
//! - Single legacy commands: controller + DTO, service + model, repository.
//!
use crate::codegen::components::{ComponentGenerator, GenerationContext};
use crate::codegen::naming::DerivedNames;
use crate::codegen::report::{GenerationReport, Outcome};
use crate::codegen::request::{ArtifactKind, GenerationRequest, GeneratorFamily};
use crate::codegen::shared;
use crate::common::fs::io;
use tracing::{debug, info};

/// Artifact kinds a request expands to, in generation order.
pub fn plan(request: &GenerationRequest) -> Vec<ArtifactKind> {
    let options = request.options;
    let mut kinds = Vec::new();
    match request.kind {
        ArtifactKind::Controller => {
            kinds.push(ArtifactKind::Controller);
            if options.emits_dto() {
                kinds.push(ArtifactKind::Dto);
            }
        }
        ArtifactKind::Service => {
            kinds.push(ArtifactKind::Service);
            if options.emits_model() {
                kinds.push(ArtifactKind::Model);
            }
        }
        ArtifactKind::Module => {
            kinds.extend([
                ArtifactKind::Controller,
                ArtifactKind::Service,
                ArtifactKind::Repository,
            ]);
            if request.family == GeneratorFamily::FlatModule {
                kinds.push(ArtifactKind::Module);
            }
            if options.emits_model() {
                kinds.push(ArtifactKind::Model);
            }
            if options.emits_dto() {
                kinds.push(ArtifactKind::Dto);
            }
            if request.family == GeneratorFamily::LegacyFlat && options.crud {
                kinds.push(ArtifactKind::Enum);
            }
            if request.family == GeneratorFamily::FlatModule || options.crud {
                kinds.push(ArtifactKind::Test);
            }
        }
        other => kinds.push(other),
    }
    kinds
}

/// Drives the component generators for module-level requests.
pub struct ModuleOrchestrator<'a> {
    ctx: &'a GenerationContext<'a>,
}

impl<'a> ModuleOrchestrator<'a> {
    pub fn new(ctx: &'a GenerationContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn run(&self, request: &GenerationRequest) -> GenerationReport {
        let names = DerivedNames::derive(&request.raw_name, request.family);
        debug!("Derived names: {:?}", names);
        let mut report = GenerationReport::new();

        if request.options.global {
            info!("Global mode: using shared DTO and model files");
            shared::ensure_shared_artifacts(self.ctx, request.family, &mut report);
        }

        let generator =
            ComponentGenerator::new(self.ctx, &names, request.options, request.family);

        if request.family == GeneratorFamily::FlatModule && request.kind == ArtifactKind::Module {
            let module_dir = generator.module_dir();
            if let Err(e) = io::ensure_dir_exists(&module_dir) {
                report.record_failure(module_dir, &e);
            }
        }

        for kind in plan(request) {
            match generator.plan(kind) {
                Ok((_, path)) => match generator.generate(kind) {
                    Ok(_) => report.record(path, Outcome::Written),
                    Err(e) => report.record_failure(path, &e),
                },
                Err(e) => report.record_failure(format!("<{:?}>", kind), &e),
            }
        }
        report
    }
}
