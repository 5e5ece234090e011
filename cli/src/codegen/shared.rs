//! # Shared Artifacts
//!
//! File: cli/src/codegen/shared.rs
//!
//! The project-wide DTO and model files that global-mode modules point at.
//! They are created the first time a global generation runs and never
//! rewritten afterwards, so edits made to them survive later runs.
//!
use crate::codegen::components::GenerationContext;
use crate::codegen::report::{GenerationReport, Outcome};
use crate::codegen::request::GeneratorFamily;
use crate::common::fs::io;
use crate::core::templating::{Bindings, Template};
use std::path::{Path, PathBuf};
use tracing::info;

/// Locations of the shared DTO and model files for a layout.
pub fn shared_artifact_paths(family: GeneratorFamily, root: &Path) -> [(Template, PathBuf); 2] {
    match family {
        GeneratorFamily::FlatModule => [
            (Template::SharedDto, root.join("src/common/dto/base.go")),
            (Template::SharedModel, root.join("src/common/models/base.go")),
        ],
        GeneratorFamily::LegacyFlat => [
            (Template::SharedDto, root.join("dto/global_dto.go")),
            (Template::SharedModel, root.join("models/global_model.go")),
        ],
    }
}

/// Creates whichever shared files are missing. Existing files, whatever their
/// content, are kept; anything else occupying a shared path is a failure.
pub fn ensure_shared_artifacts(
    ctx: &GenerationContext<'_>,
    family: GeneratorFamily,
    report: &mut GenerationReport,
) {
    for (template, path) in shared_artifact_paths(family, ctx.root) {
        if path.is_file() {
            report.record(path, Outcome::SharedKept);
            continue;
        }
        let result = ctx
            .renderer
            .render(template, &Bindings::new())
            .and_then(|content| io::create_file_if_absent(&path, &content));
        match result {
            Ok(true) => {
                info!("Created shared artifact {}", path.display());
                report.record(path, Outcome::SharedCreated);
            }
            Ok(false) => report.record(path, Outcome::SharedKept),
            Err(e) => report.record_failure(path, &e),
        }
    }
}
