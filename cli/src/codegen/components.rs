//! # Component Generators
//!
//! File: cli/src/codegen/components.rs
//!
//! ## Overview
//!
//! One generator per artifact kind (controller, service, repository, DTO,
//! model, module wiring, test, enum). Each combines the request's
//! `DerivedNames` with the selected type references, renders the matching
//! template and writes the result.
//!
//! ## Type references
//!
//! The only conditional logic lives in `TypeRefs::select`. It decides which
//! Go types the controller, service and repository mention:
//!
//! | family / mode          | response type         | entity type         | imports            |
//! |------------------------|-----------------------|---------------------|--------------------|
//! | FlatModule, per-module | `UsersResponse`       | `Users`             | none (same package)|
//! | FlatModule, global     | `dto.BaseResponse`    | `models.NamedModel` | `src/common/...`   |
//! | LegacyFlat, per-module | `dto.UsersResponse`   | `models.Users`      | `dto`, `models`    |
//! | LegacyFlat, global     | `dto.BaseResponse`    | `models.NamedModel` | `dto`, `models`    |
//!
//! `--no-dto` and `--no-model` only suppress files, they do not change these
//! references, so the remaining files can point at types nobody generated.
//!
use crate::codegen::naming::DerivedNames;
use crate::codegen::request::{ArtifactKind, GeneratorFamily, OptionSet};
use crate::common::fs::io;
use crate::core::error::{GoneyError, Result};
use crate::core::templating::{Bindings, Template, TemplateRenderer};
use anyhow::anyhow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Shared inputs of every generator in one run.
pub struct GenerationContext<'a> {
    pub renderer: &'a TemplateRenderer,
    /// Directory the project lives in (usually the working directory).
    pub root: &'a Path,
    /// Go module path from `go.mod`.
    pub project_module: &'a str,
}

/// Go type names and import paths referenced by generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRefs {
    pub response: String,
    pub create_request: String,
    pub update_request: String,
    pub entity: String,
    /// Import path of the DTO package, when types live in another package.
    pub dto_import: Option<String>,
    /// Import path of the models package, when types live in another package.
    pub model_import: Option<String>,
}

impl TypeRefs {
    pub fn select(
        names: &DerivedNames,
        options: OptionSet,
        family: GeneratorFamily,
        project_module: &str,
    ) -> Self {
        let class = &names.class_name;
        let (dto_import, model_import) = match family {
            GeneratorFamily::FlatModule if !options.global => (None, None),
            GeneratorFamily::FlatModule => (
                Some(format!("{}/src/common/dto", project_module)),
                Some(format!("{}/src/common/models", project_module)),
            ),
            GeneratorFamily::LegacyFlat => (
                Some(format!("{}/dto", project_module)),
                Some(format!("{}/models", project_module)),
            ),
        };

        if options.global {
            return Self {
                response: "dto.BaseResponse".into(),
                create_request: "dto.BaseCreateRequest".into(),
                update_request: "dto.BaseUpdateRequest".into(),
                entity: "models.NamedModel".into(),
                dto_import,
                model_import,
            };
        }

        let (dto_prefix, model_prefix) = match family {
            GeneratorFamily::FlatModule => ("", ""),
            GeneratorFamily::LegacyFlat => ("dto.", "models."),
        };
        Self {
            response: format!("{}{}Response", dto_prefix, class),
            create_request: format!("{}Create{}Request", dto_prefix, class),
            update_request: format!("{}Update{}Request", dto_prefix, class),
            entity: format!("{}{}", model_prefix, class),
            dto_import,
            model_import,
        }
    }

    /// Extra import line for the controller's existing import group.
    fn controller_import(&self) -> String {
        self.dto_import
            .as_ref()
            .map(|path| format!("\t\"{}\"\n", path))
            .unwrap_or_default()
    }

    /// Complete import block (or nothing) placed after the package clause.
    fn import_block(paths: &[&Option<String>]) -> String {
        let present: Vec<&String> = paths.iter().filter_map(|p| p.as_ref()).collect();
        match present.as_slice() {
            [] => String::new(),
            [single] => format!("\nimport \"{}\"\n", single),
            many => {
                let lines: String = many.iter().map(|p| format!("\t\"{}\"\n", p)).collect();
                format!("\nimport (\n{})\n", lines)
            }
        }
    }
}

/// Renders and writes individual artifacts for one derived name.
pub struct ComponentGenerator<'a> {
    ctx: &'a GenerationContext<'a>,
    names: &'a DerivedNames,
    family: GeneratorFamily,
    refs: TypeRefs,
}

impl<'a> ComponentGenerator<'a> {
    pub fn new(
        ctx: &'a GenerationContext<'a>,
        names: &'a DerivedNames,
        options: OptionSet,
        family: GeneratorFamily,
    ) -> Self {
        let refs = TypeRefs::select(names, options, family, ctx.project_module);
        Self {
            ctx,
            names,
            family,
            refs,
        }
    }

    /// Directory holding every file of a flat module.
    pub fn module_dir(&self) -> PathBuf {
        self.ctx
            .root
            .join("src")
            .join("modules")
            .join(&self.names.raw)
    }

    /// Template and output path for `kind`, or an error if this family has
    /// no such artifact.
    pub fn plan(&self, kind: ArtifactKind) -> Result<(Template, PathBuf)> {
        let raw = &self.names.raw;
        let lower = &self.names.package_name;
        let root = self.ctx.root;
        let planned = match (self.family, kind) {
            (GeneratorFamily::FlatModule, ArtifactKind::Controller) => Some((
                Template::ModuleController,
                self.module_dir().join(format!("{}.controller.go", raw)),
            )),
            (GeneratorFamily::FlatModule, ArtifactKind::Service) => Some((
                Template::ModuleService,
                self.module_dir().join(format!("{}.service.go", raw)),
            )),
            (GeneratorFamily::FlatModule, ArtifactKind::Repository) => Some((
                Template::ModuleRepository,
                self.module_dir().join(format!("{}.repository.go", raw)),
            )),
            (GeneratorFamily::FlatModule, ArtifactKind::Module) => Some((
                Template::ModuleWiring,
                self.module_dir().join(format!("{}.module.go", raw)),
            )),
            (GeneratorFamily::FlatModule, ArtifactKind::Model) => Some((
                Template::ModuleModel,
                self.module_dir().join(format!("{}.model.go", raw)),
            )),
            (GeneratorFamily::FlatModule, ArtifactKind::Dto) => Some((
                Template::ModuleDto,
                self.module_dir().join(format!("{}.dto.go", raw)),
            )),
            (GeneratorFamily::FlatModule, ArtifactKind::Test) => Some((
                Template::ModuleTest,
                self.module_dir().join(format!("{}_test.go", raw)),
            )),
            (GeneratorFamily::LegacyFlat, ArtifactKind::Controller) => Some((
                Template::LegacyController,
                root.join("controllers").join(format!("{}_controller.go", lower)),
            )),
            (GeneratorFamily::LegacyFlat, ArtifactKind::Service) => Some((
                Template::LegacyService,
                root.join("services").join(format!("{}_service.go", lower)),
            )),
            (GeneratorFamily::LegacyFlat, ArtifactKind::Repository) => Some((
                Template::LegacyRepository,
                root.join("repositories").join(format!("{}_repository.go", lower)),
            )),
            (GeneratorFamily::LegacyFlat, ArtifactKind::Model) => Some((
                Template::LegacyModel,
                root.join("models").join(format!("{}_model.go", lower)),
            )),
            (GeneratorFamily::LegacyFlat, ArtifactKind::Dto) => Some((
                Template::LegacyDto,
                root.join("dto").join(format!("{}_dto.go", lower)),
            )),
            (GeneratorFamily::LegacyFlat, ArtifactKind::Enum) => Some((
                Template::LegacyEnum,
                root.join("enums").join(format!("{}_enum.go", lower)),
            )),
            (GeneratorFamily::LegacyFlat, ArtifactKind::Test) => Some((
                Template::LegacyServiceTest,
                root.join("services").join(format!("{}_service_test.go", lower)),
            )),
            _ => None,
        };
        planned.ok_or_else(|| {
            anyhow!(GoneyError::ArgumentParsing(format!(
                "{:?} generation is not available for the {:?} layout",
                kind, self.family
            )))
        })
    }

    /// Placeholder values for `kind`.
    pub fn bindings_for(&self, kind: ArtifactKind) -> Bindings {
        let names = self.names;
        let refs = &self.refs;
        let mut bindings = Bindings::new()
            .bind("ClassName", &names.class_name)
            .bind("PackageName", &names.package_name)
            .bind("VariableName", &names.variable_name)
            .bind("TableName", &names.table_name)
            .bind("RouteSegment", &names.route_segment)
            .bind("EntityName", &names.entity_name)
            .bind("ModuleName", &names.raw)
            .bind("ProjectModule", self.ctx.project_module)
            .bind("ResponseType", &refs.response)
            .bind("CreateRequestType", &refs.create_request)
            .bind("UpdateRequestType", &refs.update_request)
            .bind("EntityType", &refs.entity);
        match kind {
            ArtifactKind::Controller => {
                bindings.insert("DtoImport", refs.controller_import());
            }
            ArtifactKind::Service => {
                bindings.insert(
                    "ImportBlock",
                    TypeRefs::import_block(&[&refs.dto_import, &refs.model_import]),
                );
            }
            ArtifactKind::Repository => {
                bindings.insert("ImportBlock", TypeRefs::import_block(&[&refs.model_import]));
            }
            _ => {}
        }
        bindings
    }

    /// Renders `kind` without writing it.
    pub fn render(&self, kind: ArtifactKind) -> Result<(PathBuf, String)> {
        let (template, path) = self.plan(kind)?;
        let content = self.ctx.renderer.render(template, &self.bindings_for(kind))?;
        Ok((path, content))
    }

    /// Renders `kind` and writes it, overwriting any previous file.
    pub fn generate(&self, kind: ArtifactKind) -> Result<PathBuf> {
        let (path, content) = self.render(kind)?;
        io::write_string_to_file(&path, &content)?;
        debug!("Generated {:?} at {}", kind, path.display());
        Ok(path)
    }
}
