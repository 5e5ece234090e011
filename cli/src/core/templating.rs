//! # Goney Template Rendering
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Every file `goney` writes is produced from a named Tera template. The
//! templates are compiled into the binary from `cli/templates/` and can be
//! replaced one by one from a user-supplied override directory.
//!
//! ## Architecture
//!
//! - `Template`: enumerates the embedded templates and maps each to its
//!   registered name (the path under `cli/templates/` without `.tera`).
//! - `Bindings`: the placeholder -> value map handed to a render call.
//!   Conditional fragments (import blocks, type references) are chosen by the
//!   caller and bound as plain strings; templates carry no control flow.
//! - `TemplateRenderer`: owns the `Tera` instance. Autoescaping is off since
//!   the output is Go source, YAML and env files, not HTML. An unbound
//!   placeholder makes rendering fail instead of leaking `{{ Key }}` into the
//!   generated file.
//!
//! ## Examples
//!
//! ```rust
//! let renderer = TemplateRenderer::with_overrides(config.templates_dir().as_deref())?;
//! let bindings = Bindings::new().bind("ProjectName", "shop");
//! let go_mod = renderer.render(Template::GoMod, &bindings)?;
//! ```
//!
use crate::core::error::{GoneyError, Result};
use anyhow::{anyhow, Context};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tera::Tera;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Extension carried by template files on disk.
const TEMPLATE_EXTENSION: &str = ".tera";

/// The embedded templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    // Flat module layout (`src/modules/<name>/`)
    ModuleController,
    ModuleService,
    ModuleRepository,
    ModuleWiring,
    ModuleModel,
    ModuleDto,
    ModuleTest,
    // Legacy flat layout (`controllers/`, `services/`, ...)
    LegacyController,
    LegacyService,
    LegacyRepository,
    LegacyModel,
    LegacyDto,
    LegacyEnum,
    LegacyServiceTest,
    // Shared artifacts
    SharedDto,
    SharedModel,
    // Project scaffold
    MainGo,
    ConfigGo,
    ApplicationGo,
    GoMod,
    EnvFile,
    Dockerfile,
    DockerCompose,
    AppModule,
}

macro_rules! embedded {
    ($path:literal) => {
        include_str!(concat!("../../templates/", $path, ".tera"))
    };
}

impl Template {
    pub const ALL: [Template; 24] = [
        Template::ModuleController,
        Template::ModuleService,
        Template::ModuleRepository,
        Template::ModuleWiring,
        Template::ModuleModel,
        Template::ModuleDto,
        Template::ModuleTest,
        Template::LegacyController,
        Template::LegacyService,
        Template::LegacyRepository,
        Template::LegacyModel,
        Template::LegacyDto,
        Template::LegacyEnum,
        Template::LegacyServiceTest,
        Template::SharedDto,
        Template::SharedModel,
        Template::MainGo,
        Template::ConfigGo,
        Template::ApplicationGo,
        Template::GoMod,
        Template::EnvFile,
        Template::Dockerfile,
        Template::DockerCompose,
        Template::AppModule,
    ];

    /// Registered name; also the override file path minus `.tera`.
    pub fn name(self) -> &'static str {
        match self {
            Template::ModuleController => "module/controller.go",
            Template::ModuleService => "module/service.go",
            Template::ModuleRepository => "module/repository.go",
            Template::ModuleWiring => "module/module.go",
            Template::ModuleModel => "module/model.go",
            Template::ModuleDto => "module/dto.go",
            Template::ModuleTest => "module/module_test.go",
            Template::LegacyController => "legacy/controller.go",
            Template::LegacyService => "legacy/service.go",
            Template::LegacyRepository => "legacy/repository.go",
            Template::LegacyModel => "legacy/model.go",
            Template::LegacyDto => "legacy/dto.go",
            Template::LegacyEnum => "legacy/enum.go",
            Template::LegacyServiceTest => "legacy/service_test.go",
            Template::SharedDto => "shared/base_dto.go",
            Template::SharedModel => "shared/base_model.go",
            Template::MainGo => "project/main.go",
            Template::ConfigGo => "project/config.go",
            Template::ApplicationGo => "project/application.go",
            Template::GoMod => "project/go.mod",
            Template::EnvFile => "project/env",
            Template::Dockerfile => "project/Dockerfile",
            Template::DockerCompose => "project/docker-compose.yml",
            Template::AppModule => "project/app.module.go",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Template::ModuleController => embedded!("module/controller.go"),
            Template::ModuleService => embedded!("module/service.go"),
            Template::ModuleRepository => embedded!("module/repository.go"),
            Template::ModuleWiring => embedded!("module/module.go"),
            Template::ModuleModel => embedded!("module/model.go"),
            Template::ModuleDto => embedded!("module/dto.go"),
            Template::ModuleTest => embedded!("module/module_test.go"),
            Template::LegacyController => embedded!("legacy/controller.go"),
            Template::LegacyService => embedded!("legacy/service.go"),
            Template::LegacyRepository => embedded!("legacy/repository.go"),
            Template::LegacyModel => embedded!("legacy/model.go"),
            Template::LegacyDto => embedded!("legacy/dto.go"),
            Template::LegacyEnum => embedded!("legacy/enum.go"),
            Template::LegacyServiceTest => embedded!("legacy/service_test.go"),
            Template::SharedDto => embedded!("shared/base_dto.go"),
            Template::SharedModel => embedded!("shared/base_model.go"),
            Template::MainGo => embedded!("project/main.go"),
            Template::ConfigGo => embedded!("project/config.go"),
            Template::ApplicationGo => embedded!("project/application.go"),
            Template::GoMod => embedded!("project/go.mod"),
            Template::EnvFile => embedded!("project/env"),
            Template::Dockerfile => embedded!("project/Dockerfile"),
            Template::DockerCompose => embedded!("project/docker-compose.yml"),
            Template::AppModule => embedded!("project/app.module.go"),
        }
    }
}

/// Placeholder values for one render call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bindings(BTreeMap<String, String>);

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn bind(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
}

/// Renders embedded (or overridden) templates.
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Renderer over the embedded templates only.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(Template::ALL.iter().map(|t| (t.name(), t.source())))
            .map_err(|e| {
                anyhow!(GoneyError::Template { source: e })
                    .context("Failed to register built-in templates")
            })?;
        debug!("Registered {} built-in templates", Template::ALL.len());
        Ok(Self { tera })
    }

    /// Renderer over the embedded templates with `*.tera` files from
    /// `overrides` layered on top. A missing directory is ignored.
    pub fn with_overrides(overrides: Option<&Path>) -> Result<Self> {
        let mut renderer = Self::new()?;
        if let Some(dir) = overrides {
            if dir.is_dir() {
                renderer.load_overrides(dir)?;
            } else {
                debug!(
                    "Template override directory '{}' not present, skipping",
                    dir.display()
                );
            }
        }
        Ok(renderer)
    }

    fn load_overrides(&mut self, dir: &Path) -> Result<()> {
        info!("Loading template overrides from '{}'", dir.display());
        for entry_result in WalkDir::new(dir) {
            let entry = match entry_result {
                Ok(e) => e,
                Err(e) => {
                    warn!(
                        "Failed to access entry during walk in '{}': {}",
                        dir.display(),
                        e
                    );
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative_path) = entry.path().strip_prefix(dir) else {
                continue;
            };
            if relative_path
                .components()
                .any(|comp| comp.as_os_str().to_string_lossy().starts_with('.'))
            {
                debug!("Skipping hidden path: {}", entry.path().display());
                continue;
            }
            let relative = relative_path
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let Some(name) = relative.strip_suffix(TEMPLATE_EXTENSION) else {
                debug!("Ignoring non-template file: {}", entry.path().display());
                continue;
            };
            if !Template::ALL.iter().any(|t| t.name() == name) {
                warn!(
                    "Override '{}' does not match any built-in template and will not be used",
                    entry.path().display()
                );
                continue;
            }
            let source = fs::read_to_string(entry.path()).with_context(|| {
                format!("Failed to read template file '{}'", entry.path().display())
            })?;
            self.register_raw(name, &source).with_context(|| {
                format!("Invalid template override '{}'", entry.path().display())
            })?;
            info!("Template '{}' overridden by '{}'", name, entry.path().display());
        }
        Ok(())
    }

    /// Registers (or replaces) a template under `name`.
    pub fn register_raw(&mut self, name: &str, source: &str) -> Result<()> {
        self.tera
            .add_raw_template(name, source)
            .map_err(|e| anyhow!(GoneyError::Template { source: e }))
    }

    pub fn render(&self, template: Template, bindings: &Bindings) -> Result<String> {
        self.render_named(template.name(), bindings)
    }

    /// Renders the template registered under `name`. Any placeholder with no
    /// binding is an error.
    pub fn render_named(&self, name: &str, bindings: &Bindings) -> Result<String> {
        let context = tera::Context::from_serialize(bindings).map_err(|e| {
            anyhow!(GoneyError::Template { source: e })
                .context("Failed to create Tera context from bindings")
        })?;
        self.tera.render(name, &context).map_err(|e| {
            anyhow!(GoneyError::Template { source: e })
                .context(format!("Tera rendering failed for template '{}'", name))
        })
    }
}
