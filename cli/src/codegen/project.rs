//! # Project Scaffolding
//!
//! File: cli/src/codegen/project.rs
//!
//! ## Overview
//!
//! Creates a new Go-ney project: a fixed directory skeleton plus the
//! top-level files (entry point, config loader, core application, `go.mod`,
//! `.env` and `.env.example`, Dockerfile, compose file and the
//! composition-root `src/app.module.go`).
//!
//! The project name doubles as the Go module path and the database name. The
//! example env file gets the database name suffixed with `_example`. Like
//! module generation, a failing directory or file is reported and skipped.
//!
use crate::codegen::report::{GenerationReport, Outcome};
use crate::common::fs::io;
use crate::core::templating::{Bindings, Template, TemplateRenderer};
use std::path::Path;
use tracing::info;

/// Directories created inside every new project.
pub const PROJECT_DIRECTORIES: [&str; 12] = [
    "src/modules",
    "src/common/dto",
    "src/common/guards",
    "src/common/interceptors",
    "src/common/decorators",
    "src/common/enums",
    "src/common/middleware",
    "src/common/models",
    "src/config",
    "pkg/core",
    "docs",
    "tests",
];

/// Top-level files: template, path inside the project, database name suffix.
const PROJECT_FILES: [(Template, &str, &str); 9] = [
    (Template::MainGo, "main.go", ""),
    (Template::ConfigGo, "config/config.go", ""),
    (Template::ApplicationGo, "pkg/core/application.go", ""),
    (Template::GoMod, "go.mod", ""),
    (Template::EnvFile, ".env", ""),
    (Template::EnvFile, ".env.example", "_example"),
    (Template::Dockerfile, "Dockerfile", ""),
    (Template::DockerCompose, "docker-compose.yml", ""),
    (Template::AppModule, "src/app.module.go", ""),
];

/// Builds new projects from the project templates.
pub struct ProjectScaffolder<'a> {
    renderer: &'a TemplateRenderer,
    port: &'a str,
}

impl<'a> ProjectScaffolder<'a> {
    pub fn new(renderer: &'a TemplateRenderer, port: &'a str) -> Self {
        Self { renderer, port }
    }

    /// Scaffolds `project_root`, naming the project `project_name`.
    pub fn scaffold(&self, project_root: &Path, project_name: &str) -> GenerationReport {
        info!(
            "Scaffolding project '{}' in {}",
            project_name,
            project_root.display()
        );
        let mut report = GenerationReport::new();

        for dir in PROJECT_DIRECTORIES {
            let path = project_root.join(dir);
            if let Err(e) = io::ensure_dir_exists(&path) {
                report.record_failure(path, &e);
            }
        }

        for (template, relative, db_suffix) in PROJECT_FILES {
            let path = project_root.join(relative);
            let bindings = Bindings::new()
                .bind("ProjectName", project_name)
                .bind("DbName", format!("{}{}", project_name, db_suffix))
                .bind("Port", self.port);
            let result = self
                .renderer
                .render(template, &bindings)
                .and_then(|content| io::write_string_to_file(&path, &content));
            match result {
                Ok(()) => report.record(path, Outcome::Written),
                Err(e) => report.record_failure(path, &e),
            }
        }
        report
    }
}
