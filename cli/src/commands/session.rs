//! # Generation Session
//!
//! File: cli/src/commands/session.rs
//!
//! Loads everything a generating command needs before it touches the
//! filesystem: the merged configuration, the template renderer (with any
//! overrides) and the directory generation is rooted at.
//!
use crate::codegen::components::GenerationContext;
use crate::codegen::workspace;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use crate::core::templating::TemplateRenderer;
use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Template override flag shared by `new` and `generate`.
#[derive(Args, Debug, Clone, Default)]
pub struct TemplateArgs {
    /// Directory of `*.tera` files overriding the built-in templates.
    #[arg(
        long = "templates-dir",
        env = "GONEY_TEMPLATES_DIR",
        value_name = "DIR",
        global = true
    )]
    pub templates_dir: Option<PathBuf>,
}

pub struct Session {
    pub root: PathBuf,
    pub config: Config,
    pub renderer: TemplateRenderer,
}

impl Session {
    /// Session rooted at the current working directory.
    pub fn load(templates: &TemplateArgs) -> Result<Self> {
        let root = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_in(&root, templates)
    }

    pub fn load_in(root: &Path, templates: &TemplateArgs) -> Result<Self> {
        let config = config::load_config_from(root)?
            .with_templates_override(templates.templates_dir.clone())?;
        let renderer = TemplateRenderer::with_overrides(config.templates_dir().as_deref())?;
        debug!("Session rooted at {}", root.display());
        Ok(Self {
            root: root.to_path_buf(),
            config,
            renderer,
        })
    }

    /// Go module path of the project at the session root.
    pub fn project_module(&self) -> String {
        workspace::discover_module_path(&self.root, &self.config.project.fallback_module)
    }

    pub fn context<'a>(&'a self, project_module: &'a str) -> GenerationContext<'a> {
        GenerationContext {
            renderer: &self.renderer,
            root: &self.root,
            project_module,
        }
    }
}
