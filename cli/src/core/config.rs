//! # Goney Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads, merges and validates the optional configuration that tunes code
//! generation: the Go module path used when no `go.mod` can be read, the port
//! baked into scaffolded projects, and a directory of template overrides.
//!
//! ## Architecture
//!
//! Configuration sources, in order of precedence:
//! 1. `GONEY_TEMPLATES_DIR` (templates directory only, applied by the caller)
//! 2. Project-specific `.goney.toml` in the current directory or an ancestor
//!    (the search stops at a directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config dir (`goney/`)
//! 4. Defaults defined in this file
//!
//! ```toml
//! [project]
//! fallback_module = "myapp"
//! default_port = "8080"
//!
//! [templates]
//! directory = "~/.config/goney/templates"
//! ```
//!
//! Paths are tilde-expanded and the merged result is validated before use.
//!
use crate::core::error::{GoneyError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Top-level configuration loaded from TOML.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// Settings applied to generated Go code.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Go module path used when `go.mod` is missing or unreadable.
    #[serde(default = "default_fallback_module")]
    pub fallback_module: String,
    /// Port written into `.env`, `config.go`, the Dockerfile and compose file.
    #[serde(default = "default_port")]
    pub default_port: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            fallback_module: default_fallback_module(),
            default_port: default_port(),
        }
    }
}

/// Template override settings.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Directory of `*.tera` files replacing the embedded templates (can use ~).
    pub directory: Option<String>,
}

fn default_fallback_module() -> String {
    "myapp".to_string()
}
fn default_port() -> String {
    "8080".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".goney.toml";

impl Config {
    /// Replaces the templates directory when an override (flag or
    /// `GONEY_TEMPLATES_DIR`) was supplied, then re-expands and re-validates it.
    pub fn with_templates_override(mut self, dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = dir {
            debug!("Template directory overridden to {}", dir.display());
            self.templates.directory = Some(dir.to_string_lossy().into_owned());
            expand_config_paths(&mut self)?;
            validate_config(&self)?;
        }
        Ok(self)
    }

    /// The expanded template override directory, if one is configured.
    pub fn templates_dir(&self) -> Option<PathBuf> {
        self.templates.directory.as_ref().map(PathBuf::from)
    }
}

/// Loads the merged configuration as seen from `start_dir`.
pub fn load_config_from(start_dir: &Path) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config(start_dir)?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "Goney", "goney") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config(start_dir: &Path) -> Result<Option<Config>> {
    match find_project_config_path(start_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No {} found in {} or its ancestors.", PROJECT_CONFIG_FILENAME, start_dir.display());
            Ok(None)
        }
    }
}

/// Walks from `start_dir` upwards looking for `.goney.toml`, stopping at the
/// first directory that holds a `.git` directory.
fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win whenever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project_cfg) = project else {
        return user;
    };
    let mut merged = Config::default();
    merged.project.fallback_module =
        if project_cfg.project.fallback_module != default_fallback_module() {
            project_cfg.project.fallback_module
        } else {
            user.project.fallback_module
        };
    merged.project.default_port = if project_cfg.project.default_port != default_port() {
        project_cfg.project.default_port
    } else {
        user.project.default_port
    };
    merged.templates.directory = project_cfg
        .templates
        .directory
        .or(user.templates.directory);
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(dir) = config.templates.directory.as_mut() {
        let expanded = shellexpand::tilde_with_context(dir.as_str(), || {
            dirs::home_dir().map(|home| home.to_string_lossy().into_owned())
        })
        .into_owned();
        debug!("Expanded templates directory: {}", expanded);
        *dir = expanded;
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating configuration...");
    if config.project.fallback_module.trim().is_empty() {
        return Err(anyhow!(GoneyError::Config(
            "project.fallback_module cannot be empty.".to_string()
        )));
    }
    match config.project.default_port.parse::<u16>() {
        Ok(port) if port > 0 => {}
        _ => {
            return Err(anyhow!(GoneyError::Config(format!(
                "Invalid project.default_port '{}'. Expected a number between 1 and 65535.",
                config.project.default_port
            ))))
        }
    }
    if let Some(dir) = config.templates_dir() {
        if !dir.exists() {
            warn!(
                "Configured templates directory '{}' does not exist; using built-in templates.",
                dir.display()
            );
        } else if !dir.is_dir() {
            return Err(anyhow!(GoneyError::Config(format!(
                "Configured templates path '{}' exists but is not a directory.",
                dir.display()
            ))));
        }
    }
    Ok(())
}
