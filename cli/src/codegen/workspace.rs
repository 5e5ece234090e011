//! # Go Workspace Discovery
//!
//! File: cli/src/codegen/workspace.rs
//!
//! Generated files import one another through the Go module path declared in
//! `go.mod`. This module reads that path from the directory generation runs
//! in, falling back to the configured default when `go.mod` is absent or its
//! first line is not a `module` directive.
//!
use crate::common::fs::io;
use std::path::Path;
use tracing::{debug, warn};

/// Returns the module path declared on the first line of `<dir>/go.mod`, or
/// `fallback`.
pub fn discover_module_path(dir: &Path, fallback: &str) -> String {
    let go_mod = dir.join("go.mod");
    if !go_mod.is_file() {
        debug!(
            "No go.mod in {}, using module path '{}'",
            dir.display(),
            fallback
        );
        return fallback.to_string();
    }
    match io::read_file_to_string(&go_mod) {
        Ok(content) => match parse_module_line(&content) {
            Some(module) => {
                debug!("Module path from go.mod: {}", module);
                module
            }
            None => {
                warn!(
                    "go.mod at {} has no leading module directive, using '{}'",
                    go_mod.display(),
                    fallback
                );
                fallback.to_string()
            }
        },
        Err(e) => {
            warn!("{:#}; using module path '{}'", e, fallback);
            fallback.to_string()
        }
    }
}

fn parse_module_line(content: &str) -> Option<String> {
    let first = content.lines().next()?.trim();
    let module = first.strip_prefix("module")?;
    if !module.starts_with(char::is_whitespace) {
        return None;
    }
    let module = module.trim();
    (!module.is_empty()).then(|| module.to_string())
}
