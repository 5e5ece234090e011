//! # Goney CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates in `cli/tests/`. Every
//! command runs inside a fresh temporary directory with its own config home,
//! so user-level configuration and `GONEY_TEMPLATES_DIR` on the host cannot
//! leak into a test.
//!

// Not every test crate uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// `goney` binary built for this test run.
pub fn goney_cmd() -> Command {
    Command::cargo_bin("goney").expect("Failed to find goney binary for testing")
}

/// `goney` running in `dir`, isolated from host configuration.
pub fn goney_in(dir: &Path) -> Command {
    let mut cmd = goney_cmd();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env_remove("GONEY_TEMPLATES_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes a minimal `go.mod` declaring `module`.
pub fn write_go_mod(dir: &Path, module: &str) {
    fs::write(dir.join("go.mod"), format!("module {}\n\ngo 1.23\n", module))
        .expect("Failed to write go.mod");
}

pub fn read(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

/// Sorted file names directly inside `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir.display(), e))
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Qualifiers generated Go code may use for imported packages.
const GO_QUALIFIERS: [&str; 16] = [
    "assert",
    "config",
    "core",
    "dto",
    "fmt",
    "gin",
    "gorm",
    "http",
    "log",
    "mock",
    "models",
    "os",
    "repositories",
    "services",
    "testing",
    "time",
];

/// Package name an import spec binds (`"a/b/c"` -> `c`, `x "a/b"` -> `x`).
fn go_import_name(spec: &str) -> Option<String> {
    let spec = spec.trim();
    if spec.is_empty() {
        return None;
    }
    if spec.starts_with('"') {
        let path = spec.trim_matches('"');
        return path.rsplit('/').next().map(str::to_string);
    }
    let alias = spec.split_whitespace().next()?;
    (alias != "_" && alias != ".").then(|| alias.to_string())
}

/// Splits Go source into imported package names and the code outside the
/// import section, with comments removed.
fn split_go_source(source: &str) -> (Vec<String>, String) {
    let mut imports = Vec::new();
    let mut body = String::new();
    let mut in_block = false;
    for line in source.lines() {
        let trimmed = line.trim();
        if in_block {
            if trimmed == ")" {
                in_block = false;
            } else if let Some(name) = go_import_name(trimmed) {
                imports.push(name);
            }
            continue;
        }
        if trimmed == "import (" {
            in_block = true;
            continue;
        }
        if let Some(spec) = trimmed.strip_prefix("import ") {
            imports.extend(go_import_name(spec));
            continue;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        let code = line.find(" //").map_or(line, |i| &line[..i]);
        body.push_str(code);
        body.push('\n');
    }
    (imports, body)
}

/// True when `body` contains `qualifier.` as a package selector.
fn uses_qualifier(body: &str, qualifier: &str) -> bool {
    let needle = format!("{}.", qualifier);
    body.match_indices(&needle).any(|(i, _)| {
        body[..i]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_' || c == '.'))
    })
}

/// Asserts every `.go` file under `dir` imports each package it uses and
/// uses each package it imports.
pub fn assert_go_imports_consistent(dir: &Path) {
    let mut checked = 0;
    for entry in walkdir::WalkDir::new(dir) {
        let entry = entry.expect("Failed to walk generated tree");
        if entry.path().extension().map_or(true, |ext| ext != "go") {
            continue;
        }
        let (imports, body) = split_go_source(&read(entry.path()));
        for qualifier in GO_QUALIFIERS {
            if uses_qualifier(&body, qualifier) {
                assert!(
                    imports.iter().any(|name| name == qualifier),
                    "{} uses package '{}' without importing it",
                    entry.path().display(),
                    qualifier
                );
            }
        }
        for name in &imports {
            assert!(
                uses_qualifier(&body, name),
                "{} imports '{}' but never uses it",
                entry.path().display(),
                name
            );
        }
        checked += 1;
    }
    assert!(checked > 0, "no Go files under {}", dir.display());
}
