//! # Generation Report
//!
//! File: cli/src/codegen/report.rs
//!
//! Records what a generation run tried to write and how each attempt ended.
//! Per-file failures never abort a run; they are collected here, printed to
//! stderr as they happen and summarised at the end. The process exit code is
//! not affected by them.
//!
use std::fmt;
use std::path::{Path, PathBuf};

/// How a single attempted write ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// File created or overwritten.
    Written,
    /// Shared artifact created by this run.
    SharedCreated,
    /// Shared artifact already present and left untouched.
    SharedKept,
    /// The step failed; the message carries the full error chain.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub path: PathBuf,
    pub outcome: Outcome,
}

#[derive(Debug, Default, Clone)]
pub struct GenerationReport {
    steps: Vec<Step>,
}

impl GenerationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: impl Into<PathBuf>, outcome: Outcome) {
        self.steps.push(Step {
            path: path.into(),
            outcome,
        });
    }

    /// Records a failure and reports it on stderr with the offending path.
    pub fn record_failure(&mut self, path: impl Into<PathBuf>, error: &anyhow::Error) {
        let path = path.into();
        tracing::error!("Generation step failed for {}: {:?}", path.display(), error);
        eprintln!("❌ Failed to generate {}: {:#}", path.display(), error);
        self.record(path, Outcome::Failed(format!("{:#}", error)));
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Every path the run attempted, in order, regardless of outcome.
    pub fn attempted(&self) -> impl Iterator<Item = &Path> {
        self.steps.iter().map(|s| s.path.as_path())
    }

    pub fn failures(&self) -> impl Iterator<Item = &Step> {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Failed(_)))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn written_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Written | Outcome::SharedCreated))
            .count()
    }

    /// Prints the manifest of attempted files, relative to `root` where
    /// possible.
    pub fn print_summary(&self, root: &Path) {
        println!(
            "📁 Files ({} written of {} attempted):",
            self.written_count(),
            self.attempted().count()
        );
        for step in self.steps() {
            let shown = step.path.strip_prefix(root).unwrap_or(&step.path);
            match &step.outcome {
                Outcome::Failed(reason) => {
                    println!("   {} {} ({})", step.outcome, shown.display(), reason)
                }
                _ => println!("   {} {}", step.outcome, shown.display()),
            }
        }
        let failed = self.failures().count();
        if failed > 0 {
            eprintln!(
                "⚠️  {} of {} step(s) failed; see the errors above.",
                failed,
                self.steps.len()
            );
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self {
            Outcome::Written => "-",
            Outcome::SharedCreated => "+",
            Outcome::SharedKept => "=",
            Outcome::Failed(_) => "✗",
        };
        f.write_str(marker)
    }
}
