//! # Goney Code Generation Engine
//!
//! File: cli/src/codegen/mod.rs
//!
//! ## Overview
//!
//! Turns a module/entity name and a handful of options into a consistent set
//! of Go source files whose package names, type names and import paths all
//! refer to one another correctly.
//!
//! ## Architecture
//!
//! Leaf-first:
//! - `naming`: `DerivedNames` computed once per request.
//! - `request`: `GenerationRequest`, `OptionSet`, `ArtifactKind`, and the
//!   `GeneratorFamily` strategy (`LegacyFlat` or `FlatModule`).
//! - `workspace`: Go module path discovery from `go.mod`.
//! - `components`: per-artifact generators and type-reference selection.
//! - `shared`: create-once global DTO/model files.
//! - `module`: the orchestrator running a request step by step.
//! - `project`: the new-project scaffolder.
//! - `report`: the per-run record of attempted files and failures.
//!
//! Rendering goes through `core::templating`, writing through
//! `common::fs::io`. Generation is synchronous and sequential.
//!
pub mod components;
pub mod module;
pub mod naming;
pub mod project;
pub mod report;
pub mod request;
pub mod shared;
pub mod workspace;
