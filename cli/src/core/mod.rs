//! # Goney Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces used by every command:
//! - `config`: layered TOML configuration (project file, user file, defaults).
//! - `error`: the `GoneyError` enum and the crate-wide `Result` alias.
//! - `templating`: the Tera-backed renderer holding every embedded template.
//!
pub mod config;
pub mod error;
pub mod templating;
