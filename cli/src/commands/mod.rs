//! # Goney Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! The top-level commands of the `goney` CLI. Each module defines its clap
//! arguments and an async `handle_*` function called from `main.rs`.
//!
//! ## Command Groups
//!
//! - `new`: scaffold a new Go-ney project
//! - `generate` (alias `g`): generate CRUD modules and legacy components,
//!   acknowledge microservice/guard/interceptor requests
//! - `start`: sync dependencies, build and run the project with the Go toolchain
//!
//! `session` holds the setup shared by the generating commands (config,
//! template renderer, working directory).
//!

/// `goney generate ...` subcommands.
pub mod generate;
/// `goney new <projectName>`.
pub mod new;
/// Configuration and renderer setup shared by `new` and `generate`.
pub mod session;
/// `goney start`.
pub mod start;
