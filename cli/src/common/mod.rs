//! # Goney Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Cross-cutting helpers shared by the command handlers and the generation
//! engine:
//!
//! - **`fs`**: file emission (`io`), including create-once semantics for
//!   shared artifacts.
//! - **`process`**: running the Go toolchain with inherited stdio.
//!

/// Filesystem operations.
pub mod fs;
/// External process execution.
pub mod process;
