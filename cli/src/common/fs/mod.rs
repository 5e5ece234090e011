//! # Goney Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Import from the submodule directly, e.g.
//! `use crate::common::fs::io::write_string_to_file;`.
//!

/// Directory creation, overwrite-on-write emission and create-once emission.
pub mod io;
