//! # Name Derivation
//!
//! File: cli/src/codegen/naming.rs
//!
//! Turns the raw name typed on the command line into every identifier the
//! generated files use. Names are derived once per request and shared by all
//! component generators, so the controller, service and module wiring always
//! agree on type and variable names.
//!
//! Derivation is shallow and never fails: no sanitization or validation is
//! applied, so a name that is not a valid Go identifier produces invalid Go.
//!
use crate::codegen::request::GeneratorFamily;

/// Identifiers derived from one raw module/entity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// The name exactly as supplied.
    pub raw: String,
    /// Go type prefix: first letter of every space-delimited word upper-cased.
    pub class_name: String,
    /// Go package and file name stem: lower-cased.
    pub package_name: String,
    /// Go variable prefix: first letter lower-cased.
    pub variable_name: String,
    /// Value returned by the model's `TableName()`. Never pluralized.
    pub table_name: String,
    /// Path segment used in route comments.
    pub route_segment: String,
    /// Human-facing entity name used in handler summaries.
    pub entity_name: String,
}

impl DerivedNames {
    pub fn derive(raw: &str, family: GeneratorFamily) -> Self {
        let lower = raw.to_lowercase();
        let route_segment = match family {
            GeneratorFamily::LegacyFlat => format!("{}s", lower),
            GeneratorFamily::FlatModule => raw.to_string(),
        };
        Self {
            raw: raw.to_string(),
            class_name: capitalize_words(raw),
            package_name: lower.clone(),
            variable_name: lower_first(raw),
            table_name: lower.clone(),
            route_segment,
            entity_name: lower,
        }
    }
}

/// Upper-cases the first character of each space-delimited word, leaving
/// the rest of every word unchanged.
pub fn capitalize_words(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = true;
    for c in input.chars() {
        if capitalize_next {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        capitalize_next = c == ' ';
    }
    result
}

/// Lower-cases only the first character.
pub fn lower_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
