//! # Generation Requests
//!
//! File: cli/src/codegen/request.rs
//!
//! The immutable description of one generation run: what to build, from
//! which raw name, with which options and which of the two generator
//! families.
//!

/// Kinds of artifact the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Controller,
    Service,
    Repository,
    Dto,
    Model,
    Module,
    Test,
    Enum,
}

/// The two output layouts.
///
/// `LegacyFlat` writes into top-level `controllers/`, `services/`,
/// `repositories/`, `dto/`, `models/` and `enums/` directories and backs the
/// repository with gorm. `FlatModule` writes every file of a module into
/// `src/modules/<name>/` as one Go package with an in-memory repository stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorFamily {
    LegacyFlat,
    #[default]
    FlatModule,
}

/// Boolean switches of a CRUD generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionSet {
    pub global: bool,
    pub no_dto: bool,
    pub no_model: bool,
    pub crud: bool,
}

impl OptionSet {
    /// Global mode never emits a per-module DTO.
    pub fn emits_dto(&self) -> bool {
        !self.global && !self.no_dto
    }

    /// Global mode never emits a per-module model.
    pub fn emits_model(&self) -> bool {
        !self.global && !self.no_model
    }
}

/// One generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub kind: ArtifactKind,
    pub raw_name: String,
    pub options: OptionSet,
    pub family: GeneratorFamily,
}

impl GenerationRequest {
    pub fn new(kind: ArtifactKind, raw_name: impl Into<String>) -> Self {
        Self {
            kind,
            raw_name: raw_name.into(),
            options: OptionSet::default(),
            family: GeneratorFamily::default(),
        }
    }

    pub fn with_options(mut self, options: OptionSet) -> Self {
        self.options = options;
        self
    }

    pub fn with_family(mut self, family: GeneratorFamily) -> Self {
        self.family = family;
        self
    }
}
