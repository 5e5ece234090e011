//! # Goney Generate Command Group
//!
//! File: cli/src/commands/generate/mod.rs
//!
//! ## Overview
//!
//! Routes `goney generate <subcommand>` (alias `goney g`) to its handler.
//!
//! | Subcommand                        | Effect                                          |
//! |-----------------------------------|-------------------------------------------------|
//! | `controller <name>`               | legacy flat controller + DTO                    |
//! | `service <name>`                  | legacy flat service + model                     |
//! | `repository <name>`               | legacy flat gorm repository                     |
//! | `crud <name> [flags]`             | full module in `src/modules/<name>/`            |
//! | `crud <name> --legacy [flags]`    | full legacy bundle incl. enum and mock test     |
//! | `microservice <type> <name>`     | acknowledgement only                            |
//! | `guard <name>`                    | acknowledgement only                            |
//! | `interceptor <name>`              | acknowledgement only                            |
//!
//! Generation writes relative to the current directory and reads the Go
//! module path from `./go.mod`.
//!
use crate::commands::session::TemplateArgs;
use crate::core::error::Result;
use clap::{Parser, Subcommand};

mod crud;
mod legacy;
mod stubs;

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,

    #[command(flatten)]
    templates: TemplateArgs,
}

#[derive(Subcommand, Debug)]
enum GenerateCommand {
    /// Generate a controller (and its DTO) in controllers/ and dto/.
    Controller(legacy::ComponentArgs),
    /// Generate a service (and its model) in services/ and models/.
    Service(legacy::ComponentArgs),
    /// Generate a gorm-backed repository in repositories/.
    Repository(legacy::ComponentArgs),
    /// Generate a microservice skeleton (acknowledgement only).
    Microservice(stubs::MicroserviceArgs),
    /// Generate a guard (acknowledgement only).
    Guard(stubs::StubArgs),
    /// Generate an interceptor (acknowledgement only).
    Interceptor(stubs::StubArgs),
    /// Generate a complete CRUD module.
    Crud(crud::CrudArgs),
}

pub async fn handle_generate(args: GenerateArgs) -> Result<()> {
    match args.command {
        GenerateCommand::Controller(component) => {
            legacy::handle_component(legacy::Component::Controller, component, &args.templates)
                .await?
        }
        GenerateCommand::Service(component) => {
            legacy::handle_component(legacy::Component::Service, component, &args.templates)
                .await?
        }
        GenerateCommand::Repository(component) => {
            legacy::handle_component(legacy::Component::Repository, component, &args.templates)
                .await?
        }
        GenerateCommand::Microservice(stub) => stubs::handle_microservice(stub).await?,
        GenerateCommand::Guard(stub) => stubs::handle_guard(stub).await?,
        GenerateCommand::Interceptor(stub) => stubs::handle_interceptor(stub).await?,
        GenerateCommand::Crud(crud) => crud::handle_crud(crud, &args.templates).await?,
    }
    Ok(())
}
