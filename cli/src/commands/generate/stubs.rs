//! # Acknowledged Generators
//!
//! File: cli/src/commands/generate/stubs.rs
//!
//! `microservice`, `guard` and `interceptor` are part of the command surface
//! but produce no files; they only confirm the request. The transport type of
//! a microservice is still checked, so an unknown type is a usage error.
//!
use crate::core::error::Result;
use clap::{builder::NonEmptyStringValueParser, Parser, ValueEnum};
use tracing::info;

/// Supported microservice transports.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicroserviceKind {
    Grpc,
    Nats,
    Tcp,
}

impl MicroserviceKind {
    fn label(self) -> &'static str {
        match self {
            MicroserviceKind::Grpc => "gRPC",
            MicroserviceKind::Nats => "NATS",
            MicroserviceKind::Tcp => "TCP",
        }
    }
}

#[derive(Parser, Debug)]
pub struct MicroserviceArgs {
    /// Transport: grpc, nats or tcp.
    #[arg(value_enum)]
    pub kind: MicroserviceKind,
    /// Service name.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct StubArgs {
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,
}

pub async fn handle_microservice(args: MicroserviceArgs) -> Result<()> {
    info!("Microservice {:?} '{}' acknowledged", args.kind, args.name);
    println!(
        "✅ {} microservice {} acknowledged (no files generated)",
        args.kind.label(),
        args.name
    );
    Ok(())
}

pub async fn handle_guard(args: StubArgs) -> Result<()> {
    info!("Guard '{}' acknowledged", args.name);
    println!("✅ Guard {} acknowledged (no files generated)", args.name);
    Ok(())
}

pub async fn handle_interceptor(args: StubArgs) -> Result<()> {
    info!("Interceptor '{}' acknowledged", args.name);
    println!("✅ Interceptor {} acknowledged (no files generated)", args.name);
    Ok(())
}
