//! Implementation of `gencode gen`.

use tracing::info;

use gencode_core::{
    domain::ArtifactKind,
    prelude::{Delivery, GenerateRequest},
};

use crate::{
    cli::GenCommands,
    commands::load_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(cmd: GenCommands, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = load_service(&config)?;

    let Some(request) = request_for(cmd) else {
        let deliveries = service.generate_all()?;
        if deliveries.is_empty() {
            output.info("Nothing to generate: the definition file is empty")?;
        }
        return report(&deliveries, output);
    };

    info!(kind = %request.kind, name = %request.name, "Generating");
    let delivery = service.run(&request)?;
    report(std::slice::from_ref(&delivery), output)
}

/// Translate the parsed subcommand into a service request; `None` means `all`.
fn request_for(cmd: GenCommands) -> Option<GenerateRequest> {
    let request = match cmd {
        GenCommands::All => return None,
        GenCommands::Action(a) => GenerateRequest::new(ArtifactKind::Action, a.name),
        GenCommands::Aggregate(a) => GenerateRequest::new(ArtifactKind::Aggregate, a.name),
        GenCommands::AggregateMigrator(a) => {
            GenerateRequest::new(ArtifactKind::AggregateMigrator, a.name)
        }
        GenCommands::Command(a) => GenerateRequest::new(ArtifactKind::Command, a.name),
        GenCommands::EntityId(a) => GenerateRequest::new(ArtifactKind::EntityId, a.name),
        GenCommands::HttpBbTranslator(a) => {
            GenerateRequest::new(ArtifactKind::HttpBbTranslator, a.name)
        }
        GenCommands::HttpCommandTranslator(a) => {
            GenerateRequest::new(ArtifactKind::HttpCommandTranslator, a.name)
                .with_version(a.version)
        }
        GenCommands::HttpCommand(a) => {
            GenerateRequest::new(ArtifactKind::HttpCommand, a.name).with_version(a.version)
        }
        GenCommands::HttpEndpoint(a) => {
            let request = GenerateRequest::new(ArtifactKind::HttpEndpoint, a.name);
            match a.version {
                Some(version) => request.with_version(version),
                None => request,
            }
        }
    };
    Some(request)
}

/// Status lines for written/kept files, then printed artifacts.
fn report(deliveries: &[Delivery], output: &OutputManager) -> CliResult<()> {
    let (printed, files): (Vec<&Delivery>, Vec<&Delivery>) = deliveries
        .iter()
        .partition(|d| matches!(d, Delivery::Print(_)));

    for delivery in files.into_iter().chain(printed) {
        output.delivery(delivery)?;
    }
    Ok(())
}
