//! Implementation of the `gencode list` command.

use gencode_core::{
    domain::DefinitionKind,
    error::Context as _,
    prelude::DefinitionSummary,
};

use crate::{
    cli::{ListArgs, ListFormat},
    commands::load_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = load_service(&config)?;
    let filter = args.kind.map(DefinitionKind::from);
    let summaries: Vec<DefinitionSummary> = service
        .list()
        .into_iter()
        .filter(|s| filter.is_none_or(|kind| s.kind == kind))
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header(&format!(
                "Definitions in {}:",
                config.paths.definitions.display()
            ))?;
            for line in table_lines(&summaries) {
                output.print(&line)?;
            }
        }
        ListFormat::List => {
            for s in &summaries {
                println!("{}", s.name);
            }
        }
        ListFormat::Json => {
            // Straight to stdout so the array stays parseable in pipes.
            let json = serde_json::to_string_pretty(&summaries)
                .context("Failed to serialise definitions")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// `  kind  name  version` rows with the kind column padded.
fn table_lines(summaries: &[DefinitionSummary]) -> Vec<String> {
    let width = summaries
        .iter()
        .map(|s| s.kind.as_str().len())
        .max()
        .unwrap_or(0);

    summaries
        .iter()
        .map(|s| {
            let line = format!("  {:<width$}  {}", s.kind.as_str(), s.name);
            match s.version {
                Some(v) => format!("{line} @ {v}"),
                None => line,
            }
        })
        .collect()
}
