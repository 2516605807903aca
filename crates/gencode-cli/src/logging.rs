//! Diagnostics for a `gencode` run.
//!
//! Generated endpoint source goes to stdout, so every log line is written to
//! stderr and `gencode gen http_endpoint X > Endpoint.cs` stays clean. Only
//! the binary installs a subscriber; `gencode-core` and `gencode-adapters`
//! emit spans (`generate`, `deliver`, `gen_*`) and events against their own
//! targets.
//!
//! | Flag(s)   | Level | Typical output                          |
//! |-----------|-------|-----------------------------------------|
//! | `--quiet` | ERROR | failures only                           |
//! | (none)    | WARN  | skipped translators                     |
//! | `-v`      | INFO  | definitions loaded, files written/kept  |
//! | `-vv`     | DEBUG | lookups, rendered artifact paths        |
//! | `-vvv`    | TRACE | everything, with timestamps             |
//!
//! `RUST_LOG` replaces the derived filter when set.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crates whose events a `gencode` run reports.
const TARGETS: [&str; 3] = ["gencode", "gencode_core", "gencode_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(level >= LevelFilter::DEBUG)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi(args, std::io::stderr().is_terminal()))
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if level == LevelFilter::TRACE {
        registry.with(fmt_layer).try_init()
    } else {
        registry.with(fmt_layer.without_time()).try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `-q` wins over any number of `-v`.
fn derive_level(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn directives(level: LevelFilter) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn use_ansi(args: &GlobalArgs, stderr_is_terminal: bool) -> bool {
    !args.no_color && args.output_format != OutputFormat::Plain && stderr_is_terminal
}
