//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use gencode_core::domain::{ApiVersion, DefinitionKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gencode",
    bin_name = "gencode",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate domain-driven boilerplate from a definition file",
    long_about = "gencode reads a YAML definition of actions, aggregates and HTTP \
                  adapters and writes the matching C# source files into an \
                  OpenDDD project.",
    after_help = "EXAMPLES:\n\
        \x20 gencode list\n\
        \x20 gencode gen action PlaceOrder\n\
        \x20 gencode gen http_command PlaceOrder 1.0.0\n\
        \x20 gencode -d domain.yml -s ./src gen all",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the definitions in the definition file.
    #[command(
        visible_alias = "ls",
        about = "List definitions",
        after_help = "EXAMPLES:\n\
            \x20 gencode list\n\
            \x20 gencode list --kind action\n\
            \x20 gencode list --format json"
    )]
    List(ListArgs),

    /// Generate source files from definitions.
    #[command(
        visible_alias = "g",
        about = "Generate source files",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gencode gen all\n\
            \x20 gencode gen aggregate Order\n\
            \x20 gencode gen http_command_translator PlaceOrder 1.0.0\n\
            \x20 gencode gen http_endpoint PlaceOrder"
    )]
    Gen(GenCommands),

    /// Initialise a gencode configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 gencode init           # user config directory\n\
            \x20 gencode init --local   # .gencode.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gencode completions bash > ~/.local/share/bash-completion/completions/gencode\n\
            \x20 gencode completions zsh  > ~/.zfunc/_gencode\n\
            \x20 gencode completions fish > ~/.config/fish/completions/gencode.fish"
    )]
    Completions(CompletionsArgs),
}

// ── gen ───────────────────────────────────────────────────────────────────────

/// What `gencode gen` should produce.
#[derive(Debug, Subcommand)]
#[command(rename_all = "snake_case")]
pub enum GenCommands {
    /// Every artifact for every definition.
    All,
    /// An application action.
    Action(NameArgs),
    /// An aggregate root.
    Aggregate(NameArgs),
    /// The repository migrator for an aggregate.
    AggregateMigrator(NameArgs),
    /// An application command.
    Command(NameArgs),
    /// An entity id.
    EntityId(NameArgs),
    /// An HTTP translator for a building block.
    HttpBbTranslator(NameArgs),
    /// An HTTP command translator for an API version.
    HttpCommandTranslator(VersionedArgs),
    /// An HTTP command for an API version.
    HttpCommand(VersionedArgs),
    /// An HTTP endpoint, printed to stdout for manual merging.
    HttpEndpoint(EndpointArgs),
}

/// A definition name.
#[derive(Debug, Args)]
pub struct NameArgs {
    #[arg(value_name = "NAME", help = "Definition name, e.g. PlaceOrder")]
    pub name: String,
}

/// A definition name plus a required API version.
#[derive(Debug, Args)]
pub struct VersionedArgs {
    #[arg(value_name = "NAME", help = "Definition name, e.g. PlaceOrder")]
    pub name: String,

    #[arg(value_name = "VERSION", help = "API version, e.g. 1.0.0")]
    pub version: ApiVersion,
}

/// An endpoint name and, when it is declared under several versions, which one.
#[derive(Debug, Args)]
pub struct EndpointArgs {
    #[arg(value_name = "NAME", help = "Endpoint name, e.g. PlaceOrder")]
    pub name: String,

    #[arg(
        value_name = "VERSION",
        help = "API version (default: first endpoint with this name)"
    )]
    pub version: Option<ApiVersion>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `gencode list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show one kind of definition.
    #[arg(short = 'k', long = "kind", value_enum, help = "Filter by kind")]
    pub kind: Option<KindFilter>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Definition kinds accepted by `list --kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum KindFilter {
    Action,
    Aggregate,
    Command,
    EntityId,
    HttpBbTranslator,
    HttpCommandTranslator,
    HttpCommand,
    HttpEndpoint,
}

impl From<KindFilter> for DefinitionKind {
    fn from(kind: KindFilter) -> Self {
        match kind {
            KindFilter::Action => Self::Action,
            KindFilter::Aggregate => Self::Aggregate,
            KindFilter::Command => Self::Command,
            KindFilter::EntityId => Self::EntityId,
            KindFilter::HttpBbTranslator => Self::HttpBbTranslator,
            KindFilter::HttpCommandTranslator => Self::HttpCommandTranslator,
            KindFilter::HttpCommand => Self::HttpCommand,
            KindFilter::HttpEndpoint => Self::HttpEndpoint,
        }
    }
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Aligned columns.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `gencode init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.gencode.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gencode completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
