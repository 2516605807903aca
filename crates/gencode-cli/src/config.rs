//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--definitions`, `--src`, `--templates`, `--no-color`)
//! 2. Environment variables (`GENCODE_PATHS__SRC=out`, ...)
//! 3. `.gencode.toml` in the current directory
//! 4. The user config file
//! 5. Built-in defaults (always present)
//!
//! `--config FILE` replaces layers 3 and 4 with that one file.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};

use crate::cli::global::GlobalArgs;

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".gencode.toml";

const ENV_PREFIX: &str = "GENCODE";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where definitions come from and artifacts go.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// YAML definition file.
    pub definitions: PathBuf,
    /// Source root generated files are written under.
    pub src: PathBuf,
    /// Optional template override directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                definitions: PathBuf::from("domain.yml"),
                src: PathBuf::from("src"),
                templates: None,
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer and apply CLI overrides.
    ///
    /// A file named with `--config` must exist and replaces the user and
    /// local files, which are optional.
    pub fn load(args: &GlobalArgs) -> anyhow::Result<Self> {
        let user = Self::config_path();
        let files: Vec<(&Path, bool)> = match &args.config {
            Some(path) => vec![(path.as_path(), true)],
            None => vec![(user.as_path(), false), (Path::new(LOCAL_CONFIG_FILE), false)],
        };

        let builder = Self::builder(&files)?.add_source(Self::environment());
        let mut config = Self::finish(builder)?;
        config.apply_overrides(args);
        Ok(config)
    }

    /// Defaults plus the file layers, lowest priority first.
    fn builder(files: &[(&Path, bool)]) -> anyhow::Result<ConfigBuilder<DefaultState>> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default(
                "paths.definitions",
                defaults.paths.definitions.to_string_lossy().into_owned(),
            )?
            .set_default("paths.src", defaults.paths.src.to_string_lossy().into_owned())?
            .set_default("output.no_color", defaults.output.no_color)?;

        for &(path, required) in files {
            builder = builder.add_source(Self::file(path, required));
        }
        Ok(builder)
    }

    fn file(path: &Path, required: bool) -> File<config::FileSourceFile, FileFormat> {
        File::from(path).format(FileFormat::Toml).required(required)
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// CLI flags win over every other layer.
    fn apply_overrides(&mut self, args: &GlobalArgs) {
        if let Some(definitions) = &args.definitions {
            self.paths.definitions = definitions.clone();
        }
        if let Some(src) = &args.src {
            self.paths.src = src.clone();
        }
        if let Some(templates) = &args.templates {
            self.paths.templates = Some(templates.clone());
        }
        if args.no_color {
            self.output.no_color = true;
        }
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.gencode.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "gencode", "gencode")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}
