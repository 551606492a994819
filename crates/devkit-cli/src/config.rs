//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `DEVKIT_<SECTION>__<KEY>`
//! 3. The file passed with `--config`
//! 4. `.devkit.toml` in the current directory
//! 5. The user config file (see [`AppConfig::config_path`])
//! 6. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use devkit_core::domain::{PlaygroundPlatform, PlaygroundTemplate};

/// File name of the per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".devkit.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub password: PasswordConfig,
    pub playground: PlaygroundConfig,
    pub output: OutputConfig,
}

/// Defaults for `devkit password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    /// Validated like a typed length, so out-of-range values surface as
    /// input errors when the command runs.
    pub length: i64,
    pub numbers: bool,
    pub special: bool,
    pub copy: bool,
}

/// Defaults for `devkit playground`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub location: String,
    pub template: PlaygroundTemplate,
    pub platform: PlaygroundPlatform,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: 16,
            numbers: true,
            special: true,
            copy: true,
        }
    }
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            location: "~/Desktop".into(),
            template: PlaygroundTemplate::default(),
            platform: PlaygroundPlatform::default(),
            open: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from every source, starting from defaults.
    ///
    /// `config_file` is the path passed via `--config`; unlike the default
    /// locations it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            &Self::config_path(),
            Path::new(LOCAL_CONFIG_FILE),
            config_file.map(PathBuf::as_path),
        )
    }

    fn load_from(global: &Path, local: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(toml_file(global, false))
            .add_source(toml_file(local, false));

        if let Some(path) = explicit {
            builder = builder.add_source(toml_file(path, true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("DEVKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.devkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "devkit", "devkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Path to the per-directory configuration file.
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }
}

fn toml_file(path: &Path, required: bool) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml).required(required)
}
