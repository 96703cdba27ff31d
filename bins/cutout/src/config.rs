//! Configuration file loading and schema
//!
//! Every key is optional. Command-line flags win over the file, the file wins
//! over the built-in defaults.

use anyhow::{Context, Result};
use cutout_image::{RemovalOptions, DEFAULT_THRESHOLD};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Input path used when neither the command line nor the config names one.
pub const DEFAULT_INPUT: &str = "public/zen-circle.png";

/// Files searched, in order, when no config path is given.
const CANDIDATES: [&str; 3] = [".cutout.toml", "cutout.toml", ".config/cutout.toml"];

/// Root configuration schema
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSchema {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub background: BackgroundConfig,
}

/// Input and output locations
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Defaults to the input path
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: None,
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

/// Background classification settings
#[derive(Debug, Clone, Deserialize)]
pub struct BackgroundConfig {
    #[serde(default = "default_threshold")]
    pub threshold: u8,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

/// Fully resolved arguments for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: RemovalOptions,
}

impl Config {
    /// Load configuration from an explicit path, a discovered file, or defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, Path::new("."))
    }

    /// Like [`Config::load`], searching for candidate files under `dir`.
    pub fn load_from(path: Option<&Path>, dir: &Path) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(|| find_config_file(dir));

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Merge command-line values over the loaded configuration.
    ///
    /// A configured output only applies when the input also comes from the
    /// configuration; an input given on the command line is otherwise
    /// rewritten in place.
    pub fn resolve(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        threshold: Option<u8>,
    ) -> Invocation {
        let paths = &self.schema.paths;
        let configured_output = if input.is_none() {
            paths.output.clone()
        } else {
            None
        };
        let input = input.unwrap_or_else(|| paths.input.clone());
        let output = output
            .or(configured_output)
            .unwrap_or_else(|| input.clone());
        let threshold = threshold.unwrap_or(self.schema.background.threshold);

        Invocation {
            input,
            output,
            options: RemovalOptions::with_threshold(threshold),
        }
    }
}

fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|candidate| dir.join(candidate))
        .find(|candidate| candidate.is_file())
}

fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}
