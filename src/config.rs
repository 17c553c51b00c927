//! Runtime configuration resolved from the environment.
//!
//! Values come from `VLSM_*` environment variables (a `.env` file is loaded
//! by the binary first) and are overridden by command line flags.

use crate::error::{Result, VlsmError};
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_LOG_CONFIG: &str = "VLSM_LOG_CONFIG";
pub const ENV_FORMAT: &str = "VLSM_FORMAT";
pub const ENV_COLOR: &str = "VLSM_COLOR";

/// How a plan is printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = VlsmError;

    fn from_str(s: &str) -> Result<OutputFormat> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(VlsmError::InvalidConfig(format!(
                "{ENV_FORMAT} must be table, csv or json, got '{other}'"
            ))),
        }
    }
}

/// Values set on the command line. A set value wins over the environment,
/// and the matching environment variable is then never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub log_config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_config: PathBuf::from("log4rs.yml"),
            format: OutputFormat::Table,
            color: true,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Config> {
        Config::from_env_with(&Overrides::default())
    }

    /// Read the configuration from the process environment, letting
    /// `overrides` take precedence.
    pub fn from_env_with(overrides: &Overrides) -> Result<Config> {
        Config::resolve(|key| std::env::var(key).ok(), overrides)
    }

    /// Build the configuration from any key lookup, falling back to
    /// [`Config::default`] for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        Config::resolve(lookup, &Overrides::default())
    }

    /// Build the configuration from `overrides`, then `lookup`, then
    /// [`Config::default`].
    pub fn resolve<F>(lookup: F, overrides: &Overrides) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        match &overrides.log_config {
            Some(path) => config.log_config = path.clone(),
            None => {
                if let Some(path) = lookup(ENV_LOG_CONFIG) {
                    config.log_config = PathBuf::from(path);
                }
            }
        }
        match overrides.format {
            Some(format) => config.format = format,
            None => {
                if let Some(format) = lookup(ENV_FORMAT) {
                    config.format = format.parse()?;
                }
            }
        }
        match overrides.color {
            Some(color) => config.color = color,
            None => {
                if let Some(color) = lookup(ENV_COLOR) {
                    config.color = parse_bool(&color).ok_or_else(|| {
                        VlsmError::InvalidConfig(format!(
                            "{ENV_COLOR} must be true or false, got '{color}'"
                        ))
                    })?;
                }
            }
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
