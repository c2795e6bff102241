// SPDX-License-Identifier: MIT
//!
//! Settings from config file and command line
//!

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::pivot::ExtractPolicy;
use std::path::{Path, PathBuf};

/// Default config file name, searched in current directory
const CONFIG_FILE: &str = "xlsx-i18n.toml";

/// Contents of xlsx-i18n.toml, every item optional
#[derive(Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub ignore_first_column: Option<bool>,
    pub key_column: Option<usize>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    // Search default config file, empty config if none exists
    pub fn new() -> Result<Self> {
        let config_files = [
            PathBuf::new().join(CONFIG_FILE),
            dirs::home_dir()
                .unwrap_or_default()
                .join(format!(".{}", CONFIG_FILE)),
        ];

        for config_file in config_files {
            match Self::with_config(&config_file) {
                Ok(conf) => {
                    log::debug!("Read config file {:?}", config_file);
                    return Ok(conf);
                }
                Err(Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                    log::debug!("Config file {:?} NOT found.", &config_file);
                }
                Err(err) => {
                    // Other err, stop searching
                    log::error!("Can not parse config file {:?} : {}", &config_file, err);
                    return Err(err);
                }
            }
        }

        Ok(Self::default())
    }

    // Config from specific file
    pub fn with_config<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let config = std::fs::read_to_string(config_path)?;
        Self::parse(&config).map_err(|source| Error::Config {
            path: config_path.to_path_buf(),
            source,
        })
    }

    fn parse(toml_text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_text)
    }
}

/// Values given on the command line, taking priority over the file
#[derive(Debug, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub keep_first_column: bool,
    pub key_column: Option<usize>,
    pub format: Option<OutputFormat>,
}

/// Resolved settings for one run
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub policy: ExtractPolicy,
    pub format: OutputFormat,
}

impl Config {
    /// Merge command line over config file over defaults
    pub fn resolve(file: FileConfig, cli: Overrides) -> Result<Self> {
        let default_policy = ExtractPolicy::default();

        let input = cli
            .input
            .or(file.input)
            .ok_or(Error::MissingSetting("input"))?;
        let ignore_first_column = if cli.keep_first_column {
            false
        } else {
            file.ignore_first_column
                .unwrap_or(default_policy.ignore_first_column)
        };

        Ok(Self {
            input,
            output_dir: cli
                .output
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(".")),
            policy: ExtractPolicy {
                ignore_first_column,
                key_column: cli
                    .key_column
                    .or(file.key_column)
                    .unwrap_or(default_policy.key_column),
            },
            format: cli.format.or(file.format).unwrap_or_default(),
        })
    }
}
