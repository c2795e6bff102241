// SPDX-License-Identifier: MIT
//!
//! Error type shared by reader, config and writer
//!

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Source workbook can not be opened or parsed
    #[error("can not read workbook {path:?}: {message}")]
    Read {
        path: std::path::PathBuf,
        message: String,
    },

    /// Output file for a language can not be written
    #[error("can not write {language} to {path:?}: {source}")]
    Write {
        language: String,
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file exists but is broken
    #[error("invalid config file {path:?}: {source}")]
    Config {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Required setting is missing after merging config sources
    #[error("missing setting: {0}")]
    MissingSetting(&'static str),

    /// Unknown output format name
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output task aborted before finishing
    #[error("write task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;
