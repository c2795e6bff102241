// SPDX-License-Identifier: MIT
//!
//! Write one i18n file per language
//!

use crate::error::{Error, Result};
use crate::pivot::{Entries, TranslationTable};
use std::path::{Path, PathBuf};

/// Output file flavor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// TypeScript module, `export default {...};`
    #[default]
    Ts,
    /// JavaScript module, same body as TypeScript
    Js,
    /// Plain JSON
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Ts => "ts",
            Self::Js => "js",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ts" | "typescript" => Ok(Self::Ts),
            "js" | "javascript" => Ok(Self::Js),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// File contents for one language
pub fn render(format: OutputFormat, entries: &Entries) -> Result<String> {
    let json = serde_json::to_string_pretty(entries)?;
    Ok(match format {
        OutputFormat::Ts | OutputFormat::Js => format!("export default {};\n", json),
        OutputFormat::Json => format!("{}\n", json),
    })
}

/// `<dir>/<language>.<ext>`
///
/// Language names containing a path separator, or `.` / `..`, are refused
/// so every file stays directly inside `dir`.
pub fn output_path<P: AsRef<Path>>(
    dir: P,
    language: &str,
    format: OutputFormat,
) -> Result<PathBuf> {
    let path = dir
        .as_ref()
        .join(format!("{}.{}", language, format.extension()));

    if language.is_empty()
        || language == "."
        || language == ".."
        || language.chars().any(|c| c == '/' || c == '\\')
    {
        return Err(Error::Write {
            language: language.to_string(),
            path,
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "language name can not be used as file name",
            ),
        });
    }
    Ok(path)
}

/// Write single language file, overwriting existing one
pub async fn write_language<P: AsRef<Path>>(
    dir: P,
    language: &str,
    entries: &Entries,
    format: OutputFormat,
) -> Result<PathBuf> {
    let body = render(format, entries)?;
    let path = output_path(dir, language, format)?;
    write_file(language.to_string(), path, body).await
}

async fn write_file(language: String, path: PathBuf, body: String) -> Result<PathBuf> {
    match tokio::fs::write(&path, body).await {
        Ok(()) => Ok(path),
        Err(source) => Err(Error::Write {
            language,
            path,
            source,
        }),
    }
}

/// Write every language of the table into `dir`
///
/// Files are written concurrently. All writes are awaited before returning,
/// then the first failure (if any) is reported. Files already written stay.
/// Returns written paths in table order.
pub async fn write_table<P: AsRef<Path>>(
    dir: P,
    table: &TranslationTable,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;

    let mut first_err = None;
    let mut tasks = tokio::task::JoinSet::new();
    for (idx, (language, entries)) in table.iter().enumerate() {
        let body = render(format, entries)?;
        let path = match output_path(dir, language, format) {
            Ok(path) => path,
            Err(err) => {
                log::error!("{}", err);
                first_err.get_or_insert(err);
                continue;
            }
        };
        let language = language.clone();
        tasks.spawn(async move { (idx, write_file(language, path, body).await) });
    }

    let mut written = Vec::with_capacity(table.len());
    while let Some(joined) = tasks.join_next().await {
        match joined? {
            (idx, Ok(path)) => {
                log::info!("{} generated", path.display());
                written.push((idx, path));
            }
            (_, Err(err)) => {
                log::error!("{}", err);
                first_err.get_or_insert(err);
            }
        }
    }

    if let Some(err) = first_err {
        return Err(err);
    }
    written.sort_by_key(|(idx, _)| *idx);
    Ok(written.into_iter().map(|(_, path)| path).collect())
}
