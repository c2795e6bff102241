mod config;
mod convert;
mod error;
mod output;
mod pivot;
mod workbook;

// re-export
pub use config::{Config, FileConfig, Overrides};
pub use convert::{convert_xlsx_file, pivot_xlsx_file};
pub use error::{Error, Result};
pub use output::{output_path, render, write_language, write_table, OutputFormat};
pub use pivot::{ingest_sheet, pivot_workbook, Entries, ExtractPolicy, Grid, TranslationTable};
pub use workbook::{grid_from_rows, read_workbook, Sheet};
