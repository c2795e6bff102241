// SPDX-License-Identifier: MIT
use crate::{config, error, output, pivot, workbook};

/// Pivot .xlsx file into a translation table
pub fn pivot_xlsx_file<P: AsRef<std::path::Path>>(
    xlsx_path: P,
    policy: &pivot::ExtractPolicy,
) -> error::Result<pivot::TranslationTable> {
    let sheets = workbook::read_workbook(xlsx_path)?;

    let table = pivot::pivot_workbook(
        sheets.into_iter().map(|sheet| {
            log::debug!("Ingest sheet {:?} ({} rows)", sheet.name, sheet.grid.len());
            sheet.grid
        }),
        policy,
    );

    for (language, entries) in &table {
        log::trace!("{}: {} keys", language, entries.len());
    }
    Ok(table)
}

/// Convert .xlsx file into one i18n file per language
pub async fn convert_xlsx_file(config: &config::Config) -> error::Result<Vec<std::path::PathBuf>> {
    let table = pivot_xlsx_file(&config.input, &config.policy)?;
    output::write_table(&config.output_dir, &table, config.format).await
}
