// SPDX-License-Identifier: MIT
//!
//! Pivot translation sheets into language -> (key -> value) tables
//!

use indexmap::IndexMap;

/// Rows of string cells, rows may have different length
pub type Grid = Vec<Vec<String>>;

/// Translation key -> translated text, in row order
pub type Entries = IndexMap<String, String>;

/// Language -> entries, in first-seen order
pub type TranslationTable = IndexMap<String, Entries>;

/// How keys and languages are picked up from a sheet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractPolicy {
    /// Drop the first cell of every row before anything else
    pub ignore_first_column: bool,
    /// Column of the translation key, counted after the first column is dropped
    pub key_column: usize,
}

impl Default for ExtractPolicy {
    fn default() -> Self {
        Self {
            ignore_first_column: true,
            key_column: 0,
        }
    }
}

/// Merge one sheet into `table` and return it
///
/// The first row holds language names. Every following row is filed under
/// `table[language][row[key_column]]`, including the key cell itself.
/// Cells beyond the header, and columns with an empty header, are skipped.
pub fn ingest_sheet(
    grid: Grid,
    policy: &ExtractPolicy,
    mut table: TranslationTable,
) -> TranslationTable {
    let mut rows = grid.into_iter().map(|mut row| {
        if policy.ignore_first_column && !row.is_empty() {
            row.remove(0);
        }
        row
    });

    let header = match rows.next() {
        Some(header) => header,
        None => return table,
    };

    for lang in header.iter().filter(|lang| !lang.is_empty()) {
        if !table.contains_key(lang) {
            log::debug!("New language {:?}", lang);
            table.insert(lang.clone(), Entries::new());
        }
    }

    for row in rows {
        let key = row.get(policy.key_column).cloned().unwrap_or_default();
        // zip stops at the shorter of header and row
        for (lang, value) in header.iter().zip(row) {
            if let Some(entries) = table.get_mut(lang) {
                entries.insert(key.clone(), value);
            }
        }
    }

    table
}

/// Pivot all sheets in order, later sheets overwrite earlier ones
pub fn pivot_workbook<I>(sheets: I, policy: &ExtractPolicy) -> TranslationTable
where
    I: IntoIterator<Item = Grid>,
{
    sheets
        .into_iter()
        .fold(TranslationTable::new(), |table, grid| {
            ingest_sheet(grid, policy, table)
        })
}
