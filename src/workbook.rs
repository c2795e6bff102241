// SPDX-License-Identifier: MIT
//!
//! Read translation sheets from .xlsx
//!

use crate::error::{Error, Result};
use crate::pivot::Grid;

/// One worksheet as string cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub grid: Grid,
}

/// Read every worksheet of .xlsx file, in workbook order
pub fn read_workbook<P: AsRef<std::path::Path>>(xlsx_path: P) -> Result<Vec<Sheet>> {
    let xlsx_path = xlsx_path.as_ref();
    let book = umya_spreadsheet::reader::xlsx::read(xlsx_path).map_err(|e| Error::Read {
        path: xlsx_path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheets = book
        .get_sheet_collection()
        .iter()
        .map(|worksheet| {
            let (min_col, min_row) = used_origin(worksheet);
            let (max_col, max_row) = worksheet.get_highest_column_and_row();
            log::debug!(
                "Sheet {:?}: columns {}..={}, rows {}..={}",
                worksheet.get_name(),
                min_col,
                max_col,
                min_row,
                max_row
            );

            // umya-spreadsheet coordinates are 1-based (column, row)
            let rows = (min_row..=max_row).map(|row| {
                (min_col..=max_col)
                    .map(|col| worksheet.get_value((col, row)))
                    .collect::<Vec<String>>()
            });

            Sheet {
                name: worksheet.get_name().to_string(),
                grid: grid_from_rows(rows),
            }
        })
        .collect();

    Ok(sheets)
}

/// Top-left (column, row) of the non-blank cells
///
/// Returns `(u32::MAX, u32::MAX)` for a sheet without values, so that the
/// ranges built from it are empty.
fn used_origin(worksheet: &umya_spreadsheet::Worksheet) -> (u32, u32) {
    worksheet
        .get_cell_collection()
        .iter()
        .filter(|cell| !cell.get_value().is_empty())
        .map(|cell| {
            let coordinate = cell.get_coordinate();
            (
                coordinate.get_col_num().to_owned(),
                coordinate.get_row_num().to_owned(),
            )
        })
        .fold((u32::MAX, u32::MAX), |(min_col, min_row), (col, row)| {
            (min_col.min(col), min_row.min(row))
        })
}

/// Build grid from rectangular rows, trailing blank cells are dropped
pub fn grid_from_rows<I>(rows: I) -> Grid
where
    I: IntoIterator<Item = Vec<String>>,
{
    rows.into_iter()
        .map(|mut row| {
            let used = row
                .iter()
                .rposition(|cell| !cell.is_empty())
                .map_or(0, |last| last + 1);
            row.truncate(used);
            row
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn trailing_blanks_are_trimmed() {
        let grid = grid_from_rows(vec![
            strings(&["", "en", "fr"]),
            strings(&["k1", "", "b1"]),
            strings(&["k2", "a2", ""]),
            strings(&["", "", ""]),
        ]);

        assert_eq!(
            grid,
            vec![
                strings(&["", "en", "fr"]),
                strings(&["k1", "", "b1"]),
                strings(&["k2", "a2"]),
                Vec::<String>::new(),
            ]
        );
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_workbook(dir.path().join("nothing.xlsx"));

        assert!(matches!(result, Err(Error::Read { .. })));
    }

    #[test]
    fn table_away_from_a1() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offset.xlsx");

        let mut book = umya_spreadsheet::new_file();
        {
            let sheet = book.get_active_sheet_mut();
            sheet.get_cell_mut("B2").set_value("label");
            sheet.get_cell_mut("C2").set_value("en");
            sheet.get_cell_mut("D2").set_value("fr");
            sheet.get_cell_mut("B3").set_value("hello");
            sheet.get_cell_mut("C3").set_value("Hello");
            sheet.get_cell_mut("D3").set_value("Bonjour");
        }
        umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();

        let sheets = read_workbook(&path).unwrap();
        assert_eq!(
            sheets[0].grid,
            vec![
                strings(&["label", "en", "fr"]),
                strings(&["hello", "Hello", "Bonjour"]),
            ]
        );

        let table = crate::pivot::pivot_workbook(
            sheets.into_iter().map(|sheet| sheet.grid),
            &crate::pivot::ExtractPolicy::default(),
        );
        let langs: Vec<&str> = table.keys().map(|s| s.as_str()).collect();
        assert_eq!(langs, vec!["en", "fr"]);
        assert_eq!(table["fr"]["Hello"], "Bonjour");
    }

    #[test]
    fn blank_sheet_is_empty_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.xlsx");
        umya_spreadsheet::writer::xlsx::write(&umya_spreadsheet::new_file(), &path).unwrap();

        let sheets = read_workbook(&path).unwrap();
        assert_eq!(sheets.len(), 1);
        assert!(sheets[0].grid.is_empty());
    }

    #[test]
    fn read_written_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("i18n.xlsx");

        let mut book = umya_spreadsheet::new_file();
        {
            let sheet = book.get_active_sheet_mut();
            sheet.get_cell_mut("A1").set_value("label");
            sheet.get_cell_mut("B1").set_value("en");
            sheet.get_cell_mut("C1").set_value("fr");
            sheet.get_cell_mut("A2").set_value("greeting");
            sheet.get_cell_mut("B2").set_value("hello");
            sheet.get_cell_mut("C2").set_value("bonjour");
            sheet.get_cell_mut("A3").set_value("farewell");
            sheet.get_cell_mut("B3").set_value("bye");
        }
        {
            let sheet = book.new_sheet("More").unwrap();
            sheet.get_cell_mut("A1").set_value("label");
            sheet.get_cell_mut("B1").set_value("ja");
            sheet.get_cell_mut("A2").set_value("greeting");
            sheet.get_cell_mut("B2").set_value("konnichiwa");
        }
        umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();

        let sheets = read_workbook(&path).unwrap();
        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[1].name, "More");
        assert_eq!(
            sheets[0].grid,
            vec![
                strings(&["label", "en", "fr"]),
                strings(&["greeting", "hello", "bonjour"]),
                strings(&["farewell", "bye"]),
            ]
        );
        assert_eq!(
            sheets[1].grid,
            vec![strings(&["label", "ja"]), strings(&["greeting", "konnichiwa"])]
        );
    }
}
