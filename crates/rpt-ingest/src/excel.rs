//! XLSX loading via calamine.
//!
//! The first worksheet is read as a table: row one is the header, every
//! following row is data. Columns whose non-empty cells are all numeric become
//! Float64 columns so that joins and SQL predicates behave the same as for the
//! CSV reader; everything else is read as strings.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::{Column, DataFrame};

use crate::csv::check_exists;
use crate::error::{LoadError, Result};

/// Reads the first sheet of an XLSX workbook into a DataFrame.
pub fn read_excel_table(path: &Path) -> Result<DataFrame> {
    check_exists(path)?;
    let mut workbook = open_workbook_auto(path).map_err(|e| LoadError::parse(path, e))?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LoadError::Empty {
            path: path.to_path_buf(),
        })?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| LoadError::parse(path, e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(|cell| cell_text(cell)).collect(),
        None => {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }
    };
    let data_rows: Vec<&[Data]> = rows.collect();

    let mut columns = Vec::with_capacity(headers.len());
    for (index, header) in headers.iter().enumerate() {
        let cells: Vec<&Data> = data_rows
            .iter()
            .map(|row| row.get(index).unwrap_or(&Data::Empty))
            .collect();
        columns.push(build_column(header, &cells));
    }

    DataFrame::new(columns).map_err(|e| LoadError::parse(path, e))
}

fn build_column(name: &str, cells: &[&Data]) -> Column {
    if cells.iter().all(|cell| is_numeric_or_empty(cell)) {
        let values: Vec<Option<f64>> = cells.iter().map(|cell| cell_number(cell)).collect();
        Column::new(name.into(), values)
    } else {
        let values: Vec<Option<String>> = cells
            .iter()
            .map(|cell| match cell {
                Data::Empty => None,
                other => Some(cell_text(other)),
            })
            .collect();
        Column::new(name.into(), values)
    }
}

fn is_numeric_or_empty(cell: &Data) -> bool {
    matches!(cell, Data::Empty | Data::Int(_) | Data::Float(_))
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(value) => Some(*value as f64),
        Data::Float(value) => Some(*value),
        _ => None,
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.trim().to_string(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => format_numeric(*value),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => value.to_string(),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        Data::Error(error) => format!("#ERR:{error:?}"),
    }
}

/// Render integer-valued floats without the trailing `.0` Excel gives them.
fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_column_detection() {
        let cells = [
            &Data::Float(1.5),
            &Data::Int(2),
            &Data::Empty,
            &Data::Float(4.0),
        ];
        let column = build_column("amount", &cells);
        assert_eq!(column.len(), 4);
        assert!(column.f64().is_ok());
    }

    #[test]
    fn mixed_column_falls_back_to_strings() {
        let cells = [
            &Data::String("SKU-1".to_string()),
            &Data::Int(2),
            &Data::Empty,
        ];
        let column = build_column("sku", &cells);
        let values = column.str().unwrap();
        assert_eq!(values.get(0), Some("SKU-1"));
        assert_eq!(values.get(1), Some("2"));
        assert_eq!(values.get(2), None);
    }

    #[test]
    fn integer_valued_floats_render_without_fraction() {
        assert_eq!(format_numeric(42.0), "42");
        assert_eq!(format_numeric(42.5), "42.5");
    }

    #[test]
    fn missing_workbook_is_not_found() {
        let err = read_excel_table(Path::new("does/not/exist.xlsx")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }
}
