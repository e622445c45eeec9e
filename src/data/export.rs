//! CSV Export Module
//! Serializes a series table to CSV bytes with Polars and parses it back.

use crate::data::Series;
use polars::prelude::*;
use std::io::Cursor;
use thiserror::Error;

/// MIME type offered with the download
pub const CSV_MIME: &str = "text/csv";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("CSV header must be X,Y, found {0:?}")]
    UnexpectedHeader(Vec<String>),
    #[error("CSV contains an empty cell in row {0}")]
    MissingValue(usize),
}

impl Series {
    /// Table view of the series: columns `X` (i64) and `Y` (f64).
    pub fn to_dataframe(&self) -> Result<DataFrame, ExportError> {
        let df = DataFrame::new(vec![
            Column::new("X".into(), self.x.clone()),
            Column::new("Y".into(), self.y.clone()),
        ])?;
        Ok(df)
    }
}

/// Writes and reads the `X,Y` CSV download.
pub struct CsvExporter;

impl CsvExporter {
    /// UTF-8 CSV with header `X,Y` and one row per point, no index column.
    pub fn to_csv_bytes(series: &Series) -> Result<Vec<u8>, ExportError> {
        let mut df = series.to_dataframe()?;
        let mut buf: Vec<u8> = Vec::new();
        CsvWriter::new(&mut buf)
            .include_header(true)
            .with_separator(b',')
            .finish(&mut df)?;
        Ok(buf)
    }

    /// Parse bytes produced by [`CsvExporter::to_csv_bytes`] back into a series.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Series, ExportError> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
            .finish()?;

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        if names != ["X", "Y"] {
            return Err(ExportError::UnexpectedHeader(names));
        }

        let x_col = df.column("X")?.cast(&DataType::Int64)?;
        let y_col = df.column("Y")?.cast(&DataType::Float64)?;
        let x_ca = x_col.i64()?;
        let y_ca = y_col.f64()?;

        let mut x = Vec::with_capacity(df.height());
        let mut y = Vec::with_capacity(df.height());
        for (row, (xv, yv)) in x_ca.into_iter().zip(y_ca.into_iter()).enumerate() {
            match (xv, yv) {
                (Some(xv), Some(yv)) => {
                    x.push(xv);
                    y.push(yv);
                }
                _ => return Err(ExportError::MissingValue(row)),
            }
        }

        Ok(Series { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Series {
        Series::from_columns(vec![0, 1, 2], vec![1.5, -0.25, 3.0]).unwrap()
    }

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let bytes = CsvExporter::to_csv_bytes(&sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "X,Y");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("0,"));
        assert!(lines[3].starts_with("2,"));
    }

    #[test]
    fn dataframe_has_two_named_columns() {
        let df = sample().to_dataframe().unwrap();
        assert_eq!(df.height(), 3);
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, ["X", "Y"]);
    }

    #[test]
    fn reading_rejects_foreign_header() {
        let err = CsvExporter::from_csv_bytes(b"a,b\n1,2.0\n").unwrap_err();
        assert!(matches!(err, ExportError::UnexpectedHeader(_)));
    }
}
