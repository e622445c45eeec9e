//! Presenter Module
//! Turns a series plus cosmetic parameters into the three render-pass artifacts.

use crate::charts::Encoding;
use crate::data::{CsvExporter, ExportError, Series};
use crate::params::{ChartKind, Rgb};
use polars::prelude::DataFrame;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresenterError {
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Visual encoding, table view and CSV download for one render pass.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub title: String,
    pub encoding: Encoding,
    pub table: DataFrame,
    pub csv: Vec<u8>,
}

pub struct Presenter;

impl Presenter {
    /// Build every output artifact for `series`. Inputs are left untouched.
    pub fn render(
        series: &Series,
        chart_kind: ChartKind,
        title: &str,
        color: Option<Rgb>,
    ) -> Result<RenderOutput, PresenterError> {
        let encoding = Encoding::encode(series, chart_kind, color);
        let table = series.to_dataframe()?;
        let csv = CsvExporter::to_csv_bytes(series)?;

        Ok(RenderOutput {
            title: title.to_string(),
            encoding,
            table,
            csv,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_produces_matching_table_and_csv() {
        let series = Series::from_columns((0..12).collect(), (0..12).map(|v| v as f64 * 0.5).collect())
            .unwrap();
        let output = Presenter::render(&series, ChartKind::Bar, "Bars", None).unwrap();

        assert_eq!(output.title, "Bars");
        assert_eq!(output.encoding.kind(), ChartKind::Bar);
        assert_eq!(output.table.height(), 12);
        assert_eq!(CsvExporter::from_csv_bytes(&output.csv).unwrap(), series);
    }
}
