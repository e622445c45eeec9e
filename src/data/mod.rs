//! Data module - series synthesis and CSV export

mod export;
mod generator;

pub use export::{CsvExporter, ExportError, CSV_MIME};
pub use generator::{GeneratorError, Series, SeriesGenerator, DEFAULT_SEED};
