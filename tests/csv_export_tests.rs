use data_visualizer::charts::Presenter;
use data_visualizer::data::{CsvExporter, Series, SeriesGenerator};
use data_visualizer::params::{ChartKind, Pattern};

#[test]
fn csv_round_trip_restores_every_pattern() {
    for pattern in Pattern::ALL {
        let series = SeriesGenerator::generate_seeded(pattern, 100, 42).expect("generate");
        let output = Presenter::render(&series, ChartKind::Line, "Round trip", None).expect("render");

        let text = std::str::from_utf8(&output.csv).expect("utf-8");
        assert_eq!(text.lines().next(), Some("X,Y"));
        assert_eq!(text.lines().count(), 101);

        let parsed = CsvExporter::from_csv_bytes(&output.csv).expect("parse");
        assert_eq!(parsed, series, "{pattern:?} did not round trip");
    }
}

#[test]
fn csv_rows_have_no_index_column() {
    let series = SeriesGenerator::generate_seeded(Pattern::Linear, 10, 42).expect("generate");
    let bytes = CsvExporter::to_csv_bytes(&series).expect("export");
    let text = String::from_utf8(bytes).expect("utf-8");

    for (i, line) in text.lines().skip(1).enumerate() {
        let cells: Vec<&str> = line.split(',').collect();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0], i.to_string());
    }
}

#[test]
fn extreme_values_round_trip_exactly() {
    let series = Series::from_columns(
        (0..10).collect(),
        vec![
            0.1,
            -0.0,
            1e-300,
            -1e300,
            std::f64::consts::PI,
            123456789.123456789,
            -7.0,
            0.30000000000000004,
            2.5e-8,
            50.0,
        ],
    )
    .expect("same length");

    let parsed = CsvExporter::from_csv_bytes(&CsvExporter::to_csv_bytes(&series).expect("export"))
        .expect("parse");
    assert_eq!(parsed.x, series.x);
    for (a, b) in parsed.y.iter().zip(&series.y) {
        assert_eq!(a, b);
    }
}
