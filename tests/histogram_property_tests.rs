use data_visualizer::charts::{histogram, Encoding, HISTOGRAM_BINS};
use data_visualizer::data::{Series, SeriesGenerator};
use data_visualizer::params::{ChartKind, Pattern};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bin_counts_sum_to_point_count(
        values in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 10..=100)
    ) {
        let bins = histogram(&values, HISTOGRAM_BINS);

        prop_assert_eq!(bins.len(), HISTOGRAM_BINS);
        prop_assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
    }

    #[test]
    fn bins_are_contiguous_and_equal_width(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 10..=100)
    ) {
        let bins = histogram(&values, HISTOGRAM_BINS);
        let width = bins[0].width();

        for pair in bins.windows(2) {
            prop_assert!((pair[0].end - pair[1].start).abs() <= 1e-9 * width.max(1.0));
            prop_assert!((pair[1].width() - width).abs() <= 1e-6 * width.max(1.0));
        }
    }

    #[test]
    fn histogram_encoding_ignores_x(
        pattern in prop::sample::select(Pattern::ALL.to_vec()),
        point_count in 10usize..=100
    ) {
        let series = SeriesGenerator::generate_seeded(pattern, point_count, 42).expect("generate");
        let shifted = Series::from_columns(
            series.x.iter().map(|x| x * 3 + 7).collect(),
            series.y.clone(),
        )
        .expect("same length");

        let a = Encoding::encode(&series, ChartKind::Histogram, None);
        let b = Encoding::encode(&shifted, ChartKind::Histogram, None);
        prop_assert_eq!(a, b);
    }
}
