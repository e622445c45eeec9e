//! Chart Encoding Module
//! Maps a chart kind onto backend-neutral drawing data: points, bars, bins and colors.

use crate::data::Series;
use crate::params::{ChartKind, Rgb};

/// Number of equal-width histogram bins
pub const HISTOGRAM_BINS: usize = 20;

/// Continuous scale used to color scatter points by value.
/// Stops follow the Plasma palette from dark purple to yellow.
const PLASMA: [Rgb; 10] = [
    Rgb(0x0d, 0x08, 0x87),
    Rgb(0x46, 0x03, 0x9f),
    Rgb(0x72, 0x01, 0xa8),
    Rgb(0x9c, 0x17, 0x9e),
    Rgb(0xbd, 0x37, 0x86),
    Rgb(0xd8, 0x57, 0x6b),
    Rgb(0xed, 0x79, 0x53),
    Rgb(0xfb, 0x9f, 0x3a),
    Rgb(0xfd, 0xca, 0x26),
    Rgb(0xf0, 0xf9, 0x21),
];

/// Linear interpolation over [`PLASMA`] for `t` in `[0, 1]`.
pub fn plasma(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (PLASMA.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(PLASMA.len() - 1);
    let frac = scaled - lower as f64;

    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (a, b) = (PLASMA[lower], PLASMA[upper]);
    Rgb(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// One histogram bin over `[start, end)`; the last bin also holds `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Bin `values` into `bins` equal-width bins spanning their min and max.
///
/// A constant input spans `[v - 0.5, v + 0.5]`. Non-finite values are skipped.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }

    let (mut lo, mut hi) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in finite {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + i as f64 * width,
            end: if i + 1 == bins { hi } else { lo + (i + 1) as f64 * width },
            count,
        })
        .collect()
}

/// Scatter point with its value-driven color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredPoint {
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
}

/// Drawing data for one chart, independent of the drawing backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Encoding {
    Line { points: Vec<[f64; 2]>, color: Rgb },
    Bar { points: Vec<[f64; 2]>, color: Rgb },
    Area { points: Vec<[f64; 2]>, color: Rgb },
    Scatter { points: Vec<ColoredPoint>, y_range: (f64, f64) },
    Histogram { bins: Vec<HistogramBin> },
}

impl Encoding {
    /// Encode `series` for `kind`. `color` tints Line/Bar/Area only.
    pub fn encode(series: &Series, kind: ChartKind, color: Option<Rgb>) -> Self {
        let color = color.unwrap_or_else(Rgb::default_blue);
        let points = || -> Vec<[f64; 2]> { series.rows().map(|(x, y)| [x as f64, y]).collect() };

        match kind {
            ChartKind::Line => Encoding::Line {
                points: points(),
                color,
            },
            ChartKind::Bar => Encoding::Bar {
                points: points(),
                color,
            },
            ChartKind::Area => Encoding::Area {
                points: points(),
                color,
            },
            ChartKind::Scatter => Self::scatter(series),
            ChartKind::Histogram => Encoding::Histogram {
                bins: histogram(&series.y, HISTOGRAM_BINS),
            },
        }
    }

    fn scatter(series: &Series) -> Self {
        let (min, max) = series
            .y
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let span = max - min;

        let points = series
            .rows()
            .map(|(x, y)| {
                let t = if span > 0.0 { (y - min) / span } else { 0.5 };
                ColoredPoint {
                    x: x as f64,
                    y,
                    color: plasma(t),
                }
            })
            .collect();

        Encoding::Scatter {
            points,
            y_range: (min, max),
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            Encoding::Line { .. } => ChartKind::Line,
            Encoding::Bar { .. } => ChartKind::Bar,
            Encoding::Area { .. } => ChartKind::Area,
            Encoding::Scatter { .. } => ChartKind::Scatter,
            Encoding::Histogram { .. } => ChartKind::Histogram,
        }
    }

    /// Axis labels as `(x, y)`.
    pub fn axis_labels(&self) -> (&'static str, &'static str) {
        match self {
            Encoding::Histogram { .. } => ("Y", "Count"),
            _ => ("X", "Y"),
        }
    }

    /// Data bounds as `(x_min, x_max, y_min, y_max)`, or `None` when there is nothing to draw.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let fold = |pts: &mut dyn Iterator<Item = [f64; 2]>| {
            pts.fold(None, |acc: Option<(f64, f64, f64, f64)>, [x, y]| {
                Some(match acc {
                    None => (x, x, y, y),
                    Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
                })
            })
        };

        match self {
            Encoding::Line { points, .. } => fold(&mut points.iter().copied()),
            Encoding::Bar { points, .. } | Encoding::Area { points, .. } => {
                // Bars and filled areas start from zero.
                fold(&mut points.iter().copied()).map(|(x0, x1, y0, y1)| {
                    (x0 - 0.5, x1 + 0.5, y0.min(0.0), y1.max(0.0))
                })
            }
            Encoding::Scatter { points, .. } => fold(&mut points.iter().map(|p| [p.x, p.y])),
            Encoding::Histogram { bins } => {
                let first = bins.first()?;
                let last = bins.last()?;
                let top = bins.iter().map(|b| b.count).max().unwrap_or(0);
                Some((first.start, last.end, 0.0, top as f64))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: i64) -> Series {
        let x: Vec<i64> = (0..n).collect();
        let y: Vec<f64> = x.iter().map(|&v| v as f64).collect();
        Series::from_columns(x, y).unwrap()
    }

    #[test]
    fn histogram_counts_every_value() {
        let values: Vec<f64> = (0..37).map(|i| (i as f64 * 1.7).sin() * 20.0).collect();
        let bins = histogram(&values, HISTOGRAM_BINS);
        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 37);
    }

    #[test]
    fn histogram_max_lands_in_last_bin() {
        let values = [0.0, 10.0];
        let bins = histogram(&values, 20);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[19].count, 1);
        assert_eq!(bins[19].end, 10.0);
        assert!((bins[0].width() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn histogram_of_constant_values_centers_on_value() {
        let bins = histogram(&[4.0; 12], 20);
        assert_eq!(bins.first().unwrap().start, 3.5);
        assert_eq!(bins.last().unwrap().end, 4.5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 12);
    }

    #[test]
    fn plasma_endpoints() {
        assert_eq!(plasma(0.0), PLASMA[0]);
        assert_eq!(plasma(1.0), PLASMA[9]);
        assert_eq!(plasma(-3.0), PLASMA[0]);
        assert_eq!(plasma(f64::NAN), PLASMA[0]);
    }

    #[test]
    fn scatter_colors_follow_magnitude() {
        let series = ramp(10);
        let Encoding::Scatter { points, y_range } = Encoding::encode(&series, ChartKind::Scatter, None)
        else {
            panic!("expected scatter encoding");
        };
        assert_eq!(y_range, (0.0, 9.0));
        assert_eq!(points[0].color, PLASMA[0]);
        assert_eq!(points[9].color, PLASMA[9]);
    }

    #[test]
    fn line_uses_user_color_or_default() {
        let series = ramp(10);
        let tint = Rgb(10, 20, 30);
        match Encoding::encode(&series, ChartKind::Line, Some(tint)) {
            Encoding::Line { points, color } => {
                assert_eq!(color, tint);
                assert_eq!(points.len(), 10);
                assert_eq!(points[3], [3.0, 3.0]);
            }
            other => panic!("unexpected encoding {other:?}"),
        }
        match Encoding::encode(&series, ChartKind::Area, None) {
            Encoding::Area { color, .. } => assert_eq!(color, Rgb::default_blue()),
            other => panic!("unexpected encoding {other:?}"),
        }
    }

    #[test]
    fn every_kind_round_trips_through_encoding() {
        let series = ramp(10);
        for kind in ChartKind::ALL {
            assert_eq!(Encoding::encode(&series, kind, None).kind(), kind);
        }
    }

    #[test]
    fn bar_bounds_include_zero() {
        let series = Series::from_columns((0..10).collect(), vec![5.0; 10]).unwrap();
        let bounds = Encoding::encode(&series, ChartKind::Bar, None).bounds().unwrap();
        assert_eq!(bounds, (-0.5, 9.5, 0.0, 5.0));
    }
}
