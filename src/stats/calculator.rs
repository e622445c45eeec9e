//! Statistics Calculator Module
//! Computes the summary metrics shown above the chart.

use statrs::statistics::Statistics;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Cannot summarize an empty series")]
    EmptySeries,
}

/// Summary metrics for the Y values of one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    /// Sample standard deviation (N-1 denominator)
    pub std_dev: f64,
}

/// A labelled metric card, e.g. `("Mean", "50.12")`.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

impl Summary {
    /// Metric cards in display order. Std dev is only shown by some dashboards.
    pub fn metrics(&self, show_std_dev: bool) -> Vec<Metric> {
        let mut cards = vec![
            Metric {
                label: "Mean",
                value: format!("{:.2}", self.mean),
            },
            Metric {
                label: "Max",
                value: format!("{:.2}", self.max),
            },
            Metric {
                label: "Min",
                value: format!("{:.2}", self.min),
            },
        ];
        if show_std_dev {
            cards.push(Metric {
                label: "Std Dev",
                value: format!("{:.2}", self.std_dev),
            });
        }
        cards
    }
}

/// Handles summary statistics over a series.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute mean, max, min and sample standard deviation of `values`.
    pub fn summarize(values: &[f64]) -> Result<Summary, StatsError> {
        let n = values.len();
        if n == 0 {
            return Err(StatsError::EmptySeries);
        }

        let mean = Statistics::mean(values.iter());
        let max = Statistics::max(values.iter());
        let min = Statistics::min(values.iter());
        let std_dev = if n > 1 {
            Statistics::std_dev(values.iter())
        } else {
            0.0
        };

        Ok(Summary {
            count: n,
            mean,
            max,
            min,
            std_dev,
        })
    }
}
