//! Stats module - summary metrics

mod calculator;

pub use calculator::{Metric, StatsCalculator, StatsError, Summary};
