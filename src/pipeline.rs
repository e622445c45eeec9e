//! Render Pass Module
//! One full run of the pipeline: validate → generate → summarize → present.

use crate::charts::{Presenter, PresenterError, RenderOutput};
use crate::data::{GeneratorError, Series, SeriesGenerator};
use crate::params::{DashboardProfile, ParameterError, ParameterSet};
use crate::stats::{StatsCalculator, StatsError, Summary};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid parameters: {0}")]
    Parameters(#[from] ParameterError),
    #[error("Generation failed: {0}")]
    Generator(#[from] GeneratorError),
    #[error("Statistics failed: {0}")]
    Stats(#[from] StatsError),
    #[error("Presentation failed: {0}")]
    Presenter(#[from] PresenterError),
}

/// Everything one render pass produces. Discarded when the next pass runs.
#[derive(Debug, Clone)]
pub struct RenderPassOutput {
    pub params: ParameterSet,
    pub series: Series,
    pub summary: Summary,
    pub output: RenderOutput,
}

pub struct RenderPass;

impl RenderPass {
    /// Run the pipeline from an explicit parameter set and seed.
    pub fn run(
        params: &ParameterSet,
        profile: DashboardProfile,
        seed: u64,
    ) -> Result<RenderPassOutput, PipelineError> {
        params.validate(profile)?;

        let series = SeriesGenerator::generate_seeded(params.pattern, params.point_count, seed)?;
        let summary = StatsCalculator::summarize(&series.y)?;
        let color = if params.chart_kind.uses_color() {
            params.color
        } else {
            None
        };
        let output = Presenter::render(&series, params.chart_kind, &params.title, color)?;

        debug!(
            pattern = %params.pattern,
            chart = %params.chart_kind,
            points = params.point_count,
            mean = summary.mean,
            "render pass complete"
        );

        Ok(RenderPassOutput {
            params: params.clone(),
            series,
            summary,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DEFAULT_SEED;
    use crate::params::{ChartKind, Pattern};

    #[test]
    fn default_pass_runs_end_to_end() {
        let params = ParameterSet::default();
        let pass = RenderPass::run(&params, DashboardProfile::Simple, DEFAULT_SEED).unwrap();

        assert_eq!(pass.series.len(), 30);
        assert_eq!(pass.summary.count, 30);
        assert_eq!(pass.output.table.height(), 30);
        assert_eq!(pass.output.encoding.kind(), ChartKind::Line);
    }

    #[test]
    fn invalid_parameters_stop_the_pass() {
        let mut params = ParameterSet::default();
        params.point_count = 5;
        let err = RenderPass::run(&params, DashboardProfile::Simple, DEFAULT_SEED).unwrap_err();
        assert!(matches!(err, PipelineError::Parameters(_)));
    }

    #[test]
    fn identical_parameters_reproduce_the_pass() {
        let params = ParameterSet {
            chart_kind: ChartKind::Histogram,
            point_count: 64,
            pattern: Pattern::Exponential,
            title: "Growth".to_string(),
            color: None,
        };
        let a = RenderPass::run(&params, DashboardProfile::Advanced, DEFAULT_SEED).unwrap();
        let b = RenderPass::run(&params, DashboardProfile::Advanced, DEFAULT_SEED).unwrap();

        assert_eq!(a.series, b.series);
        assert_eq!(a.output.csv, b.output.csv);
        assert_eq!(a.output.encoding, b.output.encoding);
    }
}
