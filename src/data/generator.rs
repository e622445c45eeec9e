//! Series Generator Module
//! Synthesizes reproducible (X, Y) series from a pattern and a seeded RNG.

use crate::params::{Pattern, MAX_POINTS, MIN_POINTS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use thiserror::Error;

/// Seed applied at the start of every render pass
pub const DEFAULT_SEED: u64 = 42;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Point count {0} outside [10, 100]")]
    PointCountOutOfRange(usize),
}

/// Paired X (index) and Y (synthesized) values of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub x: Vec<i64>,
    pub y: Vec<f64>,
}

impl Series {
    /// Build a series from raw columns. Returns `None` when lengths differ.
    pub fn from_columns(x: Vec<i64>, y: Vec<f64>) -> Option<Self> {
        (x.len() == y.len()).then_some(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Iterate `(x, y)` rows in order.
    pub fn rows(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Produces series for every supported pattern.
pub struct SeriesGenerator;

impl SeriesGenerator {
    /// Generate a series with a fresh `StdRng` seeded from `seed`.
    ///
    /// Identical `(pattern, point_count, seed)` always yields bit-identical output.
    pub fn generate_seeded(
        pattern: Pattern,
        point_count: usize,
        seed: u64,
    ) -> Result<Series, GeneratorError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(pattern, point_count, &mut rng)
    }

    /// Generate a series drawing `point_count` standard-normal values from `rng`.
    pub fn generate<R: Rng>(
        pattern: Pattern,
        point_count: usize,
        rng: &mut R,
    ) -> Result<Series, GeneratorError> {
        if !(MIN_POINTS..=MAX_POINTS).contains(&point_count) {
            return Err(GeneratorError::PointCountOutOfRange(point_count));
        }

        let x: Vec<i64> = (0..point_count as i64).collect();
        let z: Vec<f64> = (0..point_count)
            .map(|_| rng.sample::<f64, _>(StandardNormal))
            .collect();

        let y = match pattern {
            Pattern::RandomWalk => z
                .iter()
                .scan(0.0, |acc, step| {
                    *acc += step;
                    Some(*acc + 50.0)
                })
                .collect(),
            Pattern::Noise => z.iter().map(|n| n * 10.0 + 50.0).collect(),
            Pattern::Linear => Self::with_noise(&x, &z, 5.0, |x| x * 2.0),
            Pattern::SineWave => Self::with_noise(&x, &z, 2.0, |x| 10.0 * (x / 5.0).sin() + 50.0),
            Pattern::Exponential => Self::with_noise(&x, &z, 2.0, |x| (x / 10.0).exp()),
        };

        Ok(Series { x, y })
    }

    /// `f(x) + scale * z` element-wise.
    fn with_noise(x: &[i64], z: &[f64], scale: f64, f: impl Fn(f64) -> f64) -> Vec<f64> {
        x.iter()
            .zip(z)
            .map(|(&x, &n)| f(x as f64) + n * scale)
            .collect()
    }
}
