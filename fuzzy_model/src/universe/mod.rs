//! Universe of discourse - the sampled domain of a fuzzy variable.

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, FuzzyResult};

/// Slack used when counting range samples so that `max` survives float rounding.
const RANGE_EPSILON: f64 = 1e-9;

/// Largest number of samples `from_range` will generate.
pub const MAX_UNIVERSE_SAMPLES: usize = 1_000_000;

/// An ordered, strictly increasing sequence of sample points.
///
/// Every fuzzy set defined on a variable is aligned index-for-index with the
/// variable's universe. A universe is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Universe {
    points: Vec<f64>,
}

impl Universe {
    /// Create a universe from arbitrary sample points.
    ///
    /// The points must be finite, strictly increasing and at least two long.
    pub fn new(points: Vec<f64>) -> FuzzyResult<Self> {
        if points.len() < 2 {
            return Err(FuzzyError::InvalidUniverse(format!(
                "need at least 2 samples, got {}",
                points.len()
            )));
        }
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(FuzzyError::InvalidUniverse(format!(
                "sample {} is not finite",
                bad
            )));
        }
        if let Some(pair) = points.windows(2).find(|w| w[0] >= w[1]) {
            return Err(FuzzyError::InvalidUniverse(format!(
                "samples must be strictly increasing ({} then {})",
                pair[0], pair[1]
            )));
        }

        Ok(Self { points })
    }

    /// Create an evenly spaced universe from `min` to `max` inclusive.
    ///
    /// `from_range(0.0, 50.0, 1.0)` yields the 51 samples `0, 1, ..., 50`.
    /// Ranges needing more than [`MAX_UNIVERSE_SAMPLES`] samples are rejected.
    pub fn from_range(min: f64, max: f64, step: f64) -> FuzzyResult<Self> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(FuzzyError::InvalidUniverse(
                "bounds and step must be finite".to_string(),
            ));
        }
        if step <= 0.0 {
            return Err(FuzzyError::InvalidUniverse(format!(
                "step must be positive, got {}",
                step
            )));
        }
        if max <= min {
            return Err(FuzzyError::InvalidUniverse(format!(
                "max ({}) must be greater than min ({})",
                max, min
            )));
        }

        let intervals = ((max - min) / step + RANGE_EPSILON).floor();
        if !intervals.is_finite() || intervals >= MAX_UNIVERSE_SAMPLES as f64 {
            return Err(FuzzyError::InvalidUniverse(format!(
                "range {}..={} with step {} exceeds {} samples",
                min, max, step, MAX_UNIVERSE_SAMPLES
            )));
        }
        let count = (intervals as usize).checked_add(1).ok_or_else(|| {
            FuzzyError::InvalidUniverse("sample count overflows".to_string())
        })?;
        let points = (0..count).map(|i| min + i as f64 * step).collect();

        Self::new(points)
    }

    /// The sample points.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed universe; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest sample.
    pub fn min(&self) -> f64 {
        self.points[0]
    }

    /// Largest sample.
    pub fn max(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Index of the sample exactly equal to `value`.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        self.points.iter().position(|p| *p == value)
    }

    /// Locate `value` between two neighbouring samples.
    ///
    /// Returns `(i, t)` such that `value == points[i] + t * (points[i + 1] - points[i])`
    /// with `t` in `[0, 1)`; the last sample is reported as `(len - 2, 1.0)`.
    /// `None` when `value` lies outside `[min, max]`.
    pub fn bracket(&self, value: f64) -> Option<(usize, f64)> {
        if !(value >= self.min() && value <= self.max()) {
            return None;
        }

        let upper = self.points.partition_point(|p| *p <= value);
        let i = upper.saturating_sub(1).min(self.points.len() - 2);
        let (lo, hi) = (self.points[i], self.points[i + 1]);

        Some((i, (value - lo) / (hi - lo)))
    }

    /// Iterate over the sample points.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }
}

impl TryFrom<Vec<f64>> for Universe {
    type Error = FuzzyError;

    fn try_from(points: Vec<f64>) -> FuzzyResult<Self> {
        Self::new(points)
    }
}

impl From<Universe> for Vec<f64> {
    fn from(universe: Universe) -> Self {
        universe.points
    }
}
