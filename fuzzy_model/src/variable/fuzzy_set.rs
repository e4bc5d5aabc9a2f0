//! Fuzzy set definitions - named membership arrays over a universe.

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, FuzzyResult};
use crate::membership::MembershipShape;
use crate::universe::Universe;

/// A named membership array aligned index-for-index with a universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzySet {
    name: String,
    membership: Vec<f64>,
}

impl FuzzySet {
    /// Create a fuzzy set from precomputed degrees.
    ///
    /// The array must match the universe length and every degree must lie in `[0, 1]`.
    pub fn new(
        name: impl Into<String>,
        universe: &Universe,
        membership: Vec<f64>,
    ) -> FuzzyResult<Self> {
        let name = name.into();

        if membership.len() != universe.len() {
            return Err(FuzzyError::InvalidSet {
                name,
                reason: format!(
                    "{} degrees for a universe of {} samples",
                    membership.len(),
                    universe.len()
                ),
            });
        }
        if let Some(bad) = membership.iter().find(|d| !(0.0..=1.0).contains(*d)) {
            return Err(FuzzyError::InvalidSet {
                name,
                reason: format!("degree {} outside [0, 1]", bad),
            });
        }

        Ok(Self { name, membership })
    }

    /// Build a fuzzy set by sampling a membership shape over a universe.
    pub fn from_shape(
        name: impl Into<String>,
        universe: &Universe,
        shape: &MembershipShape,
    ) -> FuzzyResult<Self> {
        let membership = shape.evaluate(universe)?;
        Self::new(name, universe, membership)
    }

    /// Term name of this set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Degrees of membership, one per universe sample.
    pub fn membership(&self) -> &[f64] {
        &self.membership
    }

    /// Degree at a universe index.
    pub fn degree_at(&self, index: usize) -> Option<f64> {
        self.membership.get(index).copied()
    }

    /// Highest degree in the set.
    pub fn height(&self) -> f64 {
        self.membership.iter().copied().fold(0.0, f64::max)
    }
}
