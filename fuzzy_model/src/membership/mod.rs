//! Membership function library.
//!
//! Each shape maps a crisp value to a degree in `[0, 1]`. Shapes are validated
//! before evaluation; a malformed shape is a configuration defect and is never
//! silently repaired.

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, FuzzyResult};
use crate::universe::Universe;

/// Parameterised membership function, tagged by shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MembershipShape {
    /// Zero outside `[a, c]`, rising linearly to 1 at `b`, falling back to 0 at `c`.
    Triangular { a: f64, b: f64, c: f64 },

    /// `exp(-(x - mean)^2 / (2 sigma^2))`.
    Gaussian { mean: f64, sigma: f64 },

    /// `1 / (1 + exp(-steepness (x - midpoint)))`.
    Sigmoidal { steepness: f64, midpoint: f64 },
}

impl MembershipShape {
    /// Create a triangular shape.
    pub fn triangular(a: f64, b: f64, c: f64) -> Self {
        MembershipShape::Triangular { a, b, c }
    }

    /// Create a Gaussian shape.
    pub fn gaussian(mean: f64, sigma: f64) -> Self {
        MembershipShape::Gaussian { mean, sigma }
    }

    /// Create a sigmoidal shape.
    pub fn sigmoidal(steepness: f64, midpoint: f64) -> Self {
        MembershipShape::Sigmoidal {
            steepness,
            midpoint,
        }
    }

    /// Name of the shape, as used in configuration files.
    pub fn kind(&self) -> &'static str {
        match self {
            MembershipShape::Triangular { .. } => "triangular",
            MembershipShape::Gaussian { .. } => "gaussian",
            MembershipShape::Sigmoidal { .. } => "sigmoidal",
        }
    }

    /// Check the shape-specific parameter constraints.
    pub fn validate(&self) -> FuzzyResult<()> {
        let invalid = |reason: String| FuzzyError::InvalidParameters {
            shape: self.kind(),
            reason,
        };

        match *self {
            MembershipShape::Triangular { a, b, c } => {
                if ![a, b, c].iter().all(|v| v.is_finite()) {
                    return Err(invalid("vertices must be finite".to_string()));
                }
                if a > b || b > c {
                    return Err(invalid(format!(
                        "vertices must satisfy a <= b <= c, got ({}, {}, {})",
                        a, b, c
                    )));
                }
            }
            MembershipShape::Gaussian { mean, sigma } => {
                if !mean.is_finite() || !sigma.is_finite() {
                    return Err(invalid("mean and sigma must be finite".to_string()));
                }
                if sigma == 0.0 {
                    return Err(invalid("sigma must be non-zero".to_string()));
                }
            }
            MembershipShape::Sigmoidal {
                steepness,
                midpoint,
            } => {
                if !steepness.is_finite() || !midpoint.is_finite() {
                    return Err(invalid(
                        "steepness and midpoint must be finite".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Degree of membership of a single crisp value.
    ///
    /// Assumes the shape has been validated.
    pub fn degree(&self, x: f64) -> f64 {
        match *self {
            MembershipShape::Triangular { a, b, c } => {
                // Checked first so that a == b or b == c steps straight to 1.
                if x == b {
                    1.0
                } else if x <= a || x >= c {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (c - x) / (c - b)
                }
            }
            MembershipShape::Gaussian { mean, sigma } => {
                (-(x - mean).powi(2) / (2.0 * sigma * sigma)).exp()
            }
            MembershipShape::Sigmoidal {
                steepness,
                midpoint,
            } => 1.0 / (1.0 + (-steepness * (x - midpoint)).exp()),
        }
    }

    /// Sample the shape over every point of a universe.
    pub fn evaluate(&self, universe: &Universe) -> FuzzyResult<Vec<f64>> {
        self.validate()?;
        Ok(universe.iter().map(|x| self.degree(x)).collect())
    }
}

impl std::fmt::Display for MembershipShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipShape::Triangular { a, b, c } => write!(f, "triangular({}, {}, {})", a, b, c),
            MembershipShape::Gaussian { mean, sigma } => write!(f, "gaussian({}, {})", mean, sigma),
            MembershipShape::Sigmoidal {
                steepness,
                midpoint,
            } => write!(f, "sigmoidal({}, {})", steepness, midpoint),
        }
    }
}
