//! Fuzzification - crisp input values to term membership degrees.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use fuzzy_model::{FuzzyError, FuzzyResult, Variable};

/// How a crisp value is located in a variable's universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FuzzificationMode {
    /// The value must equal one of the universe samples.
    #[default]
    Exact,
    /// Linear interpolation between the two nearest samples.
    /// Values outside `[min, max]` are still rejected.
    Interpolate,
}

/// Degree of every term of one variable.
pub type TermDegrees = HashMap<String, f64>;

/// Fuzzify a crisp value against a variable, requiring an exact sample match.
pub fn fuzzify(value: f64, variable: &Variable) -> FuzzyResult<TermDegrees> {
    fuzzify_with(value, variable, FuzzificationMode::Exact)
}

/// Fuzzify a crisp value against a variable.
///
/// Every term is reported, including those with degree 0.
pub fn fuzzify_with(
    value: f64,
    variable: &Variable,
    mode: FuzzificationMode,
) -> FuzzyResult<TermDegrees> {
    let not_in_universe = || FuzzyError::ValueNotInUniverse {
        variable: variable.name().to_string(),
        value,
    };
    let universe = variable.universe();

    let degrees = match mode {
        FuzzificationMode::Exact => {
            let index = universe.index_of(value).ok_or_else(not_in_universe)?;
            variable
                .terms()
                .iter()
                .map(|set| (set.name().to_string(), set.membership()[index]))
                .collect()
        }
        FuzzificationMode::Interpolate => {
            let (index, t) = universe.bracket(value).ok_or_else(not_in_universe)?;
            variable
                .terms()
                .iter()
                .map(|set| {
                    let m = set.membership();
                    let degree = m[index] + t * (m[index + 1] - m[index]);
                    (set.name().to_string(), degree)
                })
                .collect()
        }
    };

    Ok(degrees)
}

/// Fuzzified degrees for every input variable of one invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Memberships {
    variables: HashMap<String, TermDegrees>,
}

impl Memberships {
    /// Create an empty set of memberships.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the degrees of one variable, replacing any previous entry.
    pub fn insert(&mut self, variable: impl Into<String>, degrees: TermDegrees) {
        self.variables.insert(variable.into(), degrees);
    }

    /// Degree of `variable IS term`, if known.
    pub fn degree(&self, variable: &str, term: &str) -> Option<f64> {
        self.variables.get(variable)?.get(term).copied()
    }

    /// All degrees recorded for a variable.
    pub fn variable(&self, variable: &str) -> Option<&TermDegrees> {
        self.variables.get(variable)
    }

    /// Number of variables recorded.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been recorded.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
