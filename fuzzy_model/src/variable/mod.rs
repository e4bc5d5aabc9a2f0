//! Linguistic variables - a universe plus the named fuzzy sets defined over it.

mod fuzzy_set;

pub use fuzzy_set::*;

use std::collections::HashMap;

use crate::error::{FuzzyError, FuzzyResult};
use crate::membership::MembershipShape;
use crate::universe::Universe;

/// Build one fuzzy set per `(term, shape)` entry of a parameter table.
///
/// This is the single construction path for every shape family; triangular,
/// Gaussian and sigmoidal tables all go through here.
pub fn build_sets<'a, I, S>(universe: &Universe, table: I) -> FuzzyResult<Vec<FuzzySet>>
where
    I: IntoIterator<Item = (S, &'a MembershipShape)>,
    S: Into<String>,
{
    table
        .into_iter()
        .map(|(name, shape)| FuzzySet::from_shape(name, universe, shape))
        .collect()
}

/// A named variable with its universe and term sets.
///
/// Terms keep their declaration order for diagnostics and are resolved by name
/// through an explicit index.
#[derive(Debug, Clone)]
pub struct Variable {
    name: String,
    universe: Universe,
    terms: Vec<FuzzySet>,
    index: HashMap<String, usize>,
}

impl Variable {
    /// Create a variable from already built sets.
    pub fn new(
        name: impl Into<String>,
        universe: Universe,
        terms: Vec<FuzzySet>,
    ) -> FuzzyResult<Self> {
        let name = name.into();
        let mut index = HashMap::with_capacity(terms.len());

        for (position, set) in terms.iter().enumerate() {
            if set.membership().len() != universe.len() {
                return Err(FuzzyError::InvalidSet {
                    name: set.name().to_string(),
                    reason: format!("not aligned with the '{}' universe", name),
                });
            }
            if index.insert(set.name().to_string(), position).is_some() {
                return Err(FuzzyError::DuplicateName {
                    kind: "term",
                    name: format!("{}.{}", name, set.name()),
                });
            }
        }

        Ok(Self {
            name,
            universe,
            terms,
            index,
        })
    }

    /// Create a variable by sampling a table of term shapes.
    pub fn from_shapes<'a, I, S>(
        name: impl Into<String>,
        universe: Universe,
        table: I,
    ) -> FuzzyResult<Self>
    where
        I: IntoIterator<Item = (S, &'a MembershipShape)>,
        S: Into<String>,
    {
        let sets = build_sets(&universe, table)?;
        Self::new(name, universe, sets)
    }

    /// Variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sampled domain.
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Look up a term by name.
    pub fn term(&self, name: &str) -> Option<&FuzzySet> {
        self.index.get(name).map(|&i| &self.terms[i])
    }

    /// Whether a term with this name exists.
    pub fn has_term(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All terms in declaration order.
    pub fn terms(&self) -> &[FuzzySet] {
        &self.terms
    }

    /// Term names in declaration order.
    pub fn term_names(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.name())
    }
}
