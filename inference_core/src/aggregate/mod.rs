//! Aggregation - merging clipped consequent sets into one output set.

use fuzzy_model::{FuzzyError, FuzzyResult, Variable};

use crate::evaluate::ActivatedRule;

/// Clip each activated rule's consequent set at its strength and merge the
/// results with a pointwise maximum.
///
/// The result is aligned with the output universe. With no activated rules it
/// is all zeros. Order and duplicates do not change the result.
pub fn aggregate(activated: &[ActivatedRule], output: &Variable) -> FuzzyResult<Vec<f64>> {
    let mut aggregated = vec![0.0_f64; output.universe().len()];

    for rule in activated {
        let set = output
            .term(&rule.consequent)
            .ok_or_else(|| FuzzyError::MissingMembership {
                variable: output.name().to_string(),
                term: rule.consequent.clone(),
            })?;

        for (acc, degree) in aggregated.iter_mut().zip(set.membership()) {
            *acc = acc.max(degree.min(rule.strength));
        }
    }

    Ok(aggregated)
}
