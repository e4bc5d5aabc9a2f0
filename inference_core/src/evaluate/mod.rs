//! Rule evaluation - firing strength of each rule from fuzzified inputs.

use serde::{Deserialize, Serialize};

use fuzzy_model::{FuzzyError, FuzzyResult, Rule};

use crate::fuzzify::Memberships;

/// A rule's consequent paired with the strength it fired at.
///
/// Lives for a single invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivatedRule {
    pub consequent: String,
    pub strength: f64,
}

impl ActivatedRule {
    pub fn new(consequent: impl Into<String>, strength: f64) -> Self {
        Self {
            consequent: consequent.into(),
            strength,
        }
    }
}

/// Compute the firing strength of a rule.
///
/// Don't-care slots are skipped; the remaining degrees are combined with the
/// rule's connective (`AND` = min, `OR` = max). A strength of 0 is a valid result.
pub fn evaluate_rule(rule: &Rule, memberships: &Memberships) -> FuzzyResult<f64> {
    let operands = rule
        .operands()
        .map(|(variable, term)| {
            memberships
                .degree(variable, term)
                .ok_or_else(|| FuzzyError::MissingMembership {
                    variable: variable.to_string(),
                    term: term.to_string(),
                })
        })
        .collect::<FuzzyResult<Vec<f64>>>()?;

    rule.connective()
        .combine(operands)
        .ok_or_else(|| FuzzyError::EmptyAntecedent {
            rule: rule.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzy_model::{Antecedent, Connective};
    use std::collections::HashMap;

    fn memberships() -> Memberships {
        let mut memberships = Memberships::new();
        memberships.insert(
            "temperature",
            HashMap::from([("low".to_string(), 0.7), ("high".to_string(), 0.0)]),
        );
        memberships.insert(
            "humidity",
            HashMap::from([("low".to_string(), 0.6), ("high".to_string(), 0.5)]),
        );
        memberships.insert(
            "occupancy",
            HashMap::from([("few".to_string(), 0.5), ("many".to_string(), 0.25)]),
        );
        memberships
    }

    #[test]
    fn test_and_takes_minimum() {
        let rule = Rule::new(
            vec![
                Antecedent::is("temperature", "low"),
                Antecedent::is("humidity", "low"),
                Antecedent::is("occupancy", "few"),
            ],
            Connective::And,
            "low",
        );

        assert_eq!(evaluate_rule(&rule, &memberships()).unwrap(), 0.5);
    }

    #[test]
    fn test_or_takes_maximum() {
        let rule = Rule::new(
            vec![
                Antecedent::is("temperature", "high"),
                Antecedent::is("humidity", "high"),
                Antecedent::is("occupancy", "many"),
            ],
            Connective::Or,
            "high",
        );

        assert_eq!(evaluate_rule(&rule, &memberships()).unwrap(), 0.5);
    }

    #[test]
    fn test_dont_care_is_not_zero() {
        // An absent slot must not pull an AND down to 0.
        let rule = Rule::new(
            vec![
                Antecedent::is("temperature", "low"),
                Antecedent::is("humidity", "low"),
                Antecedent::Absent,
            ],
            Connective::And,
            "low",
        );

        assert_eq!(evaluate_rule(&rule, &memberships()).unwrap(), 0.6);
    }

    #[test]
    fn test_zero_strength_is_ok() {
        let rule = Rule::new(
            vec![Antecedent::is("temperature", "high")],
            Connective::And,
            "high",
        );

        assert_eq!(evaluate_rule(&rule, &memberships()).unwrap(), 0.0);
    }

    #[test]
    fn test_missing_membership() {
        let rule = Rule::new(
            vec![Antecedent::is("temperature", "mid")],
            Connective::And,
            "mid",
        );

        assert!(matches!(
            evaluate_rule(&rule, &memberships()),
            Err(FuzzyError::MissingMembership { term, .. }) if term == "mid"
        ));
    }

    #[test]
    fn test_empty_antecedent() {
        let rule = Rule::new(vec![Antecedent::Absent], Connective::Or, "low");

        assert!(matches!(
            evaluate_rule(&rule, &memberships()),
            Err(FuzzyError::EmptyAntecedent { .. })
        ));
    }
}
