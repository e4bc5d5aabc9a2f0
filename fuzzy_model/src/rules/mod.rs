//! Rule base - the ordered set of Mamdani rules driving inference.
//!
//! Rules reference variables and terms by name. Those references are checked
//! once, when the rule base is bound to its variables, so that a malformed
//! rule is reported at load time instead of on every inference.

mod rule;

pub use rule::*;

use crate::error::{FuzzyError, FuzzyResult};
use crate::variable::Variable;

/// An ordered sequence of rules.
///
/// Order has no effect on the inferred value but is kept for deterministic
/// diagnostics.
#[derive(Debug, Clone, Default)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// Create a rule base from rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Append a rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Iterate over the rules in order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the rule base has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check every rule against the input variables and the output variable.
    ///
    /// Fails with `EmptyAntecedent` for a rule whose slots are all don't-care,
    /// and with `MissingMembership` for any reference to an unknown variable or term.
    pub fn validate(&self, inputs: &[Variable], output: &Variable) -> FuzzyResult<()> {
        for rule in &self.rules {
            if rule.operands().next().is_none() {
                return Err(FuzzyError::EmptyAntecedent {
                    rule: rule.to_string(),
                });
            }

            for (variable, term) in rule.operands() {
                let known = inputs
                    .iter()
                    .find(|v| v.name() == variable)
                    .is_some_and(|v| v.has_term(term));
                if !known {
                    return Err(FuzzyError::MissingMembership {
                        variable: variable.to_string(),
                        term: term.to_string(),
                    });
                }
            }

            if !output.has_term(rule.consequent()) {
                return Err(FuzzyError::MissingMembership {
                    variable: output.name().to_string(),
                    term: rule.consequent().to_string(),
                });
            }
        }

        Ok(())
    }
}

impl FromIterator<Rule> for RuleBase {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::MembershipShape;
    use crate::universe::Universe;

    fn variable(name: &str, terms: &[&str]) -> Variable {
        let universe = Universe::from_range(0.0, 10.0, 1.0).unwrap();
        let shape = MembershipShape::triangular(0.0, 5.0, 10.0);
        Variable::from_shapes(name, universe, terms.iter().map(|t| (*t, &shape))).unwrap()
    }

    fn fixtures() -> (Vec<Variable>, Variable) {
        (
            vec![
                variable("temperature", &["low", "high"]),
                variable("humidity", &["dry", "wet"]),
            ],
            variable("fan", &["slow", "fast"]),
        )
    }

    #[test]
    fn test_valid_rule_base() {
        let (inputs, output) = fixtures();
        let rules: RuleBase = vec![
            Rule::new(
                vec![
                    Antecedent::is("temperature", "low"),
                    Antecedent::is("humidity", "dry"),
                ],
                Connective::And,
                "slow",
            ),
            Rule::new(
                vec![Antecedent::Absent, Antecedent::is("humidity", "wet")],
                Connective::Or,
                "fast",
            ),
        ]
        .into_iter()
        .collect();

        assert_eq!(rules.len(), 2);
        assert!(rules.validate(&inputs, &output).is_ok());
    }

    #[test]
    fn test_empty_antecedent_detected() {
        let (inputs, output) = fixtures();
        let rules = RuleBase::new(vec![Rule::new(
            vec![Antecedent::Absent, Antecedent::Absent],
            Connective::And,
            "slow",
        )]);

        assert!(matches!(
            rules.validate(&inputs, &output),
            Err(FuzzyError::EmptyAntecedent { .. })
        ));
    }

    #[test]
    fn test_unknown_variable_detected() {
        let (inputs, output) = fixtures();
        let rules = RuleBase::new(vec![Rule::new(
            vec![Antecedent::is("pressure", "low")],
            Connective::And,
            "slow",
        )]);

        let err = rules.validate(&inputs, &output).unwrap_err();
        assert!(matches!(err, FuzzyError::MissingMembership { variable, .. } if variable == "pressure"));
    }

    #[test]
    fn test_unknown_term_detected() {
        let (inputs, output) = fixtures();
        let rules = RuleBase::new(vec![Rule::new(
            vec![Antecedent::is("temperature", "scorching")],
            Connective::And,
            "slow",
        )]);

        let err = rules.validate(&inputs, &output).unwrap_err();
        assert!(matches!(err, FuzzyError::MissingMembership { term, .. } if term == "scorching"));
    }

    #[test]
    fn test_unknown_consequent_detected() {
        let (inputs, output) = fixtures();
        let mut rules = RuleBase::default();
        rules.push(Rule::new(
            vec![Antecedent::is("temperature", "high")],
            Connective::And,
            "turbo",
        ));

        let err = rules.validate(&inputs, &output).unwrap_err();
        assert!(matches!(err, FuzzyError::MissingMembership { variable, term } if variable == "fan" && term == "turbo"));
    }
}
