//! Rule definitions - antecedents, connectives and consequents.

use serde::{Deserialize, Serialize};

/// How the specified antecedent degrees of a rule are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Connective {
    /// Minimum of the operands.
    #[default]
    And,
    /// Maximum of the operands.
    Or,
}

impl Connective {
    /// Combine operand degrees. `None` when there are no operands.
    pub fn combine(&self, operands: impl IntoIterator<Item = f64>) -> Option<f64> {
        let mut operands = operands.into_iter();
        let first = operands.next()?;
        Some(match self {
            Connective::And => operands.fold(first, f64::min),
            Connective::Or => operands.fold(first, f64::max),
        })
    }

    fn keyword(&self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }
}

/// One antecedent slot of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Antecedent {
    /// `variable IS term`.
    Present { variable: String, term: String },
    /// Don't care - skipped during evaluation.
    Absent,
}

impl Antecedent {
    /// Create a `variable IS term` antecedent.
    pub fn is(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Antecedent::Present {
            variable: variable.into(),
            term: term.into(),
        }
    }

    /// The `(variable, term)` pair, if specified.
    pub fn operand(&self) -> Option<(&str, &str)> {
        match self {
            Antecedent::Present { variable, term } => Some((variable.as_str(), term.as_str())),
            Antecedent::Absent => None,
        }
    }
}

/// A Mamdani rule: `IF a1 <op> a2 <op> ... THEN output IS consequent`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    antecedents: Vec<Antecedent>,
    connective: Connective,
    consequent: String,
}

impl Rule {
    /// Create a new rule. Validation happens when the rule base is loaded.
    pub fn new(
        antecedents: Vec<Antecedent>,
        connective: Connective,
        consequent: impl Into<String>,
    ) -> Self {
        Self {
            antecedents,
            connective,
            consequent: consequent.into(),
        }
    }

    /// All antecedent slots, including don't-cares.
    pub fn antecedents(&self) -> &[Antecedent] {
        &self.antecedents
    }

    /// Only the specified `(variable, term)` operands, in order.
    pub fn operands(&self) -> impl Iterator<Item = (&str, &str)> {
        self.antecedents.iter().filter_map(Antecedent::operand)
    }

    /// The connective applied across all operands.
    pub fn connective(&self) -> Connective {
        self.connective
    }

    /// Output term asserted by this rule.
    pub fn consequent(&self) -> &str {
        &self.consequent
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clauses: Vec<_> = self
            .operands()
            .map(|(variable, term)| format!("{} IS {}", variable, term))
            .collect();
        let joiner = format!(" {} ", self.connective.keyword());

        write!(f, "IF {} THEN {}", clauses.join(&joiner), self.consequent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connective_combine() {
        assert_eq!(Connective::And.combine([0.7, 0.3, 0.5]), Some(0.3));
        assert_eq!(Connective::Or.combine([0.7, 0.3, 0.5]), Some(0.7));
        assert_eq!(Connective::And.combine([0.4]), Some(0.4));
        assert_eq!(Connective::Or.combine(Vec::new()), None);
    }

    #[test]
    fn test_operands_skip_absent() {
        let rule = Rule::new(
            vec![
                Antecedent::is("temperature", "mid"),
                Antecedent::is("humidity", "high"),
                Antecedent::Absent,
            ],
            Connective::And,
            "mid",
        );

        assert_eq!(rule.antecedents().len(), 3);
        assert_eq!(
            rule.operands().collect::<Vec<_>>(),
            vec![("temperature", "mid"), ("humidity", "high")]
        );
    }

    #[test]
    fn test_rule_display() {
        let rule = Rule::new(
            vec![
                Antecedent::is("temperature", "high"),
                Antecedent::Absent,
                Antecedent::is("occupancy", "many"),
            ],
            Connective::Or,
            "high",
        );

        assert_eq!(
            rule.to_string(),
            "IF temperature IS high OR occupancy IS many THEN high"
        );
    }

    #[test]
    fn test_connective_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            op: Connective,
        }
        let parsed: Wrapper = toml::from_str("op = \"or\"").unwrap();
        assert_eq!(parsed.op, Connective::Or);
    }
}
