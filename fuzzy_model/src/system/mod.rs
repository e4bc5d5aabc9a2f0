//! A fully validated fuzzy system - input variables, output variable and rules.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::config::{SystemConfig, VariableConfig};
use crate::error::{FuzzyError, FuzzyResult};
use crate::rules::{Rule, RuleBase};
use crate::variable::Variable;

/// Immutable bundle of everything inference needs.
///
/// Construction validates the whole configuration, so a `FuzzySystem` that
/// exists is known to be consistent: every rule references real variables and
/// terms and has at least one specified antecedent.
#[derive(Debug, Clone)]
pub struct FuzzySystem {
    inputs: Vec<Variable>,
    output: Variable,
    rules: RuleBase,
}

impl FuzzySystem {
    /// Assemble and validate a system.
    pub fn new(inputs: Vec<Variable>, output: Variable, rules: RuleBase) -> FuzzyResult<Self> {
        let mut seen = HashSet::new();
        for variable in inputs.iter().chain(std::iter::once(&output)) {
            if !seen.insert(variable.name()) {
                return Err(FuzzyError::DuplicateName {
                    kind: "variable",
                    name: variable.name().to_string(),
                });
            }
        }

        rules.validate(&inputs, &output)?;

        Ok(Self {
            inputs,
            output,
            rules,
        })
    }

    /// Build every universe, fuzzy set and rule from a configuration.
    pub fn from_config(config: &SystemConfig) -> FuzzyResult<Self> {
        let inputs = config
            .inputs
            .iter()
            .map(build_variable)
            .collect::<FuzzyResult<Vec<_>>>()?;
        let output = build_variable(&config.output)?;
        let rules = config.rules.iter().map(Rule::from).collect();

        let system = Self::new(inputs, output, rules)?;
        info!(
            inputs = system.inputs.len(),
            rules = system.rules.len(),
            output = system.output.name(),
            "fuzzy system loaded"
        );

        Ok(system)
    }

    /// Load and validate a system from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> FuzzyResult<Self> {
        Self::from_config(&SystemConfig::load(path)?)
    }

    /// The built-in ventilation controller.
    pub fn ventilation() -> FuzzyResult<Self> {
        Self::from_config(&SystemConfig::ventilation())
    }

    /// Input variables in declaration order.
    pub fn inputs(&self) -> &[Variable] {
        &self.inputs
    }

    /// Look up an input variable by name.
    pub fn input(&self, name: &str) -> Option<&Variable> {
        self.inputs.iter().find(|v| v.name() == name)
    }

    /// The output variable.
    pub fn output(&self) -> &Variable {
        &self.output
    }

    /// The rule base.
    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }
}

fn build_variable(config: &VariableConfig) -> FuzzyResult<Variable> {
    let universe = config.universe.build()?;
    Variable::from_shapes(
        config.name.clone(),
        universe,
        config.terms.iter().map(|t| (t.name.as_str(), &t.shape)),
    )
}
