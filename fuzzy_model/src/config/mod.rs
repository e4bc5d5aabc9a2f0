//! Configuration surface - universes, terms and rules as plain data.
//!
//! A [`SystemConfig`] is what gets written in a TOML file; it carries no
//! validation of its own. Turning it into a [`crate::FuzzySystem`] is where
//! every constraint is checked.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::FuzzyResult;
use crate::membership::MembershipShape;
use crate::rules::{Antecedent, Connective, Rule};
use crate::universe::Universe;

/// Bounds and step of an evenly sampled universe (`max` inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniverseConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl UniverseConfig {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Sample the configured range.
    pub fn build(&self) -> FuzzyResult<Universe> {
        Universe::from_range(self.min, self.max, self.step)
    }
}

/// A named term and its membership shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermConfig {
    pub name: String,
    #[serde(flatten)]
    pub shape: MembershipShape,
}

impl TermConfig {
    pub fn new(name: impl Into<String>, shape: MembershipShape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

/// A variable: its universe and terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableConfig {
    pub name: String,
    pub universe: UniverseConfig,
    pub terms: Vec<TermConfig>,
}

/// One antecedent slot. A missing `term` means "don't care".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntecedentConfig {
    pub variable: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl From<&AntecedentConfig> for Antecedent {
    fn from(config: &AntecedentConfig) -> Self {
        match &config.term {
            Some(term) => Antecedent::is(config.variable.clone(), term.clone()),
            None => Antecedent::Absent,
        }
    }
}

/// A rule: antecedent slots, connective and output term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub antecedents: Vec<AntecedentConfig>,
    #[serde(default)]
    pub connective: Connective,
    pub consequent: String,
}

impl From<&RuleConfig> for Rule {
    fn from(config: &RuleConfig) -> Self {
        Rule::new(
            config.antecedents.iter().map(Antecedent::from).collect(),
            config.connective,
            config.consequent.clone(),
        )
    }
}

/// The complete static configuration of a fuzzy system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    pub inputs: Vec<VariableConfig>,
    pub output: VariableConfig,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl SystemConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> FuzzyResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> FuzzyResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The built-in room ventilation controller.
    ///
    /// Temperature (0-50 C), relative humidity (0-100 %) and occupant count
    /// (0-10) drive a ventilation intensity (0-100 %), all sampled at step 1.
    pub fn ventilation() -> Self {
        let tri = MembershipShape::triangular;

        let variable = |name: &str, max: f64, terms: [(&str, MembershipShape); 3]| VariableConfig {
            name: name.to_string(),
            universe: UniverseConfig::new(0.0, max, 1.0),
            terms: terms
                .into_iter()
                .map(|(term, shape)| TermConfig::new(term, shape))
                .collect(),
        };

        let rule = |terms: [Option<&str>; 3], connective: Connective, consequent: &str| {
            let antecedents = ["temperature", "humidity", "occupancy"]
                .into_iter()
                .zip(terms)
                .map(|(variable, term)| AntecedentConfig {
                    variable: variable.to_string(),
                    term: term.map(str::to_string),
                })
                .collect();
            RuleConfig {
                antecedents,
                connective,
                consequent: consequent.to_string(),
            }
        };

        Self {
            inputs: vec![
                variable(
                    "temperature",
                    50.0,
                    [
                        ("low", tri(0.0, 15.0, 25.0)),
                        ("mid", tri(20.0, 25.0, 30.0)),
                        ("high", tri(25.0, 35.0, 50.0)),
                    ],
                ),
                variable(
                    "humidity",
                    100.0,
                    [
                        ("low", tri(0.0, 20.0, 50.0)),
                        ("mid", tri(30.0, 50.0, 70.0)),
                        ("high", tri(50.0, 80.0, 100.0)),
                    ],
                ),
                variable(
                    "occupancy",
                    10.0,
                    [
                        ("few", tri(0.0, 0.0, 4.0)),
                        ("some", tri(2.0, 5.0, 8.0)),
                        ("many", tri(6.0, 10.0, 10.0)),
                    ],
                ),
            ],
            output: variable(
                "ventilation",
                100.0,
                [
                    ("low", tri(0.0, 0.0, 50.0)),
                    ("mid", tri(20.0, 50.0, 80.0)),
                    ("high", tri(50.0, 100.0, 100.0)),
                ],
            ),
            rules: vec![
                rule([Some("low"), Some("low"), Some("few")], Connective::And, "low"),
                rule([Some("mid"), Some("mid"), Some("some")], Connective::And, "mid"),
                rule([Some("high"), Some("high"), Some("many")], Connective::Or, "high"),
                rule([Some("mid"), Some("high"), None], Connective::And, "mid"),
                rule([Some("high"), Some("mid"), None], Connective::And, "high"),
            ],
        }
    }
}
