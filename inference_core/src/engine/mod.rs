//! Inference engine - runs the Mamdani pipeline over a fuzzy system.
//!
//! Each invocation works as follows:
//! 1. **Fuzzify**: Every input variable's crisp value becomes term degrees
//! 2. **Evaluate**: Every rule gets a firing strength from those degrees
//! 3. **Filter**: Rules with zero strength are dropped (configurable)
//! 4. **Aggregate**: Clipped consequent sets merge into one output set
//! 5. **Defuzzify**: The centroid of the output set is the crisp result
//!
//! The engine performs no fuzzy arithmetic of its own; it only sequences the
//! stage functions and collects their results.

mod inputs;
mod snapshot;

pub use inputs::*;
pub use snapshot::*;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use fuzzy_model::{FuzzyError, FuzzyResult, FuzzySystem};

use crate::aggregate::aggregate;
use crate::defuzzify::defuzzify;
use crate::evaluate::{evaluate_rule, ActivatedRule};
use crate::fuzzify::{fuzzify_with, FuzzificationMode, Memberships};

/// Engine options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How crisp inputs are located in their universes.
    pub fuzzification: FuzzificationMode,

    /// Drop rules that fired with strength 0 before aggregation.
    /// They contribute nothing either way.
    pub skip_inactive_rules: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fuzzification: FuzzificationMode::Exact,
            skip_inactive_rules: true,
        }
    }
}

/// Result of one inference.
#[derive(Debug, Clone)]
pub struct Inference {
    /// Crisp output value (centroid, or 0 when nothing fired).
    pub crisp: f64,

    /// Fuzzified degrees of every input variable.
    pub memberships: Memberships,

    /// Activated rules in rule-base order.
    pub activated: Vec<ActivatedRule>,

    /// Aggregated output set, aligned with the output universe.
    pub aggregated: Vec<f64>,
}

impl Inference {
    /// Whether at least one rule fired with non-zero strength.
    pub fn any_fired(&self) -> bool {
        self.activated.iter().any(|r| r.strength > 0.0)
    }
}

/// Runs inference over an immutable fuzzy system.
pub struct InferenceEngine {
    system: FuzzySystem,
    config: EngineConfig,
}

impl InferenceEngine {
    /// Create an engine with the given configuration.
    pub fn new(system: FuzzySystem, config: EngineConfig) -> Self {
        Self { system, config }
    }

    /// Create an engine with default configuration.
    pub fn with_defaults(system: FuzzySystem) -> Self {
        Self::new(system, EngineConfig::default())
    }

    /// The underlying system.
    pub fn system(&self) -> &FuzzySystem {
        &self.system
    }

    /// The engine options.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Infer the crisp output for one set of inputs.
    ///
    /// Every input variable must have a value; a value outside its universe
    /// aborts the invocation with `ValueNotInUniverse`.
    pub fn infer(&self, inputs: &Inputs) -> FuzzyResult<Inference> {
        let memberships = self.fuzzify_inputs(inputs)?;
        let activated = self.activate_rules(&memberships)?;

        let output = self.system.output();
        let aggregated = aggregate(&activated, output)?;
        let crisp = defuzzify(&aggregated, output.universe());

        if activated.iter().all(|r| r.strength == 0.0) {
            debug!(output = output.name(), "no rule fired, output falls back to 0");
        }
        debug!(
            ?inputs,
            activated = activated.len(),
            crisp,
            output = output.name(),
            "inference complete"
        );

        Ok(Inference {
            crisp,
            memberships,
            activated,
            aggregated,
        })
    }

    /// Infer and return only the crisp value.
    pub fn infer_crisp(&self, inputs: &Inputs) -> FuzzyResult<f64> {
        self.infer(inputs).map(|inference| inference.crisp)
    }

    /// Run many independent inferences in parallel.
    ///
    /// Results are returned in the same order as `scenarios`; a failure in one
    /// scenario does not affect the others.
    pub fn infer_batch(&self, scenarios: &[Inputs]) -> Vec<FuzzyResult<Inference>> {
        scenarios.par_iter().map(|inputs| self.infer(inputs)).collect()
    }

    /// Build the chart view of an inference.
    pub fn snapshot(&self, inference: &Inference) -> OutputSnapshot {
        let output = self.system.output();

        OutputSnapshot {
            variable: output.name().to_string(),
            universe: output.universe().points().to_vec(),
            terms: output
                .terms()
                .iter()
                .map(|set| TermCurve {
                    name: set.name().to_string(),
                    membership: set.membership().to_vec(),
                })
                .collect(),
            aggregated: inference.aggregated.clone(),
            crisp: inference.crisp,
        }
    }

    /// Fuzzify the value of every input variable.
    fn fuzzify_inputs(&self, inputs: &Inputs) -> FuzzyResult<Memberships> {
        let mut memberships = Memberships::new();

        for variable in self.system.inputs() {
            let value = inputs
                .get(variable.name())
                .ok_or_else(|| FuzzyError::MissingInput(variable.name().to_string()))?;
            let degrees = fuzzify_with(value, variable, self.config.fuzzification)?;
            trace!(variable = variable.name(), value, ?degrees, "fuzzified");
            memberships.insert(variable.name(), degrees);
        }

        Ok(memberships)
    }

    /// Evaluate every rule in order, keeping the ones that should be aggregated.
    fn activate_rules(&self, memberships: &Memberships) -> FuzzyResult<Vec<ActivatedRule>> {
        let mut activated = Vec::with_capacity(self.system.rules().len());

        for rule in self.system.rules().iter() {
            let strength = evaluate_rule(rule, memberships)?;
            trace!(%rule, strength, "rule evaluated");

            if strength > 0.0 || !self.config.skip_inactive_rules {
                activated.push(ActivatedRule::new(rule.consequent(), strength));
            }
        }

        Ok(activated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> InferenceEngine {
        InferenceEngine::with_defaults(FuzzySystem::ventilation().unwrap())
    }

    fn scenario(temperature: f64, humidity: f64, occupancy: f64) -> Inputs {
        Inputs::new()
            .with("temperature", temperature)
            .with("humidity", humidity)
            .with("occupancy", occupancy)
    }

    #[test]
    fn test_cold_dry_quiet_room() {
        let inference = engine().infer(&scenario(18.0, 30.0, 2.0)).unwrap();

        assert_eq!(inference.activated, vec![ActivatedRule::new("low", 0.5)]);
        assert!(inference.crisp > 0.0);
        assert!(inference.crisp < 50.0);
    }

    #[test]
    fn test_hot_humid_crowded_room() {
        let inference = engine().infer(&scenario(35.0, 90.0, 7.0)).unwrap();

        // The OR rule fires fully on temperature alone.
        assert_eq!(inference.activated, vec![ActivatedRule::new("high", 1.0)]);
        assert!(inference.crisp > 50.0);
    }

    #[test]
    fn test_reference_scenarios_stay_in_range() {
        let engine = engine();

        for (t, h, p) in [
            (18.0, 30.0, 2.0),
            (32.0, 75.0, 9.0),
            (25.0, 85.0, 5.0),
            (28.0, 60.0, 3.0),
            (35.0, 90.0, 7.0),
        ] {
            let crisp = engine.infer_crisp(&scenario(t, h, p)).unwrap();
            assert!((0.0..=100.0).contains(&crisp), "{} out of range", crisp);
        }
    }

    #[test]
    fn test_nothing_fires_gives_zero() {
        let inference = engine().infer(&scenario(0.0, 0.0, 0.0)).unwrap();

        assert!(inference.activated.is_empty());
        assert!(!inference.any_fired());
        assert!(inference.aggregated.iter().all(|d| *d == 0.0));
        assert_eq!(inference.crisp, 0.0);
    }

    #[test]
    fn test_keeping_inactive_rules_changes_nothing() {
        let system = FuzzySystem::ventilation().unwrap();
        let config = EngineConfig {
            skip_inactive_rules: false,
            ..EngineConfig::default()
        };
        let keep_all = InferenceEngine::new(system, config);
        let inputs = scenario(28.0, 60.0, 3.0);

        let kept = keep_all.infer(&inputs).unwrap();
        let skipped = engine().infer(&inputs).unwrap();

        assert_eq!(kept.activated.len(), 5);
        assert_eq!(kept.aggregated, skipped.aggregated);
        assert_eq!(kept.crisp, skipped.crisp);
    }

    #[test]
    fn test_value_outside_universe_aborts() {
        let err = engine().infer(&scenario(18.0, 130.0, 2.0)).unwrap_err();
        assert!(matches!(
            err,
            FuzzyError::ValueNotInUniverse { variable, value } if variable == "humidity" && value == 130.0
        ));
    }

    #[test]
    fn test_off_grid_value_needs_interpolation() {
        let inputs = scenario(18.5, 30.0, 2.0);
        assert!(engine().infer(&inputs).is_err());

        let config = EngineConfig {
            fuzzification: FuzzificationMode::Interpolate,
            ..EngineConfig::default()
        };
        let engine = InferenceEngine::new(FuzzySystem::ventilation().unwrap(), config);
        let crisp = engine.infer_crisp(&inputs).unwrap();
        assert!(crisp > 0.0 && crisp < 50.0);
    }

    #[test]
    fn test_missing_input() {
        let inputs = Inputs::new().with("temperature", 20.0).with("humidity", 40.0);

        assert!(matches!(
            engine().infer(&inputs),
            Err(FuzzyError::MissingInput(name)) if name == "occupancy"
        ));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let engine = engine();
        let scenarios = vec![
            scenario(18.0, 30.0, 2.0),
            scenario(32.0, 75.0, 9.0),
            scenario(18.0, 300.0, 2.0),
            scenario(35.0, 90.0, 7.0),
        ];

        let batch = engine.infer_batch(&scenarios);

        assert_eq!(batch.len(), 4);
        assert!(batch[2].is_err());
        for (inputs, result) in scenarios.iter().zip(&batch) {
            if let Ok(inference) = result {
                assert_eq!(inference.crisp, engine.infer_crisp(inputs).unwrap());
            }
        }
    }

    #[test]
    fn test_snapshot() {
        let engine = engine();
        let inference = engine.infer(&scenario(35.0, 90.0, 7.0)).unwrap();
        let snapshot = engine.snapshot(&inference);

        assert_eq!(snapshot.variable, "ventilation");
        assert_eq!(snapshot.universe.len(), 101);
        assert_eq!(
            snapshot.terms.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            vec!["low", "mid", "high"]
        );
        assert_eq!(snapshot.aggregated, inference.aggregated);
        assert_eq!(snapshot.crisp, inference.crisp);

        let json = snapshot.to_json().unwrap();
        let parsed: OutputSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.terms.len(), 3);
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = std::sync::Arc::new(engine());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let engine = std::sync::Arc::clone(&engine);
                std::thread::spawn(move || engine.infer_crisp(&scenario(18.0 + i as f64, 30.0, 2.0)))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
    }
}
