//! # Inference Core
//!
//! The per-invocation half of the ventilation controller. This crate takes a
//! validated `fuzzy_model::FuzzySystem` and turns crisp observations into a
//! crisp output, one stage at a time:
//!
//! 1. **fuzzify**: Look up every term degree for each crisp input
//! 2. **evaluate**: Combine antecedent degrees into rule firing strengths
//! 3. **aggregate**: Clip each consequent set and merge with pointwise max
//! 4. **defuzzify**: Reduce the aggregate to its centroid
//!
//! The **engine** module wires the stages together. Nothing here keeps state
//! between invocations, so one engine can serve any number of threads.

pub mod aggregate;
pub mod defuzzify;
pub mod engine;
pub mod evaluate;
pub mod fuzzify;

pub use aggregate::*;
pub use defuzzify::*;
pub use engine::*;
pub use evaluate::*;
pub use fuzzify::*;
