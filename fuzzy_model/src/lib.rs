//! # Fuzzy Model
//!
//! The static side of the ventilation controller - universes of discourse,
//! membership functions, linguistic variables and the rule base.
//! Everything in this crate is built once at startup and shared read-only by
//! every inference; it contains no per-invocation logic.
//!
//! ## Core Components
//!
//! - **universe**: Discretized, strictly increasing sample domains
//! - **membership**: Triangular, Gaussian and sigmoidal membership shapes
//! - **variable**: Named fuzzy sets over a universe
//! - **rules**: Antecedents, connectives and the validated rule base
//! - **config**: TOML configuration surface and the built-in ventilation domain

pub mod config;
pub mod error;
pub mod membership;
pub mod rules;
pub mod system;
pub mod universe;
pub mod variable;

pub use config::*;
pub use error::*;
pub use membership::*;
pub use rules::*;
pub use system::*;
pub use universe::*;
pub use variable::*;
