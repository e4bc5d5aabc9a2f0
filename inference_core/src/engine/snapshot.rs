//! Serializable view of one inference for chart rendering.

use serde::{Deserialize, Serialize};

/// One output term's membership curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermCurve {
    pub name: String,
    pub membership: Vec<f64>,
}

/// Everything a chart of the output side needs: the universe, each term's
/// curve, the aggregated set and the crisp centroid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSnapshot {
    pub variable: String,
    pub universe: Vec<f64>,
    pub terms: Vec<TermCurve>,
    pub aggregated: Vec<f64>,
    pub crisp: f64,
}

impl OutputSnapshot {
    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
