//! Defuzzification - reducing the aggregated output set to a crisp value.

use fuzzy_model::Universe;

/// Centroid (center of gravity) of an aggregated set.
///
/// `sum(x_i * mu_i) / sum(mu_i)` over the universe samples. When the area is
/// exactly zero, meaning no rule contributed anything, the result is `0.0`.
///
/// `aggregated` must be aligned with `universe` (same length), as produced by
/// [`crate::aggregate`]. Debug builds assert this; release builds only use
/// the overlapping prefix.
pub fn defuzzify(aggregated: &[f64], universe: &Universe) -> f64 {
    debug_assert_eq!(aggregated.len(), universe.len());

    let (moment, area) = universe
        .iter()
        .zip(aggregated)
        .fold((0.0, 0.0), |(moment, area), (x, mu)| {
            (moment + x * mu, area + mu)
        });

    if area == 0.0 {
        0.0
    } else {
        moment / area
    }
}
