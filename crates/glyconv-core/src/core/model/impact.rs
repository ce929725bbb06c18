use super::transition::smooth_transition;
use crate::core::params::ParameterSpec;

pub const DEFAULT_MAX_BOUNDARY_PENALTY: f64 = 0.2;

/// Distance from the optimum as a fraction of the operating window width.
#[inline]
pub fn normalized_distance(value: f64, spec: &ParameterSpec) -> f64 {
    (value - spec.optimal).abs() / spec.range_size()
}

/// Multiplier applied to values outside `[min, max]`. Grows linearly with the
/// normalized distance and saturates at `1 - max_penalty` once that distance reaches 1.
#[inline]
pub fn boundary_penalty_factor(normalized_distance: f64, max_penalty: f64) -> f64 {
    let excess = normalized_distance.min(1.0);
    1.0 - max_penalty * excess
}

/// Contribution of one parameter, in percentage points, using the reference 20% cap
/// on the out-of-window penalty.
///
/// `spec` must have `max > min`; the model guarantees this by validating its table.
pub fn parameter_impact(value: f64, spec: &ParameterSpec) -> f64 {
    parameter_impact_with_penalty(value, spec, DEFAULT_MAX_BOUNDARY_PENALTY)
}

pub fn parameter_impact_with_penalty(value: f64, spec: &ParameterSpec, max_penalty: f64) -> f64 {
    let distance = normalized_distance(value, spec);
    let base_effect = smooth_transition(distance, 0.0, 1.0 / spec.sensitivity);
    let impact = spec.base_impact * base_effect;

    if spec.contains(value) {
        impact
    } else {
        impact * boundary_penalty_factor(distance, max_penalty)
    }
}
