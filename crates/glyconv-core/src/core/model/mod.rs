//! # Conversion Model
//!
//! The impact-scoring model. Each parameter contributes a sigmoid-smoothed share of its
//! base impact, decaying with normalized distance from its optimum and penalized a little
//! further when it leaves its operating window. Contributions are independent and summed
//! on top of a fixed baseline, then clamped into a percentage.
//!
//! - [`transition`] - the logistic smoothing function
//! - [`impact`] - per-parameter impact and boundary penalty
//! - [`conversion`] - [`ConversionModel`] and its result types

pub mod conversion;
pub mod impact;
pub mod transition;

pub use conversion::{
    ConversionModel, ConversionResult, DerivedAggregates, EvaluationError, ImpactBreakdown,
    ParameterImpact,
};
pub use impact::{parameter_impact, parameter_impact_with_penalty};
pub use transition::smooth_transition;
