//! # glyconv
//!
//! Predicts glycerol hydrogenolysis conversion from twelve reactor operating parameters
//! with a weighted, sigmoid-smoothed deviation-from-optimum model, and reports how much
//! each parameter contributed.
//!
//! ## Layers
//!
//! - **[`core`]: The Foundation.** Parameter tables, parameter sets, the impact-scoring
//!   math ([`core::model`]) and CSV batch I/O. Pure and stateless.
//!
//! - **[`engine`]: Shared Plumbing.** The aggregate error type and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Single and batch evaluation entry points used by
//!   front ends such as the `glyconv` command-line tool.
//!
//! ```
//! use glyconv::core::model::ConversionModel;
//! use glyconv::core::inputs::parameter_set::ParameterSet;
//! use glyconv::core::params::ParameterTable;
//!
//! let model = ConversionModel::new(ParameterTable::glycerol_hydrogenolysis()).unwrap();
//! let params = ParameterSet::at_optimum(model.table()).with("t2", 203.0);
//! let result = model.total_conversion(&params).unwrap();
//! assert!((0.0..=100.0).contains(&result.conversion));
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
