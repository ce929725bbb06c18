//! # Core Module
//!
//! Stateless building blocks of the conversion model: parameter tables, caller-supplied
//! parameter sets, the impact-scoring math, and CSV exchange for batch evaluation.
//!
//! ## Architecture
//!
//! - **Configuration** ([`params`]) - Parameter specifications, model constants, table loading
//! - **Inputs** ([`inputs`]) - Parameter sets supplied for one evaluation
//! - **Scoring** ([`model`]) - Smooth transition, per-parameter impact, total conversion
//! - **File I/O** ([`io`]) - Reading parameter sets from CSV and writing results back
//!
//! Nothing in this layer holds mutable state; a validated table plus a parameter set
//! fully determines every result.

pub mod inputs;
pub mod io;
pub mod model;
pub mod params;
