//! # Workflows Module
//!
//! Entry points for callers of the library. A front end builds a [`ConversionModel`]
//! from a parameter table, assembles parameter sets, and hands them to one of:
//!
//! - [`evaluate::run`] - a single evaluation, logged
//! - [`evaluate::run_batch`] - many evaluations in parallel, with progress reporting
//!
//! [`ConversionModel`]: crate::core::model::ConversionModel

pub mod evaluate;
