//! CSV exchange of parameter sets and evaluation results for batch runs.

pub mod batch;
