//! Caller-side data handed to the model for evaluation.

pub mod parameter_set;
