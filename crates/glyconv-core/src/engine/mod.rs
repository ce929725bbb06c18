//! # Engine Module
//!
//! Shared plumbing for the workflows: the aggregate [`error::EngineError`] and the
//! [`progress::ProgressReporter`] callback used to surface batch progress to a front end.

pub mod error;
pub mod progress;
