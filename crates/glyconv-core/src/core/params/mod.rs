//! # Parameter Tables
//!
//! The configuration side of the model: one [`ParameterSpec`] per process parameter
//! plus the [`ModelConstants`] that turn summed impacts into a conversion percentage.
//! Tables are plain data. They are loaded from TOML or taken from the built-in
//! [`ParameterTable::glycerol_hydrogenolysis`] table, then handed to the model,
//! which validates them once at construction.

mod defaults;
pub mod spec;
pub mod table;

pub use defaults::OPERATING_GUIDELINES;
pub use spec::{ParameterGroup, ParameterSpec};
pub use table::{ModelConstants, ParameterTable, SpecError, TableLoadError};
