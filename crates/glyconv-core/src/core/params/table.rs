use super::spec::ParameterSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConstants {
    pub baseline_conversion: f64,
    pub max_boundary_penalty: f64,
    pub conversion_floor: f64,
    pub conversion_ceiling: f64,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            baseline_conversion: 60.0,
            max_boundary_penalty: 0.2,
            conversion_floor: 0.0,
            conversion_ceiling: 100.0,
        }
    }
}

impl ModelConstants {
    fn validate(&self) -> Result<(), SpecError> {
        for (field, value) in [
            ("baseline_conversion", self.baseline_conversion),
            ("max_boundary_penalty", self.max_boundary_penalty),
            ("conversion_floor", self.conversion_floor),
            ("conversion_ceiling", self.conversion_ceiling),
        ] {
            if !value.is_finite() {
                return Err(SpecError::NonFinite {
                    name: "model".to_string(),
                    field,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.max_boundary_penalty) {
            return Err(SpecError::InvalidBoundaryPenalty(self.max_boundary_penalty));
        }
        if self.conversion_floor >= self.conversion_ceiling {
            return Err(SpecError::InvalidConversionBounds {
                floor: self.conversion_floor,
                ceiling: self.conversion_ceiling,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterTable {
    #[serde(default)]
    pub model: ModelConstants,
    #[serde(rename = "parameter", default)]
    pub parameters: Vec<ParameterSpec>,
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum SpecError {
    #[error("Parameter table contains no parameters")]
    EmptyTable,
    #[error("Parameter name must not be empty")]
    EmptyName,
    #[error("Parameter '{0}' is defined more than once")]
    DuplicateParameter(String),
    #[error("Field '{field}' of '{name}' is not a finite number")]
    NonFinite { name: String, field: &'static str },
    #[error("Parameter '{name}' has an invalid operating window (min = {min}, max = {max})")]
    InvalidRange { name: String, min: f64, max: f64 },
    #[error("Parameter '{name}' has non-positive sensitivity {sensitivity}")]
    NonPositiveSensitivity { name: String, sensitivity: f64 },
    #[error("Parameter '{name}' has sensitivity {sensitivity} too small to invert")]
    DegenerateSensitivity { name: String, sensitivity: f64 },
    #[error("Parameter '{name}' has negative base impact {base_impact}")]
    NegativeBaseImpact { name: String, base_impact: f64 },
    #[error("Maximum boundary penalty {0} must lie within [0, 1]")]
    InvalidBoundaryPenalty(f64),
    #[error("Conversion floor {floor} must be below ceiling {ceiling}")]
    InvalidConversionBounds { floor: f64, ceiling: f64 },
}

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ParameterTable {
    pub fn new(parameters: Vec<ParameterSpec>, model: ModelConstants) -> Self {
        Self { model, parameters }
    }

    pub fn load(path: &Path) -> Result<Self, TableLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TableLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let table = Self::from_toml_str(&content).map_err(|e| TableLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        debug!(
            "Loaded parameter table with {} entries from {:?}",
            table.len(),
            path
        );
        Ok(table)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, TableLoadError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        if self.parameters.is_empty() {
            return Err(SpecError::EmptyTable);
        }
        self.model.validate()?;

        let mut seen = HashSet::with_capacity(self.parameters.len());
        for spec in &self.parameters {
            if spec.name.trim().is_empty() {
                return Err(SpecError::EmptyName);
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(SpecError::DuplicateParameter(spec.name.clone()));
            }
            validate_spec(spec)?;
            if !spec.contains(spec.optimal) {
                warn!(
                    "Optimal value {} of '{}' lies outside its operating window [{}, {}]",
                    spec.optimal, spec.name, spec.min, spec.max
                );
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|spec| spec.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.parameters.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|spec| spec.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

fn validate_spec(spec: &ParameterSpec) -> Result<(), SpecError> {
    for (field, value) in [
        ("min", spec.min),
        ("max", spec.max),
        ("optimal", spec.optimal),
        ("weight", spec.weight),
        ("sensitivity", spec.sensitivity),
        ("base_impact", spec.base_impact),
    ] {
        if !value.is_finite() {
            return Err(SpecError::NonFinite {
                name: spec.name.clone(),
                field,
            });
        }
    }
    // Width and inverse sensitivity feed the impact formula; either overflowing yields NaN.
    if spec.max <= spec.min || !spec.range_size().is_finite() {
        return Err(SpecError::InvalidRange {
            name: spec.name.clone(),
            min: spec.min,
            max: spec.max,
        });
    }
    if spec.sensitivity <= 0.0 {
        return Err(SpecError::NonPositiveSensitivity {
            name: spec.name.clone(),
            sensitivity: spec.sensitivity,
        });
    }
    if !spec.sensitivity.recip().is_finite() {
        return Err(SpecError::DegenerateSensitivity {
            name: spec.name.clone(),
            sensitivity: spec.sensitivity,
        });
    }
    if spec.base_impact < 0.0 {
        return Err(SpecError::NegativeBaseImpact {
            name: spec.name.clone(),
            base_impact: spec.base_impact,
        });
    }
    Ok(())
}
