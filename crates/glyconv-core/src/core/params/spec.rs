use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterGroup {
    Temperature,
    Process,
    PressurePh,
}

impl ParameterGroup {
    pub const ALL: [ParameterGroup; 3] = [
        ParameterGroup::Temperature,
        ParameterGroup::Process,
        ParameterGroup::PressurePh,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ParameterGroup::Temperature => "Temperature Impacts",
            ParameterGroup::Process => "Process Parameters",
            ParameterGroup::PressurePh => "Pressure & pH",
        }
    }
}

impl fmt::Display for ParameterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParameterGroup::Temperature => "temperature",
            ParameterGroup::Process => "process",
            ParameterGroup::PressurePh => "pressure-ph",
        };
        f.write_str(s)
    }
}

/// Operating window and impact coefficients for one process parameter.
///
/// `weight` is carried as documentation of the parameter's relative importance;
/// the impact formula reads only `sensitivity` and `base_impact`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSpec {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub group: ParameterGroup,
    pub min: f64,
    pub max: f64,
    pub optimal: f64,
    pub weight: f64,
    pub sensitivity: f64,
    pub base_impact: f64,
}

impl ParameterSpec {
    #[inline]
    pub fn range_size(&self) -> f64 {
        self.max - self.min
    }

    /// Inclusive on both bounds: a value sitting exactly on `min` or `max` is in range.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
