use super::impact::parameter_impact_with_penalty;
use crate::core::inputs::parameter_set::ParameterSet;
use crate::core::params::{ParameterGroup, ParameterTable, SpecError};
use serde::Serialize;
use thiserror::Error;
use tracing::trace;

pub const TOP_PRESSURE: &str = "top_pressure";
pub const BOTTOM_PRESSURE: &str = "bottom_pressure";

#[derive(Debug, Error, PartialEq, Clone)]
pub enum EvaluationError {
    #[error("Missing required parameter '{0}'")]
    MissingParameter(String),
    #[error("Unknown parameter '{0}' is not part of the parameter table")]
    UnknownParameter(String),
    #[error("Parameter '{name}' has non-finite value {value}")]
    NonFiniteValue { name: String, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterImpact {
    pub name: String,
    pub label: String,
    pub group: ParameterGroup,
    pub value: f64,
    pub impact: f64,
    pub in_range: bool,
}

/// Per-parameter contributions, in table order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ImpactBreakdown {
    entries: Vec<ParameterImpact>,
}

impl ImpactBreakdown {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entry(name).map(|e| e.impact)
    }

    pub fn entry(&self, name: &str) -> Option<&ParameterImpact> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterImpact> {
        self.entries.iter()
    }

    pub fn by_group(&self, group: ParameterGroup) -> impl Iterator<Item = &ParameterImpact> {
        self.entries.iter().filter(move |e| e.group == group)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.impact).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Aggregates reported alongside the conversion. None of them feed the conversion itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DerivedAggregates {
    pub average_temperature: Option<f64>,
    pub temperature_range: Option<f64>,
    pub pressure_differential: Option<f64>,
}

impl DerivedAggregates {
    fn compute(table: &ParameterTable, params: &ParameterSet) -> Self {
        let temperatures: Vec<f64> = table
            .iter()
            .filter(|spec| spec.group == ParameterGroup::Temperature)
            .filter_map(|spec| params.get(&spec.name))
            .collect();

        let (average_temperature, temperature_range) = if temperatures.is_empty() {
            (None, None)
        } else {
            let sum: f64 = temperatures.iter().sum();
            let hottest = temperatures.iter().copied().fold(f64::MIN, f64::max);
            let coldest = temperatures.iter().copied().fold(f64::MAX, f64::min);
            (
                Some(sum / temperatures.len() as f64),
                Some(hottest - coldest),
            )
        };

        let pressure_differential = match (
            table.get(TOP_PRESSURE).and(params.get(TOP_PRESSURE)),
            table.get(BOTTOM_PRESSURE).and(params.get(BOTTOM_PRESSURE)),
        ) {
            (Some(top), Some(bottom)) => Some(top - bottom),
            _ => None,
        };

        Self {
            average_temperature,
            temperature_range,
            pressure_differential,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    /// Predicted conversion in percent, clamped to the table's floor and ceiling.
    pub conversion: f64,
    /// Sum of all impacts before the baseline is added and the clamp applied.
    pub total_impact: f64,
    pub breakdown: ImpactBreakdown,
    pub derived: DerivedAggregates,
}

/// Maps a complete parameter set to a predicted conversion and its per-parameter breakdown.
///
/// The model owns an immutable, validated [`ParameterTable`]; evaluation is pure, so one
/// model can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct ConversionModel {
    table: ParameterTable,
}

impl ConversionModel {
    pub fn new(table: ParameterTable) -> Result<Self, SpecError> {
        table.validate()?;
        Ok(Self { table })
    }

    pub fn table(&self) -> &ParameterTable {
        &self.table
    }

    /// Impact of a single named parameter, or `None` if the table has no such entry.
    pub fn impact_of(&self, name: &str, value: f64) -> Option<f64> {
        self.table.get(name).map(|spec| {
            parameter_impact_with_penalty(value, spec, self.table.model.max_boundary_penalty)
        })
    }

    /// Verifies that `params` names exactly the table's parameters, each with a finite value.
    pub fn check(&self, params: &ParameterSet) -> Result<(), EvaluationError> {
        for spec in self.table.iter() {
            let value = params
                .get(&spec.name)
                .ok_or_else(|| EvaluationError::MissingParameter(spec.name.clone()))?;
            if !value.is_finite() {
                return Err(EvaluationError::NonFiniteValue {
                    name: spec.name.clone(),
                    value,
                });
            }
        }
        if let Some(unknown) = params.names().find(|name| self.table.get(name).is_none()) {
            return Err(EvaluationError::UnknownParameter(unknown.to_string()));
        }
        Ok(())
    }

    pub fn total_conversion(&self, params: &ParameterSet) -> Result<ConversionResult, EvaluationError> {
        self.check(params)?;

        let constants = &self.table.model;
        let mut entries = Vec::with_capacity(self.table.len());
        for spec in self.table.iter() {
            let value = params
                .get(&spec.name)
                .ok_or_else(|| EvaluationError::MissingParameter(spec.name.clone()))?;
            entries.push(ParameterImpact {
                name: spec.name.clone(),
                label: spec.label.clone(),
                group: spec.group,
                value,
                impact: parameter_impact_with_penalty(value, spec, constants.max_boundary_penalty),
                in_range: spec.contains(value),
            });
        }
        let breakdown = ImpactBreakdown { entries };

        let total_impact = breakdown.total();
        let conversion = (constants.baseline_conversion + total_impact)
            .clamp(constants.conversion_floor, constants.conversion_ceiling);
        let derived = DerivedAggregates::compute(&self.table, params);

        trace!(
            "Evaluated {} parameters: total impact {:.4}, conversion {:.4}%",
            breakdown.len(),
            total_impact,
            conversion
        );

        Ok(ConversionResult {
            conversion,
            total_impact,
            breakdown,
            derived,
        })
    }
}
