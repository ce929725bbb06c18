use super::spec::{ParameterGroup, ParameterSpec};
use super::table::{ModelConstants, ParameterTable};

struct Entry {
    name: &'static str,
    label: &'static str,
    unit: Option<&'static str>,
    group: ParameterGroup,
    min: f64,
    max: f64,
    optimal: f64,
    weight: f64,
    sensitivity: f64,
    base_impact: f64,
}

// Expert-supplied coefficients for the trickle-bed glycerol hydrogenolysis reactor.
const GLYCEROL_HYDROGENOLYSIS: [Entry; 12] = [
    Entry {
        name: "t2",
        label: "T2",
        unit: Some("°C"),
        group: ParameterGroup::Temperature,
        min: 195.0,
        max: 205.0,
        optimal: 200.0,
        weight: 0.27,
        sensitivity: 0.217985,
        base_impact: 30.0,
    },
    Entry {
        name: "t3",
        label: "T3",
        unit: Some("°C"),
        group: ParameterGroup::Temperature,
        min: 195.0,
        max: 205.0,
        optimal: 200.0,
        weight: 0.25,
        sensitivity: 0.136957,
        base_impact: 25.0,
    },
    Entry {
        name: "t4",
        label: "T4",
        unit: Some("°C"),
        group: ParameterGroup::Temperature,
        min: 195.0,
        max: 205.0,
        optimal: 200.0,
        weight: 0.40,
        sensitivity: 0.181967,
        base_impact: 25.0,
    },
    Entry {
        name: "t1",
        label: "T1",
        unit: Some("°C"),
        group: ParameterGroup::Temperature,
        min: 190.0,
        max: 200.0,
        optimal: 195.0,
        weight: 0.10,
        sensitivity: 0.069769,
        base_impact: 10.0,
    },
    Entry {
        name: "t5",
        label: "T5",
        unit: Some("°C"),
        group: ParameterGroup::Temperature,
        min: 190.0,
        max: 200.0,
        optimal: 195.0,
        weight: 0.05,
        sensitivity: 0.003058,
        base_impact: 10.0,
    },
    Entry {
        name: "lhsv",
        label: "LHSV",
        unit: Some("1/h"),
        group: ParameterGroup::Process,
        min: 0.5,
        max: 0.7,
        optimal: 0.6,
        weight: 0.05,
        sensitivity: 0.016678,
        base_impact: 5.0,
    },
    Entry {
        name: "h2gly_ratio",
        label: "H2:GLY Ratio",
        unit: None,
        group: ParameterGroup::Process,
        min: 6.0,
        max: 7.0,
        optimal: 6.5,
        weight: 0.05,
        sensitivity: 0.004925,
        base_impact: 5.0,
    },
    Entry {
        name: "liquid_feed",
        label: "Liquid Feed",
        unit: Some("g/h"),
        group: ParameterGroup::Process,
        min: 50.0,
        max: 150.0,
        optimal: 100.0,
        weight: 0.05,
        sensitivity: 0.000073,
        base_impact: 5.0,
    },
    Entry {
        name: "hydrogen_flow",
        label: "Hydrogen Flow",
        unit: Some("mL/min"),
        group: ParameterGroup::Process,
        min: 300.0,
        max: 600.0,
        optimal: 450.0,
        weight: 0.05,
        sensitivity: 0.000058,
        base_impact: 5.0,
    },
    Entry {
        name: "top_pressure",
        label: "Top Pressure",
        unit: Some("bar"),
        group: ParameterGroup::PressurePh,
        min: 20.0,
        max: 40.0,
        optimal: 30.0,
        weight: 0.05,
        sensitivity: 0.003176,
        base_impact: 5.0,
    },
    Entry {
        name: "bottom_pressure",
        label: "Bottom Pressure",
        unit: Some("bar"),
        group: ParameterGroup::PressurePh,
        min: 15.0,
        max: 35.0,
        optimal: 25.0,
        weight: 0.05,
        sensitivity: 0.001230,
        base_impact: 5.0,
    },
    Entry {
        name: "feed_ph",
        label: "Feed pH",
        unit: None,
        group: ParameterGroup::PressurePh,
        min: 6.0,
        max: 8.0,
        optimal: 7.0,
        weight: 0.05,
        sensitivity: 0.010348,
        base_impact: 5.0,
    },
];

pub const OPERATING_GUIDELINES: [&str; 4] = [
    "Maintain T2-T4 within 195-205°C for optimal conversion",
    "Keep pressure differential balanced for system stability",
    "Monitor pH within optimal range of 6-8",
    "Maintain proper H2:GLY ratio for reaction efficiency",
];

impl ParameterTable {
    /// The twelve-parameter table for glycerol hydrogenolysis, with the reference
    /// model constants (60% baseline, 20% maximum boundary penalty, clamp to [0, 100]).
    pub fn glycerol_hydrogenolysis() -> Self {
        let parameters = GLYCEROL_HYDROGENOLYSIS
            .iter()
            .map(|e| ParameterSpec {
                name: e.name.to_string(),
                label: e.label.to_string(),
                unit: e.unit.map(str::to_string),
                group: e.group,
                min: e.min,
                max: e.max,
                optimal: e.optimal,
                weight: e.weight,
                sensitivity: e.sensitivity,
                base_impact: e.base_impact,
            })
            .collect();
        ParameterTable::new(parameters, ModelConstants::default())
    }
}
