use crate::error::Result;
use glyconv::core::model::ConversionResult;
use glyconv::core::params::{OPERATING_GUIDELINES, ParameterGroup, ParameterSpec, ParameterTable};
use std::fmt::Write;

pub fn render_json(result: &ConversionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result).map_err(anyhow::Error::from)?)
}

pub fn render_text(result: &ConversionResult, table: &ParameterTable, precision: usize) -> String {
    let mut out = String::new();
    let p = precision;

    let _ = writeln!(out, "Predicted Glycerol Conversion: {:.p$}%", result.conversion);
    let _ = writeln!(out);
    let _ = writeln!(out, "Parameter Contributions");

    for group in ParameterGroup::ALL {
        let mut entries = result.breakdown.by_group(group).peekable();
        if entries.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, "  {}", group.title());
        for entry in entries {
            let _ = write!(out, "    {}: +{:.p$}%", entry.label, entry.impact);
            if !entry.in_range {
                if let Some(spec) = table.get(&entry.name) {
                    let _ = write!(out, "  (outside {})", operating_window(spec));
                }
            }
            let _ = writeln!(out);
        }
    }

    let derived = &result.derived;
    if derived.average_temperature.is_some() || derived.pressure_differential.is_some() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Derived Values");
        let temperature_unit = unit_of_group(table, ParameterGroup::Temperature);
        if let Some(avg) = derived.average_temperature {
            let _ = writeln!(out, "  Average temperature: {:.p$}{}", avg, temperature_unit);
        }
        if let Some(range) = derived.temperature_range {
            let _ = writeln!(out, "  Temperature range: {:.p$}{}", range, temperature_unit);
        }
        if let Some(diff) = derived.pressure_differential {
            let pressure_unit = table
                .get(glyconv::core::model::conversion::TOP_PRESSURE)
                .map(suffix)
                .unwrap_or_default();
            let _ = writeln!(out, "  Pressure differential: {:.p$}{}", diff, pressure_unit);
        }
    }

    if uses_glycerol_layout(table) {
        let _ = writeln!(out);
        let _ = writeln!(out, "Operating Guidelines");
        for line in OPERATING_GUIDELINES {
            let _ = writeln!(out, "  - {}", line);
        }
    }

    out
}

pub fn render_table(table: &ParameterTable) -> String {
    let mut out = String::new();
    let constants = &table.model;
    let _ = writeln!(
        out,
        "Baseline conversion {}%, boundary penalty up to {}%, clamped to [{}, {}]",
        constants.baseline_conversion,
        constants.max_boundary_penalty * 100.0,
        constants.conversion_floor,
        constants.conversion_ceiling
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<16} {:<16} {:<12} {:>9} {:>9} {:>9} {:>7} {:>12} {:>7}",
        "NAME", "LABEL", "GROUP", "MIN", "MAX", "OPTIMAL", "WEIGHT", "SENSITIVITY", "IMPACT"
    );
    for spec in table.iter() {
        let _ = writeln!(
            out,
            "{:<16} {:<16} {:<12} {:>9} {:>9} {:>9} {:>7} {:>12} {:>7}",
            spec.name,
            spec.label,
            spec.group.to_string(),
            spec.min,
            spec.max,
            spec.optimal,
            spec.weight,
            spec.sensitivity,
            spec.base_impact
        );
    }
    out
}

fn operating_window(spec: &ParameterSpec) -> String {
    format!("{}-{}{}", spec.min, spec.max, suffix(spec))
}

fn suffix(spec: &ParameterSpec) -> String {
    spec.unit
        .as_deref()
        .map(|unit| format!(" {}", unit))
        .unwrap_or_default()
}

fn unit_of_group(table: &ParameterTable, group: ParameterGroup) -> String {
    table
        .iter()
        .find(|spec| spec.group == group)
        .map(suffix)
        .unwrap_or_default()
}

fn uses_glycerol_layout(table: &ParameterTable) -> bool {
    let builtin = ParameterTable::glycerol_hydrogenolysis();
    table.names().eq(builtin.names())
}
