use crate::core::model::{ConversionModel, ConversionResult};
use crate::core::inputs::parameter_set::ParameterSet;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchSummary {
    pub rows: usize,
    pub mean_conversion: f64,
    pub min_conversion: f64,
    pub max_conversion: f64,
    /// Rows with at least one parameter outside its operating window.
    pub rows_out_of_window: usize,
}

#[instrument(skip_all, name = "evaluate_workflow")]
pub fn run(model: &ConversionModel, params: &ParameterSet) -> Result<ConversionResult, EngineError> {
    debug!("Evaluating parameter set: {:?}", params);
    let result = model.total_conversion(params)?;
    info!(
        "Predicted conversion {:.2}% (total impact {:.3})",
        result.conversion, result.total_impact
    );
    Ok(result)
}

/// Evaluates every set in parallel. All rows are checked before any is scored, so a
/// bad row aborts the batch without producing partial results.
#[instrument(skip_all, name = "batch_workflow", fields(rows = sets.len()))]
pub fn run_batch(
    model: &ConversionModel,
    sets: &[ParameterSet],
    reporter: &ProgressReporter,
) -> Result<Vec<ConversionResult>, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Validating rows",
    });
    for (index, set) in sets.iter().enumerate() {
        model
            .check(set)
            .map_err(|source| EngineError::BatchRow {
                row: index + 1,
                source,
            })?;
    }
    reporter.report(Progress::PhaseFinish);
    info!("All {} rows passed validation.", sets.len());

    reporter.report(Progress::BatchStart {
        total_rows: sets.len() as u64,
    });
    let results = sets
        .par_iter()
        .enumerate()
        .map(|(index, set)| {
            let result = model
                .total_conversion(set)
                .map_err(|source| EngineError::BatchRow {
                    row: index + 1,
                    source,
                });
            reporter.report(Progress::RowEvaluated);
            result
        })
        .collect::<Result<Vec<_>, _>>()?;
    reporter.report(Progress::BatchFinish);

    info!("Batch evaluation finished for {} rows.", results.len());
    Ok(results)
}

pub fn summarize(results: &[ConversionResult]) -> Option<BatchSummary> {
    if results.is_empty() {
        return None;
    }
    let conversions = results.iter().map(|r| r.conversion);
    let sum: f64 = conversions.clone().sum();
    Some(BatchSummary {
        rows: results.len(),
        mean_conversion: sum / results.len() as f64,
        min_conversion: conversions.clone().fold(f64::INFINITY, f64::min),
        max_conversion: conversions.fold(f64::NEG_INFINITY, f64::max),
        rows_out_of_window: results
            .iter()
            .filter(|r| r.breakdown.iter().any(|e| !e.in_range))
            .count(),
    })
}
