use crate::cli::BatchArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use glyconv::core::io::batch::{read_parameter_sets, write_results};
use glyconv::core::model::ConversionModel;
use glyconv::core::inputs::parameter_set::ParameterSet;
use glyconv::engine::error::EngineError;
use glyconv::engine::progress::ProgressReporter;
use glyconv::workflows::evaluate::{self, BatchSummary};
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::{info, warn};

pub fn run(args: BatchArgs) -> Result<()> {
    let table = config::load_table(args.table.as_deref(), None)?;
    let model = ConversionModel::new(table).map_err(EngineError::from)?;

    info!("Reading parameter sets from {:?}", &args.input);
    let mut sets = read_parameter_sets(&args.input).map_err(EngineError::from)?;
    if sets.is_empty() {
        warn!("Input file {:?} contains no rows.", &args.input);
    }
    if args.fill_optimal {
        let optimum = ParameterSet::at_optimum(model.table());
        sets = sets
            .into_iter()
            .map(|set| {
                let mut filled = optimum.clone();
                filled.extend(set.iter().map(|(name, value)| (name.to_string(), value)));
                filled
            })
            .collect();
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let results = evaluate::run_batch(&model, &sets, &reporter)?;

    match &args.output {
        Some(path) => {
            info!("Writing {} result rows to {:?}", results.len(), path);
            let file = File::create(path).map_err(CliError::Io)?;
            write_results(BufWriter::new(file), model.table(), &results)
                .map_err(EngineError::from)?;
            if let Some(summary) = evaluate::summarize(&results) {
                println!("{}", format_summary(&summary));
            }
            println!("✓ Results written to: {}", path.display());
        }
        None => {
            write_results(io::stdout().lock(), model.table(), &results)
                .map_err(EngineError::from)?;
            if let Some(summary) = evaluate::summarize(&results) {
                eprintln!("{}", format_summary(&summary));
            }
        }
    }
    Ok(())
}

fn format_summary(summary: &BatchSummary) -> String {
    format!(
        "Evaluated {} rows: mean conversion {:.1}% (min {:.1}%, max {:.1}%); {} row(s) with parameters outside their operating window.",
        summary.rows,
        summary.mean_conversion,
        summary.min_conversion,
        summary.max_conversion,
        summary.rows_out_of_window
    )
}
