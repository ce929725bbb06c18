use crate::cli::EvaluateArgs;
use crate::config::{self, OutputFormat};
use crate::error::Result;
use crate::report;
use glyconv::core::model::ConversionModel;
use glyconv::engine::error::EngineError;
use glyconv::workflows;
use tracing::{info, warn};

pub fn run(args: EvaluateArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app = config::build_config(&args)?;

    let model = ConversionModel::new(app.table).map_err(EngineError::from)?;
    info!(
        "Model ready with {} parameters; evaluating.",
        model.table().len()
    );

    let result = workflows::evaluate::run(&model, &app.parameters)?;

    let out_of_window: Vec<_> = result
        .breakdown
        .iter()
        .filter(|entry| !entry.in_range)
        .map(|entry| entry.name.as_str())
        .collect();
    if !out_of_window.is_empty() {
        warn!(
            "Parameters outside their operating window: {}",
            out_of_window.join(", ")
        );
    }

    let rendered = match app.output.format {
        OutputFormat::Text => report::render_text(&result, model.table(), app.output.precision),
        OutputFormat::Json => report::render_json(&result)?,
    };
    print!("{}", rendered);
    if app.output.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
