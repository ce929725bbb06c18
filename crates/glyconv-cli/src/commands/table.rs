use crate::cli::{TableArgs, TableCommands};
use crate::config;
use crate::error::{CliError, Result};
use crate::report;
use glyconv::core::params::ParameterTable;
use glyconv::engine::error::EngineError;
use std::path::Path;
use tracing::info;

pub fn run(args: TableArgs) -> Result<()> {
    match args.command {
        TableCommands::Show { table } => {
            let table = config::load_table(table.as_deref(), None)?;
            print!("{}", report::render_table(&table));
            Ok(())
        }
        TableCommands::Export { path, force } => {
            export(&path, force)?;
            println!("✓ Built-in parameter table written to: {}", path.display());
            Ok(())
        }
        TableCommands::Check { path } => {
            let table = check(&path)?;
            println!(
                "✓ {} is a valid parameter table ({} parameters).",
                path.display(),
                table.len()
            );
            Ok(())
        }
    }
}

fn export(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "'{}' already exists. Use --force to overwrite.",
            path.display()
        )));
    }
    let text = ParameterTable::glycerol_hydrogenolysis()
        .to_toml()
        .map_err(EngineError::from)?;
    std::fs::write(path, text)?;
    info!("Exported built-in table to {:?}", path);
    Ok(())
}

fn check(path: &Path) -> Result<ParameterTable> {
    let table = ParameterTable::load(path).map_err(EngineError::from)?;
    table.validate().map_err(EngineError::from)?;
    Ok(table)
}
