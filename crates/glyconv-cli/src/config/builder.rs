use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, OutputFormat, OutputOptions};
use crate::cli::EvaluateArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use glyconv::core::inputs::parameter_set::ParameterSet;
use glyconv::core::params::ParameterTable;
use glyconv::engine::error::EngineError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn build_config(args: &EvaluateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let table = load_table(args.table.as_deref(), file_config.table_path.as_deref())?;

    let mut parameters = ParameterSet::at_optimum(&table);
    if let Some(file_parameters) = file_config.parameters.take() {
        debug!("Applying {} parameter values from config file.", file_parameters.len());
        parameters.extend(file_parameters);
    }
    for assignment in &args.params {
        let (name, value) = parser::parse_parameter_assignment(assignment)?;
        debug!("Command-line override: {} = {}", name, value);
        parameters.set(name, value);
    }

    let output_file = file_config.output.take().unwrap_or_default();
    let format = if args.json {
        OutputFormat::Json
    } else {
        output_file.format.unwrap_or(defaults.output_format)
    };
    let precision = args
        .precision
        .or(output_file.precision)
        .unwrap_or(defaults.precision);

    Ok(AppConfig {
        table,
        parameters,
        output: OutputOptions { format, precision },
    })
}

/// Resolves the parameter table: an explicit path wins over the config file's, and the
/// built-in glycerol table is used when neither is given.
pub fn load_table(cli_path: Option<&Path>, file_path: Option<&Path>) -> Result<ParameterTable> {
    match cli_path.or(file_path) {
        Some(path) => {
            info!("Loading parameter table from {:?}", path);
            Ok(ParameterTable::load(path).map_err(EngineError::from)?)
        }
        None => {
            debug!("Using the built-in glycerol hydrogenolysis table.");
            Ok(ParameterTable::glycerol_hydrogenolysis())
        }
    }
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = parser::split_assignment(kv_pair).map_err(|_| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;

        match key {
            "table-path" => {
                config.table_path = Some(PathBuf::from(value_str));
            }
            "output.format" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .format = Some(value_str.parse().map_err(|e| {
                    CliError::Config(format!("Invalid value for {}: {}", key, e))
                })?);
            }
            "output.precision" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .precision = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            _ => match key.strip_prefix("parameters.") {
                Some(name) if !name.is_empty() => {
                    let value = parser::parse_finite(name, value_str)?;
                    config
                        .parameters
                        .get_or_insert_with(Default::default)
                        .insert(name.to_string(), value);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            },
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn base_evaluate_args() -> EvaluateArgs {
        EvaluateArgs {
            config: None,
            table: None,
            params: vec![],
            json: false,
            precision: None,
            set_values: vec![],
        }
    }

    const SMALL_TABLE: &str = r#"
        [[parameter]]
        name = "x"
        label = "X"
        group = "process"
        min = 0.0
        max = 10.0
        optimal = 4.0
        weight = 1.0
        sensitivity = 0.5
        base_impact = 10.0
    "#;

    #[test]
    fn defaults_use_builtin_table_at_optimum() {
        let app = build_config(&base_evaluate_args()).unwrap();
        assert_eq!(app.table, ParameterTable::glycerol_hydrogenolysis());
        assert_eq!(app.parameters, ParameterSet::at_optimum(&app.table));
        assert_eq!(app.output.format, DefaultsConfig::default().output_format);
        assert_eq!(app.output.precision, DefaultsConfig::default().precision);
    }

    #[test]
    fn file_values_overlay_optimum() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(
            &cfg_path,
            r#"
            [parameters]
            t2 = 207.0
            lhsv = 0.55

            [output]
            format = "json"
            precision = 2
            "#,
        )
        .unwrap();

        let mut args = base_evaluate_args();
        args.config = Some(cfg_path);
        let app = build_config(&args).unwrap();

        assert_eq!(app.parameters.get("t2"), Some(207.0));
        assert_eq!(app.parameters.get("lhsv"), Some(0.55));
        assert_eq!(app.parameters.get("t3"), Some(200.0));
        assert_eq!(app.output.format, OutputFormat::Json);
        assert_eq!(app.output.precision, 2);
    }

    #[test]
    fn cli_overrides_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(
            &cfg_path,
            "[parameters]\nt2 = 207.0\n[output]\nformat = \"text\"\nprecision = 2\n",
        )
        .unwrap();

        let mut args = base_evaluate_args();
        args.config = Some(cfg_path);
        args.params = vec!["t2=199.5".to_string()];
        args.json = true;
        args.precision = Some(4);
        let app = build_config(&args).unwrap();

        assert_eq!(app.parameters.get("t2"), Some(199.5));
        assert_eq!(app.output.format, OutputFormat::Json);
        assert_eq!(app.output.precision, 4);
    }

    #[test]
    fn set_values_override_file() {
        let mut args = base_evaluate_args();
        args.set_values = vec![
            "parameters.feed_ph=6.2".to_string(),
            "output.format=json".to_string(),
            "output.precision=3".to_string(),
        ];
        let app = build_config(&args).unwrap();

        assert_eq!(app.parameters.get("feed_ph"), Some(6.2));
        assert_eq!(app.output.format, OutputFormat::Json);
        assert_eq!(app.output.precision, 3);
    }

    #[test]
    fn set_values_reject_unknown_keys_and_bad_values() {
        let mut args = base_evaluate_args();
        args.set_values = vec!["optimization.max-iterations=5".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        args.set_values = vec!["output.precision=many".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        args.set_values = vec!["output.format=yaml".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        args.set_values = vec!["parameters.t2=warm".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Argument(_))));

        args.set_values = vec!["no-equals".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn invalid_param_assignment_is_an_argument_error() {
        let mut args = base_evaluate_args();
        args.params = vec!["t2".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Argument(_))));
    }

    #[test]
    fn table_from_file_config_is_resolved_relative_to_it() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("small.toml"), SMALL_TABLE).unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(&cfg_path, "table-path = \"small.toml\"\n").unwrap();

        let mut args = base_evaluate_args();
        args.config = Some(cfg_path);
        let app = build_config(&args).unwrap();

        assert_eq!(app.table.len(), 1);
        assert_eq!(app.parameters.get("x"), Some(4.0));
        assert_eq!(app.parameters.len(), 1);
    }

    #[test]
    fn cli_table_wins_over_file_table() {
        let dir = tempdir().unwrap();
        let small = dir.path().join("small.toml");
        fs::write(&small, SMALL_TABLE).unwrap();

        let table = load_table(Some(&small), Some(Path::new("/does/not/exist.toml"))).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_table_file_surfaces_core_error() {
        let result = load_table(Some(Path::new("/does/not/exist.toml")), None);
        assert!(matches!(
            result,
            Err(CliError::Core(EngineError::TableLoad(_)))
        ));
    }
}
