use glyconv::core::inputs::parameter_set::ParameterSet;
use glyconv::core::params::ParameterTable;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub precision: usize,
}

pub struct AppConfig {
    pub table: ParameterTable,
    pub parameters: ParameterSet,
    pub output: OutputOptions,
}
