use super::models::OutputFormat;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    pub precision: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(rename = "table-path")]
    pub table_path: Option<PathBuf>,
    pub parameters: Option<BTreeMap<String, f64>>,
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    /// Parses a config file. A relative `table-path` is resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let mut config: FileConfig =
            toml::from_str(&content).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?;

        if let (Some(table_path), Some(dir)) = (&config.table_path, path.parent()) {
            if table_path.is_relative() {
                config.table_path = Some(dir.join(table_path));
            }
        }
        Ok(config)
    }
}
