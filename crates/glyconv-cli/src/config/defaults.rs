use super::models::OutputFormat;

pub struct DefaultsConfig {
    pub output_format: OutputFormat,
    pub precision: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            precision: 1,
        }
    }
}
