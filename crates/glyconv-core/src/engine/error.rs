use crate::core::io::batch::BatchIoError;
use crate::core::model::EvaluationError;
use crate::core::params::{SpecError, TableLoadError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid parameter table: {0}")]
    InvalidSpec(#[from] SpecError),

    #[error("Failed to load parameter table: {0}")]
    TableLoad(#[from] TableLoadError),

    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("Evaluation of row {row} failed: {source}")]
    BatchRow {
        row: usize,
        #[source]
        source: EvaluationError,
    },

    #[error("Batch I/O failed: {0}")]
    BatchIo(#[from] BatchIoError),
}
