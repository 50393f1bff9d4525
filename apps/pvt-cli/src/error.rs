//! CLI error type.

use pvt_curves::CurveError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Curve collection error: {0}")]
    Curves(#[from] CurveError),
}
