//! Engine errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown sorting algorithm `{0}`")]
    UnknownAlgorithm(String),

    #[error("no sort run is active, call start first")]
    NoActiveRun,
}
