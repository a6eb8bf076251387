use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimatorError {
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    #[error("ring degree must be at least 1, got {0}")]
    InvalidRingDegree(usize),
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
