use thiserror::Error;

/// Coarse classification of a [GaussianError]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A numeric argument violates a precondition
    Argument,
    /// The divisor is the zero Gaussian integer
    DivideByZero,
    /// Array operands have different lengths
    Length,
    /// An array index is out of range
    Index,
    /// A string is not a valid Gaussian integer literal
    Parse,
}

/// Errors raised by Gaussian integer and Gaussian array operations
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GaussianError {
    #[error("exponent must be non-negative")]
    NegativeExponent,

    #[error("real and imaginary parts must be integers")]
    NotIntegral,

    #[error("empty sampling range: min is greater than max")]
    EmptyRange,

    #[error("value cannot be represented in the target type")]
    Unrepresentable,

    #[error("complex division by zero gaussian integer")]
    DivideByZero,

    #[error("arrays must be same length ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("index out of range: {0}")]
    IndexOutOfRange(usize),

    #[error("invalid gaussian integer literal: {0:?}")]
    Parse(String),
}

impl GaussianError {
    /// Get the kind of the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GaussianError::NegativeExponent
            | GaussianError::NotIntegral
            | GaussianError::EmptyRange
            | GaussianError::Unrepresentable => ErrorKind::Argument,
            GaussianError::DivideByZero => ErrorKind::DivideByZero,
            GaussianError::LengthMismatch { .. } => ErrorKind::Length,
            GaussianError::IndexOutOfRange(_) => ErrorKind::Index,
            GaussianError::Parse(_) => ErrorKind::Parse,
        }
    }
}
