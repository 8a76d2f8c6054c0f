use thiserror::Error;

/// Result type for deepnn operations
pub type Result<T> = std::result::Result<T, NetError>;

/// Main error type for the deepnn library.
///
/// Every variant is a precondition violation: the failing operation aborts
/// and nothing is retried or coerced.
#[derive(Debug, Error)]
pub enum NetError {
    /// A matrix was requested with zero rows or zero columns
    #[error("Invalid shape ({rows}, {cols})")]
    InvalidShape { rows: usize, cols: usize },

    /// Supplied data does not fill the requested shape
    #[error("Invalid data length: expected {expected}, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Operand shapes are incompatible for an operation
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Row or column index outside the matrix
    #[error("Index {index} out of range: must be less than {bound}")]
    IndexOutOfRange { index: usize, bound: usize },

    /// An index selection was given no indices
    #[error("Empty index list")]
    EmptyIndices,

    /// IO errors (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed sample or label data
    #[error("Parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration (de)serialization errors
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

// Helper functions for common error patterns
impl NetError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        NetError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        NetError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shape mismatch between two `(rows, cols)` pairs
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        NetError::DimensionMismatch {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }
    }
}
