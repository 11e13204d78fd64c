//! Error types for sparse matrix operations

/// Errors that can occur while parsing or combining sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch,
    /// Header lines are not `rows=<int>` and `cols=<int>`
    InvalidHeader,
    /// Entry line is not `(<row>,<col>,<value>)` with exactly three integers
    InvalidEntry,
}

/// Coarse grouping of the error space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Shape preconditions on arithmetic
    Dimensions,
    /// Malformed input text
    Format,
}

impl MatrixError {
    /// Category this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::DimensionMismatch => ErrorCategory::Dimensions,
            MatrixError::InvalidHeader | MatrixError::InvalidEntry => ErrorCategory::Format,
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MatrixError::DimensionMismatch => "Matrix dimensions are incompatible",
            MatrixError::InvalidHeader => "Invalid matrix header",
            MatrixError::InvalidEntry => "Invalid matrix entry line",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            MatrixError::DimensionMismatch.category(),
            ErrorCategory::Dimensions
        );
        assert_eq!(MatrixError::InvalidHeader.category(), ErrorCategory::Format);
        assert_eq!(MatrixError::InvalidEntry.category(), ErrorCategory::Format);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MatrixError::DimensionMismatch.to_string(),
            "Matrix dimensions are incompatible"
        );
        assert_eq!(
            MatrixError::InvalidHeader.to_string(),
            "Invalid matrix header"
        );
    }
}
