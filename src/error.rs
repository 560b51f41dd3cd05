use thiserror::Error;

/// Errors raised by the fit/apply operators.
#[derive(Debug, Error, PartialEq)]
pub enum PreprocessError {
    /// Caller supplied input an operation cannot work with.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Apply step called before a successful fit.
    #[error("{0} has not been fitted")]
    NotFitted(&'static str),

    /// A row does not have the number of features the operation needs.
    #[error("row {row} has {actual} features, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, PreprocessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_fitted_names_component() {
        let err = PreprocessError::NotFitted("RobustScaler");
        assert_eq!(err.to_string(), "RobustScaler has not been fitted");
    }

    #[test]
    fn dimension_mismatch_message() {
        let err = PreprocessError::DimensionMismatch {
            row: 2,
            expected: 4,
            actual: 3,
        };
        assert!(err.to_string().contains("row 2 has 3 features"));
    }
}
