//! Error types for the edutil crate.

/// Failure surfaced by the edit-distance core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// Inputs are byte-equal or one of them is empty; the caller is expected
    /// to compute the answer itself (0, or the other input's length).
    #[error("trivial matrix")]
    TrivialMatrix,
}

/// Convenience result type for the edit-distance core.
pub type EditResult<T> = Result<T, EditError>;

/// Operation-level errors reported by the service front end.
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// Edit-distance core refused the inputs.
    #[error(transparent)]
    Edit(#[from] EditError),

    /// A string operand exceeds the configured size limit.
    #[error("input too large: {len} bytes (limit {limit})")]
    InputTooLarge { len: usize, limit: usize },

    /// A numeric argument or derived size is over its configured maximum.
    #[error("{what} {value} exceeds limit {max}")]
    LimitExceeded {
        what: &'static str,
        value: u64,
        max: u64,
    },

    /// Arguments did not match the operation's schema.
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// No operation registered under this name.
    #[error("unknown operation: {0}")]
    UnknownOp(String),
}

impl UtilError {
    /// Stable, machine-readable kind used on the wire.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Edit(EditError::TrivialMatrix) => "trivialMatrix",
            Self::InputTooLarge { .. } | Self::LimitExceeded { .. } => "inputTooLarge",
            Self::InvalidParams(_) => "invalidParams",
            Self::UnknownOp(_) => "unknownOp",
        }
    }
}

/// Convenience result type for edutil operations.
pub type UtilResult<T> = Result<T, UtilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_matrix_is_comparable() {
        assert_eq!(EditError::TrivialMatrix, EditError::TrivialMatrix);
        assert_eq!(EditError::TrivialMatrix.to_string(), "trivial matrix");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(UtilError::from(EditError::TrivialMatrix).kind(), "trivialMatrix");
        assert_eq!(UtilError::UnknownOp("x".to_owned()).kind(), "unknownOp");
        let err = UtilError::InputTooLarge { len: 11, limit: 10 };
        assert_eq!(err.kind(), "inputTooLarge");
        assert!(err.to_string().contains("limit 10"));

        let err = UtilError::LimitExceeded { what: "sieve limit", value: 11, max: 10 };
        assert_eq!(err.kind(), "inputTooLarge");
        assert_eq!(err.to_string(), "sieve limit 11 exceeds limit 10");
    }
}
