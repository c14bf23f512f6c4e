use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid module name: {0}")]
    InvalidModuleName(String),

    #[error("Duplicate path in module layout: {path}")]
    DuplicatePath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidModuleName(reason) => vec![
                format!("Module name rejected: {reason}"),
                "Use a plain identifier like 'payments' or 'UserProfile'".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two artifacts resolved to the same path: {path}"),
                "This indicates corrupted role tables; please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidModuleName(_) => ErrorCategory::Validation,
            Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_name_is_a_validation_error() {
        let err = DomainError::InvalidModuleName("empty".into());
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn duplicate_path_is_internal() {
        let err = DomainError::DuplicatePath {
            path: "Common/Service".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
