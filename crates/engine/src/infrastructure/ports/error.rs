//! Port error types.

/// Errors from the character store.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Reading or writing the backing store failed.
    #[error("Storage error in {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a Storage error with operation context.
    pub fn storage(operation: &'static str, message: impl ToString) -> Self {
        Self::Storage {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

/// Errors from the metadata enrichment source.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Request failed: {0}")]
    Http(String),

    #[error("No entry for {0}")]
    NotFound(String),

    #[error("Unexpected payload: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_error_keeps_the_message() {
        let err = RepoError::serialization("expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Serialization error: expected value at line 1"
        );
    }

    #[test]
    fn storage_error_names_the_operation() {
        let err = RepoError::storage("save", "permission denied");
        assert_eq!(
            err.to_string(),
            "Storage error in save: permission denied"
        );
    }
}
