// Typed errors returned across the store boundary

use thiserror::Error;

/// Failures reported by a persistence gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Reading the durable store failed. No state was modified.
    #[error("failed to read tasks from the backing store")]
    ReadFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Flushing pending changes failed. The pending buffer is retained so a
    /// later flush can retry.
    #[error("failed to write pending changes to the backing store")]
    WriteFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    pub(crate) fn read(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        GatewayError::ReadFailed(Box::new(err))
    }

    pub(crate) fn write(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        GatewayError::WriteFailed(Box::new(err))
    }
}

/// Failures returned by task store operations
///
/// Every failure crosses the store boundary as a value; nothing is logged
/// and swallowed, and nothing panics.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The title was empty (or whitespace-only) after trimming. Rejected
    /// before any mutation.
    #[error("task title is empty")]
    EmptyTitle,

    /// An index outside `[0, len)` was passed to delete or move.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// The persistence layer failed; the operation did not complete.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(StoreError::EmptyTitle.to_string(), "task title is empty");
        assert_eq!(
            StoreError::OutOfRange { index: 5, len: 2 }.to_string(),
            "index 5 out of range for list of length 2"
        );
    }

    #[test]
    fn test_gateway_error_wraps_into_store_error() {
        let err = GatewayError::read(std::io::Error::other("disk gone"));
        let store_err: StoreError = err.into();
        assert!(matches!(
            store_err,
            StoreError::Gateway(GatewayError::ReadFailed(_))
        ));
    }

    #[test]
    fn test_gateway_error_keeps_source() {
        use std::error::Error;

        let err = GatewayError::write(std::io::Error::other("disk full"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "disk full");
    }
}
