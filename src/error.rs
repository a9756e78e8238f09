//! Error types for volume statistics queries.

use std::path::{Path, PathBuf};

/// Error type for [`query`](crate::query) with contextual variants.
///
/// Every platform error code is caught at the syscall boundary and mapped
/// to one of these variants; raw errno values never reach the caller.
/// Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use volstat::QueryError;
/// use std::path::PathBuf;
///
/// let err = QueryError::NotFound { path: PathBuf::from("/missing") };
/// assert!(err.to_string().contains("/missing"));
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Input was malformed before any syscall was attempted.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the input.
        reason: &'static str,
    },

    /// Path does not resolve to an existing filesystem entry.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Caller lacks access rights to query the underlying filesystem.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path where permission was denied.
        path: PathBuf,
    },

    /// The platform or filesystem cannot report volume statistics.
    #[error("volume statistics not supported: {reason}")]
    Unsupported {
        /// Why statistics are unavailable.
        reason: &'static str,
    },

    /// Unclassified kernel-level failure with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl QueryError {
    /// Lift an `io::Error` into the taxonomy, keeping the path and the
    /// operation that produced it.
    ///
    /// Common error kinds map to their specific variants; everything else
    /// stays a contextual [`QueryError::Io`].
    pub(crate) fn from_io(operation: &'static str, path: &Path, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => QueryError::NotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => QueryError::PermissionDenied {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::Unsupported => QueryError::Unsupported {
                reason: "filesystem does not support statistics retrieval",
            },
            _ => QueryError::Io {
                operation,
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = QueryError::NotFound {
            path: PathBuf::from("/missing"),
        };
        assert_eq!(err.to_string(), "not found: /missing");
    }

    #[test]
    fn invalid_argument_display() {
        let err = QueryError::InvalidArgument {
            reason: "path is empty",
        };
        assert_eq!(err.to_string(), "invalid argument: path is empty");
    }

    #[test]
    fn io_display_includes_operation_and_path() {
        let err = QueryError::Io {
            operation: "statvfs",
            path: PathBuf::from("/mnt/data"),
            source: std::io::Error::other("boom"),
        };
        let msg = err.to_string();
        assert!(msg.contains("statvfs"), "missing operation in {msg}");
        assert!(msg.contains("/mnt/data"), "missing path in {msg}");
    }

    #[test]
    fn from_io_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err = QueryError::from_io("statvfs", Path::new("/x"), io_err);
        assert!(matches!(err, QueryError::NotFound { .. }));
    }

    #[test]
    fn from_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err = QueryError::from_io("statvfs", Path::new("/x"), io_err);
        assert!(matches!(err, QueryError::PermissionDenied { .. }));
    }

    #[test]
    fn from_io_unsupported() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Unsupported, "test");
        let err = QueryError::from_io("statvfs", Path::new("/x"), io_err);
        assert!(matches!(err, QueryError::Unsupported { .. }));
    }

    #[test]
    fn from_io_other_keeps_context() {
        let io_err = std::io::Error::other("test");
        let err = QueryError::from_io("statvfs", Path::new("/x"), io_err);
        match err {
            QueryError::Io {
                operation, path, ..
            } => {
                assert_eq!(operation, "statvfs");
                assert_eq!(path, PathBuf::from("/x"));
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
