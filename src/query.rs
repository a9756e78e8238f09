//! The single query entry point.

use std::path::Path;

use crate::error::QueryError;
use crate::stats::VolumeStats;
use crate::sys;

/// Query volume statistics for the filesystem that `path` lives on.
///
/// `path` may name any existing file, directory, or symlink; symlinks are
/// resolved first, so the result always describes the volume of the link
/// target. Each call is an independent snapshot — nothing is cached.
///
/// # Errors
///
/// - [`QueryError::InvalidArgument`] for an empty path or one containing
///   an interior NUL byte
/// - [`QueryError::NotFound`] when the path does not resolve
/// - [`QueryError::PermissionDenied`] when the caller may not stat the
///   volume
/// - [`QueryError::Unsupported`] on platforms or filesystems without
///   statistics support
/// - [`QueryError::Io`] for any other kernel-level failure
///
/// # Examples
///
/// ```rust
/// let stats = volstat::query(std::env::temp_dir())?;
/// assert!(stats.free_blocks <= stats.total_blocks);
/// println!("{}: {} bytes available", stats.filesystem_type, stats.available_bytes());
/// # Ok::<(), volstat::QueryError>(())
/// ```
pub fn query(path: impl AsRef<Path>) -> Result<VolumeStats, QueryError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(QueryError::InvalidArgument {
            reason: "path is empty",
        });
    }
    // Canonicalize reports an interior NUL as a bare InvalidInput, so
    // reject it here where the reason can be named.
    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(QueryError::InvalidArgument {
            reason: "path contains an interior NUL byte",
        });
    }

    // Resolve symlinks up front rather than leaning on whatever the
    // native call does with them.
    let resolved = path
        .canonicalize()
        .map_err(|err| QueryError::from_io("canonicalize", path, err))?;

    log::debug!("querying volume statistics for {}", resolved.display());
    let stats = sys::volume_stats(&resolved)?;
    log::trace!(
        "{} ({}): {}/{} bytes free",
        resolved.display(),
        stats.filesystem_type,
        stats.free_bytes(),
        stats.total_bytes(),
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_invalid_argument() {
        let err = query("").unwrap_err();
        assert!(matches!(
            err,
            QueryError::InvalidArgument {
                reason: "path is empty"
            }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn interior_nul_path_is_invalid_argument() {
        use std::os::unix::ffi::OsStrExt;

        let err = query(std::ffi::OsStr::from_bytes(b"/tmp/\0bad")).unwrap_err();
        assert!(matches!(
            err,
            QueryError::InvalidArgument {
                reason: "path contains an interior NUL byte"
            }
        ));
    }

    #[test]
    fn nonexistent_path_is_not_found() {
        let err = query("/nonexistent-volstat-query-test").unwrap_err();
        assert!(matches!(err, QueryError::NotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn temp_dir_query_succeeds() {
        let stats = query(std::env::temp_dir()).unwrap();
        assert!(stats.available_blocks <= stats.free_blocks);
        assert!(stats.free_blocks <= stats.total_blocks);
    }

    #[cfg(unix)]
    #[test]
    fn accepts_any_path_like_argument() {
        let as_str = query("/").unwrap();
        let as_pathbuf = query(std::path::PathBuf::from("/")).unwrap();
        assert_eq!(as_str.filesystem_id, as_pathbuf.filesystem_id);
    }
}
