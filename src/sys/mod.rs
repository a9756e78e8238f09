//! Platform dispatch for the native volume-statistics call.
//!
//! Exactly one backend is compiled in. Targets without an implementation
//! still build; their queries report [`QueryError::Unsupported`].

use std::path::Path;

use crate::error::QueryError;
use crate::stats::VolumeStats;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;

        pub(crate) fn volume_stats(path: &Path) -> Result<VolumeStats, QueryError> {
            unix::volume_stats(path)
        }
    } else {
        pub(crate) fn volume_stats(path: &Path) -> Result<VolumeStats, QueryError> {
            let _ = path;
            Err(QueryError::Unsupported {
                reason: "volume statistics are not implemented for this platform",
            })
        }
    }
}
