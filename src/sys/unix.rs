//! Unix backend over `statvfs(3)`.
//!
//! The portable statvfs struct carries every field of the canonical model
//! except the filesystem type name, which needs a second, OS-specific
//! lookup: the `statfs(2)` magic number on Linux/Android, `f_fstypename`
//! on the BSD family. Struct layout and field-width differences are
//! settled here at compile time; callers only ever see [`VolumeStats`].

use std::ffi::CString;
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::error::QueryError;
use crate::stats::{Inodes, VolumeStats};

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        // Explicit LFS variant so block counts stay 64-bit on 32-bit targets.
        type RawStatvfs = libc::statvfs64;

        fn raw_statvfs(path: &CString, buf: &mut MaybeUninit<RawStatvfs>) -> libc::c_int {
            unsafe { libc::statvfs64(path.as_ptr(), buf.as_mut_ptr()) }
        }

        const READ_ONLY_FLAG: u64 = libc::ST_RDONLY as u64;
    } else {
        type RawStatvfs = libc::statvfs;

        fn raw_statvfs(path: &CString, buf: &mut MaybeUninit<RawStatvfs>) -> libc::c_int {
            unsafe { libc::statvfs(path.as_ptr(), buf.as_mut_ptr()) }
        }

        // ST_RDONLY everywhere the BSDs and macOS define it.
        const READ_ONLY_FLAG: u64 = 0x1;
    }
}

/// Issue the statistics call for `path` and normalize the raw struct.
///
/// `path` is expected to be canonicalized already; no symlink handling
/// happens at this layer.
pub(crate) fn volume_stats(path: &Path) -> Result<VolumeStats, QueryError> {
    let c_path = cstring_from_path(path)?;

    let mut raw = MaybeUninit::<RawStatvfs>::uninit();
    if raw_statvfs(&c_path, &mut raw) != 0 {
        return Err(QueryError::from_io(
            "statvfs",
            path,
            io::Error::last_os_error(),
        ));
    }
    let raw = unsafe { raw.assume_init() };

    let block_size = raw.f_bsize as u64;
    let fragment_size = match raw.f_frsize as u64 {
        0 => block_size,
        frsize => frsize,
    };
    let total_blocks = raw.f_blocks as u64;
    // Some network filesystems report free/available counts above the
    // total; clamp so the canonical ordering always holds.
    let free_blocks = (raw.f_bfree as u64).min(total_blocks);
    let available_blocks = (raw.f_bavail as u64).min(free_blocks);

    Ok(VolumeStats {
        filesystem_type: filesystem_type(&c_path, path)?,
        block_size,
        fragment_size,
        total_blocks,
        free_blocks,
        available_blocks,
        inodes: Inodes::new(raw.f_files as u64, raw.f_ffree as u64),
        max_filename_length: raw.f_namemax as u64,
        filesystem_id: raw.f_fsid as u64,
        read_only: (raw.f_flag as u64) & READ_ONLY_FLAG != 0,
    })
}

fn cstring_from_path(path: &Path) -> Result<CString, QueryError> {
    CString::new(path.as_os_str().as_bytes()).map_err(|_| QueryError::InvalidArgument {
        reason: "path contains an interior NUL byte",
    })
}

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        /// Look up the filesystem type via the `statfs(2)` magic number.
        fn filesystem_type(c_path: &CString, path: &Path) -> Result<String, QueryError> {
            let mut raw = MaybeUninit::<libc::statfs64>::uninit();
            let ret = unsafe { libc::statfs64(c_path.as_ptr(), raw.as_mut_ptr()) };
            if ret != 0 {
                return Err(QueryError::from_io(
                    "statfs",
                    path,
                    io::Error::last_os_error(),
                ));
            }
            let raw = unsafe { raw.assume_init() };
            Ok(name_from_magic(raw.f_type as u64))
        }

        /// Translate a superblock magic into a readable name.
        ///
        /// Covers the types a query is likely to meet; anything else is
        /// rendered with its raw magic so nothing is silently misnamed.
        fn name_from_magic(magic: u64) -> String {
            let name = match magic {
                0xef53 => "ext4",
                0x9123683e => "btrfs",
                0x58465342 => "xfs",
                0x01021994 => "tmpfs",
                0x858458f6 => "ramfs",
                0xf2f52010 => "f2fs",
                0x73717368 => "squashfs",
                0x794c7630 => "overlayfs",
                0x65735546 => "fuse",
                0x6969 => "nfs",
                0xff534d42 => "cifs",
                0x517b => "smb",
                0x4d44 => "vfat",
                0x5346544e => "ntfs",
                0x9660 => "isofs",
                0x52654973 => "reiserfs",
                0x3153464a => "jfs",
                0x2fc12fc1 => "zfs",
                0x9fa0 => "proc",
                0x62656572 => "sysfs",
                0x1cd1 => "devpts",
                0x27e0eb => "cgroup",
                0x63677270 => "cgroup2",
                _ => return format!("unknown (0x{magic:x})"),
            };
            name.to_owned()
        }
    } else if #[cfg(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "dragonfly",
        target_os = "openbsd",
    ))] {
        /// Read the filesystem type name straight out of `statfs(2)`.
        fn filesystem_type(c_path: &CString, path: &Path) -> Result<String, QueryError> {
            let mut raw = MaybeUninit::<libc::statfs>::uninit();
            let ret = unsafe { libc::statfs(c_path.as_ptr(), raw.as_mut_ptr()) };
            if ret != 0 {
                return Err(QueryError::from_io(
                    "statfs",
                    path,
                    io::Error::last_os_error(),
                ));
            }
            let raw = unsafe { raw.assume_init() };
            let name = unsafe { std::ffi::CStr::from_ptr(raw.f_fstypename.as_ptr()) };
            Ok(name.to_string_lossy().into_owned())
        }
    } else {
        /// No type-name source on this Unix; the rest of the stats are
        /// still valid.
        fn filesystem_type(_c_path: &CString, _path: &Path) -> Result<String, QueryError> {
            Ok("unknown".to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn volume_stats_of_temp_dir_holds_invariants() {
        let stats = volume_stats(&std::env::temp_dir()).unwrap();
        assert!(stats.block_size > 0);
        assert!(stats.fragment_size > 0);
        assert!(stats.free_blocks <= stats.total_blocks);
        assert!(stats.available_blocks <= stats.free_blocks);
        if let Some(inodes) = stats.inodes {
            assert!(inodes.free <= inodes.total);
        }
    }

    #[test]
    fn interior_nul_is_invalid_argument() {
        let path = Path::new(OsStr::from_bytes(b"/tmp/\0bad"));
        let err = volume_stats(path).unwrap_err();
        assert!(matches!(err, QueryError::InvalidArgument { .. }));
    }

    #[test]
    fn missing_path_is_not_found() {
        let err = volume_stats(Path::new("/nonexistent-volstat-sys-test")).unwrap_err();
        assert!(matches!(err, QueryError::NotFound { .. }));
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    #[test]
    fn known_magic_maps_to_name() {
        assert_eq!(name_from_magic(0xef53), "ext4");
        assert_eq!(name_from_magic(0x01021994), "tmpfs");
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    #[test]
    fn unknown_magic_keeps_raw_value() {
        assert_eq!(name_from_magic(0xdead_beef), "unknown (0xdeadbeef)");
    }
}
