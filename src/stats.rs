//! Core value types for volume statistics.

/// Inode usage for a volume.
///
/// Only constructed when the counts are consistent; filesystems that do
/// not track inodes (or report garbage) surface as `None` in
/// [`VolumeStats::inodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inodes {
    /// Total number of inodes on the volume.
    pub total: u64,
    /// Number of free inodes.
    pub free: u64,
}

impl Inodes {
    /// Build inode counts, returning `None` when the platform reports
    /// nothing usable (zero total, or free exceeding total).
    pub fn new(total: u64, free: u64) -> Option<Self> {
        if total > 0 && free <= total {
            Some(Self { total, free })
        } else {
            None
        }
    }

    /// Number of inodes in use.
    #[inline]
    pub const fn used(&self) -> u64 {
        self.total - self.free
    }
}

/// A point-in-time snapshot of a volume's statistics (like `statvfs`).
///
/// Constructed fresh on each [`query`](crate::query); never cached or
/// mutated. Block counts are in units of [`fragment_size`], the
/// allocation granularity of the filesystem; use the byte helpers for
/// absolute sizes.
///
/// [`fragment_size`]: VolumeStats::fragment_size
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeStats {
    /// Normalized filesystem type name ("ext4", "tmpfs", "apfs", ...).
    pub filesystem_type: String,
    /// Preferred I/O block size in bytes.
    pub block_size: u64,
    /// Allocation unit in bytes; block counts are multiples of this.
    /// Equal to `block_size` on platforms that report no separate
    /// fragment size.
    pub fragment_size: u64,
    /// Total data blocks on the volume.
    pub total_blocks: u64,
    /// Free blocks, including those reserved for privileged users.
    pub free_blocks: u64,
    /// Blocks available to unprivileged callers. At most `free_blocks`.
    pub available_blocks: u64,
    /// Inode usage, or `None` when the filesystem does not track inodes.
    pub inodes: Option<Inodes>,
    /// Maximum filename length on this volume.
    pub max_filename_length: u64,
    /// Opaque volume identifier, stable for the lifetime of the mount.
    pub filesystem_id: u64,
    /// Whether the volume is mounted read-only.
    pub read_only: bool,
}

impl VolumeStats {
    /// Total capacity in bytes.
    #[inline]
    pub const fn total_bytes(&self) -> u64 {
        self.total_blocks * self.fragment_size
    }

    /// Free bytes, including space reserved for privileged users.
    #[inline]
    pub const fn free_bytes(&self) -> u64 {
        self.free_blocks * self.fragment_size
    }

    /// Bytes available to unprivileged callers.
    #[inline]
    pub const fn available_bytes(&self) -> u64 {
        self.available_blocks * self.fragment_size
    }

    /// Bytes in use, counting filesystem metadata overhead.
    #[inline]
    pub const fn used_bytes(&self) -> u64 {
        self.total_bytes() - self.free_bytes()
    }

    /// Fraction of the volume in use, in `0.0..=1.0`.
    pub fn use_share(&self) -> f64 {
        if self.total_blocks == 0 {
            0.0
        } else {
            (self.total_blocks - self.free_blocks) as f64 / self.total_blocks as f64
        }
    }
}
