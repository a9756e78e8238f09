//! # volstat
//!
//! Strongly-typed filesystem **volume statistics** queries over the
//! platform `statvfs`/`statfs` family of calls.
//!
//! One function, [`query`], takes a path and returns a normalized
//! [`VolumeStats`] snapshot — capacity, free space, inode counts,
//! filesystem type, mount read-only state — or a typed [`QueryError`].
//! Platform struct layouts and field-width differences are resolved at
//! compile time; raw errno values never reach the caller.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! let stats = volstat::query("/")?;
//!
//! println!(
//!     "{}: {} of {} bytes available",
//!     stats.filesystem_type,
//!     stats.available_bytes(),
//!     stats.total_bytes(),
//! );
//! # Ok::<(), volstat::QueryError>(())
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`query`] | The sole entry point — path in, statistics out |
//! | [`VolumeStats`] | Normalized point-in-time snapshot of a volume |
//! | [`Inodes`] | Inode usage, absent on filesystems that don't track it |
//! | [`QueryError`] | Error taxonomy with path/operation context |
//!
//! ---
//!
//! ## Semantics
//!
//! - Block counts are in units of [`VolumeStats::fragment_size`]; the
//!   byte helpers (`total_bytes`, `free_bytes`, `available_bytes`) do the
//!   multiplication for you.
//! - `free_blocks <= total_blocks` and `available_blocks <= free_blocks`
//!   always hold in a returned snapshot.
//! - Symlinks are resolved before the native call, so the result
//!   describes the volume the link *target* lives on.
//! - The query is synchronous and blocking (a network mount can stall
//!   it); offloading to a worker thread or executor is caller policy.
//!
//! ---
//!
//! ## Thread Safety
//!
//! There is no shared state — every call is independent. [`VolumeStats`],
//! [`Inodes`], and [`QueryError`] are `Send + Sync`, so concurrent
//! queries from any number of threads need no locking.
//!
//! ---
//!
//! ## Platform Support
//!
//! Unix targets use `statvfs(3)`, with the filesystem type name looked up
//! via the `statfs(2)` magic number on Linux/Android and `f_fstypename`
//! on macOS and the BSDs. Other targets compile but report
//! [`QueryError::Unsupported`].
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization for [`VolumeStats`] and [`Inodes`] |

// Private modules
mod error;
mod query;
mod stats;
mod sys;

// Public re-exports
pub use error::QueryError;
pub use query::query;
pub use stats::{Inodes, VolumeStats};
