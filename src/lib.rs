//! Radix sorting of fixed-width unsigned integers.
//!
//! Two strategies share one histogram primitive:
//! - [`sort_with_auxiliary`]: stable LSD sort, ping-ponging between the input and one scratch buffer.
//! - [`sort_in_place`]: recursive MSD (American flag) sort that permutes buckets with swaps and
//!   hands small partitions to a [`SmallSort`] fallback.
mod auxiliary;
mod check;
mod config;
mod error;
mod histogram;
mod in_place;
mod key;
mod small_sort;

pub use auxiliary::*;
pub use config::*;
pub use error::*;
pub use histogram::*;
pub use in_place::*;
pub use key::*;
pub use small_sort::*;

// 4 -> 8 passes per u32, 17 counters per histogram
// 8 -> 4 passes per u32, 257 counters, fits into L1 cache together with the cursors
// 11 -> 3 passes per u32, 16k memory per histogram
// 16 -> 2 passes per u32, 0.5m memory per histogram, and one histogram per level when in place
pub const DEFAULT_DIGIT_BITS: u32 = 8;

/// Partitions shorter than this are handed to the small-array sorter by the in-place strategy.
pub const DEFAULT_CUTOFF: usize = 32;
