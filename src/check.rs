//! Internal consistency checks.
//!
//! Everything in here is a `debug_assert!`, release builds rely on the histogram construction
//! instead. A failure is a bug in this crate, never a caller error.

/// Offsets must start at 0, never decrease and end at `len`.
#[inline(always)]
pub(crate) fn histogram_offsets(offsets: &[usize], len: usize) {
    if cfg!(debug_assertions) {
        assert_eq!(offsets.first().copied(), Some(0), "histogram does not start at 0");
        assert_eq!(offsets.last().copied(), Some(len), "histogram does not end at {len}");
        for pair in offsets.windows(2) {
            assert!(pair[0] <= pair[1], "histogram not monotonic: {} > {}", pair[0], pair[1]);
        }
    }
}

#[inline(always)]
pub(crate) fn bucket_range(start: usize, end: usize, len: usize) {
    debug_assert!(start <= end && end <= len, "bucket range {start}..{end} out of bounds {len}");
}

#[inline(always)]
pub(crate) fn write_index(index: usize, len: usize) {
    debug_assert!(index < len, "write index {index} out of bounds {len}");
}
