use std::ops::Range;

use crate::{check, RadixConfig, RadixKey, SortError};

/// Half-open range `[start, end)` of one bucket inside the slice a histogram was built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketRange {
    start: usize,
    end: usize,
}

impl BucketRange {
    #[inline(always)]
    fn new(start: usize, end: usize, len: usize) -> Self {
        check::bucket_range(start, end, len);
        Self { start, end }
    }

    /// Range of `bucket` within cumulative `offsets`, whose last entry is the slice length.
    #[inline(always)]
    pub(crate) fn of(offsets: &[usize], bucket: usize) -> Self {
        Self::new(offsets[bucket], offsets[bucket + 1], offsets[offsets.len() - 1])
    }

    #[inline(always)]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline(always)]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline(always)]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    #[inline(always)]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Cumulative bucket offsets for one digit of one slice.
///
/// After [`Histogram::build`], `offsets[b]` is the number of elements whose digit is below `b`, so
/// `offsets[0] == 0` and `offsets[bucket_count] == len`.
#[derive(Debug, Clone)]
pub struct Histogram {
    offsets: Vec<usize>,
    cursors: Vec<usize>,
}

fn zeroed(elements: usize) -> Result<Vec<usize>, SortError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(elements)
        .map_err(|_| SortError::AllocationError { elements })?;
    buffer.resize(elements, 0);
    Ok(buffer)
}

impl Histogram {
    pub fn new(config: &RadixConfig) -> Result<Self, SortError> {
        Ok(Self { offsets: zeroed(config.bucket_count() + 1)?, cursors: zeroed(config.bucket_count())? })
    }

    /// Rebuild the offsets for the digit at `pass` of `values`.
    ///
    /// Returns the number of non-empty buckets. Less than 2 means the digit does not reorder anything.
    pub fn build<T: RadixKey>(&mut self, config: &RadixConfig, values: &[T], pass: usize) -> usize {
        debug_assert_eq!(self.offsets.len(), config.bucket_count() + 1);
        let active_bins = fill_histogram(config, values, pass, &mut self.offsets);
        cumulative_histogram(&mut self.offsets);
        check::histogram_offsets(&self.offsets, values.len());
        active_bins
    }

    #[inline(always)]
    pub fn bucket_count(&self) -> usize {
        self.cursors.len()
    }

    /// The cumulative offsets, `bucket_count + 1` entries.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub(crate) fn offsets_mut(&mut self) -> &mut [usize] {
        &mut self.offsets
    }

    #[inline(always)]
    pub fn bucket(&self, bucket: usize) -> BucketRange {
        BucketRange::of(&self.offsets, bucket)
    }

    pub fn buckets(&self) -> impl Iterator<Item = BucketRange> + '_ {
        (0..self.bucket_count()).map(move |bucket| self.bucket(bucket))
    }

    /// The offsets together with per-bucket write cursors, each reset to the start of its bucket.
    pub(crate) fn reset_cursors(&mut self) -> (&[usize], &mut [usize]) {
        let bucket_count = self.cursors.len();
        self.cursors.copy_from_slice(&self.offsets[..bucket_count]);
        (&self.offsets, &mut self.cursors)
    }
}

/// Count the digit at `pass` of every value into `counts[digit + 1]`.
///
/// Returns the number of non-empty buckets.
#[inline(never)]
fn fill_histogram<T: RadixKey>(config: &RadixConfig, values: &[T], pass: usize, counts: &mut [usize]) -> usize {
    counts.fill(0);

    values.iter().for_each(|v| {
        let bucket = config.digit_of(v.to_radix(), pass);
        counts[bucket + 1] += 1;
    });

    counts[1..].iter().filter(|count| **count > 0).count()
}

/// Running sum over the shifted counts, turning `counts[b]` into the start offset of bucket `b`.
#[inline(never)]
fn cumulative_histogram(counts: &mut [usize]) {
    let mut sum = 0_usize;
    counts.iter_mut().for_each(|count| {
        sum += *count;
        *count = sum;
    });
}
