use crate::{RadixKey, SortError};

/// Immutable digit layout for one sort call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixConfig {
    element_bits: u32,
    digit_bits: u32,
    digit_mask: u64,
    pass_count: usize,
    bucket_count: usize,
}

impl RadixConfig {
    /// Validate `digit_bits` against `element_bits`.
    ///
    /// Requires `0 < digit_bits < element_bits`, `element_bits` a multiple of 8 and at most 64, and a
    /// bucket count that fits into `usize`.
    pub fn build(element_bits: u32, digit_bits: u32) -> Result<Self, SortError> {
        if digit_bits == 0
            || digit_bits >= element_bits
            || element_bits == 0
            || element_bits % 8 != 0
            || element_bits > u64::BITS
            || digit_bits >= usize::BITS
        {
            tracing::debug!(element_bits, digit_bits, "rejected radix configuration");
            return Err(SortError::StateFailure { element_bits, digit_bits });
        }

        let bucket_count = 1_usize << digit_bits;
        Ok(Self {
            element_bits,
            digit_bits,
            digit_mask: (1_u64 << digit_bits) - 1,
            // a narrower top digit covers the remainder when digit_bits does not divide element_bits
            pass_count: element_bits.div_ceil(digit_bits) as usize,
            bucket_count,
        })
    }

    pub fn for_key<T: RadixKey>(digit_bits: u32) -> Result<Self, SortError> {
        Self::build(T::BITS, digit_bits)
    }

    #[inline(always)]
    pub fn element_bits(&self) -> u32 {
        self.element_bits
    }

    #[inline(always)]
    pub fn digit_bits(&self) -> u32 {
        self.digit_bits
    }

    #[inline(always)]
    pub fn digit_mask(&self) -> u64 {
        self.digit_mask
    }

    #[inline(always)]
    pub fn pass_count(&self) -> usize {
        self.pass_count
    }

    #[inline(always)]
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Bucket of `element` for the digit at `pass`, counting from the least significant digit.
    ///
    /// Passes beyond the last digit map everything to bucket 0.
    #[inline(always)]
    pub fn digit_of(&self, element: u64, pass: usize) -> usize {
        if pass >= self.pass_count {
            return 0;
        }
        ((element >> (pass as u32 * self.digit_bits)) & self.digit_mask) as usize
    }
}

/// Which of the two radix strategies a [`RadixSorter`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Stable LSD passes through one scratch buffer.
    #[default]
    Auxiliary,
    /// MSD partitioning with swaps, no scratch buffer for elements.
    InPlace,
}

/// Reusable sort settings.
///
/// ```
/// use radix_sort::{RadixSorter, Strategy};
///
/// let sorter = RadixSorter::new().strategy(Strategy::InPlace).digit_bits(4);
/// let mut values = vec![5_u32, 3, 8, 1];
/// sorter.sort(&mut values).unwrap();
/// assert_eq!(values, [1, 3, 5, 8]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadixSorter {
    strategy: Strategy,
    digit_bits: u32,
    cutoff: usize,
}

impl Default for RadixSorter {
    fn default() -> Self {
        Self { strategy: Strategy::default(), digit_bits: crate::DEFAULT_DIGIT_BITS, cutoff: crate::DEFAULT_CUTOFF }
    }
}

impl RadixSorter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn digit_bits(mut self, digit_bits: u32) -> Self {
        self.digit_bits = digit_bits;
        self
    }

    /// Only used by [`Strategy::InPlace`].
    pub fn cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn sort<T: RadixKey>(&self, values: &mut [T]) -> Result<(), SortError> {
        match self.strategy {
            Strategy::Auxiliary => crate::sort_with_auxiliary(values, self.digit_bits),
            Strategy::InPlace => crate::sort_in_place(values, self.digit_bits, self.cutoff),
        }
    }
}
