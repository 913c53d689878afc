// MSB radix sort that permutes each partition into bucket order with swaps (American flag sort).
// See McIlroy, Bostic, McIlroy: "Engineering Radix Sort" (1993)

use crate::{check, BucketRange, Histogram, InsertionSort, RadixConfig, RadixKey, SmallSort, SortError};

/// Move every value of `values` into the range of its bucket for the digit at `pass`.
///
/// Positions below `idx` are final. Each bucket cursor only passes values that are already home, so
/// every swap places one more value for good.
#[inline(never)]
fn permute_buckets<T: RadixKey>(config: &RadixConfig, values: &mut [T], histogram: &mut Histogram, pass: usize) {
    let (offsets, cursors) = histogram.reset_cursors();

    let mut idx = 0;
    while idx < values.len() {
        let bucket = config.digit_of(values[idx].to_radix(), pass);
        if BucketRange::of(offsets, bucket).contains(idx) {
            idx += 1;
            continue;
        }

        let mut beg = cursors[bucket];
        while config.digit_of(values[beg].to_radix(), pass) == bucket {
            beg += 1;
        }
        check::write_index(beg, offsets[bucket + 1]);

        values.swap(beg, idx);
        cursors[bucket] = beg + 1;
    }
}

struct Partitioner<'a, S: ?Sized> {
    config: &'a RadixConfig,
    cutoff: usize,
    small: &'a S,
}

impl<S: ?Sized> Partitioner<'_, S> {
    /// `levels` holds one histogram per digit that is still unsorted, the last one belongs to the
    /// most significant of them.
    fn sort<T: RadixKey>(&self, values: &mut [T], levels: &mut [Histogram]) -> Result<(), SortError>
    where
        S: SmallSort<T>,
    {
        if values.len() < 2 {
            return Ok(());
        }
        if values.len() < self.cutoff {
            return self.small.sort_small(values);
        }
        let Some((histogram, lower)) = levels.split_last_mut() else {
            return Ok(());
        };
        let pass = lower.len();

        if histogram.build(self.config, values, pass) < 2 {
            return self.sort(values, lower);
        }

        permute_buckets(self.config, values, histogram, pass);

        if lower.is_empty() {
            // equal in every digit means equal values, nothing left to order
            return Ok(());
        }

        for bucket in histogram.buckets() {
            if bucket.len() < 2 {
                continue;
            }
            self.sort(&mut values[bucket.as_range()], lower)?;
        }
        Ok(())
    }
}

/// In-place MSD radix sort of `values`, sorting partitions shorter than `cutoff` with [`InsertionSort`].
///
/// Not stable. Memory use is one histogram per digit, independent of `values.len()`.
///
/// ```
/// let mut values = vec![5_u32, 3, 8, 1];
/// radix_sort::sort_in_place(&mut values, 4, 0).unwrap();
/// assert_eq!(values, [1, 3, 5, 8]);
/// ```
pub fn sort_in_place<T: RadixKey>(values: &mut [T], digit_bits: u32, cutoff: usize) -> Result<(), SortError> {
    sort_in_place_with(values, digit_bits, cutoff, &InsertionSort)
}

/// Like [`sort_in_place`], with a custom sorter for partitions shorter than `cutoff`.
///
/// When the small sorter fails the error is returned as is and `values` is left as some permutation
/// of its input.
pub fn sort_in_place_with<T, S>(values: &mut [T], digit_bits: u32, cutoff: usize, small: &S) -> Result<(), SortError>
where
    T: RadixKey,
    S: SmallSort<T> + ?Sized,
{
    let config = RadixConfig::for_key::<T>(digit_bits)?;
    if values.len() < 2 {
        return Ok(());
    }
    if values.len() < cutoff {
        return small.sort_small(values);
    }

    let mut levels = (0..config.pass_count())
        .map(|_| Histogram::new(&config))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(len = values.len(), digit_bits, cutoff, passes = config.pass_count(), "in-place radix sort");
    Partitioner { config: &config, cutoff, small }.sort(values, &mut levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoFallback;
    use std::cell::Cell;

    #[test]
    fn test_permute_buckets() {
        let config = RadixConfig::for_key::<u32>(4).unwrap();
        let mut values = [3_u32, 0, 2, 3, 1, 0, 2, 3];
        let mut histogram = Histogram::new(&config).unwrap();
        assert_eq!(histogram.build(&config, &values, 0), 4);

        permute_buckets(&config, &mut values, &mut histogram, 0);
        assert_eq!(values, [0, 0, 1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_permute_buckets_only_groups_by_digit() {
        let config = RadixConfig::for_key::<u32>(4).unwrap();
        let mut values = [0x21_u32, 0x10, 0x31, 0x00, 0x11, 0x20];
        let mut histogram = Histogram::new(&config).unwrap();
        histogram.build(&config, &values, 0);

        permute_buckets(&config, &mut values, &mut histogram, 0);
        assert!(values[..3].iter().all(|v| v & 0xF == 0));
        assert!(values[3..].iter().all(|v| v & 0xF == 1));
        let mut sorted = values;
        sorted.sort_unstable();
        assert_eq!(sorted, [0x00, 0x10, 0x11, 0x20, 0x21, 0x31]);
    }

    #[test]
    fn test_sort_without_cutoff() {
        let mut values = vec![0xDEAD_BEEF_u32, 7, 0, 0xDEAD_0000, u32::MAX, 7, 0x0100_0000];
        sort_in_place_with(&mut values, 8, 0, &NoFallback).unwrap();
        assert_eq!(values, [0, 7, 7, 0x0100_0000, 0xDEAD_0000, 0xDEAD_BEEF, u32::MAX]);
    }

    #[test]
    fn test_shared_prefix_skips_digits() {
        let mut values = vec![0xAB00_0003_u32, 0xAB00_0001, 0xAB00_0002];
        sort_in_place_with(&mut values, 8, 0, &NoFallback).unwrap();
        assert_eq!(values, [0xAB00_0001, 0xAB00_0002, 0xAB00_0003]);
    }

    #[test]
    fn test_cutoff_dispatch() {
        let values = [0x5000_0000_u32, 0x3000_0000, 0x1000_0000, 0x4000_0000, 0x2000_0000];
        let calls = Cell::new(0);
        let small = |values: &mut [u32]| {
            calls.set(calls.get() + 1);
            values.sort_unstable();
            Ok::<(), SortError>(())
        };

        // a partition as long as the cutoff is still split by digit
        let mut at_cutoff = values;
        sort_in_place_with(&mut at_cutoff, 4, values.len(), &small).unwrap();
        assert_eq!(calls.get(), 0);
        assert!(at_cutoff.is_sorted());

        let mut below_cutoff = values;
        sort_in_place_with(&mut below_cutoff, 4, values.len() + 1, &small).unwrap();
        assert_eq!(calls.get(), 1);
        assert!(below_cutoff.is_sorted());
    }

    #[test]
    fn test_no_fallback_below_cutoff() {
        let mut values = vec![3_u32, 2, 1];
        let err = sort_in_place_with(&mut values, 8, 16, &NoFallback).unwrap_err();
        assert_eq!(err, SortError::NotImplemented { len: 3 });

        // sizes below 2 never need a fallback
        let mut single = vec![1_u32];
        sort_in_place_with(&mut single, 8, 16, &NoFallback).unwrap();
    }

    #[test]
    fn test_no_fallback_in_sub_partition() {
        // the top digit splits off a partition of 2 that is shorter than the cutoff
        let mut values = vec![0x1000_0002_u32, 0x2000_0000, 0x1000_0001, 0x3000_0000];
        let err = sort_in_place_with(&mut values, 4, 3, &NoFallback).unwrap_err();
        assert_eq!(err, SortError::NotImplemented { len: 2 });
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, [0x1000_0001, 0x1000_0002, 0x2000_0000, 0x3000_0000]);
    }

    #[test]
    fn test_insertion_sort_partitions() {
        let mut values: Vec<u64> = (0..1000).map(|i| (i * 7919) % 1000 + (i % 3 << 40)).collect();
        let mut expected = values.clone();
        expected.sort_unstable();
        sort_in_place(&mut values, 8, 16).unwrap();
        assert_eq!(values, expected);
    }
}
