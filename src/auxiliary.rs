// LSB radix sort through one auxiliary buffer, based on
// http://codercorner.com/RadixSortRevisited.htm
// http://stereopsis.com/radix.html

use crate::{check, Histogram, RadixConfig, RadixKey, SortError};

/// Scatter `values` into `output` by the digit at `pass`, using the cumulative offsets as write cursors.
///
/// Values with equal digits keep their relative order.
#[inline(never)]
fn reorder_values<T: RadixKey>(
    config: &RadixConfig,
    values: &[T],
    output: &mut [T],
    offsets: &mut [usize],
    pass: usize,
) {
    debug_assert_eq!(values.len(), output.len());

    values.iter().for_each(|value| {
        let bucket = config.digit_of(value.to_radix(), pass);
        let output_idx = offsets[bucket];
        check::write_index(output_idx, output.len());
        // SAFETY: the offsets were built from `values` for this pass, so bucket `b` owns exactly
        // `offsets[b]..offsets[b + 1]` and its cursor never passes `values.len() == output.len()`.
        unsafe { *output.get_unchecked_mut(output_idx) = *value };
        offsets[bucket] = output_idx + 1;
    });
}

fn run_passes<T: RadixKey>(config: &RadixConfig, values: &mut [T], scratch: &mut [T]) -> Result<(), SortError> {
    let mut histogram = Histogram::new(config)?;
    let mut src: &mut [T] = values;
    let mut dest: &mut [T] = scratch;
    let mut in_scratch = false;

    for pass in 0..config.pass_count() {
        let active_bins = histogram.build(config, src, pass);
        if active_bins < 2 {
            tracing::trace!(pass, "all values share one digit, skipping pass");
            continue;
        }

        reorder_values(config, src, dest, histogram.offsets_mut(), pass);

        std::mem::swap(&mut src, &mut dest);
        in_scratch = !in_scratch;
    }

    if in_scratch {
        // `dest` is the caller's slice again after an odd number of swaps
        dest.copy_from_slice(src);
    }
    Ok(())
}

/// Stable LSD radix sort of `values`, allocating one scratch buffer of the same length.
///
/// ```
/// let mut values = vec![5_u32, 3, 8, 1];
/// radix_sort::sort_with_auxiliary(&mut values, 4).unwrap();
/// assert_eq!(values, [1, 3, 5, 8]);
/// ```
pub fn sort_with_auxiliary<T: RadixKey>(values: &mut [T], digit_bits: u32) -> Result<(), SortError> {
    let config = RadixConfig::for_key::<T>(digit_bits)?;
    if values.len() < 2 {
        return Ok(());
    }

    let len = values.len();
    let mut scratch: Vec<T> = Vec::new();
    scratch
        .try_reserve_exact(len)
        .map_err(|_| SortError::AllocationError { elements: len })?;
    scratch.resize(len, T::default());

    tracing::debug!(len, digit_bits, passes = config.pass_count(), "auxiliary radix sort");
    run_passes(&config, values, &mut scratch)
}

/// Like [`sort_with_auxiliary`], with a caller-provided scratch buffer of the same length as `values`.
///
/// The contents of `scratch` are unspecified afterwards.
pub fn sort_with_scratch<T: RadixKey>(values: &mut [T], scratch: &mut [T], digit_bits: u32) -> Result<(), SortError> {
    let config = RadixConfig::for_key::<T>(digit_bits)?;
    if scratch.len() != values.len() {
        return Err(SortError::InvalidArgument("scratch buffer length differs from input length"));
    }
    if values.len() < 2 {
        return Ok(());
    }

    tracing::debug!(len = values.len(), digit_bits, passes = config.pass_count(), "auxiliary radix sort");
    run_passes(&config, values, scratch)
}
