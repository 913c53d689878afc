use crate::{RadixKey, SortError};

/// Sorts the partitions the in-place radix sort considers too small to split further.
pub trait SmallSort<T> {
    fn sort_small(&self, values: &mut [T]) -> Result<(), SortError>;
}

/// Plain insertion sort, the default fallback of [`crate::sort_in_place`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl<T: RadixKey> SmallSort<T> for InsertionSort {
    fn sort_small(&self, values: &mut [T]) -> Result<(), SortError> {
        insertion_sort(values);
        Ok(())
    }
}

/// Refuses every partition with [`SortError::NotImplemented`].
///
/// With a cutoff of 0 or 1 it is never called.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl<T> SmallSort<T> for NoFallback {
    fn sort_small(&self, values: &mut [T]) -> Result<(), SortError> {
        Err(SortError::NotImplemented { len: values.len() })
    }
}

impl<T, F> SmallSort<T> for F
where
    F: Fn(&mut [T]) -> Result<(), SortError>,
{
    fn sort_small(&self, values: &mut [T]) -> Result<(), SortError> {
        self(values)
    }
}

fn insertion_sort<T: Ord + Copy>(values: &mut [T]) {
    for i in 1..values.len() {
        let value = values[i];
        let mut j = i;
        while j > 0 && values[j - 1] > value {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = value;
    }
}
