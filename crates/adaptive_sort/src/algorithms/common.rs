use crate::TUNED_PARAMS;

#[inline]
pub fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

#[inline]
pub fn introsort_depth_limit(n: usize) -> usize {
    floor_log2(n) * TUNED_PARAMS.depth_factor
}

/// Adapts a three-way comparator into the strict "less than" predicate the
/// algorithms are written against.
#[inline]
pub fn less_by<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> std::cmp::Ordering,
{
    move |a, b| compare(a, b) == std::cmp::Ordering::Less
}
