/// Stable shift-based insertion sort. Elements are moved with adjacent swaps
/// so a panicking comparator leaves a permutation of the input behind.
pub fn insertion_sort<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && is_less(&data[j], &data[j - 1]) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Insertion sort over the inclusive window `[start, end]`. An empty or
/// out-of-bounds window is a no-op.
pub fn insertion_sort_range<T, F>(data: &mut [T], start: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if start >= end || end >= data.len() {
        return;
    }
    insertion_sort(&mut data[start..=end], is_less);
}

/// Sorts `[low, high]` with insertion sort when the window holds at most
/// `threshold` elements. Returns whether the window was handled.
pub fn apply_insertion_sort_if_needed<T, F>(
    data: &mut [T],
    low: usize,
    high: usize,
    threshold: usize,
    is_less: &mut F,
) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if high < low || high - low + 1 > threshold {
        return false;
    }
    insertion_sort_range(data, low, high, is_less);
    true
}
