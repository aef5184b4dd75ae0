use crate::TUNED_PARAMS;

use super::{common, heap_sort, insertion_sort, partition, pivot};

/// Depth-limited three-way quicksort. Each partition step spends one unit of
/// a `2 * floor(log2(n))` budget; an exhausted budget hands the remaining
/// range to heapsort.
pub fn sort<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if data.len() < 2 {
        return;
    }
    let depth_limit = common::introsort_depth_limit(data.len());
    introsort_recursive(data, depth_limit, is_less);
}

fn introsort_recursive<T, F>(mut data: &mut [T], mut depth_limit: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while data.len() > 1 {
        if data.len() <= TUNED_PARAMS.insertion_threshold {
            insertion_sort::insertion_sort(data, is_less);
            return;
        }
        if depth_limit == 0 {
            heap_sort::heap_sort(data, is_less);
            return;
        }
        depth_limit -= 1;

        let pivot = pivot::choose_pivot(data, is_less);
        let (lt, gt) = partition::partition_3way(data, pivot, is_less);

        let (left, rest) = data.split_at_mut(lt);
        let (_, right) = rest.split_at_mut(gt + 1 - lt);

        // Recurse into the smaller band, loop on the larger one.
        if left.len() < right.len() {
            introsort_recursive(left, depth_limit, is_less);
            data = right;
        } else {
            introsort_recursive(right, depth_limit, is_less);
            data = left;
        }
    }
}
