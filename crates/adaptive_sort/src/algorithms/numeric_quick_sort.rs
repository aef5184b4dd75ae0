use crate::TUNED_PARAMS;

use super::insertion_sort;

#[inline(always)]
fn precedes(a: f64, b: f64, ascending: bool) -> bool {
    if ascending { a < b } else { a > b }
}

/// Quicksort over NaN-free floats driven by an explicit stack of inclusive
/// `(low, high)` ranges. The larger side of each split is pushed first so the
/// stack holds O(log n) entries.
pub fn sort(data: &mut [f64], ascending: bool, stack: &mut Vec<(usize, usize)>) {
    debug_assert!(data.iter().all(|x| !x.is_nan()));
    if data.len() < 2 {
        return;
    }

    stack.clear();
    stack.push((0, data.len() - 1));

    while let Some((low, high)) = stack.pop() {
        if high <= low {
            continue;
        }

        if high - low < TUNED_PARAMS.numeric_insertion_threshold {
            insertion_sort::insertion_sort(&mut data[low..=high], &mut |a: &f64, b: &f64| {
                precedes(*a, *b, ascending)
            });
            continue;
        }

        let pivot = partition(data, low, high, ascending);

        if pivot - low > high - pivot {
            stack.push((low, pivot - 1));
            stack.push((pivot + 1, high));
        } else {
            stack.push((pivot + 1, high));
            stack.push((low, pivot - 1));
        }
    }
}

/// Median-of-three partition. After ordering `low`, `mid` and `high`, the
/// pivot is parked at `high - 1` and both ends act as scan sentinels.
fn partition(data: &mut [f64], low: usize, high: usize, ascending: bool) -> usize {
    debug_assert!(high - low >= 2);
    let mid = low + ((high - low) >> 1);

    if precedes(data[mid], data[low], ascending) {
        data.swap(low, mid);
    }
    if precedes(data[high], data[low], ascending) {
        data.swap(low, high);
    }
    if precedes(data[high], data[mid], ascending) {
        data.swap(mid, high);
    }

    data.swap(mid, high - 1);
    let pivot = data[high - 1];

    let mut i = low;
    let mut j = high - 1;
    loop {
        i += 1;
        while precedes(data[i], pivot, ascending) {
            i += 1;
        }
        j -= 1;
        while precedes(pivot, data[j], ascending) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        data.swap(i, j);
    }

    data.swap(i, high - 1);
    i
}
