use crate::{NumericPlan, SortContext, TUNED_PARAMS};

use super::{counting_sort, numeric_quick_sort, radix_sort_lsd_base256};

/// Single pass summary of a numeric input. Stops at the first NaN.
#[derive(Clone, Copy, Debug)]
struct Scan {
    has_nan: bool,
    all_integers: bool,
    min: f64,
    max: f64,
}

fn scan(data: &[f64]) -> Scan {
    let mut scan = Scan {
        has_nan: false,
        all_integers: true,
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    for &x in data {
        if x.is_nan() {
            scan.has_nan = true;
            break;
        }
        if x < scan.min {
            scan.min = x;
        }
        if x > scan.max {
            scan.max = x;
        }
        if scan.all_integers && !is_exact_integer(x) {
            scan.all_integers = false;
        }
    }

    scan
}

/// Integral and small enough that its magnitude converts to `u64` exactly.
#[inline]
fn is_exact_integer(x: f64) -> bool {
    x.fract() == 0.0 && x.abs() <= TUNED_PARAMS.max_exact_integer
}

pub fn classify(data: &[f64]) -> NumericPlan {
    let len = data.len();
    match len {
        0 | 1 => return NumericPlan::Untouched,
        2 => return NumericPlan::Swap2,
        3 => return NumericPlan::Network3,
        _ => {}
    }

    let scan = scan(data);
    if scan.has_nan {
        return NumericPlan::NanSplit;
    }

    let range = scan.max - scan.min;
    if scan.all_integers
        && range < (len * TUNED_PARAMS.counting_range_factor) as f64
        && range < TUNED_PARAMS.counting_max_range as f64
    {
        return NumericPlan::CountingSort {
            min: scan.min,
            max: scan.max,
        };
    }

    if scan.all_integers && len > TUNED_PARAMS.radix_min_len {
        return NumericPlan::RadixSort;
    }

    NumericPlan::QuickSort
}

pub fn sort(data: &mut [f64], ascending: bool, ctx: &mut SortContext) {
    match classify(data) {
        NumericPlan::Untouched => {}
        NumericPlan::Swap2 => {
            if ordered_before(data[1], data[0], ascending) {
                data.swap(0, 1);
            }
        }
        NumericPlan::Network3 => sort3(data, ascending),
        NumericPlan::NanSplit => {
            let valid = move_nans_to_end(data);
            sort(&mut data[..valid], ascending, ctx);
        }
        NumericPlan::CountingSort { min, max } => {
            counting_sort::sort(data, min, max, ascending, ctx)
        }
        NumericPlan::RadixSort => radix_sort_lsd_base256::sort(data, ascending, ctx),
        NumericPlan::QuickSort => numeric_quick_sort::sort(data, ascending, &mut ctx.stack),
    }
}

/// Direction-aware order in which NaN sorts after every number, whichever
/// way the numbers run.
#[inline]
fn ordered_before(a: f64, b: f64, ascending: bool) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (false, true) => true,
        (true, _) => false,
        (false, false) => {
            if ascending {
                a < b
            } else {
                a > b
            }
        }
    }
}

fn sort3(data: &mut [f64], ascending: bool) {
    let [mut a, mut b, mut c] = [data[0], data[1], data[2]];

    if ordered_before(b, a, ascending) {
        std::mem::swap(&mut a, &mut b);
    }
    if ordered_before(c, b, ascending) {
        std::mem::swap(&mut b, &mut c);
        if ordered_before(b, a, ascending) {
            std::mem::swap(&mut a, &mut b);
        }
    }

    data[0] = a;
    data[1] = b;
    data[2] = c;
}

/// Swaps every NaN behind the numbers, keeping the numbers' relative order.
/// Returns the count of non-NaN values.
fn move_nans_to_end(data: &mut [f64]) -> usize {
    let mut write = 0usize;
    for read in 0..data.len() {
        if !data[read].is_nan() {
            data.swap(write, read);
            write += 1;
        }
    }
    write
}

/// Writes `slice.len()` zeros of which `negative` carry the sign bit. Negative
/// zeros lead in ascending order and trail in descending order.
pub(crate) fn fill_zeros(slice: &mut [f64], negative: usize, ascending: bool) {
    debug_assert!(negative <= slice.len());
    if ascending {
        let (neg, pos) = slice.split_at_mut(negative);
        neg.fill(-0.0);
        pos.fill(0.0);
    } else {
        let (pos, neg) = slice.split_at_mut(slice.len() - negative);
        pos.fill(0.0);
        neg.fill(-0.0);
    }
}
