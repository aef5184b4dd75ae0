use std::cmp::Ordering;

mod algorithms;

pub use algorithms::heap_sort::heap_sort;
pub use algorithms::insertion_sort::{apply_insertion_sort_if_needed, insertion_sort_range};
pub use algorithms::network_sort::network_sort;
pub use algorithms::partition::partition_3way;
pub use algorithms::pivot::{choose_pivot, median_of_three};
pub use algorithms::range::{ValidatedRange, validate_range};

/// Whole-slice algorithm picked by the comparator-based entry points.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    Untouched,
    Network,
    Insertion,
    Introsort,
}

/// Sub-algorithm picked by [`sort_numbers`] from a single scan of the input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericPlan {
    Untouched,
    Swap2,
    Network3,
    NanSplit,
    CountingSort { min: f64, max: f64 },
    RadixSort,
    QuickSort,
}

pub fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Untouched => "untouched",
        Strategy::Network => "network_sort",
        Strategy::Insertion => "insertion_sort",
        Strategy::Introsort => "introsort",
    }
}

pub fn plan_name(plan: NumericPlan) -> &'static str {
    match plan {
        NumericPlan::Untouched => "untouched",
        NumericPlan::Swap2 => "swap2",
        NumericPlan::Network3 => "network3",
        NumericPlan::NanSplit => "nan_split",
        NumericPlan::CountingSort { .. } => "counting_sort",
        NumericPlan::RadixSort => "radix_sort_lsd_base256",
        NumericPlan::QuickSort => "numeric_quick_sort",
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub network_max_len: usize,
    pub insertion_threshold: usize,
    pub ninther_threshold: usize,
    pub depth_factor: usize,
    pub counting_range_factor: usize,
    pub counting_max_range: usize,
    pub radix_min_len: usize,
    pub numeric_insertion_threshold: usize,
    pub max_exact_integer: f64,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    network_max_len: 5,
    insertion_threshold: 24,
    ninther_threshold: 128,
    depth_factor: 2,
    counting_range_factor: 2,
    counting_max_range: 1_000_000,
    radix_min_len: 100,
    numeric_insertion_threshold: 16,
    max_exact_integer: 9_007_199_254_740_992.0,
};

/// Reusable temporaries for [`sort_numbers_with_ctx`]. Buffers only grow.
#[derive(Clone, Debug)]
pub struct SortContext {
    pub scratch: Vec<u64>,
    pub keys: Vec<u64>,
    pub counts256: [usize; 256],
    pub var_counts: Vec<usize>,
    pub stack: Vec<(usize, usize)>,
}

impl Default for SortContext {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
            keys: Vec::new(),
            counts256: [0; 256],
            var_counts: Vec::new(),
            stack: Vec::new(),
        }
    }
}

impl SortContext {
    #[inline]
    pub(crate) fn ensure_var_counts(&mut self, len: usize) -> &mut [usize] {
        if self.var_counts.len() < len {
            self.var_counts.resize(len, 0);
        }
        &mut self.var_counts[..len]
    }
}

pub fn select_strategy(len: usize) -> Strategy {
    if len <= 1 {
        Strategy::Untouched
    } else if len <= TUNED_PARAMS.network_max_len {
        Strategy::Network
    } else if len <= TUNED_PARAMS.insertion_threshold {
        Strategy::Insertion
    } else {
        Strategy::Introsort
    }
}

pub fn classify_numbers(data: &[f64]) -> NumericPlan {
    algorithms::number_sort::classify(data)
}

/// Sorts `data` in place by its natural order and hands the same slice back.
/// Not stable.
pub fn sort<T: Ord>(data: &mut [T]) -> &mut [T] {
    sort_by(data, T::cmp)
}

/// Sorts `data` in place with `compare`, which must describe a strict weak
/// order. An inconsistent comparator leaves the elements in an unspecified
/// order but never loses or duplicates any; a panicking one unwinds to the
/// caller.
pub fn sort_by<T, F>(data: &mut [T], compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut is_less = algorithms::common::less_by(compare);
    dispatch(data, &mut is_less);
    data
}

pub fn sort_by_key<T, K, F>(data: &mut [T], mut key: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by(data, |a, b| key(a).cmp(&key(b)))
}

/// Sorts the inclusive window `[start, end]` after clamping it to the slice
/// bounds with [`validate_range`]. Elements outside the window keep their
/// positions.
pub fn sort_range_by<T, F>(data: &mut [T], start: isize, end: isize, compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    if let Some(window) = validate_range(data.len(), start, end).as_range() {
        sort_by(&mut data[window], compare);
    }
    data
}

pub fn sort_range<T: Ord>(data: &mut [T], start: isize, end: isize) -> &mut [T] {
    sort_range_by(data, start, end, T::cmp)
}

fn dispatch<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    match select_strategy(data.len()) {
        Strategy::Untouched => {}
        Strategy::Network => algorithms::network_sort::network_sort(data, is_less),
        Strategy::Insertion => algorithms::insertion_sort::insertion_sort(data, is_less),
        Strategy::Introsort => algorithms::introsort::sort(data, is_less),
    }
}

/// Sorts floats in place. NaN values always end up after every number,
/// whether `ascending` is set or not.
pub fn sort_numbers(data: &mut [f64], ascending: bool) -> &mut [f64] {
    let mut ctx = SortContext::default();
    sort_numbers_with_ctx(data, ascending, &mut ctx)
}

pub fn sort_numbers_with_ctx<'a>(
    data: &'a mut [f64],
    ascending: bool,
    ctx: &mut SortContext,
) -> &'a mut [f64] {
    algorithms::number_sort::sort(data, ascending, ctx);
    data
}
