pub mod common;
pub mod counting_sort;
pub mod heap_sort;
pub mod insertion_sort;
pub mod introsort;
pub mod network_sort;
pub mod number_sort;
pub mod numeric_quick_sort;
pub mod partition;
pub mod pivot;
pub mod radix_sort_lsd_base256;
pub mod range;
