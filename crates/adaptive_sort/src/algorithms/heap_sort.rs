pub fn heap_sort<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut start = (len - 2) / 2;
    loop {
        sift_down(data, start, len, is_less);
        if start == 0 {
            break;
        }
        start -= 1;
    }

    let mut end = len - 1;
    while end > 0 {
        data.swap(0, end);
        sift_down(data, 0, end, is_less);
        end -= 1;
    }
}

#[inline]
fn sift_down<T, F>(data: &mut [T], mut root: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut swap_idx = child;
        if child + 1 < end && is_less(&data[child], &data[child + 1]) {
            swap_idx = child + 1;
        }

        if !is_less(&data[root], &data[swap_idx]) {
            break;
        }

        data.swap(root, swap_idx);
        root = swap_idx;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn matches_std_on_random_input() {
        let mut rng = StdRng::seed_from_u64(0x4EA9_2026);
        for &size in &[0_usize, 1, 2, 3, 7, 64, 257, 1000] {
            let mut data = (0..size)
                .map(|_| rng.random_range(-50_i64..50))
                .collect::<Vec<_>>();
            let mut expected = data.clone();
            expected.sort_unstable();
            heap_sort(&mut data, &mut |a, b| a < b);
            assert_eq!(data, expected, "size={size}");
        }
    }

    #[test]
    fn respects_custom_order() {
        let mut data = vec!["pear", "fig", "banana", "kiwi"];
        heap_sort(&mut data, &mut |a: &&str, b: &&str| {
            a.len() > b.len() || (a.len() == b.len() && a < b)
        });
        assert_eq!(data, vec!["banana", "kiwi", "pear", "fig"]);
    }
}
