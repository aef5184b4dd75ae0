/// Dutch national flag partition around `data[pivot]`.
///
/// Returns `(lt, gt)` such that `data[..lt]` is less than the pivot,
/// `data[lt..=gt]` is equivalent to it and `data[gt + 1..]` is greater. The
/// pivot itself always ends up in the middle band, so `lt <= gt`.
pub fn partition_3way<T, F>(data: &mut [T], pivot: usize, is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(pivot < data.len());
    data.swap(0, pivot);

    // data[lt] is always a member of the equal band.
    let mut lt = 0usize;
    let mut i = 1usize;
    let mut gt = data.len() - 1;

    while i <= gt {
        if is_less(&data[i], &data[lt]) {
            data.swap(lt, i);
            lt += 1;
            i += 1;
        } else if is_less(&data[lt], &data[i]) {
            data.swap(i, gt);
            gt -= 1;
        } else {
            i += 1;
        }
    }

    (lt, gt)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn check_bands(data: &[i32], lt: usize, gt: usize, pivot: i32) {
        assert!(lt <= gt && gt < data.len());
        assert!(data[..lt].iter().all(|&x| x < pivot));
        assert!(data[lt..=gt].iter().all(|&x| x == pivot));
        assert!(data[gt + 1..].iter().all(|&x| x > pivot));
    }

    #[test]
    fn splits_into_three_bands() {
        let mut data = vec![4, 9, 4, 1, 7, 4, 0, 8, 4, 2];
        let (lt, gt) = partition_3way(&mut data, 0, &mut |a, b| a < b);
        check_bands(&data, lt, gt, 4);
        assert_eq!((lt, gt), (3, 6));
    }

    #[test]
    fn all_equal_input_is_one_band() {
        let mut data = vec![7; 50];
        let (lt, gt) = partition_3way(&mut data, 25, &mut |a, b| a < b);
        assert_eq!((lt, gt), (0, 49));
    }

    #[test]
    fn extreme_pivots() {
        let mut data = vec![5, 3, 8, 1, 9];
        let (lt, gt) = partition_3way(&mut data, 3, &mut |a, b| a < b);
        assert_eq!((lt, gt), (0, 0));
        check_bands(&data, lt, gt, 1);

        let mut data = vec![5, 3, 8, 1, 9];
        let (lt, gt) = partition_3way(&mut data, 4, &mut |a, b| a < b);
        assert_eq!((lt, gt), (4, 4));
        check_bands(&data, lt, gt, 9);
    }

    #[test]
    fn preserves_elements_on_random_input() {
        let mut rng = StdRng::seed_from_u64(0xDAF1_2026);
        for _ in 0..100 {
            let len = rng.random_range(1..200);
            let mut data = (0..len)
                .map(|_| rng.random_range(0..8))
                .collect::<Vec<i32>>();
            let mut before = data.clone();
            let pivot_idx = rng.random_range(0..len);
            let pivot = data[pivot_idx];
            let (lt, gt) = partition_3way(&mut data, pivot_idx, &mut |a, b| a < b);
            check_bands(&data, lt, gt, pivot);

            let mut after = data.clone();
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
        }
    }
}
