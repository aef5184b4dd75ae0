use crate::TUNED_PARAMS;

/// Returns whichever of `a`, `b`, `c` indexes the median value, using at
/// most three comparisons. Ties resolve in argument order: among equivalent
/// medians the earliest argument wins.
#[inline]
pub fn median_of_three<T, F>(data: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&data[b], &data[a]) {
        // b < a
        if !is_less(&data[b], &data[c]) {
            b
        } else if is_less(&data[c], &data[a]) {
            c
        } else {
            a
        }
    } else if is_less(&data[c], &data[b]) {
        // a <= b, c < b
        if is_less(&data[a], &data[c]) {
            c
        } else {
            a
        }
    } else if is_less(&data[a], &data[b]) {
        b
    } else {
        a
    }
}

/// Picks a pivot index for `data`: median-of-three of the ends and middle for
/// short slices, the ninther of nine samples spread `len / 8` apart otherwise.
pub fn choose_pivot<T, F>(data: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    debug_assert!(len >= 3);
    let high = len - 1;
    let mid = len / 2;

    if len < TUNED_PARAMS.ninther_threshold {
        return median_of_three(data, 0, mid, high, is_less);
    }

    let gap = len / 8;
    let m1 = median_of_three(data, 0, gap, 2 * gap, is_less);
    let m2 = median_of_three(data, mid - gap, mid, mid + gap, is_less);
    let m3 = median_of_three(data, high - 2 * gap, high - gap, high, is_less);
    median_of_three(data, m1, m2, m3, is_less)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lt(a: &i32, b: &i32) -> bool {
        a < b
    }

    #[test]
    fn picks_median_of_every_ordering() {
        let orders = [
            [1, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
        ];
        for data in orders {
            let idx = median_of_three(&data, 0, 1, 2, &mut lt);
            assert_eq!(data[idx], 2, "input={data:?}");
        }
    }

    #[test]
    fn ties_prefer_earlier_arguments() {
        assert_eq!(median_of_three(&[5, 5, 5], 0, 1, 2, &mut lt), 0);
        assert_eq!(median_of_three(&[5, 5, 9], 0, 1, 2, &mut lt), 0);
        assert_eq!(median_of_three(&[5, 1, 5], 0, 1, 2, &mut lt), 0);
        assert_eq!(median_of_three(&[1, 5, 5], 0, 1, 2, &mut lt), 1);
        assert_eq!(median_of_three(&[5, 5, 3], 0, 1, 2, &mut lt), 0);
    }

    #[test]
    fn earliest_median_wins_over_all_small_triples() {
        for x in 0..3 {
            for y in 0..3 {
                for z in 0..3 {
                    let data = [x, y, z];
                    let mut sorted = data;
                    sorted.sort_unstable();
                    let expected = data.iter().position(|&v| v == sorted[1]).unwrap();

                    let mut calls = 0;
                    let idx = median_of_three(&data, 0, 1, 2, &mut |a: &i32, b: &i32| {
                        calls += 1;
                        a < b
                    });
                    assert_eq!(idx, expected, "input={data:?}");
                    assert!(calls <= 3, "input={data:?} calls={calls}");
                }
            }
        }
    }

    #[test]
    fn uses_at_most_three_comparisons() {
        let data = [3, 1, 2];
        let mut calls = 0;
        median_of_three(&data, 0, 1, 2, &mut |a: &i32, b: &i32| {
            calls += 1;
            a < b
        });
        assert!(calls <= 3);
    }

    #[test]
    fn ninther_lands_near_the_middle_of_sorted_input() {
        let data = (0..1024).collect::<Vec<i32>>();
        let idx = choose_pivot(&data, &mut lt);
        assert!((384..=640).contains(&idx), "idx={idx}");

        let short = (0..100).rev().collect::<Vec<i32>>();
        assert_eq!(choose_pivot(&short, &mut lt), 50);
    }
}
