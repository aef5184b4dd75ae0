const NETWORK_2: [(usize, usize); 1] = [(0, 1)];
const NETWORK_3: [(usize, usize); 3] = [(0, 1), (1, 2), (0, 1)];
const NETWORK_4: [(usize, usize); 5] = [(0, 2), (1, 3), (0, 1), (2, 3), (1, 2)];
const NETWORK_5: [(usize, usize); 9] = [
    (0, 1),
    (3, 4),
    (0, 3),
    (1, 4),
    (1, 2),
    (0, 1),
    (2, 3),
    (1, 2),
    (3, 4),
];

/// Sorts a slice of 2 to 5 elements with a fixed compare-exchange sequence
/// (1, 3, 5 and 9 comparisons). Other lengths are left untouched.
pub fn network_sort<T, F>(data: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let network: &[(usize, usize)] = match data.len() {
        2 => &NETWORK_2,
        3 => &NETWORK_3,
        4 => &NETWORK_4,
        5 => &NETWORK_5,
        _ => return,
    };

    for &(i, j) in network {
        compare_exchange(data, i, j, is_less);
    }
}

#[inline(always)]
fn compare_exchange<T, F>(data: &mut [T], i: usize, j: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&data[j], &data[i]) {
        data.swap(i, j);
    }
}

/// Number of comparisons the network for `len` elements performs.
#[cfg(test)]
const fn comparator_count(len: usize) -> usize {
    match len {
        2 => NETWORK_2.len(),
        3 => NETWORK_3.len(),
        4 => NETWORK_4.len(),
        5 => NETWORK_5.len(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permutations(n: usize) -> Vec<Vec<u32>> {
        if n == 0 {
            return vec![vec![]];
        }
        let mut out = Vec::new();
        for p in permutations(n - 1) {
            for pos in 0..=p.len() {
                let mut q = p.clone();
                q.insert(pos, (n - 1) as u32);
                out.push(q);
            }
        }
        out
    }

    #[test]
    fn sorts_every_permutation() {
        for len in 2..=5 {
            for perm in permutations(len) {
                let mut data = perm.clone();
                network_sort(&mut data, &mut |a, b| a < b);
                let expected = (0..len as u32).collect::<Vec<_>>();
                assert_eq!(data, expected, "input={perm:?}");
            }
        }
    }

    #[test]
    fn sorts_every_zero_one_input() {
        for len in 2..=5 {
            for mask in 0_u32..(1 << len) {
                let mut data = (0..len).map(|i| (mask >> i) & 1).collect::<Vec<_>>();
                let mut expected = data.clone();
                expected.sort_unstable();
                network_sort(&mut data, &mut |a, b| a < b);
                assert_eq!(data, expected, "len={len} mask={mask:b}");
            }
        }
    }

    #[test]
    fn comparison_counts_are_fixed() {
        for len in 2..=5 {
            let mut calls = 0;
            let mut data = (0..len).rev().collect::<Vec<_>>();
            network_sort(&mut data, &mut |a, b| {
                calls += 1;
                a < b
            });
            assert_eq!(calls, comparator_count(len));
        }
        assert_eq!(
            [2, 3, 4, 5].map(comparator_count),
            [1, 3, 5, 9]
        );
    }

    #[test]
    fn other_lengths_are_ignored() {
        let mut data = vec![3, 2, 1, 0, 5, 4];
        network_sort(&mut data, &mut |a, b| a < b);
        assert_eq!(data, vec![3, 2, 1, 0, 5, 4]);
    }
}
