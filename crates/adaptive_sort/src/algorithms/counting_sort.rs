use super::number_sort::fill_zeros;
use crate::SortContext;

/// Frequency-table sort for integral `f64` values spanning `[min, max]`.
/// Signed zeros share a slot; the number of `-0.0` values is tracked so the
/// output keeps the same bit patterns as the input.
pub fn sort(data: &mut [f64], min: f64, max: f64, ascending: bool, ctx: &mut SortContext) {
    debug_assert!(max >= min);
    let range = (max - min) as usize + 1;
    let counts = ctx.ensure_var_counts(range);
    counts.fill(0);

    let mut negative_zeros = 0usize;
    for &x in data.iter() {
        counts[(x - min) as usize] += 1;
        if x == 0.0 && x.is_sign_negative() {
            negative_zeros += 1;
        }
    }

    let mut out = 0usize;
    let mut emit = |idx: usize, count: usize| {
        let value = min + idx as f64;
        if value == 0.0 {
            fill_zeros(&mut data[out..(out + count)], negative_zeros, ascending);
        } else {
            data[out..(out + count)].fill(value);
        }
        out += count;
    };

    if ascending {
        for (idx, &count) in counts.iter().enumerate() {
            if count != 0 {
                emit(idx, count);
            }
        }
    } else {
        for (idx, &count) in counts.iter().enumerate().rev() {
            if count != 0 {
                emit(idx, count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small_range_both_directions() {
        let input = [5.0, -2.0, 3.0, 5.0, 0.0, -2.0, 1.0];
        let mut ctx = SortContext::default();

        let mut data = input;
        sort(&mut data, -2.0, 5.0, true, &mut ctx);
        assert_eq!(data, [-2.0, -2.0, 0.0, 1.0, 3.0, 5.0, 5.0]);

        let mut data = input;
        sort(&mut data, -2.0, 5.0, false, &mut ctx);
        assert_eq!(data, [5.0, 5.0, 3.0, 1.0, 0.0, -2.0, -2.0]);
    }

    #[test]
    fn keeps_signed_zero_bit_patterns() {
        let mut ctx = SortContext::default();
        let mut data = [0.0, 1.0, -0.0, -1.0, 0.0, -0.0];
        sort(&mut data, -1.0, 1.0, true, &mut ctx);
        let signs = data.iter().map(|x| x.is_sign_negative()).collect::<Vec<_>>();
        assert_eq!(data, [-1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(signs, [true, true, true, false, false, false]);

        sort(&mut data, -1.0, 1.0, false, &mut ctx);
        let signs = data.iter().map(|x| x.is_sign_negative()).collect::<Vec<_>>();
        assert_eq!(signs, [false, false, false, true, true, true]);
    }

    #[test]
    fn reuses_a_larger_table() {
        let mut ctx = SortContext::default();
        let mut wide = [100.0, 0.0, 50.0];
        sort(&mut wide, 0.0, 100.0, true, &mut ctx);
        let mut narrow = [2.0, 1.0, 2.0];
        sort(&mut narrow, 1.0, 2.0, true, &mut ctx);
        assert_eq!(narrow, [1.0, 2.0, 2.0]);
    }
}
