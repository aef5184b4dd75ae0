use crate::SortContext;

use super::number_sort;

/// Radix sort for integral `f64` values whose magnitude fits in 53 bits.
///
/// Negative values are stored by magnitude in one key run and positive
/// values in another; both runs are sorted byte by byte and then written
/// back as negatives (reversed), zeros, positives for ascending order, or
/// the mirror image for descending order.
pub fn sort(data: &mut [f64], ascending: bool, ctx: &mut SortContext) {
    let SortContext {
        scratch,
        keys,
        counts256,
        ..
    } = ctx;

    keys.clear();
    keys.extend(data.iter().filter(|&&x| x < 0.0).map(|&x| (-x) as u64));
    let negative_len = keys.len();
    keys.extend(data.iter().filter(|&&x| x > 0.0).map(|&x| x as u64));
    let zero_count = data.len() - keys.len();
    let negative_zeros = data
        .iter()
        .filter(|x| **x == 0.0 && x.is_sign_negative())
        .count();

    let (negative, positive) = keys.split_at_mut(negative_len);
    radix_sort_u64(negative, scratch, counts256);
    radix_sort_u64(positive, scratch, counts256);

    let mut out = 0usize;
    if ascending {
        for &m in negative.iter().rev() {
            data[out] = -(m as f64);
            out += 1;
        }
        number_sort::fill_zeros(&mut data[out..(out + zero_count)], negative_zeros, true);
        out += zero_count;
        for &m in positive.iter() {
            data[out] = m as f64;
            out += 1;
        }
    } else {
        for &m in positive.iter().rev() {
            data[out] = m as f64;
            out += 1;
        }
        number_sort::fill_zeros(&mut data[out..(out + zero_count)], negative_zeros, false);
        out += zero_count;
        for &m in negative.iter() {
            data[out] = -(m as f64);
            out += 1;
        }
    }
    debug_assert_eq!(out, data.len());
}

/// LSD radix sort, one byte per pass, skipping bytes on which every key
/// agrees above the highest differing bit.
pub fn radix_sort_u64(data: &mut [u64], scratch: &mut Vec<u64>, counts: &mut [usize; 256]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let passes = radix_passes(data);
    if passes == 0 {
        return;
    }

    if scratch.len() < len {
        scratch.resize(len, 0);
    }
    let scratch = &mut scratch[..len];

    let mut src_is_data = true;
    for pass in 0..passes {
        let shift = pass * 8;

        if src_is_data {
            count_digits(data, counts, shift);
            prefix_sum(counts);
            scatter(data, scratch, counts, shift);
        } else {
            count_digits(scratch, counts, shift);
            prefix_sum(counts);
            scatter(scratch, data, counts, shift);
        }

        src_is_data = !src_is_data;
    }

    if !src_is_data {
        data.copy_from_slice(scratch);
    }
}

#[inline]
fn radix_passes(data: &[u64]) -> usize {
    let first = data[0];
    let mut diff = 0_u64;
    for &x in data.iter().skip(1) {
        diff |= first ^ x;
    }
    if diff == 0 {
        return 0;
    }
    ((63 - diff.leading_zeros()) as usize / 8) + 1
}

#[inline]
fn count_digits(src: &[u64], counts: &mut [usize; 256], shift: usize) {
    counts.fill(0);
    for &x in src {
        counts[((x >> shift) & 0xFF) as usize] += 1;
    }
}

#[inline]
fn prefix_sum(counts: &mut [usize; 256]) {
    let mut sum = 0usize;
    for c in counts.iter_mut() {
        let old = *c;
        *c = sum;
        sum += old;
    }
}

#[inline]
fn scatter(src: &[u64], dst: &mut [u64], offsets: &mut [usize; 256], shift: usize) {
    for &x in src {
        let digit = ((x >> shift) & 0xFF) as usize;
        dst[offsets[digit]] = x;
        offsets[digit] += 1;
    }
}
