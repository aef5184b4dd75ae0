use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 80;
const SMALL_RUNTIME_MEASURE_MS: u64 = 120;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 500;
const LARGE_RUNTIME_MIN_LEN: usize = 65536;
const RNG_SEED: u64 = 0x5EED_2026;

/// Shape of a generated benchmark input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    FewDistinct,
    NearlySorted1pctSwaps,
    Descending,
    OrganPipe,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 5] = [
    Distribution::RandomUniform,
    Distribution::FewDistinct,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Descending,
    Distribution::OrganPipe,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::FewDistinct => "few_distinct",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Descending => "descending",
            Self::OrganPipe => "organ_pipe",
        }
    }
}

/// Picks sample size and timing by input length; long inputs switch to flat
/// sampling so a handful of iterations fit the measurement window.
pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len < LARGE_RUNTIME_MIN_LEN {
        group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
        group.sampling_mode(SamplingMode::Auto);
        group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
    } else {
        group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
        group.sampling_mode(SamplingMode::Flat);
        group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn seeded_rng(dist: Distribution, len: usize, salt: u64) -> StdRng {
    let d = ALL_DISTRIBUTIONS
        .iter()
        .position(|&x| x == dist)
        .unwrap_or_default() as u64;
    StdRng::seed_from_u64(mix_seed(RNG_SEED ^ (d << 48) ^ (len as u64) ^ salt))
}

/// Integer keys in `[0, max]` laid out according to `dist`.
pub fn generate_keys<R: Rng + ?Sized>(
    rng: &mut R,
    dist: Distribution,
    len: usize,
    max: u64,
) -> Vec<u64> {
    match dist {
        Distribution::RandomUniform => (0..len).map(|_| rng.random_range(0..=max)).collect(),
        Distribution::FewDistinct => {
            let distinct = max.min(15);
            (0..len).map(|_| rng.random_range(0..=distinct)).collect()
        }
        Distribution::NearlySorted1pctSwaps => {
            let mut data = (0..len).map(|i| scale(i, len, max)).collect::<Vec<_>>();
            let swaps = (len / 100).max(1);
            for _ in 0..swaps {
                if len == 0 {
                    break;
                }
                let a = rng.random_range(0..len);
                let b = rng.random_range(0..len);
                data.swap(a, b);
            }
            data
        }
        Distribution::Descending => (0..len).rev().map(|i| scale(i, len, max)).collect(),
        Distribution::OrganPipe => {
            let half = len / 2;
            (0..half)
                .chain((0..len - half).rev())
                .map(|i| scale(i, len, max))
                .collect()
        }
    }
}

/// Floats built from the same layouts; `fraction` adds a non-integral part
/// so the numeric sort cannot take its integer paths.
pub fn generate_numbers<R: Rng + ?Sized>(
    rng: &mut R,
    dist: Distribution,
    len: usize,
    max: u64,
    fraction: bool,
) -> Vec<f64> {
    let offset = (max / 2) as f64;
    generate_keys(rng, dist, len, max)
        .into_iter()
        .map(|k| {
            let v = k as f64 - offset;
            if fraction { v + 0.5 } else { v }
        })
        .collect()
}

#[inline]
fn scale(i: usize, len: usize, max: u64) -> u64 {
    if len == 0 {
        return 0;
    }
    ((i as u128 * max as u128) / len as u128) as u64
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
