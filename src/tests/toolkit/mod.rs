use crate::prelude::*;
use itertools::Itertools;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Reference "now" used throughout the tests, so they remain reproducible
pub fn reference_now() -> Epoch {
    Epoch::from_gregorian_utc(2024, 7, 18, 13, 47, 21, 123_456_789)
}

/// Builds a UTC [Epoch]
pub fn utc(y: i32, m: u8, d: u8, hh: u8, mm: u8, ss: u8) -> Epoch {
    Epoch::from_gregorian_utc_hms(y, m, d, hh, mm, ss)
}

/// Seeded random generator
pub fn test_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random UTC [Epoch] between 1990 and 2050,
/// day of month always being <= 28.
pub fn random_epoch(rng: &mut StdRng) -> Epoch {
    Epoch::from_gregorian_utc(
        rng.gen_range(1990..2050),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28),
        rng.gen_range(0..24),
        rng.gen_range(0..60),
        rng.gen_range(0..60),
        rng.gen_range(0..1_000_000_000),
    )
}

/// Walks `interval` by `unit`, without using the crate iterators
pub fn reference_walk(interval: &Interval, unit: CalendarUnit) -> Vec<Epoch> {
    let mut ret = Vec::new();
    let mut t = interval.start();
    while t < interval.end() {
        ret.push(t);
        t = unit.advance(t);
    }
    ret
}

/// Consumes `chunks`, materializing every [Chunk]
pub fn collect_chunks(chunks: Chunks) -> Vec<Vec<Epoch>> {
    chunks.map(|chunk| chunk.collect()).collect()
}

/// Verifies all chunking guarantees, for given `chunks`
/// obtained by chunking `interval` by `unit` with given `size`
pub fn check_chunks(interval: &Interval, unit: CalendarUnit, size: usize, chunks: &[Vec<Epoch>]) {
    let expected = reference_walk(interval, unit);

    for (index, chunk) in chunks.iter().enumerate() {
        assert!(
            !chunk.is_empty() && chunk.len() <= size,
            "{} ({}): chunk[{}] has invalid length {}",
            interval,
            unit,
            index,
            chunk.len()
        );
        assert!(
            chunk.iter().all(|t| interval.contains(*t)),
            "{} ({}): chunk[{}] out of interval",
            interval,
            unit,
            index
        );
        if index < chunks.len() - 1 {
            assert_eq!(chunk.len(), size, "{}: only last chunk may be short", unit);
        }
    }

    let flattened = chunks.iter().flatten().copied().collect::<Vec<_>>();
    assert_eq!(flattened, expected, "{} ({}): chunks do not match walk", interval, unit);

    assert!(
        flattened.iter().tuple_windows().all(|(a, b)| a < b),
        "{} ({}): chunks not strictly increasing",
        interval,
        unit
    );

    assert_eq!(
        chunks.len(),
        expected.len().div_ceil(size),
        "{} ({}): invalid number of chunks",
        interval,
        unit
    );
}
