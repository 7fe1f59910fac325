//! Common test utilities for codec roundtrip testing.

use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

/// Returns various input sizes to test codec behavior, including
/// non-multiples of the 4-element code-byte blocking.
pub fn test_input_sizes() -> Vec<usize> {
    vec![1, 2, 3, 4, 5, 7, 8, 31, 64, 127, 1000, 4096]
}

/// Generates test data vectors of size `n` with various patterns.
pub fn get_test_cases(n: usize) -> Vec<Vec<u32>> {
    let mut rng = StdRng::seed_from_u64(14);

    vec![
        // Zeroes
        vec![0u32; n],
        // Same non-zero
        vec![14u32; n],
        // Ascending values
        (0..n).map(|i| i as u32).collect::<Vec<u32>>(),
        // Descending values
        (0..n).rev().map(|i| i as u32).collect::<Vec<u32>>(),
        // Constant stride, as parent-index tables tend to look
        (0..n).map(|i| (i as u32) * 6).collect::<Vec<u32>>(),
        // Bit-flipping pattern
        (0..n)
            .map(|i| ((i as u32) * 32) ^ ((i as u32) >> 1))
            .collect::<Vec<u32>>(),
        // Alternating large and small values
        (0..n)
            .map(|i| if i % 2 == 0 { 1 << 30 } else { 3 })
            .collect::<Vec<u32>>(),
        // Random u32 values across the full range, sign bit included
        (0..n).map(|_| rng.random::<u32>()).collect::<Vec<u32>>(),
        // Spike in the middle
        (0..n)
            .map(|i| if i == n / 2 { u32::MAX } else { 1 })
            .collect::<Vec<u32>>(),
        // An empty vector
        Vec::new(),
    ]
}
