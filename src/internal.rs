// Utility functions for tests and the demo binary.

use rand::Rng;

//-----------------------------------------------------------------------------

// Values where wraparound, sign handling, and carry propagation tend to go wrong.
pub const EDGE_VALUES: [i32; 14] = [
    0, 1, -1, 2, -2, 3, -3,
    0x5555_5555, -0x5555_5556,
    i32::MAX, i32::MAX - 1,
    i32::MIN, i32::MIN + 1,
    1 << 30,
];

//-----------------------------------------------------------------------------

// Returns `n` random integers.
pub fn random_values(n: usize) -> Vec<i32> {
    let mut result: Vec<i32> = Vec::with_capacity(n);
    let mut rng = rand::thread_rng();
    for _ in 0..n {
        result.push(rng.gen());
    }
    result
}

// Returns `n` random nonnegative integers.
pub fn random_nonnegative(n: usize) -> Vec<i32> {
    random_values(n).into_iter().map(|x| x & i32::MAX).collect()
}

// Returns `n` random pairs of integers, followed by all pairs of edge values.
pub fn random_pairs(n: usize) -> Vec<(i32, i32)> {
    let mut result: Vec<(i32, i32)> = Vec::with_capacity(n + EDGE_VALUES.len() * EDGE_VALUES.len());
    let mut rng = rand::thread_rng();
    for _ in 0..n {
        result.push(rng.gen());
    }
    for a in EDGE_VALUES.iter() {
        for b in EDGE_VALUES.iter() {
            result.push((*a, *b));
        }
    }
    result
}

//-----------------------------------------------------------------------------
