use simple_bitops::{bits_diff, bit_length, count_set_bits, full_adder, multiply, multiply_unsigned, switch_sign, BIT_WIDTH};
use simple_bitops::internal;

use std::time::{Duration, Instant};

use tracing::warn;

//-----------------------------------------------------------------------------

// Compares every arithmetic operation against native `i32` arithmetic on random pairs.
// Returns the total number of mismatches.
pub fn cross_check(n: usize) -> usize {
    println!("Generating {} random pairs", n);
    let pairs = internal::random_pairs(n);
    let nonnegative: Vec<(i32, i32)> = pairs.iter().map(|(a, b)| (a & i32::MAX, b & i32::MAX)).collect();
    println!("");

    let mut failures: usize = 0;
    failures += run_check("full_adder", &pairs, |a, b| full_adder(a, b) == a.wrapping_add(b));
    failures += run_check("multiply", &pairs, |a, b| multiply(a, b) == a.wrapping_mul(b));
    failures += run_check("multiply_unsigned", &nonnegative, |x, y| multiply_unsigned(x, y) == Ok(x.wrapping_mul(y)));
    failures += run_check("switch_sign", &pairs, |a, _| switch_sign(a) == a.wrapping_neg());
    failures += run_check("count_set_bits", &pairs, |a, _| count_set_bits(a) == a.count_ones());
    failures += run_check("bits_diff", &pairs, |a, b| bits_diff(a, b) == (a ^ b).count_ones());
    failures += run_check("bit_length", &nonnegative, |x, _| bit_length(x) == Ok((BIT_WIDTH as u32) - x.leading_zeros()));

    failures
}

fn run_check<F: Fn(i32, i32) -> bool>(name: &str, pairs: &[(i32, i32)], check: F) -> usize {
    println!("Checking {}", name);
    let now = Instant::now();
    let mut failures: usize = 0;
    for (a, b) in pairs.iter() {
        if !check(*a, *b) {
            warn!(operation = name, a = *a, b = *b, "mismatch against native arithmetic");
            failures += 1;
        }
    }
    let duration = now.elapsed();
    println!("Time:       {}", check_time(pairs.len(), &duration));
    println!("Mismatches: {}", failures);
    println!("");
    failures
}

fn check_time(checks: usize, duration: &Duration) -> String {
    let ns = (duration.as_nanos() as f64) / (checks as f64);
    format!("{:.3} seconds ({:.0} ns/check)", duration.as_secs_f64(), ns)
}

//-----------------------------------------------------------------------------
