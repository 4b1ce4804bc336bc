//! Multiplication without a native multiply.
//!
//! [`multiply`] handles signed factors by consuming the multiplier one bit at a time with the scaling shifts:
//!
//! * `a * b = (2a) * (b / 2)` for even `b`;
//! * `a * b = (2a) * ((b - 1) / 2) + a` for odd positive `b`;
//! * `a * b = (2a) * ((b + 1) / 2) - a` for odd negative `b`.
//!
//! Each step halves the magnitude of `b`, so the recursion ends after at most [`BIT_WIDTH`] levels.
//! The identities hold modulo 2^32, which makes the result equal to wrapping multiplication.
//!
//! [`multiply_unsigned`] is the shift-and-add method for nonnegative factors: every set bit `i` of the multiplier adds `x << i` to the result.

use crate::bits::BIT_WIDTH;
use crate::error::BitError;
use crate::predicates::{is_even, is_positive};
use crate::shift::{divide_by_two, multiply_by_two};

use tracing::trace;


//-----------------------------------------------------------------------------

/// Returns `a * b` with two's-complement wraparound.
///
/// # Examples
///
/// ```
/// use simple_bitops::multiply;
///
/// assert_eq!(multiply::multiply(2, 3), 6);
/// assert_eq!(multiply::multiply(2, -3), -6);
/// assert_eq!(multiply::multiply(-7, i32::MIN), i32::MIN);
/// ```
pub fn multiply(a: i32, b: i32) -> i32 {
    multiply_at_depth(a, b, 0)
}

fn multiply_at_depth(a: i32, b: i32, depth: usize) -> i32 {
    debug_assert!(depth <= BIT_WIDTH, "multiply: recursion depth {} exceeds the bit width", depth);
    if a == 0 || b == 0 {
        return 0;
    }
    trace!(a = a, b = b, depth = depth, "multiply step");

    let doubled = multiply_by_two(a);
    if is_even(b) {
        multiply_at_depth(doubled, divide_by_two(b), depth + 1)
    } else if is_positive(b) {
        multiply_at_depth(doubled, divide_by_two(b - 1), depth + 1).wrapping_add(a)
    } else {
        // `b` is odd, so `b + 1` cannot overflow even for `i32::MIN + 1`.
        multiply_at_depth(doubled, divide_by_two(b + 1), depth + 1).wrapping_sub(a)
    }
}

//-----------------------------------------------------------------------------

/// Returns `x * y` for nonnegative `x` and `y` using shifts and additions.
///
/// The product wraps if it does not fit in an `i32`.
/// The multiplier is consumed with a logical shift, and the loop never runs more than [`BIT_WIDTH`] times.
///
/// # Examples
///
/// ```
/// use simple_bitops::multiply;
///
/// assert_eq!(multiply::multiply_unsigned(2, 3), Ok(6));
/// assert_eq!(multiply::multiply_unsigned(12, 0), Ok(0));
/// ```
///
/// # Errors
///
/// Returns [`BitError::NegativeInput`] if either factor is negative.
pub fn multiply_unsigned(x: i32, y: i32) -> Result<i32, BitError> {
    if x < 0 {
        return Err(BitError::NegativeInput { value: x });
    }
    if y < 0 {
        return Err(BitError::NegativeInput { value: y });
    }

    let mut result: i32 = 0;
    let mut multiplier = y as u32;
    let mut bit_index: usize = 0;
    while multiplier != 0 && bit_index < BIT_WIDTH {
        if multiplier & 1 != 0 {
            result = result.wrapping_add(x << bit_index);
        }
        bit_index += 1;
        multiplier >>= 1;
    }
    trace!(x = x, y = y, iterations = bit_index, "multiply_unsigned finished");

    Ok(result)
}

//-----------------------------------------------------------------------------
