//! Addition built gate by gate from XOR, AND, and OR.

use crate::bits::{self, BIT_WIDTH};

//-----------------------------------------------------------------------------

/// Returns `a + b` computed with a ripple-carry full adder.
///
/// Every position `i` produces `sum = a_i ^ b_i ^ carry` and `carry = ((a_i ^ b_i) & carry) | (a_i & b_i)`.
/// The carry out of the sign bit is discarded, so the result is identical to wrapping addition.
///
/// # Examples
///
/// ```
/// use simple_bitops::adder;
///
/// assert_eq!(adder::full_adder(7, 3), 10);
/// assert_eq!(adder::full_adder(-7, 3), -4);
/// assert_eq!(adder::full_adder(i32::MAX, 1), i32::MIN);
/// ```
pub fn full_adder(a: i32, b: i32) -> i32 {
    let mut result: i32 = 0;
    let mut carry: i32 = 0;

    for pos in 0..BIT_WIDTH {
        let a_bit = bits::bit_at(a, pos);
        let b_bit = bits::bit_at(b, pos);
        let half_sum = a_bit ^ b_bit;
        let sum = half_sum ^ carry;
        carry = (half_sum & carry) | (a_bit & b_bit);
        result |= sum << pos;
    }

    result
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
