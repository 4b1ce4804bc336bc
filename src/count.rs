//! Population counts and the comparisons derived from them.

use crate::bits::{self, BIT_WIDTH};
use crate::error::BitError;

//-----------------------------------------------------------------------------

/// Returns the number of set bits in `n`.
///
/// All [`BIT_WIDTH`] positions are counted, so negative values work as expected.
///
/// # Examples
///
/// ```
/// use simple_bitops::count;
///
/// assert_eq!(count::count_set_bits(5), 2);
/// assert_eq!(count::count_set_bits(8), 1);
/// assert_eq!(count::count_set_bits(-1), 32);
/// ```
pub fn count_set_bits(n: i32) -> u32 {
    let mut result: u32 = 0;
    for pos in 0..BIT_WIDTH {
        result += bits::bit_at(n, pos) as u32;
    }
    result
}

/// Returns the Hamming distance between the bit patterns of `a` and `b`.
///
/// # Examples
///
/// ```
/// use simple_bitops::count;
///
/// assert_eq!(count::bits_diff(5, 4), 1);
/// assert_eq!(count::bits_diff(4, 7), 2);
/// ```
#[inline]
pub fn bits_diff(a: i32, b: i32) -> u32 {
    count_set_bits(a ^ b)
}

/// Returns the smallest `k` such that `2^k > n`.
///
/// For positive `n`, this is one more than the offset of the highest set bit.
/// Zero has length 0.
///
/// # Examples
///
/// ```
/// use simple_bitops::count;
///
/// assert_eq!(count::bit_length(5), Ok(3));
/// assert_eq!(count::bit_length(3), Ok(2));
/// assert_eq!(count::bit_length(0), Ok(0));
/// ```
///
/// # Errors
///
/// Returns [`BitError::NegativeInput`] if `n < 0`.
pub fn bit_length(n: i32) -> Result<u32, BitError> {
    if n < 0 {
        return Err(BitError::NegativeInput { value: n });
    }
    // `1 << (BIT_WIDTH - 1)` is negative, and every nonnegative `n` is below it.
    let mut length: usize = 0;
    while length < BIT_WIDTH - 1 && (1i32 << length) <= n {
        length += 1;
    }
    Ok(length as u32)
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal;

    #[test]
    fn demonstration() {
        assert_eq!(count_set_bits(5), 2, "count_set_bits(5) failed");
        assert_eq!(count_set_bits(7), 3, "count_set_bits(7) failed");
        assert_eq!(count_set_bits(8), 1, "count_set_bits(8) failed");

        assert_eq!(bits_diff(5, 4), 1, "bits_diff(5, 4) failed");
        assert_eq!(bits_diff(4, 7), 2, "bits_diff(4, 7) failed");

        assert_eq!(bit_length(5), Ok(3), "bit_length(5) failed");
        assert_eq!(bit_length(3), Ok(2), "bit_length(3) failed");
    }

    #[test]
    fn count_negative() {
        assert_eq!(count_set_bits(-1), 32, "count_set_bits(-1) failed");
        assert_eq!(count_set_bits(i32::MIN), 1, "count_set_bits(i32::MIN) failed");
        assert_eq!(count_set_bits(-2), 31, "count_set_bits(-2) failed");
    }

    #[test]
    fn count_random() {
        let values = internal::random_values(1000);
        for n in values.iter().chain(internal::EDGE_VALUES.iter()) {
            assert_eq!(count_set_bits(*n), n.count_ones(), "count_set_bits({:#X}) failed", n);
        }
    }

    #[test]
    fn diff_random() {
        for (a, b) in internal::random_pairs(1000).iter() {
            assert_eq!(bits_diff(*a, *b), (a ^ b).count_ones(), "bits_diff({:#X}, {:#X}) failed", a, b);
            assert_eq!(bits_diff(*a, *b), bits_diff(*b, *a), "bits_diff({:#X}, {:#X}) is not symmetric", a, b);
        }
    }

    #[test]
    fn length_bounds() {
        assert_eq!(bit_length(0), Ok(0), "bit_length(0) failed");
        assert_eq!(bit_length(1), Ok(1), "bit_length(1) failed");
        assert_eq!(bit_length(1 << 30), Ok(31), "bit_length(1 << 30) failed");
        assert_eq!(bit_length(i32::MAX), Ok(31), "bit_length(i32::MAX) failed");
    }

    #[test]
    fn length_random() {
        let values = internal::random_nonnegative(1000);
        for n in values.iter() {
            let expected = (BIT_WIDTH as u32) - (n.leading_zeros());
            assert_eq!(bit_length(*n), Ok(expected), "bit_length({:#X}) failed", n);
        }
    }

    #[test]
    fn length_rejects_negative() {
        for n in [-1, -5, i32::MIN].iter() {
            assert_eq!(bit_length(*n), Err(BitError::NegativeInput { value: *n }), "bit_length({}) did not fail", n);
        }
    }
}

//-----------------------------------------------------------------------------
