//! Reading and writing individual bits of an `i32`.
//!
//! Bit positions count from the least significant bit (0) to the sign bit (`BIT_WIDTH - 1`).
//! The public accessors reject positions outside that range instead of relying on the behavior of an oversized shift.

use crate::error::BitError;

//-----------------------------------------------------------------------------

/// Number of bits in the integers handled by this crate.
pub const BIT_WIDTH: usize = 32;

// Position of the sign bit.
pub(crate) const SIGN_BIT: usize = BIT_WIDTH - 1;

//-----------------------------------------------------------------------------

#[inline]
fn check_pos(pos: usize) -> Result<(), BitError> {
    if pos >= BIT_WIDTH {
        return Err(BitError::InvalidPosition { pos });
    }
    Ok(())
}

// Bit `pos` of `n` as 0 or 1. Callers must guarantee `pos < BIT_WIDTH`.
#[inline]
pub(crate) fn bit_at(n: i32, pos: usize) -> i32 {
    debug_assert!(pos < BIT_WIDTH);
    (n >> pos) & 1
}

//-----------------------------------------------------------------------------

/// Returns bit `pos` of `n` as 0 or 1.
///
/// # Examples
///
/// ```
/// use simple_bitops::bits;
///
/// assert_eq!(bits::get_bit(5, 0), Ok(1));
/// assert_eq!(bits::get_bit(5, 1), Ok(0));
/// assert_eq!(bits::get_bit(-1, 31), Ok(1));
/// ```
///
/// # Errors
///
/// Returns [`BitError::InvalidPosition`] if `pos >= BIT_WIDTH`.
#[inline]
pub fn get_bit(n: i32, pos: usize) -> Result<i32, BitError> {
    check_pos(pos)?;
    Ok(bit_at(n, pos))
}

/// Returns `n` with bit `pos` set to 1.
///
/// # Examples
///
/// ```
/// use simple_bitops::bits;
///
/// assert_eq!(bits::set_bit(5, 1), Ok(7));
/// assert_eq!(bits::set_bit(5, 2), Ok(5));
/// ```
///
/// # Errors
///
/// Returns [`BitError::InvalidPosition`] if `pos >= BIT_WIDTH`.
#[inline]
pub fn set_bit(n: i32, pos: usize) -> Result<i32, BitError> {
    check_pos(pos)?;
    Ok(n | (1 << pos))
}

/// Returns `n` with bit `pos` set to 0.
///
/// # Examples
///
/// ```
/// use simple_bitops::bits;
///
/// assert_eq!(bits::clear_bit(5, 0), Ok(4));
/// assert_eq!(bits::clear_bit(5, 1), Ok(5));
/// assert_eq!(bits::clear_bit(5, 2), Ok(1));
/// ```
///
/// # Errors
///
/// Returns [`BitError::InvalidPosition`] if `pos >= BIT_WIDTH`.
#[inline]
pub fn clear_bit(n: i32, pos: usize) -> Result<i32, BitError> {
    check_pos(pos)?;
    Ok(n & !(1 << pos))
}

/// Returns `n` with bit `pos` set to `value`.
///
/// Any nonzero `value` is treated as 1.
///
/// # Examples
///
/// ```
/// use simple_bitops::bits;
///
/// assert_eq!(bits::update_bit(5, 1, 1), Ok(7));
/// assert_eq!(bits::update_bit(5, 0, 0), Ok(4));
/// assert_eq!(bits::update_bit(0, 3, -12), Ok(8));
/// ```
///
/// # Errors
///
/// Returns [`BitError::InvalidPosition`] if `pos >= BIT_WIDTH`.
#[inline]
pub fn update_bit(n: i32, pos: usize, value: i32) -> Result<i32, BitError> {
    check_pos(pos)?;
    let bit = (value != 0) as i32;
    Ok((n & !(1 << pos)) | (bit << pos))
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal;

    // Bits other than `pos` must be identical.
    fn check_other_bits(original: i32, result: i32, pos: usize, name: &str) {
        let mask = !(1i32 << pos);
        assert_eq!(original & mask, result & mask, "{}({:#X}, {}) changed other bits: {:#X}", name, original, pos, result);
    }

    #[test]
    fn demonstration() {
        assert_eq!(get_bit(5, 0), Ok(1), "get_bit(5, 0) failed");
        assert_eq!(get_bit(5, 1), Ok(0), "get_bit(5, 1) failed");
        assert_eq!(get_bit(5, 2), Ok(1), "get_bit(5, 2) failed");
        assert_eq!(get_bit(5, 3), Ok(0), "get_bit(5, 3) failed");

        assert_eq!(set_bit(5, 1), Ok(7), "set_bit(5, 1) failed");
        assert_eq!(set_bit(5, 2), Ok(5), "set_bit(5, 2) failed");

        assert_eq!(clear_bit(5, 0), Ok(4), "clear_bit(5, 0) failed");
        assert_eq!(clear_bit(5, 1), Ok(5), "clear_bit(5, 1) failed");
        assert_eq!(clear_bit(5, 2), Ok(1), "clear_bit(5, 2) failed");

        assert_eq!(update_bit(5, 1, 1), Ok(7), "update_bit(5, 1, 1) failed");
    }

    #[test]
    fn sign_bit() {
        assert_eq!(get_bit(i32::MIN, SIGN_BIT), Ok(1), "Sign bit of i32::MIN is not set");
        assert_eq!(get_bit(i32::MAX, SIGN_BIT), Ok(0), "Sign bit of i32::MAX is set");
        assert_eq!(set_bit(0, SIGN_BIT), Ok(i32::MIN), "Setting the sign bit of 0 failed");
        assert_eq!(clear_bit(-1, SIGN_BIT), Ok(i32::MAX), "Clearing the sign bit of -1 failed");
        assert_eq!(update_bit(i32::MAX, SIGN_BIT, 1), Ok(-1), "Updating the sign bit of i32::MAX failed");
    }

    #[test]
    fn invalid_positions() {
        for pos in [BIT_WIDTH, BIT_WIDTH + 1, 63, 64, usize::MAX].iter() {
            let err = Err(BitError::InvalidPosition { pos: *pos });
            assert_eq!(get_bit(5, *pos), err, "get_bit(5, {}) did not fail", pos);
            assert_eq!(set_bit(5, *pos), err, "set_bit(5, {}) did not fail", pos);
            assert_eq!(clear_bit(5, *pos), err, "clear_bit(5, {}) did not fail", pos);
            assert_eq!(update_bit(5, *pos, 1), err, "update_bit(5, {}, 1) did not fail", pos);
        }
    }

    #[test]
    fn accessors_agree() {
        let values = internal::random_values(64);
        for n in values.iter().chain(internal::EDGE_VALUES.iter()) {
            for pos in 0..BIT_WIDTH {
                let set = set_bit(*n, pos).unwrap();
                assert_eq!(get_bit(set, pos), Ok(1), "set_bit({:#X}, {}) did not set the bit", n, pos);
                check_other_bits(*n, set, pos, "set_bit");

                let cleared = clear_bit(*n, pos).unwrap();
                assert_eq!(get_bit(cleared, pos), Ok(0), "clear_bit({:#X}, {}) did not clear the bit", n, pos);
                check_other_bits(*n, cleared, pos, "clear_bit");

                assert_eq!(get_bit(clear_bit(set, pos).unwrap(), pos), Ok(0), "set-clear({:#X}, {}) failed", n, pos);
                assert_eq!(get_bit(set_bit(cleared, pos).unwrap(), pos), Ok(1), "clear-set({:#X}, {}) failed", n, pos);
            }
        }
    }

    #[test]
    fn update_matches_value() {
        let values = internal::random_values(64);
        for n in values.iter().chain(internal::EDGE_VALUES.iter()) {
            for pos in 0..BIT_WIDTH {
                for value in [0, 1, 2, -1, i32::MIN].iter() {
                    let expected = if *value != 0 { 1 } else { 0 };
                    let updated = update_bit(*n, pos, *value).unwrap();
                    assert_eq!(get_bit(updated, pos), Ok(expected), "update_bit({:#X}, {}, {}) failed", n, pos, value);
                    check_other_bits(*n, updated, pos, "update_bit");
                }
            }
        }
    }
}

//-----------------------------------------------------------------------------
