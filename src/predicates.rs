//! Parity, sign, and power-of-two tests based on bit patterns.

use crate::bits::{self, SIGN_BIT};

//-----------------------------------------------------------------------------

/// Returns `true` if the lowest bit of `n` is 0.
///
/// # Examples
///
/// ```
/// use simple_bitops::predicates;
///
/// assert!(predicates::is_even(4));
/// assert!(!predicates::is_even(-3));
/// ```
#[inline]
pub fn is_even(n: i32) -> bool {
    (n & 1) == 0
}

/// Returns `true` if the sign bit of `n` is 0 and `n` is nonzero.
///
/// Zero is not positive, even though its sign bit is clear.
///
/// # Examples
///
/// ```
/// use simple_bitops::predicates;
///
/// assert!(predicates::is_positive(1));
/// assert!(!predicates::is_positive(0));
/// assert!(!predicates::is_positive(-1));
/// ```
#[inline]
pub fn is_positive(n: i32) -> bool {
    if n == 0 {
        return false;
    }
    bits::bit_at(n, SIGN_BIT) == 0
}

/// Returns `true` if `n & (n - 1)` is zero.
///
/// The test is purely bitwise, so it also accepts 0 and `i32::MIN`.
/// Callers that need powers of two among positive integers must also check `n > 0`.
///
/// # Examples
///
/// ```
/// use simple_bitops::predicates;
///
/// assert!(predicates::is_power_of_two(8));
/// assert!(!predicates::is_power_of_two(5));
/// assert!(predicates::is_power_of_two(0));
/// ```
#[inline]
pub fn is_power_of_two(n: i32) -> bool {
    (n & n.wrapping_sub(1)) == 0
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
