//! Scaling by two and negation with shifts and complements.
//!
//! All three operations wrap in two's-complement arithmetic instead of reporting overflow.

//-----------------------------------------------------------------------------

/// Returns `n` shifted left by one bit.
///
/// A set sign bit is discarded, so the result wraps.
///
/// # Examples
///
/// ```
/// use simple_bitops::shift;
///
/// assert_eq!(shift::multiply_by_two(21), 42);
/// assert_eq!(shift::multiply_by_two(-5), -10);
/// assert_eq!(shift::multiply_by_two(i32::MAX), -2);
/// ```
#[inline]
pub fn multiply_by_two(n: i32) -> i32 {
    n << 1
}

/// Returns `n` shifted right by one bit, replicating the sign bit.
///
/// This rounds toward negative infinity: `-3` becomes `-2`, not `-1`.
///
/// # Examples
///
/// ```
/// use simple_bitops::shift;
///
/// assert_eq!(shift::divide_by_two(42), 21);
/// assert_eq!(shift::divide_by_two(-3), -2);
/// assert_eq!(shift::divide_by_two(-1), -1);
/// ```
#[inline]
pub fn divide_by_two(n: i32) -> i32 {
    n >> 1
}

/// Returns the two's-complement negation `!n + 1`.
///
/// `i32::MIN` has no positive counterpart and maps to itself.
///
/// # Examples
///
/// ```
/// use simple_bitops::shift;
///
/// assert_eq!(shift::switch_sign(5), -5);
/// assert_eq!(shift::switch_sign(-5), 5);
/// assert_eq!(shift::switch_sign(i32::MIN), i32::MIN);
/// ```
#[inline]
pub fn switch_sign(n: i32) -> i32 {
    (!n).wrapping_add(1)
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
