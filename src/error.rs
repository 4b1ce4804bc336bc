//! Errors reported by the fallible operations.

use std::fmt;

//-----------------------------------------------------------------------------

/// Precondition violations.
///
/// Only the bit accessors and the operations defined for nonnegative integers can fail.
/// Everything else is total over `i32`.
///
/// # Examples
///
/// ```
/// use simple_bitops::{get_bit, bit_length, BitError};
///
/// assert_eq!(get_bit(5, 32), Err(BitError::InvalidPosition { pos: 32 }));
/// assert_eq!(bit_length(-4), Err(BitError::NegativeInput { value: -4 }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitError {
    /// Bit position outside `0..BIT_WIDTH`.
    InvalidPosition {
        /// The rejected position.
        pos: usize,
    },
    /// Negative argument to an operation defined only for nonnegative integers.
    NegativeInput {
        /// The rejected value.
        value: i32,
    },
}

impl fmt::Display for BitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitError::InvalidPosition { pos } => {
                write!(f, "invalid bit position {} (must be less than {})", pos, crate::bits::BIT_WIDTH)
            }
            BitError::NegativeInput { value } => {
                write!(f, "negative input {} to an operation on nonnegative integers", value)
            }
        }
    }
}

impl std::error::Error for BitError {}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
