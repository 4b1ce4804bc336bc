//! # Simple bitwise arithmetic
//!
//! Primitive operations over 32-bit two's-complement integers: bit accessors, predicates, scaling shifts,
//! multiplication built from shifts and additions, population counts, and a gate-level full adder.
//! Nothing here uses a native multiply, and every loop is bounded by [`bits::BIT_WIDTH`].
//!
//! The whole surface is re-exported at the crate root.
//!
//! ```
//! use simple_bitops::{full_adder, multiply, count_set_bits};
//!
//! assert_eq!(full_adder(7, 3), 10);
//! assert_eq!(multiply(2, -3), -6);
//! assert_eq!(count_set_bits(7), 3);
//! ```
//!
//! # Notes
//!
//! * All functions are pure. The library installs no `tracing` subscriber, so the trace events emitted by the
//! iterative algorithms are discarded unless the application sets one up.
//! * Overflow always wraps as in two's-complement arithmetic; it is never an error.

pub mod adder;
pub mod bits;
pub mod count;
pub mod error;
pub mod multiply;
pub mod predicates;
pub mod shift;

#[cfg(any(test, feature = "binaries"))]
#[doc(hidden)]
pub mod internal;

pub use crate::adder::full_adder;
pub use crate::bits::{clear_bit, get_bit, set_bit, update_bit, BIT_WIDTH};
pub use crate::count::{bit_length, bits_diff, count_set_bits};
pub use crate::error::BitError;
pub use crate::multiply::{multiply, multiply_unsigned};
pub use crate::predicates::{is_even, is_positive, is_power_of_two};
pub use crate::shift::{divide_by_two, multiply_by_two, switch_sign};
