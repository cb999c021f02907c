//! The Bytesbits crate is a toolkit for inspecting and manipulating the bits
//! and bytes of fixed-width scalar values.
//!
//! It can render the bytes of a value in either byte order, address single
//! bits by a logical index that does not depend on the host's byte order,
//! rebuild values from raw bytes, and reverse, fill, rotate, and count the
//! bits of a value. Nothing is retained between calls.
//!
//! ```
//! use bytesbits::{BigEndian, ByteOrder, LittleEndian, one_bit_amount};
//!
//! let value = 314_i32;
//! assert_eq!(BigEndian::render_to_string(&value, bytesbits::Radix::Dec, ".").unwrap(), "0.0.1.58");
//! assert_eq!(one_bit_amount(&value), 5);
//!
//! let bytes = [0x78_u8, 0x56, 0x34, 0x12];
//! assert_eq!(LittleEndian::restore_value::<i32, _>(&bytes).unwrap(), 0x1234_5678);
//! assert_eq!(BigEndian::restore_value::<i32, _>(&bytes).unwrap(),    0x7856_3412);
//! ```



//		Global configuration																							

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::float_cmp,
	clippy::indexing_slicing,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::panic,
	clippy::unreadable_literal,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	unused_results,
	reason = "Not useful in unit tests"
))]



//		Modules																											

mod errors;
mod order;
mod query;
mod render;
mod rotate;
mod scalar;
mod transform;
mod width;



//		Packages																										

pub use errors::BitsError;
pub use order::{BigEndian, ByteOrder, Endianness, LittleEndian};
pub use query::{all_bits_one, all_bits_zero, any_bits_one, any_bits_zero, one_bit_amount, zero_bit_amount};
pub use render::{DEFAULT_SEPARATOR, Radix, require_separator, write_bytes};
pub use rotate::{RotationState, rotate_carry_left, rotate_carry_right, rotate_left, rotate_right};
pub use scalar::{ByteLike, PointerWidth, Scalar, ScalarBytes};
pub use transform::{fill_one_bit, fill_zero_bit, reverse_bits, reverse_bytes};
pub use width::{BITS_PER_BYTE, ScalarInfo, bits_amount, byte_amount};
