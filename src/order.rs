//! Byte-order views over scalar values.
//!
//! The two traversal orders share a single implementation, provided by the
//! [`ByteOrder`] trait. The order is chosen statically at the call site by
//! naming one of the implementing types:
//!
//! ```
//! use bytesbits::{BigEndian, ByteOrder, LittleEndian};
//!
//! let mut big    = String::new();
//! let mut little = String::new();
//! BigEndian::print_hex_bytes(&314_i32, " ", &mut big).unwrap();
//! LittleEndian::print_hex_bytes(&314_i32, " ", &mut little).unwrap();
//! assert_eq!(big,    "0x00 0x00 0x01 0x3a");
//! assert_eq!(little, "0x3a 0x01 0x00 0x00");
//! ```

//	Positions and indices in this module are always derived from the type's own
//	byte width, and every bit index is checked against the bit width before it
//	is used, so indexing can never go out of bounds.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Positions are bounded by the byte width")]



//		Modules																											

#[cfg(test)]
#[path = "tests/order.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::BitsError,
	render::{Radix, require_separator, write_bytes},
	scalar::{ByteLike, Scalar, ScalarBytes, store},
	width::BITS_PER_BYTE,
};
use bytes::{Buf, BufMut};
use core::{
	any::type_name,
	fmt::{Debug, Write},
};
use generic_array::GenericArray;
use serde::{Deserialize, Serialize};
use tracing::debug;



//		Enums																											

//		Endianness																
/// The direction in which the bytes of a value are enumerated.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
	/// Most-significant byte first.
	Big,
	
	/// Least-significant byte first.
	Little,
}

//󰭅		Endianness																
impl Endianness {
	//		native																
	/// Returns the byte order of the target platform.
	#[must_use]
	pub const fn native() -> Self {
		if cfg!(target_endian = "big") {
			Self::Big
		} else {
			Self::Little
		}
	}
	
	//		opposite															
	/// Returns the other byte order.
	#[must_use]
	pub const fn opposite(self) -> Self {
		match self {
			Self::Big    => Self::Little,
			Self::Little => Self::Big,
		}
	}
}



//		Structs																											

//		BigEndian																
/// Enumerates bytes from the most-significant to the least-significant.
/// 
/// Logical bit `0` is the least-significant bit of the most-significant byte.
/// 
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct BigEndian;

//		LittleEndian															
/// Enumerates bytes from the least-significant to the most-significant.
/// 
/// Logical bit `0` is the least-significant bit of the value, so logical bit
/// indices match the usual numeric bit positions.
/// 
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct LittleEndian;



//		Traits																											

//		ByteOrder																
/// A traversal order over the bytes of a scalar value.
/// 
/// All operations are provided; an implementation only chooses its
/// [`Endianness`]. The operations are associated functions rather than
/// methods, so that the order reads as a namespace at the call site, e.g.
/// `BigEndian::print_bits(&value, " ", &mut out)`.
/// 
/// # Positions and indices
/// 
/// A byte's *position* is its place in traversal order. A *logical bit index*
/// `i` addresses bit `i % 8` (counting from the least-significant bit) of the
/// byte at position `i / 8`. Which actual byte that is depends on the order,
/// but never on the byte order of the host.
/// 
/// # Separators
/// 
/// Every print function takes a separator, which is written between bytes but
/// not after the last one. An empty string is a valid separator; [`None`] is
/// not, and is rejected with [`BitsError::InvalidArgument`] before anything is
/// written.
/// 
pub trait ByteOrder: Copy + Debug + Default + Send + Sync + 'static {
	/// The direction in which this order enumerates bytes.
	const ENDIANNESS: Endianness;
	
	//		significance														
	/// Maps a position in traversal order to an index in significance order,
	/// where index `0` is the least-significant byte.
	/// 
	/// # Parameters
	/// 
	/// * `position` - The position of the byte in traversal order.
	/// * `width`    - The number of bytes in the value.
	/// 
	#[must_use]
	fn significance(position: usize, width: usize) -> usize {
		match Self::ENDIANNESS {
			Endianness::Big    => width - 1 - position,
			Endianness::Little => position,
		}
	}
	
	//		bytes																
	/// Returns the bytes of the value in traversal order.
	#[must_use]
	fn bytes<T: Scalar>(value: &T) -> ScalarBytes<T> {
		let mut bytes = value.to_le_array();
		if Self::ENDIANNESS == Endianness::Big {
			bytes.reverse();
		}
		bytes
	}
	
	//		Rendering															
	
	//		render																
	/// Writes the bytes of the value to the sink in the given radix.
	/// 
	/// All of the print functions delegate to this.
	/// 
	/// # Parameters
	/// 
	/// * `value`     - The value to render.
	/// * `radix`     - The notation to use for each byte.
	/// * `separator` - The text to place between bytes.
	/// * `sink`      - The destination for the text.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitsError::InvalidArgument`] if the separator is missing, and
	/// [`BitsError::Sink`] if the sink fails.
	/// 
	fn render<'s, T, W>(
		value:     &T,
		radix:     Radix,
		separator: impl Into<Option<&'s str>>,
		sink:      &mut W,
	) -> Result<(), BitsError>
	where
		T: Scalar,
		W: Write + ?Sized,
	{
		let separator = require_separator(separator.into())?;
		write_bytes(&Self::bytes(value), radix, separator, sink)
	}
	
	//		render_to_string													
	/// Renders the bytes of the value into a new [`String`].
	/// 
	/// # Errors
	/// 
	/// Returns [`BitsError::InvalidArgument`] if the separator is missing.
	/// 
	fn render_to_string<'s, T: Scalar>(
		value:     &T,
		radix:     Radix,
		separator: impl Into<Option<&'s str>>,
	) -> Result<String, BitsError> {
		let mut out = String::new();
		Self::render(value, radix, separator, &mut out)?;
		Ok(out)
	}
	
	//		print_bits															
	/// Writes each byte as eight binary digits, most-significant bit first.
	/// 
	/// # Errors
	/// 
	/// See [`render()`](ByteOrder::render()).
	/// 
	fn print_bits<'s, T: Scalar, W: Write + ?Sized>(
		value:     &T,
		separator: impl Into<Option<&'s str>>,
		sink:      &mut W,
	) -> Result<(), BitsError> {
		Self::render(value, Radix::Bits, separator, sink)
	}
	
	//		print_bin_bytes														
	/// Writes each byte as eight binary digits with a `0b` prefix.
	/// 
	/// # Errors
	/// 
	/// See [`render()`](ByteOrder::render()).
	/// 
	fn print_bin_bytes<'s, T: Scalar, W: Write + ?Sized>(
		value:     &T,
		separator: impl Into<Option<&'s str>>,
		sink:      &mut W,
	) -> Result<(), BitsError> {
		Self::render(value, Radix::Bin, separator, sink)
	}
	
	//		print_oct_bytes														
	/// Writes each byte as three octal digits with a `0o` prefix.
	/// 
	/// # Errors
	/// 
	/// See [`render()`](ByteOrder::render()).
	/// 
	fn print_oct_bytes<'s, T: Scalar, W: Write + ?Sized>(
		value:     &T,
		separator: impl Into<Option<&'s str>>,
		sink:      &mut W,
	) -> Result<(), BitsError> {
		Self::render(value, Radix::Oct, separator, sink)
	}
	
	//		print_dec_bytes														
	/// Writes each byte as an unpadded decimal number.
	/// 
	/// # Errors
	/// 
	/// See [`render()`](ByteOrder::render()).
	/// 
	fn print_dec_bytes<'s, T: Scalar, W: Write + ?Sized>(
		value:     &T,
		separator: impl Into<Option<&'s str>>,
		sink:      &mut W,
	) -> Result<(), BitsError> {
		Self::render(value, Radix::Dec, separator, sink)
	}
	
	//		print_hex_bytes														
	/// Writes each byte as two lowercase hex digits with a `0x` prefix.
	/// 
	/// # Errors
	/// 
	/// See [`render()`](ByteOrder::render()).
	/// 
	fn print_hex_bytes<'s, T: Scalar, W: Write + ?Sized>(
		value:     &T,
		separator: impl Into<Option<&'s str>>,
		sink:      &mut W,
	) -> Result<(), BitsError> {
		Self::render(value, Radix::Hex, separator, sink)
	}
	
	//		println_bits														
	/// Same as [`print_bits()`](ByteOrder::print_bits()), followed by a line
	/// break.
	/// 
	/// # Errors
	/// 
	/// See [`render()`](ByteOrder::render()).
	/// 
	fn println_bits<'s, T: Scalar, W: Write + ?Sized>(
		value:     &T,
		separator: impl Into<Option<&'s str>>,
		sink:      &mut W,
	) -> Result<(), BitsError> {
		Self::print_bits(value, separator, sink)?;
		sink.write_char('\n')?;
		Ok(())
	}
	
	//		println_bin_bytes													
	/// Same as [`print_bin_bytes()`](ByteOrder::print_bin_bytes()), followed
	/// by a line break.
	/// 
	/// # Errors
	/// 
	/// See [`render()`](ByteOrder::render()).
	/// 
	fn println_bin_bytes<'s, T: Scalar, W: Write + ?Sized>(
		value:     &T,
		separator: impl Into<Option<&'s str>>,
		sink:      &mut W,
	) -> Result<(), BitsError> {
		Self::print_bin_bytes(value, separator, sink)?;
		sink.write_char('\n')?;
		Ok(())
	}
	
	//		println_oct_bytes													
	/// Same as [`print_oct_bytes()`](ByteOrder::print_oct_bytes()), followed
	/// by a line break.
	/// 
	/// # Errors
	/// 
	/// See [`render()`](ByteOrder::render()).
	/// 
	fn println_oct_bytes<'s, T: Scalar, W: Write + ?Sized>(
		value:     &T,
		separator: impl Into<Option<&'s str>>,
		sink:      &mut W,
	) -> Result<(), BitsError> {
		Self::print_oct_bytes(value, separator, sink)?;
		sink.write_char('\n')?;
		Ok(())
	}
	
	//		println_dec_bytes													
	/// Same as [`print_dec_bytes()`](ByteOrder::print_dec_bytes()), followed
	/// by a line break.
	/// 
	/// # Errors
	/// 
	/// See [`render()`](ByteOrder::render()).
	/// 
	fn println_dec_bytes<'s, T: Scalar, W: Write + ?Sized>(
		value:     &T,
		separator: impl Into<Option<&'s str>>,
		sink:      &mut W,
	) -> Result<(), BitsError> {
		Self::print_dec_bytes(value, separator, sink)?;
		sink.write_char('\n')?;
		Ok(())
	}
	
	//		println_hex_bytes													
	/// Same as [`print_hex_bytes()`](ByteOrder::print_hex_bytes()), followed
	/// by a line break.
	/// 
	/// # Errors
	/// 
	/// See [`render()`](ByteOrder::render()).
	/// 
	fn println_hex_bytes<'s, T: Scalar, W: Write + ?Sized>(
		value:     &T,
		separator: impl Into<Option<&'s str>>,
		sink:      &mut W,
	) -> Result<(), BitsError> {
		Self::print_hex_bytes(value, separator, sink)?;
		sink.write_char('\n')?;
		Ok(())
	}
	
	//		Restoring															
	
	//		restore_value														
	/// Rebuilds a value from raw bytes given in traversal order.
	/// 
	/// For [`BigEndian`] the first input byte becomes the most-significant
	/// byte; for [`LittleEndian`] it becomes the least-significant byte. This
	/// is the inverse of [`bytes()`](ByteOrder::bytes()).
	/// 
	/// # Parameters
	/// 
	/// * `input` - The bytes to rebuild from. The length must equal the byte
	///             width of `T`.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitsError::LengthMismatch`] if the input has the wrong length,
	/// and [`BitsError::InvalidBitPattern`] if the bytes are not a valid `T`.
	/// 
	fn restore_value<T: Scalar, B: ByteLike>(input: &[B]) -> Result<T, BitsError> {
		if input.len() != T::BYTES {
			debug!(
				type_name = type_name::<T>(),
				expected  = T::BYTES,
				actual    = input.len(),
				"Rejected restore input of wrong length"
			);
			return Err(BitsError::LengthMismatch { expected: T::BYTES, actual: input.len() });
		}
		
		let mut bytes = GenericArray::<u8, T::Width>::default();
		for (position, &item) in input.iter().enumerate() {
			bytes[Self::significance(position, T::BYTES)] = item.to_byte();
		}
		T::from_le_array(&bytes)
	}
	
	//		read_value															
	/// Reads a value from the front of a buffer, in traversal order.
	/// 
	/// Exactly as many bytes as the width of `T` are consumed. If the buffer
	/// does not hold enough bytes then nothing is consumed. If the bytes are
	/// not a valid `T` then they are still consumed.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitsError::LengthMismatch`] if too few bytes remain, and
	/// [`BitsError::InvalidBitPattern`] if the bytes are not a valid `T`.
	/// 
	fn read_value<T: Scalar, B: Buf>(buf: &mut B) -> Result<T, BitsError> {
		if buf.remaining() < T::BYTES {
			debug!(
				type_name = type_name::<T>(),
				expected  = T::BYTES,
				actual    = buf.remaining(),
				"Rejected read from short buffer"
			);
			return Err(BitsError::LengthMismatch { expected: T::BYTES, actual: buf.remaining() });
		}
		
		let mut raw = GenericArray::<u8, T::Width>::default();
		buf.copy_to_slice(&mut raw);
		Self::restore_value(raw.as_slice())
	}
	
	//		write_value															
	/// Appends the bytes of a value to a buffer, in traversal order.
	fn write_value<T: Scalar, B: BufMut>(value: &T, buf: &mut B) {
		buf.put_slice(&Self::bytes(value));
	}
	
	//		Bit access															
	
	//		get_bit																
	/// Gets the value of the bit at a logical index.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to inspect.
	/// * `index` - The logical bit index.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitsError::IndexOutOfRange`] if the index is not less than the
	/// bit width of `T`.
	/// 
	fn get_bit<T: Scalar>(value: &T, index: usize) -> Result<bool, BitsError> {
		let (byte, mask) = Self::locate::<T>(index)?;
		Ok(value.to_le_array()[byte] & mask != 0)
	}
	
	//		modify_bit															
	/// Sets the bit at a logical index to the given state.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to modify.
	/// * `index` - The logical bit index.
	/// * `bit`   - The new state of the bit.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitsError::IndexOutOfRange`] if the index is not less than the
	/// bit width of `T`, and [`BitsError::InvalidBitPattern`] if the result is
	/// not a valid `T`. The value is unchanged on error.
	/// 
	fn modify_bit<T: Scalar>(value: &mut T, index: usize, bit: bool) -> Result<(), BitsError> {
		let (byte, mask) = Self::locate::<T>(index)?;
		let mut bytes    = value.to_le_array();
		if bit {
			bytes[byte] |=  mask;
		} else {
			bytes[byte] &= !mask;
		}
		store(value, &bytes)
	}
	
	//		set_bit																
	/// Sets the bit at a logical index to `1`.
	/// 
	/// # Errors
	/// 
	/// See [`modify_bit()`](ByteOrder::modify_bit()).
	/// 
	fn set_bit<T: Scalar>(value: &mut T, index: usize) -> Result<(), BitsError> {
		Self::modify_bit(value, index, true)
	}
	
	//		reset_bit															
	/// Sets the bit at a logical index to `0`.
	/// 
	/// # Errors
	/// 
	/// See [`modify_bit()`](ByteOrder::modify_bit()).
	/// 
	fn reset_bit<T: Scalar>(value: &mut T, index: usize) -> Result<(), BitsError> {
		Self::modify_bit(value, index, false)
	}
	
	//		flip_bit															
	/// Inverts the bit at a logical index.
	/// 
	/// # Errors
	/// 
	/// See [`modify_bit()`](ByteOrder::modify_bit()).
	/// 
	fn flip_bit<T: Scalar>(value: &mut T, index: usize) -> Result<(), BitsError> {
		let (byte, mask) = Self::locate::<T>(index)?;
		let mut bytes    = value.to_le_array();
		bytes[byte]     ^= mask;
		store(value, &bytes)
	}
	
	//		locate																
	/// Finds the significance-order byte and the mask within it for a logical
	/// bit index.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitsError::IndexOutOfRange`] if the index is not less than the
	/// bit width of `T`.
	/// 
	#[doc(hidden)]
	#[expect(clippy::integer_division, reason = "Precision is not needed here")]
	fn locate<T: Scalar>(index: usize) -> Result<(usize, u8), BitsError> {
		if index >= T::BITS {
			debug!(
				type_name = type_name::<T>(),
				index,
				bit_width = T::BITS,
				"Rejected out-of-range bit index"
			);
			return Err(BitsError::IndexOutOfRange { index, bit_width: T::BITS });
		}
		let byte = Self::significance(index / BITS_PER_BYTE, T::BYTES);
		Ok((byte, 1 << (index % BITS_PER_BYTE)))
	}
}

//󰭅		ByteOrder: BigEndian													
impl ByteOrder for BigEndian {
	const ENDIANNESS: Endianness = Endianness::Big;
}

//󰭅		ByteOrder: LittleEndian													
impl ByteOrder for LittleEndian {
	const ENDIANNESS: Endianness = Endianness::Little;
}
