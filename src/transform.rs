//! In-place bulk transforms of a value's bytes.
//!
//! Each transform builds the new bytes first and only writes them back if they
//! form a valid value of the type, so an error leaves the value as it was.
//! Integers and floats accept every bit pattern and so never fail here; a
//! [`bool`] only accepts `0x00` and `0x01`.

//	The output array has the same length as the input, and all indices are
//	derived from it.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Indices are bounded by the byte width")]



//		Modules																											

#[cfg(test)]
#[path = "tests/transform.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::BitsError,
	scalar::{Scalar, ScalarBytes, store},
};



//		Functions																										

//		reverse_bytes															
/// Reverses the order of the bytes of the value.
/// 
/// Byte `i` is swapped with byte `width - 1 - i`, which gives the same result
/// whichever byte order the value is viewed in.
/// 
/// # Errors
/// 
/// Returns [`BitsError::InvalidBitPattern`] if the result is not a valid `T`.
/// 
pub fn reverse_bytes<T: Scalar>(value: &mut T) -> Result<(), BitsError> {
	let mut bytes = value.to_le_array();
	bytes.reverse();
	store(value, &bytes)
}

//		reverse_bits															
/// Reverses the order of all the bits of the value.
/// 
/// The bits within each byte are mirrored, and the byte is placed in the
/// opposite position, so that the most-significant bit of the value becomes
/// the least-significant bit and vice versa.
/// 
/// # Errors
/// 
/// Returns [`BitsError::InvalidBitPattern`] if the result is not a valid `T`.
/// 
pub fn reverse_bits<T: Scalar>(value: &mut T) -> Result<(), BitsError> {
	let bytes      = value.to_le_array();
	let mut result = ScalarBytes::<T>::default();
	
	//	Mirror each byte and place it in the opposite position
	for (i, byte) in bytes.iter().enumerate() {
		result[T::BYTES - 1 - i] = byte.reverse_bits();
	}
	
	store(value, &result)
}

//		fill_one_bit															
/// Sets every bit of the value to `1`.
/// 
/// # Errors
/// 
/// Returns [`BitsError::InvalidBitPattern`] if the result is not a valid `T`.
/// 
pub fn fill_one_bit<T: Scalar>(value: &mut T) -> Result<(), BitsError> {
	fill(value, u8::MAX)
}

//		fill_zero_bit															
/// Sets every bit of the value to `0`.
/// 
/// # Errors
/// 
/// Returns [`BitsError::InvalidBitPattern`] if the result is not a valid `T`.
/// 
pub fn fill_zero_bit<T: Scalar>(value: &mut T) -> Result<(), BitsError> {
	fill(value, 0)
}

//		fill																	
/// Sets every byte of the value to the given byte.
fn fill<T: Scalar>(value: &mut T, byte: u8) -> Result<(), BitsError> {
	let mut bytes = ScalarBytes::<T>::default();
	bytes.fill(byte);
	store(value, &bytes)
}
