//! Circular rotation of a value's bits, with and without a carry bit.
//!
//! Rotation treats the value as an unsigned bit pattern, so negative values of
//! signed types are refused. The result does not depend on the byte order.

//	Byte indices are always reduced modulo the byte width, and shifts within a
//	byte are always less than 8.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Indices are reduced modulo the byte width")]



//		Modules																											

#[cfg(test)]
#[path = "tests/rotate.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::BitsError,
	scalar::{Scalar, ScalarBytes},
	width::BITS_PER_BYTE,
};
use core::any::type_name;
use serde::{Deserialize, Serialize};
use tracing::debug;



//		Structs																											

//		RotationState															
/// The outcome of a rotation through a carry bit.
/// 
/// The carry produced by one rotation can be passed as the carry into the next
/// in order to rotate across several words, but keeping track of such a chain
/// is left to the caller.
/// 
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct RotationState<T> {
	/// The rotated value.
	pub value: T,
	
	/// The bit displaced on the last step of the rotation.
	pub carry: bool,
}



//		Functions																										

//		rotate_left																
/// Rotates the bits of the value to the left.
/// 
/// The `shift` most-significant bits are moved to the `shift` least-significant
/// bits, and the rest are moved to the left. The shift is reduced modulo the
/// bit width first, and a reduced shift of zero returns the value unchanged.
/// 
/// # Parameters
/// 
/// * `value` - The value to rotate.
/// * `shift` - The number of bits to rotate by.
/// 
/// # Errors
/// 
/// Returns [`BitsError::InvalidArgument`] if the value is negative, and
/// [`BitsError::InvalidBitPattern`] if the result is not a valid `T`.
/// 
#[expect(clippy::integer_division, reason = "Precision is not needed here")]
pub fn rotate_left<T: Scalar>(value: T, shift: u32) -> Result<T, BitsError> {
	ensure_non_negative(&value)?;
	
	//	Normalise rotation amount
	let shift = shift as usize % T::BITS;
	if shift == 0 {
		return Ok(value);
	}
	
	let bytes      = value.to_le_array();
	let mut result = ScalarBytes::<T>::default();
	let byte_shift = shift / BITS_PER_BYTE;
	let bit_shift  = shift % BITS_PER_BYTE;
	
	if bit_shift == 0 {
		//	Byte-aligned rotation
		for i in 0..T::BYTES {
			let src   = (i + T::BYTES - byte_shift) % T::BYTES;
			result[i] = bytes[src];
		}
	} else {
		//	Bits cross byte boundaries
		for i in 0..T::BYTES {
			let prev     = (i + T::BYTES - 1) % T::BYTES;
			let dest     = (i + byte_shift) % T::BYTES;
			result[dest] = (bytes[i] << bit_shift) | (bytes[prev] >> (BITS_PER_BYTE - bit_shift));
		}
	}
	
	T::from_le_array(&result)
}

//		rotate_right															
/// Rotates the bits of the value to the right.
/// 
/// The `shift` least-significant bits are moved to the `shift`
/// most-significant bits, and the rest are moved to the right. The shift is
/// reduced modulo the bit width first, and a reduced shift of zero returns the
/// value unchanged.
/// 
/// # Parameters
/// 
/// * `value` - The value to rotate.
/// * `shift` - The number of bits to rotate by.
/// 
/// # Errors
/// 
/// Returns [`BitsError::InvalidArgument`] if the value is negative, and
/// [`BitsError::InvalidBitPattern`] if the result is not a valid `T`.
/// 
#[expect(clippy::integer_division, reason = "Precision is not needed here")]
pub fn rotate_right<T: Scalar>(value: T, shift: u32) -> Result<T, BitsError> {
	ensure_non_negative(&value)?;
	
	//	Normalise rotation amount
	let shift = shift as usize % T::BITS;
	if shift == 0 {
		return Ok(value);
	}
	
	let bytes      = value.to_le_array();
	let mut result = ScalarBytes::<T>::default();
	let byte_shift = shift / BITS_PER_BYTE;
	let bit_shift  = shift % BITS_PER_BYTE;
	
	if bit_shift == 0 {
		//	Byte-aligned rotation
		for i in 0..T::BYTES {
			let src   = (i + byte_shift) % T::BYTES;
			result[i] = bytes[src];
		}
	} else {
		//	Bits cross byte boundaries
		for i in 0..T::BYTES {
			let next     = (i + 1) % T::BYTES;
			let dest     = (i + T::BYTES - byte_shift) % T::BYTES;
			result[dest] = (bytes[i] >> bit_shift) | (bytes[next] << (BITS_PER_BYTE - bit_shift));
		}
	}
	
	T::from_le_array(&result)
}

//		rotate_carry_left														
/// Rotates the bits of the value to the left through a carry bit.
/// 
/// Each of the `shift` steps moves every bit one place to the left, moves the
/// carry into the least-significant bit, and moves the most-significant bit
/// into the carry. The carry returned is the bit displaced on the last step.
/// 
/// The value and carry together form a ring of `bit width + 1` bits, so the
/// number of steps is reduced modulo that length before stepping, which does
/// not change the result.
/// 
/// # Parameters
/// 
/// * `value` - The value to rotate.
/// * `carry` - The incoming carry bit.
/// * `shift` - The number of single-bit steps to take.
/// 
/// # Errors
/// 
/// Returns [`BitsError::InvalidArgument`] if the value is negative, and
/// [`BitsError::InvalidBitPattern`] if the result is not a valid `T`.
/// 
pub fn rotate_carry_left<T: Scalar>(
	value: T,
	carry: bool,
	shift: u32,
) -> Result<RotationState<T>, BitsError> {
	ensure_non_negative(&value)?;
	
	let steps = shift as usize % (T::BITS + 1);
	if steps == 0 {
		return Ok(RotationState { value, carry });
	}
	
	let mut bytes = value.to_le_array();
	let mut carry = carry;
	for _ in 0..steps {
		carry = step_left(&mut bytes, carry);
	}
	
	Ok(RotationState { value: T::from_le_array(&bytes)?, carry })
}

//		rotate_carry_right														
/// Rotates the bits of the value to the right through a carry bit.
/// 
/// Each of the `shift` steps moves every bit one place to the right, moves the
/// carry into the most-significant bit, and moves the least-significant bit
/// into the carry. The carry returned is the bit displaced on the last step.
/// 
/// As with [`rotate_carry_left()`], the number of steps is reduced modulo
/// `bit width + 1` before stepping.
/// 
/// # Parameters
/// 
/// * `value` - The value to rotate.
/// * `carry` - The incoming carry bit.
/// * `shift` - The number of single-bit steps to take.
/// 
/// # Errors
/// 
/// Returns [`BitsError::InvalidArgument`] if the value is negative, and
/// [`BitsError::InvalidBitPattern`] if the result is not a valid `T`.
/// 
pub fn rotate_carry_right<T: Scalar>(
	value: T,
	carry: bool,
	shift: u32,
) -> Result<RotationState<T>, BitsError> {
	ensure_non_negative(&value)?;
	
	let steps = shift as usize % (T::BITS + 1);
	if steps == 0 {
		return Ok(RotationState { value, carry });
	}
	
	let mut bytes = value.to_le_array();
	let mut carry = carry;
	for _ in 0..steps {
		carry = step_right(&mut bytes, carry);
	}
	
	Ok(RotationState { value: T::from_le_array(&bytes)?, carry })
}

//		ensure_non_negative														
/// Refuses values whose sign bit is set.
fn ensure_non_negative<T: Scalar>(value: &T) -> Result<(), BitsError> {
	if value.is_negative() {
		debug!(type_name = type_name::<T>(), "Rejected rotation of negative value");
		return Err(BitsError::InvalidArgument("rotation requires a non-negative value"));
	}
	Ok(())
}

//		step_left																
/// Shifts the bytes, given least-significant first, one bit to the left.
/// 
/// The carry fills the vacated least-significant bit, and the bit shifted out
/// of the top is returned as the new carry.
/// 
fn step_left(bytes: &mut [u8], carry: bool) -> bool {
	let mut carry = u8::from(carry);
	for byte in bytes.iter_mut() {
		let out = *byte >> 7_u8;
		*byte   = (*byte << 1_u8) | carry;
		carry   = out;
	}
	carry == 1
}

//		step_right																
/// Shifts the bytes, given least-significant first, one bit to the right.
/// 
/// The carry fills the vacated most-significant bit, and the bit shifted out
/// of the bottom is returned as the new carry.
/// 
fn step_right(bytes: &mut [u8], carry: bool) -> bool {
	let mut carry = u8::from(carry);
	for byte in bytes.iter_mut().rev() {
		let out = *byte & 1;
		*byte   = (*byte >> 1_u8) | (carry << 7_u8);
		carry   = out;
	}
	carry == 1
}
