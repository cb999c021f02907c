//! Order-independent predicates and counts over the bits of a value.
//!
//! None of these depend on the byte order, as they consider every byte of the
//! value exactly once.



//		Modules																											

#[cfg(test)]
#[path = "tests/query.rs"]
mod tests;



//		Packages																										

use crate::scalar::Scalar;



//		Functions																										

//		all_bits_one															
/// Determines whether every bit of the value is `1`.
/// 
/// Stops at the first byte that is not `0xFF`.
/// 
#[must_use]
pub fn all_bits_one<T: Scalar>(value: &T) -> bool {
	value.to_le_array().iter().all(|&byte| byte == u8::MAX)
}

//		all_bits_zero															
/// Determines whether every bit of the value is `0`.
/// 
/// Stops at the first byte that is not `0x00`.
/// 
#[must_use]
pub fn all_bits_zero<T: Scalar>(value: &T) -> bool {
	value.to_le_array().iter().all(|&byte| byte == 0)
}

//		any_bits_zero															
/// Determines whether at least one bit of the value is `0`.
#[must_use]
pub fn any_bits_zero<T: Scalar>(value: &T) -> bool {
	!all_bits_one(value)
}

//		any_bits_one															
/// Determines whether at least one bit of the value is `1`.
#[must_use]
pub fn any_bits_one<T: Scalar>(value: &T) -> bool {
	!all_bits_zero(value)
}

//		zero_bit_amount															
/// Counts the bits of the value that are `0`.
#[must_use]
pub fn zero_bit_amount<T: Scalar>(value: &T) -> usize {
	value.to_le_array().iter().map(|byte| byte.count_zeros() as usize).sum()
}

//		one_bit_amount															
/// Counts the bits of the value that are `1`.
/// 
/// This is the bit width of the type minus [`zero_bit_amount()`].
/// 
#[must_use]
#[expect(clippy::arithmetic_side_effects, reason = "Zero count never exceeds the bit width")]
pub fn one_bit_amount<T: Scalar>(value: &T) -> usize {
	T::BITS - zero_bit_amount(value)
}
