//! Checked conversion between fixed-width scalar values and their bytes.

//	Every conversion in this module goes through the standard library's
//	`to_le_bytes()` and `from_le_bytes()` family, so no memory is ever aliased
//	and the byte layout is the same on every host. The resulting arrays are in
//	significance order, i.e. index 0 holds the least-significant byte.



//		Modules																											

#[cfg(test)]
#[path = "tests/scalar.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::BitsError,
	width::BITS_PER_BYTE,
};
use core::any::type_name;
use generic_array::{ArrayLength, GenericArray};
use tracing::debug;
use typenum::{U1, U2, U4, U8, U16, Unsigned};



//		Type aliases																									

/// The byte width of [`usize`] and [`isize`] on the target platform.
#[cfg(target_pointer_width = "16")]
pub type PointerWidth = U2;

/// The byte width of [`usize`] and [`isize`] on the target platform.
#[cfg(target_pointer_width = "32")]
pub type PointerWidth = U4;

/// The byte width of [`usize`] and [`isize`] on the target platform.
#[cfg(target_pointer_width = "64")]
pub type PointerWidth = U8;

/// The bytes of a scalar value, in significance order.
pub type ScalarBytes<T> = GenericArray<u8, <T as Scalar>::Width>;



//		Traits																											

//		Scalar																	
/// A fixed-width, trivially-copyable value whose bit pattern can be inspected
/// and rebuilt.
/// 
/// # Byte width
/// 
/// The width is carried at the type level as a [`typenum`] length, so that
/// the bytes of any scalar can be held in a [`GenericArray`] of exactly the
/// right size without allocation. This is necessary until Rust allows generic
/// parameters to be used in const expressions, at which point `[u8; { size_of::
/// <T>() }]` would do the same job.
/// 
/// # Checked conversion
/// 
/// Turning bytes back into a value is fallible, because not every bit pattern
/// is a valid value of every type. A [`bool`], for instance, only accepts
/// `0x00` and `0x01`. Integers and floats accept every pattern.
/// 
pub trait Scalar: Copy + 'static {
	/// The number of bytes occupied by the type, as a [`typenum`] length.
	type Width: ArrayLength;
	
	/// Whether the type carries a sign bit.
	const SIGNED: bool;
	
	/// The number of bytes occupied by the type.
	const BYTES: usize = <Self::Width as Unsigned>::USIZE;
	
	/// The number of bits occupied by the type.
	#[allow(clippy::arithmetic_side_effects, reason = "Widths are tiny")]
	const BITS: usize = Self::BYTES * BITS_PER_BYTE;
	
	//		to_le_array															
	/// Returns the bytes of the value, least-significant byte first.
	fn to_le_array(self) -> GenericArray<u8, Self::Width>;
	
	//		from_le_array														
	/// Rebuilds a value from bytes given least-significant byte first.
	/// 
	/// # Parameters
	/// 
	/// * `bytes` - The bytes to rebuild the value from.
	/// 
	/// # Errors
	/// 
	/// Returns [`BitsError::InvalidBitPattern`] if the bytes do not form a
	/// valid value of the type.
	/// 
	fn from_le_array(bytes: &GenericArray<u8, Self::Width>) -> Result<Self, BitsError>;
	
	//		is_negative															
	/// Determines whether the sign bit of the value is set.
	/// 
	/// This is always `false` for unsigned types. For floats it is also `true`
	/// for `-0.0` and negative NaNs, as only the bit pattern is considered.
	/// 
	#[must_use]
	fn is_negative(self) -> bool {
		Self::SIGNED && self.to_le_array().last().is_some_and(|&byte| byte & 0x80 != 0)
	}
}

//		ByteLike																
/// A single raw byte-like item, used as input when restoring values.
pub trait ByteLike: Copy {
	//		to_byte																
	/// Returns the raw bits of the item as an unsigned byte.
	fn to_byte(self) -> u8;
}



//		Functions																										

//		store																	
/// Replaces the value with one rebuilt from the given bytes.
/// 
/// The value is only written if the conversion succeeds, so a failure leaves
/// it untouched.
/// 
pub(crate) fn store<T: Scalar>(value: &mut T, bytes: &ScalarBytes<T>) -> Result<(), BitsError> {
	*value = T::from_le_array(bytes)?;
	Ok(())
}

//		invalid_pattern															
/// Builds the error for a bit pattern that the type cannot hold.
fn invalid_pattern<T>() -> BitsError {
	let type_name = type_name::<T>();
	debug!(type_name, "Rejected invalid bit pattern");
	BitsError::InvalidBitPattern { type_name }
}

//		copy_array																
/// Copies a [`GenericArray`] into a fixed-size array of the same length.
/// 
/// Used by the implementations for the primitive types, where the lengths are
/// known to agree.
/// 
fn copy_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
	let mut raw = [0_u8; N];
	raw.copy_from_slice(bytes);
	raw
}



//		Implementations																									

macro_rules! impl_scalar_for_int {
	($($t:ty => $width:ty, $signed:literal;)*) => {$(
		//󰭅		Scalar															
		impl Scalar for $t {
			type Width = $width;
			
			const SIGNED: bool = $signed;
			
			//		to_le_array													
			fn to_le_array(self) -> GenericArray<u8, Self::Width> {
				self.to_le_bytes().into()
			}
			
			//		from_le_array												
			fn from_le_array(bytes: &GenericArray<u8, Self::Width>) -> Result<Self, BitsError> {
				Ok(<$t>::from_le_bytes(copy_array(bytes)))
			}
		}
	)*};
}

impl_scalar_for_int! {
	u8    => U1,           false;
	u16   => U2,           false;
	u32   => U4,           false;
	u64   => U8,           false;
	u128  => U16,          false;
	usize => PointerWidth, false;
	i8    => U1,           true;
	i16   => U2,           true;
	i32   => U4,           true;
	i64   => U8,           true;
	i128  => U16,          true;
	isize => PointerWidth, true;
}

//󰭅		Scalar: bool															
impl Scalar for bool {
	type Width = U1;
	
	const SIGNED: bool = false;
	
	//		to_le_array															
	fn to_le_array(self) -> GenericArray<u8, Self::Width> {
		[u8::from(self)].into()
	}
	
	//		from_le_array														
	fn from_le_array(bytes: &GenericArray<u8, Self::Width>) -> Result<Self, BitsError> {
		match bytes.as_slice() {
			[0] => Ok(false),
			[1] => Ok(true),
			_   => Err(invalid_pattern::<Self>()),
		}
	}
}

//󰭅		Scalar: f32																
impl Scalar for f32 {
	type Width = U4;
	
	const SIGNED: bool = true;
	
	//		to_le_array															
	fn to_le_array(self) -> GenericArray<u8, Self::Width> {
		self.to_bits().to_le_bytes().into()
	}
	
	//		from_le_array														
	fn from_le_array(bytes: &GenericArray<u8, Self::Width>) -> Result<Self, BitsError> {
		Ok(Self::from_bits(u32::from_le_bytes(copy_array(bytes))))
	}
}

//󰭅		Scalar: f64																
impl Scalar for f64 {
	type Width = U8;
	
	const SIGNED: bool = true;
	
	//		to_le_array															
	fn to_le_array(self) -> GenericArray<u8, Self::Width> {
		self.to_bits().to_le_bytes().into()
	}
	
	//		from_le_array														
	fn from_le_array(bytes: &GenericArray<u8, Self::Width>) -> Result<Self, BitsError> {
		Ok(Self::from_bits(u64::from_le_bytes(copy_array(bytes))))
	}
}

//󰭅		ByteLike: u8															
impl ByteLike for u8 {
	//		to_byte																
	fn to_byte(self) -> u8 {
		self
	}
}

//󰭅		ByteLike: i8															
impl ByteLike for i8 {
	//		to_byte																
	fn to_byte(self) -> u8 {
		u8::from_ne_bytes(self.to_ne_bytes())
	}
}

//󰭅		ByteLike: bool															
impl ByteLike for bool {
	//		to_byte																
	fn to_byte(self) -> u8 {
		u8::from(self)
	}
}
