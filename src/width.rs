//! Size and width introspection for scalar types.



//		Modules																											

#[cfg(test)]
#[path = "tests/width.rs"]
mod tests;



//		Packages																										

use crate::scalar::Scalar;
use core::{
	any::type_name,
	fmt::{Display, Formatter, self},
};
use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;



//		Constants																										

/// The number of bits in a byte.
pub const BITS_PER_BYTE: usize = 8;



//		Structs																											

//		ScalarInfo																
/// A summary of the storage occupied by a scalar type.
/// 
/// This is mainly useful for diagnostics and reports, and can be serialised to
/// JSON or displayed as a short block of text:
/// 
/// ```text
/// Type: i32
/// Byte amount: 4
/// Bit amount: 32
/// ```
/// 
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ScalarInfo {
	/// The name of the type.
	pub type_name:   String,
	
	/// The number of bytes occupied by the type.
	pub byte_amount: usize,
	
	/// The number of bits occupied by the type.
	pub bit_amount:  usize,
}

//󰭅		ScalarInfo																
impl ScalarInfo {
	//		of																	
	/// Describes the given scalar type.
	#[must_use]
	pub fn of<T: Scalar>() -> Self {
		Self {
			type_name:   type_name::<T>().to_owned(),
			byte_amount: byte_amount::<T>(),
			bit_amount:  bits_amount::<T>(),
		}
	}
	
	//		from_json															
	/// Deserialises a JSON string into a [`ScalarInfo`].
	/// 
	/// # Parameters
	/// 
	/// * `json` - The JSON string to deserialise.
	/// 
	/// # Errors
	/// 
	/// If the JSON string is invalid, or does not describe a [`ScalarInfo`],
	/// then an error will be returned.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		to_json																
	/// Serialises this [`ScalarInfo`] to a JSON string.
	/// 
	/// # Errors
	/// 
	/// If the struct cannot be serialised for whatever reason, an error will be
	/// returned. In reality this should be infallible.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
}

//󰭅		Display																	
impl Display for ScalarInfo {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		writeln!(f, "Type: {}",        self.type_name)?;
		writeln!(f, "Byte amount: {}", self.byte_amount)?;
		write!(f,   "Bit amount: {}",  self.bit_amount)
	}
}



//		Functions																										

//		byte_amount																
/// Returns the number of bytes occupied by a scalar type.
#[must_use]
pub const fn byte_amount<T: Scalar>() -> usize {
	T::BYTES
}

//		bits_amount																
/// Returns the number of bits occupied by a scalar type.
/// 
/// This is always [`byte_amount()`] multiplied by [`BITS_PER_BYTE`].
/// 
#[must_use]
pub const fn bits_amount<T: Scalar>() -> usize {
	T::BITS
}
