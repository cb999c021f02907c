//! Contains error types used throughout the library.



//		Packages																										

use core::fmt::Error as FmtError;
use thiserror::Error as ThisError;



//		Enums																											

//		BitsError																
/// Represents all possible errors that can occur when inspecting or
/// manipulating the bits and bytes of a value.
/// 
/// Every operation validates its arguments before it writes any output or
/// touches the value, so an error always means that nothing has changed.
/// 
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum BitsError {
	/// An argument was absent or outside the domain of the operation, e.g. a
	/// missing separator, or a negative value passed to a rotation.
	#[error("Invalid argument: {0}")]
	InvalidArgument(&'static str),
	
	/// The bit index is not less than the bit width of the value.
	#[error("Bit index {index} out of range for {bit_width}-bit value")]
	IndexOutOfRange {
		/// The requested bit index.
		index:     usize,
		/// The bit width of the value.
		bit_width: usize,
	},
	
	/// The number of input bytes does not match the byte width of the target
	/// type.
	#[error("Expected {expected} bytes, got {actual}")]
	LengthMismatch {
		/// The byte width of the target type.
		expected: usize,
		/// The number of bytes supplied.
		actual:   usize,
	},
	
	/// The bytes produced by an operation do not form a valid value of the
	/// target type, e.g. a `bool` with bits other than the lowest one set.
	#[error("Invalid bit pattern for {type_name}")]
	InvalidBitPattern {
		/// The name of the target type.
		type_name: &'static str,
	},
	
	/// The text sink refused the output.
	#[error("Failed to write to sink")]
	Sink(#[from] FmtError),
}
