//! Text rendering of raw bytes in a chosen radix.



//		Modules																											

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;



//		Packages																										

use crate::errors::BitsError;
use core::fmt::{Display, Formatter, Write, self};
use serde::{Deserialize, Serialize};
use tracing::debug;



//		Constants																										

/// The separator used between bytes when no other is preferred.
pub const DEFAULT_SEPARATOR: &str = " ";



//		Enums																											

//		Radix																	
/// The notation used when rendering each byte.
/// 
/// | Radix           | Example for `0x3a` |
/// |-----------------|--------------------|
/// | [`Bits`](Self::Bits) | `00111010`    |
/// | [`Bin`](Self::Bin)   | `0b00111010`  |
/// | [`Oct`](Self::Oct)   | `0o072`       |
/// | [`Dec`](Self::Dec)   | `58`          |
/// | [`Hex`](Self::Hex)   | `0x3a`        |
/// 
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
	/// Eight binary digits, most-significant bit first, with no prefix.
	Bits,
	
	/// Eight binary digits with a `0b` prefix.
	Bin,
	
	/// Three zero-padded octal digits with a `0o` prefix.
	Oct,
	
	/// The unpadded decimal value, from `0` to `255`.
	Dec,
	
	/// Two zero-padded lowercase hex digits with a `0x` prefix.
	Hex,
}

//󰭅		Radix																	
impl Radix {
	/// All radices, in ascending order of base.
	pub const ALL: [Self; 5] = [Self::Bits, Self::Bin, Self::Oct, Self::Dec, Self::Hex];
	
	//		write_byte															
	/// Writes a single byte to the sink in this radix.
	/// 
	/// # Parameters
	/// 
	/// * `byte` - The byte to write.
	/// * `sink` - The destination for the text.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the sink fails.
	/// 
	pub fn write_byte<W: Write + ?Sized>(self, byte: u8, sink: &mut W) -> fmt::Result {
		match self {
			Self::Bits => write!(sink, "{byte:08b}"),
			Self::Bin  => write!(sink, "0b{byte:08b}"),
			Self::Oct  => write!(sink, "0o{byte:03o}"),
			Self::Dec  => write!(sink, "{byte}"),
			Self::Hex  => write!(sink, "0x{byte:02x}"),
		}
	}
}

//󰭅		Display																	
impl Display for Radix {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Bits => "bits",
			Self::Bin  => "bin",
			Self::Oct  => "oct",
			Self::Dec  => "dec",
			Self::Hex  => "hex",
		})
	}
}



//		Functions																										

//		require_separator														
/// Checks that a separator has been supplied.
/// 
/// An empty separator is valid; only an absent one is refused.
/// 
/// # Errors
/// 
/// Returns [`BitsError::InvalidArgument`] if there is no separator.
/// 
pub fn require_separator(separator: Option<&str>) -> Result<&str, BitsError> {
	separator.ok_or_else(|| {
		debug!("Rejected missing separator");
		BitsError::InvalidArgument("separator is required")
	})
}

//		write_bytes																
/// Writes a sequence of bytes to the sink in the given radix.
/// 
/// The separator is written between bytes, never after the last one. The bytes
/// are written in the order given; callers are responsible for arranging them
/// into the desired byte order first.
/// 
/// # Parameters
/// 
/// * `bytes`     - The bytes to write.
/// * `radix`     - The notation to use for each byte.
/// * `separator` - The text to place between bytes.
/// * `sink`      - The destination for the text.
/// 
/// # Errors
/// 
/// Returns [`BitsError::Sink`] if the sink fails.
/// 
pub fn write_bytes<W: Write + ?Sized>(
	bytes:     &[u8],
	radix:     Radix,
	separator: &str,
	sink:      &mut W,
) -> Result<(), BitsError> {
	for (i, &byte) in bytes.iter().enumerate() {
		if i > 0 {
			sink.write_str(separator)?;
		}
		radix.write_byte(byte, sink)?;
	}
	Ok(())
}
