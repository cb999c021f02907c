//		Packages																										

use super::*;
use claims::{assert_err, assert_ok_eq};
use rubedo::sugar::s;



//		Tests																											

mod functions {
	use super::*;
	
	//		byte_amount															
	#[test]
	fn byte_amount__integers() {
		assert_eq!(byte_amount::<u8>(),    1);
		assert_eq!(byte_amount::<i16>(),   2);
		assert_eq!(byte_amount::<i32>(),   4);
		assert_eq!(byte_amount::<u64>(),   8);
		assert_eq!(byte_amount::<i128>(),  16);
		assert_eq!(byte_amount::<usize>(), size_of::<usize>());
	}
	#[test]
	fn byte_amount__others() {
		assert_eq!(byte_amount::<bool>(), size_of::<bool>());
		assert_eq!(byte_amount::<f32>(),  size_of::<f32>());
		assert_eq!(byte_amount::<f64>(),  size_of::<f64>());
	}
	#[test]
	fn byte_amount__const() {
		const WIDTH: usize = byte_amount::<u16>();
		assert_eq!(WIDTH, 2);
	}
	
	//		bits_amount															
	#[test]
	fn bits_amount__integers() {
		assert_eq!(bits_amount::<u8>(),    8);
		assert_eq!(bits_amount::<i32>(),   32);
		assert_eq!(bits_amount::<u128>(),  128);
		assert_eq!(bits_amount::<isize>(), size_of::<isize>() * BITS_PER_BYTE);
	}
	#[test]
	fn bits_amount__others() {
		assert_eq!(bits_amount::<bool>(), 8);
		assert_eq!(bits_amount::<f64>(),  64);
	}
	#[test]
	fn bits_amount__const() {
		const WIDTH: usize = bits_amount::<i64>();
		assert_eq!(WIDTH, 64);
	}
}

mod scalar_info {
	use super::*;
	
	//		of																	
	#[test]
	fn of__i32() {
		assert_eq!(ScalarInfo::of::<i32>(), ScalarInfo {
			type_name:   s!("i32"),
			byte_amount: 4,
			bit_amount:  32,
		});
	}
	#[test]
	fn of__bool() {
		let info = ScalarInfo::of::<bool>();
		assert_eq!(info.type_name,   "bool");
		assert_eq!(info.byte_amount, 1);
		assert_eq!(info.bit_amount,  8);
	}
	
	//		Display																
	#[test]
	fn display() {
		assert_eq!(ScalarInfo::of::<i32>().to_string(), s!("Type: i32\nByte amount: 4\nBit amount: 32"));
	}
	
	//		to_json																
	#[test]
	fn to_json() {
		assert_ok_eq!(
			ScalarInfo::of::<u16>().to_json(),
			s!(r#"{"type_name":"u16","byte_amount":2,"bit_amount":16}"#)
		);
	}
	
	//		from_json															
	#[test]
	fn from_json__valid() {
		assert_ok_eq!(
			ScalarInfo::from_json(r#"{"type_name":"u16","byte_amount":2,"bit_amount":16}"#),
			ScalarInfo::of::<u16>()
		);
	}
	#[test]
	fn from_json__invalid() {
		assert_err!(ScalarInfo::from_json("invalid"));
		assert_err!(ScalarInfo::from_json(r#"{"type_name":"u16"}"#));
		assert_err!(ScalarInfo::from_json(r#"{"type_name":"u16","byte_amount":-1,"bit_amount":16}"#));
	}
}
