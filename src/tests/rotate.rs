//		Packages																										

use super::*;
use claims::{assert_err_eq, assert_ok_eq};
use proptest::prelude::*;
use rubedo::sugar::s;



//		Tests																											

mod plain {
	use super::*;
	
	//		rotate_left															
	#[test]
	fn rotate_left__zero() {
		assert_ok_eq!(rotate_left(0x1234_5678_u32, 0), 0x1234_5678);
	}
	#[test]
	fn rotate_left__one() {
		assert_ok_eq!(rotate_left(0b1_u32, 1),         0b10);
		assert_ok_eq!(rotate_left(0x8000_0000_u32, 1), 0x0000_0001);
	}
	#[test]
	fn rotate_left__many() {
		assert_ok_eq!(rotate_left(0x12_u8, 4),         0x21);
		assert_ok_eq!(rotate_left(0x0001_u16, 12),     0x1000);
		assert_ok_eq!(rotate_left(0x8421_u16, 3),      0x8421_u16.rotate_left(3));
	}
	#[test]
	fn rotate_left__byte_aligned() {
		assert_ok_eq!(rotate_left(0x1234_5678_u32, 8),  0x3456_7812);
		assert_ok_eq!(rotate_left(0x1234_5678_u32, 24), 0x7812_3456);
	}
	#[test]
	fn rotate_left__full_rotation() {
		assert_ok_eq!(rotate_left(0xDEAD_BEEF_u32, 32), 0xDEAD_BEEF);
		assert_ok_eq!(rotate_left(0xDEAD_BEEF_u32, 64), 0xDEAD_BEEF);
	}
	#[test]
	fn rotate_left__reduced() {
		assert_ok_eq!(rotate_left(0b1_u32, 33), 0b10);
		assert_ok_eq!(rotate_left(0x01_u8, u32::MAX), 0x80);
	}
	#[test]
	fn rotate_left__signed_non_negative() {
		assert_ok_eq!(rotate_left(1_i32, 31),   i32::MIN);
		assert_ok_eq!(rotate_left(0x40_i8, 1),  i8::MIN);
	}
	#[test]
	fn rotate_left__negative() {
		let err = rotate_left(-1_i32, 1);
		assert_err_eq!(&err, &BitsError::InvalidArgument("rotation requires a non-negative value"));
		assert_eq!(err.unwrap_err().to_string(), s!("Invalid argument: rotation requires a non-negative value"));
		assert_err_eq!(rotate_left(i64::MIN, 0), BitsError::InvalidArgument("rotation requires a non-negative value"));
		assert_err_eq!(rotate_left(-0.0_f32, 1), BitsError::InvalidArgument("rotation requires a non-negative value"));
	}
	#[test]
	fn rotate_left__bool() {
		assert_ok_eq!(rotate_left(true, 8), true);
		assert_err_eq!(rotate_left(true, 1), BitsError::InvalidBitPattern { type_name: "bool" });
	}
	
	//		rotate_right														
	#[test]
	fn rotate_right__zero() {
		assert_ok_eq!(rotate_right(0x1234_5678_u32, 0), 0x1234_5678);
	}
	#[test]
	fn rotate_right__one() {
		assert_ok_eq!(rotate_right(0b1000_u32, 1), 0b100);
		assert_ok_eq!(rotate_right(0b1_u32, 1),    0x8000_0000);
	}
	#[test]
	fn rotate_right__many() {
		assert_ok_eq!(rotate_right(0x12_u8, 4),     0x21);
		assert_ok_eq!(rotate_right(0x8421_u16, 5),  0x8421_u16.rotate_right(5));
	}
	#[test]
	fn rotate_right__byte_aligned() {
		assert_ok_eq!(rotate_right(0x1234_5678_u32, 8),  0x7812_3456);
		assert_ok_eq!(rotate_right(0x1234_5678_u32, 16), 0x5678_1234);
	}
	#[test]
	fn rotate_right__full_rotation() {
		assert_ok_eq!(rotate_right(0xDEAD_BEEF_u32, 32), 0xDEAD_BEEF);
	}
	#[test]
	fn rotate_right__float() {
		let rotated = rotate_right(1.0_f32, 32).unwrap();
		assert_eq!(rotated, 1.0);
	}
	#[test]
	fn rotate_right__negative() {
		assert_err_eq!(rotate_right(-5_i16, 3), BitsError::InvalidArgument("rotation requires a non-negative value"));
	}
}

mod carry {
	use super::*;
	
	//		rotate_carry_left													
	#[test]
	fn rotate_carry_left__zero() {
		assert_ok_eq!(rotate_carry_left(0xA5_u8, true,  0), RotationState { value: 0xA5, carry: true });
		assert_ok_eq!(rotate_carry_left(0xA5_u8, false, 0), RotationState { value: 0xA5, carry: false });
	}
	#[test]
	fn rotate_carry_left__one() {
		assert_ok_eq!(rotate_carry_left(0x80_u8, false, 1), RotationState { value: 0x00, carry: true });
		assert_ok_eq!(rotate_carry_left(0x00_u8, true,  1), RotationState { value: 0x01, carry: false });
		assert_ok_eq!(rotate_carry_left(0x41_u8, true,  1), RotationState { value: 0x83, carry: false });
	}
	#[test]
	fn rotate_carry_left__carry_from_last_step() {
		//	The top bit of the original value is only the carry after one step
		assert_ok_eq!(rotate_carry_left(0x80_u8, false, 2), RotationState { value: 0x01, carry: false });
		assert_ok_eq!(rotate_carry_left(0x40_u8, false, 2), RotationState { value: 0x00, carry: true });
	}
	#[test]
	fn rotate_carry_left__across_bytes() {
		assert_ok_eq!(rotate_carry_left(0x0080_u16, false, 1), RotationState { value: 0x0100, carry: false });
		assert_ok_eq!(rotate_carry_left(0x8000_u16, false, 1), RotationState { value: 0x0000, carry: true });
	}
	#[test]
	fn rotate_carry_left__full_ring() {
		assert_ok_eq!(rotate_carry_left(0x5A_u8, true, 9),  RotationState { value: 0x5A, carry: true });
		assert_ok_eq!(rotate_carry_left(0x5A_u8, true, 18), RotationState { value: 0x5A, carry: true });
	}
	#[test]
	fn rotate_carry_left__negative() {
		assert_err_eq!(
			rotate_carry_left(-1_i8, false, 1),
			BitsError::InvalidArgument("rotation requires a non-negative value")
		);
	}
	
	//		rotate_carry_right													
	#[test]
	fn rotate_carry_right__zero() {
		assert_ok_eq!(rotate_carry_right(0x3C_u8, true, 0), RotationState { value: 0x3C, carry: true });
	}
	#[test]
	fn rotate_carry_right__one() {
		assert_ok_eq!(rotate_carry_right(0x01_u8, false, 1), RotationState { value: 0x00, carry: true });
		assert_ok_eq!(rotate_carry_right(0x00_u8, true,  1), RotationState { value: 0x80, carry: false });
		assert_ok_eq!(rotate_carry_right(0x82_u8, true,  1), RotationState { value: 0xC1, carry: false });
	}
	#[test]
	fn rotate_carry_right__carry_from_last_step() {
		assert_ok_eq!(rotate_carry_right(0x01_u8, false, 2), RotationState { value: 0x80, carry: false });
		assert_ok_eq!(rotate_carry_right(0x02_u8, false, 2), RotationState { value: 0x00, carry: true });
	}
	#[test]
	fn rotate_carry_right__across_bytes() {
		assert_ok_eq!(rotate_carry_right(0x0100_u16, false, 1), RotationState { value: 0x0080, carry: false });
	}
	#[test]
	fn rotate_carry_right__negative() {
		assert_err_eq!(
			rotate_carry_right(i32::MIN, true, 4),
			BitsError::InvalidArgument("rotation requires a non-negative value")
		);
	}
	
	//		RotationState														
	#[test]
	fn rotation_state__serialize() {
		assert_ok_eq!(
			serde_json::to_string(&RotationState { value: 7_u8, carry: true }),
			s!(r#"{"value":7,"carry":true}"#)
		);
	}
}

mod properties {
	use super::*;
	
	proptest! {
		//		rotate_left														
		#[test]
		fn rotate_left__matches_std(value in any::<u64>(), shift in any::<u32>()) {
			prop_assert_eq!(rotate_left(value, shift),  Ok(value.rotate_left(shift)));
			prop_assert_eq!(rotate_right(value, shift), Ok(value.rotate_right(shift)));
		}
		#[test]
		fn rotate_left__inverts_rotate_right(value in any::<u32>(), shift in 0_u32..200) {
			let rotated = rotate_right(value, shift).unwrap();
			prop_assert_eq!(rotate_left(rotated, shift), Ok(value));
		}
		
		//		rotate_carry_left												
		#[test]
		fn rotate_carry_left__chains(value in any::<u16>(), carry in any::<bool>(), m in 0_u32..40, n in 0_u32..40) {
			let first = rotate_carry_left(value, carry, m).unwrap();
			prop_assert_eq!(rotate_carry_left(first.value, first.carry, n), rotate_carry_left(value, carry, m + n));
		}
		#[test]
		fn rotate_carry_left__inverts_rotate_carry_right(value in any::<u32>(), carry in any::<bool>(), shift in 0_u32..100) {
			let rotated = rotate_carry_right(value, carry, shift).unwrap();
			prop_assert_eq!(rotate_carry_left(rotated.value, rotated.carry, shift), Ok(RotationState { value, carry }));
		}
		
		//		rotate_carry_right												
		#[test]
		fn rotate_carry_right__chains(value in any::<u8>(), carry in any::<bool>(), m in 0_u32..30, n in 0_u32..30) {
			let first = rotate_carry_right(value, carry, m).unwrap();
			prop_assert_eq!(rotate_carry_right(first.value, first.carry, n), rotate_carry_right(value, carry, m + n));
		}
	}
}
