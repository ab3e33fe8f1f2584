// Copyright 2025 Irreducible Inc.
use std::{fmt, ops::Mul};

use dekker_limb::{Limb, limb_consts};
use smallvec::SmallVec;

/// Limb storage of a magnitude, least significant limb first.
///
/// Magnitudes of at most one limb are kept inline; longer ones spill to the heap. Consumers
/// only ever look at the slice, so both forms behave identically.
pub(crate) type Limbs = SmallVec<[Limb; 1]>;

/// Sign of an [`Integer`]. Zero is always [`Sign::NonNegative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
	/// Zero or positive.
	NonNegative,
	/// Strictly negative.
	Negative,
}

impl Sign {
	/// The opposite sign.
	pub fn flip(self) -> Sign {
		match self {
			Sign::NonNegative => Sign::Negative,
			Sign::Negative => Sign::NonNegative,
		}
	}
}

impl Mul for Sign {
	type Output = Sign;

	fn mul(self, rhs: Sign) -> Sign {
		if self == rhs {
			Sign::NonNegative
		} else {
			Sign::Negative
		}
	}
}

/// An exact integer of unbounded magnitude.
///
/// The value is `sign * sum(limbs[i] * BASE^i)` with every limb in `[0, BASE)`. The
/// representation is always canonical: the most significant limb is non-zero and zero has no
/// limbs and a non-negative sign. Structural equality is therefore numeric equality.
///
/// Values are immutable; every operation returns a new `Integer`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Integer {
	sign: Sign,
	magnitude: Limbs,
}

/// Result of [`Integer::narrow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narrowed {
	/// The magnitude fits in one limb and the value is exact as a native integer.
	Native(i64),
	/// The value needs more than one limb and is returned unchanged.
	Big(Integer),
}

impl Integer {
	/// The canonical zero.
	pub fn zero() -> Self {
		Self {
			sign: Sign::NonNegative,
			magnitude: Limbs::new(),
		}
	}

	/// One.
	pub fn one() -> Self {
		Self {
			sign: Sign::NonNegative,
			magnitude: SmallVec::from_buf([1]),
		}
	}

	/// Builds a canonical value from a sign and a little-endian magnitude that may carry
	/// most significant zero limbs.
	pub(crate) fn from_limbs(sign: Sign, mut magnitude: Limbs) -> Self {
		debug_assert!(magnitude.iter().all(|&limb| limb < limb_consts().base_limb()));
		while magnitude.last() == Some(&0) {
			magnitude.pop();
		}
		if magnitude.is_empty() {
			return Self::zero();
		}
		Self { sign, magnitude }
	}

	/// Same magnitude as `self` with the given sign. Zero keeps its non-negative sign.
	pub(crate) fn with_sign(&self, sign: Sign) -> Self {
		if self.is_zero() {
			return Self::zero();
		}
		Self {
			sign,
			magnitude: self.magnitude.clone(),
		}
	}

	/// Builds a value from a sign and an unsigned 128-bit magnitude.
	fn from_u128_with_sign(sign: Sign, mut value: u128) -> Self {
		let base = limb_consts().base_limb() as u128;
		let mut magnitude = Limbs::new();
		while value != 0 {
			magnitude.push((value % base) as Limb);
			value /= base;
		}
		Self::from_limbs(sign, magnitude)
	}

	/// The sign of the value.
	pub fn sign(&self) -> Sign {
		self.sign
	}

	/// Whether the value is zero.
	pub fn is_zero(&self) -> bool {
		self.magnitude.is_empty()
	}

	/// Whether the value is strictly negative.
	pub fn is_negative(&self) -> bool {
		self.sign == Sign::Negative
	}

	/// Number of significant limbs. Zero has none.
	pub fn limb_len(&self) -> usize {
		self.magnitude.len()
	}

	/// The magnitude limbs, least significant first.
	pub fn limbs(&self) -> &[Limb] {
		&self.magnitude
	}

	/// Whether the magnitude is exactly one.
	pub(crate) fn is_unit_magnitude(&self) -> bool {
		self.magnitude.as_slice() == [1]
	}

	/// `-1`, `0` or `1` according to the sign of the value.
	pub fn signum(&self) -> i32 {
		match (self.is_zero(), self.sign) {
			(true, _) => 0,
			(false, Sign::NonNegative) => 1,
			(false, Sign::Negative) => -1,
		}
	}

	/// The absolute value.
	pub fn abs(&self) -> Self {
		self.with_sign(Sign::NonNegative)
	}

	/// The additive inverse. Negating zero yields zero.
	pub fn negate(&self) -> Self {
		self.with_sign(self.sign.flip())
	}

	/// The exact native value if the magnitude occupies at most one limb.
	pub fn to_native(&self) -> Option<i64> {
		match (self.magnitude.as_slice(), self.sign) {
			([], _) => Some(0),
			([limb], Sign::NonNegative) => Some(*limb as i64),
			([limb], Sign::Negative) => Some(-(*limb as i64)),
			_ => None,
		}
	}

	/// Converts to a native integer when the magnitude occupies at most one limb and returns
	/// the value unchanged otherwise.
	///
	/// Callers must inspect the variant before assuming a native result.
	pub fn narrow(self) -> Narrowed {
		match self.to_native() {
			Some(value) => Narrowed::Native(value),
			None => Narrowed::Big(self),
		}
	}
}

impl Default for Integer {
	fn default() -> Self {
		Self::zero()
	}
}

impl fmt::Debug for Integer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Integer({self})")
	}
}

macro_rules! impl_from_unsigned {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Integer {
				fn from(value: $ty) -> Self {
					Integer::from_u128_with_sign(Sign::NonNegative, value as u128)
				}
			}
		)*
	};
}

macro_rules! impl_from_signed {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Integer {
				fn from(value: $ty) -> Self {
					let sign = if value < 0 { Sign::Negative } else { Sign::NonNegative };
					Integer::from_u128_with_sign(sign, (value as i128).unsigned_abs())
				}
			}
		)*
	};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
	use super::*;

	const BASE: u64 = 1 << 53;

	#[test]
	fn test_zero_is_canonical() {
		let zero = Integer::zero();
		assert!(zero.is_zero());
		assert_eq!(zero.sign(), Sign::NonNegative);
		assert_eq!(zero.limb_len(), 0);
		assert!(zero.limbs().is_empty());
		assert_eq!(Integer::from(0i64), zero);
		assert_eq!(Integer::from(0u128), zero);
		assert_eq!(Integer::default(), zero);
	}

	#[test]
	fn test_from_limbs_trims_and_drops_negative_zero() {
		let trimmed = Integer::from_limbs(Sign::Negative, SmallVec::from_vec(vec![5, 0, 0]));
		assert_eq!(trimmed.limbs(), &[5]);
		assert!(trimmed.is_negative());

		let zero = Integer::from_limbs(Sign::Negative, SmallVec::from_vec(vec![0, 0]));
		assert_eq!(zero, Integer::zero());
		assert!(!zero.is_negative());
	}

	#[test]
	fn test_from_primitives_splits_at_base() {
		let value = Integer::from(u64::MAX);
		assert_eq!(value.limbs(), &[u64::MAX % BASE, u64::MAX / BASE]);

		let negative = Integer::from(i64::MIN);
		assert!(negative.is_negative());
		assert_eq!(negative.limbs(), &[0, 1 << 10]);

		let wide = Integer::from(u128::MAX);
		assert_eq!(wide.limb_len(), 3);

		assert_eq!(Integer::from(-7i8).to_native(), Some(-7));
		assert_eq!(Integer::from(BASE - 1).limb_len(), 1);
		assert_eq!(Integer::from(BASE).limbs(), &[0, 1]);
	}

	#[test]
	fn test_negate_and_abs() {
		let value = Integer::from(-42i32);
		assert_eq!(value.negate(), Integer::from(42i32));
		assert_eq!(value.abs(), Integer::from(42i32));
		assert_eq!(value.negate().negate(), value);
		assert_eq!(Integer::zero().negate(), Integer::zero());
		assert_eq!(value.signum(), -1);
		assert_eq!(Integer::zero().signum(), 0);
		assert_eq!(Integer::one().signum(), 1);
	}

	#[test]
	fn test_sign_product() {
		assert_eq!(Sign::Negative * Sign::Negative, Sign::NonNegative);
		assert_eq!(Sign::Negative * Sign::NonNegative, Sign::Negative);
		assert_eq!(Sign::NonNegative * Sign::NonNegative, Sign::NonNegative);
		assert_eq!(Sign::Negative.flip(), Sign::NonNegative);
	}

	#[test]
	fn test_native_conversion() {
		assert_eq!(Integer::zero().narrow(), Narrowed::Native(0));
		assert_eq!(Integer::from(-(BASE as i64 - 1)).narrow(), Narrowed::Native(1 - BASE as i64));

		let big = Integer::from(BASE);
		assert_eq!(big.to_native(), None);
		assert_eq!(big.clone().narrow(), Narrowed::Big(big));
	}

	#[test]
	fn test_small_magnitude_stays_inline() {
		assert!(!Integer::from(12345u32).magnitude.spilled());
		assert!(Integer::from(u64::MAX).magnitude.spilled());
	}
}
