// Copyright 2025 Irreducible Inc.
use dekker_limb::{Limb, limb_consts};
use smallvec::smallvec;

use crate::{
	error::Error,
	integer::{Integer, Limbs},
};

/// Which half of the long division result to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DivMode {
	Quotient,
	Remainder,
}

/// Truncating long division, Knuth's Algorithm D.
///
/// The dividend and the divisor share one scratch buffer: the dividend, which is reduced to
/// the remainder in place, occupies `[0, a.len() + 1)` and the divisor starts at
/// `divisor_offset = a.len() + 1`. One more slot past the divisor keeps the inner loops free of
/// bounds special cases.
///
/// Multi-limb divisors are normalized by `lambda = floor(BASE / (top + 1))` so that their top
/// limb is at least `BASE / 2`. With that, the quotient digit estimated from the top two
/// remainder limbs overshoots by at most two, and the add-back loop runs at most twice per
/// digit.
///
/// The quotient takes the XOR of the operand signs; the remainder takes the sign of the
/// dividend.
///
/// # Panics
/// Panics if a normalization or descaling invariant fails, which indicates a defect in the
/// limb primitives.
pub(crate) fn divide_and_remainder(
	a: &Integer,
	b: &Integer,
	mode: DivMode,
) -> Result<Integer, Error> {
	if b.is_zero() {
		return Err(Error::DivisionByZero);
	}
	if a.is_zero() {
		return Ok(Integer::zero());
	}

	let quotient_sign = a.sign() * b.sign();
	if b.is_unit_magnitude() {
		return Ok(match mode {
			DivMode::Quotient => a.with_sign(quotient_sign),
			DivMode::Remainder => Integer::zero(),
		});
	}

	let _scope = tracing::trace_span!(
		"Long division",
		dividend_limbs = a.limb_len(),
		divisor_limbs = b.limb_len(),
		?mode,
	)
	.entered();

	let consts = limb_consts();
	let base = consts.base_limb();
	let (a_len, b_len) = (a.limb_len(), b.limb_len());

	let divisor_offset = a_len + 1;
	let mut buffer: Limbs = smallvec![0; divisor_offset + b_len + 1];
	buffer[..a_len].copy_from_slice(a.limbs());
	buffer[divisor_offset..divisor_offset + b_len].copy_from_slice(b.limbs());

	let mut top = buffer[divisor_offset + b_len - 1];

	let mut lambda = 1;
	if b_len > 1 {
		lambda = base / (top + 1);
		if lambda > 1 {
			let mut carry = 0;
			for limb in &mut buffer[..divisor_offset + b_len] {
				let (lo, hi) = consts.mul_carry(carry, *limb, lambda);
				*limb = lo;
				carry = hi;
			}
			buffer[divisor_offset + b_len] = carry;
			top = buffer[divisor_offset + b_len - 1];
		}
		assert!(top >= base / 2, "long division: divisor top limb {top} is not normalized");
	}

	let (remainder, divisor) = buffer.split_at_mut(divisor_offset);

	let shift = (a_len + 1).saturating_sub(b_len);
	let mut quotient: Option<Limbs> = None;

	for i in (0..shift).rev() {
		let t = b_len + i;
		let mut q = base - 1;
		if remainder[t] != top {
			q = consts.div_wide(remainder[t], remainder[t - 1], top).0;
		}

		// remainder[i..=t] -= q * divisor
		let mut borrow = 0i64;
		let mut carry = 0;
		for j in i..=t {
			let (lo, hi) = consts.mul_carry(carry, q, divisor[j - i]);
			carry = hi;
			borrow += remainder[j] as i64 - lo as i64;
			if borrow < 0 {
				remainder[j] = (base as i64 + borrow) as Limb;
				borrow = -1;
			} else {
				remainder[j] = borrow as Limb;
				borrow = 0;
			}
		}

		let mut corrections = 0;
		while borrow != 0 {
			q -= 1;
			corrections += 1;
			debug_assert!(corrections <= 2, "quotient digit estimate is off by more than two");

			// remainder[i..=t] += divisor
			let mut carry = 0;
			for k in i..=t {
				let sum = remainder[k] + divisor[k - i] + carry;
				if sum >= base {
					remainder[k] = sum - base;
					carry = 1;
				} else {
					remainder[k] = sum;
					carry = 0;
				}
			}
			borrow += carry as i64;
		}

		if mode == DivMode::Quotient && q != 0 {
			quotient.get_or_insert_with(|| smallvec![0; i + 1])[i] = q;
		}
	}

	match mode {
		DivMode::Quotient => Ok(match quotient {
			Some(quotient) => Integer::from_limbs(quotient_sign, quotient),
			None => Integer::zero(),
		}),
		DivMode::Remainder => {
			if lambda > 1 {
				let mut rest = 0;
				for limb in remainder.iter_mut().rev() {
					let (q, r) = consts.div_wide(rest, *limb, lambda);
					*limb = q;
					rest = r;
				}
				assert_eq!(rest, 0, "long division: remainder is not a multiple of lambda");
			}
			Ok(Integer::from_limbs(a.sign(), Limbs::from_slice(remainder)))
		}
	}
}

impl Integer {
	/// Returns the quotient `self / divisor`, truncated toward zero.
	pub fn divide(&self, divisor: &Integer) -> Result<Integer, Error> {
		divide_and_remainder(self, divisor, DivMode::Quotient)
	}

	/// Returns the remainder of `self / divisor`. It has the sign of `self` and a smaller
	/// magnitude than `divisor`.
	pub fn remainder(&self, divisor: &Integer) -> Result<Integer, Error> {
		divide_and_remainder(self, divisor, DivMode::Remainder)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::integer::Sign;

	const BASE: u64 = 1 << 53;

	fn int(limbs: &[u64]) -> Integer {
		Integer::from_limbs(Sign::NonNegative, Limbs::from_slice(limbs))
	}

	fn check_division(a: &Integer, b: &Integer) {
		let q = a.divide(b).unwrap();
		let r = a.remainder(b).unwrap();
		assert_eq!(q.multiply(b).add(&r), *a, "{a:?} / {b:?}");
		assert_eq!(r.compare_magnitude(b), std::cmp::Ordering::Less, "{a:?} % {b:?}");
		assert!(r.is_zero() || r.sign() == a.sign());
	}

	#[test]
	fn test_small_division() {
		assert_eq!(Integer::from(100u32).divide(&Integer::from(7u32)), Ok(Integer::from(14u32)));
		assert_eq!(Integer::from(100u32).remainder(&Integer::from(7u32)), Ok(Integer::from(2u32)));
	}

	#[test]
	fn test_truncates_toward_zero() {
		let cases = [(7i32, 2i32), (-7, 2), (7, -2), (-7, -2)];
		for (a, b) in cases {
			let (x, y) = (Integer::from(a), Integer::from(b));
			assert_eq!(x.divide(&y), Ok(Integer::from(a / b)), "{a} / {b}");
			assert_eq!(x.remainder(&y), Ok(Integer::from(a % b)), "{a} % {b}");
		}
	}

	#[test]
	fn test_division_by_zero() {
		let a = Integer::from(5u32);
		assert_eq!(a.divide(&Integer::zero()), Err(Error::DivisionByZero));
		assert_eq!(a.remainder(&Integer::zero()), Err(Error::DivisionByZero));
		assert_eq!(Integer::zero().divide(&Integer::zero()), Err(Error::DivisionByZero));
	}

	#[test]
	fn test_zero_dividend_and_unit_divisor() {
		let b = int(&[3, 4]);
		assert_eq!(Integer::zero().divide(&b), Ok(Integer::zero()));
		assert_eq!(Integer::zero().remainder(&b), Ok(Integer::zero()));

		let a = int(&[3, 4, 5]);
		assert_eq!(a.divide(&Integer::one().negate()), Ok(a.negate()));
		assert_eq!(a.remainder(&Integer::one()), Ok(Integer::zero()));
	}

	#[test]
	fn test_dividend_smaller_than_divisor() {
		let a = int(&[9, 9]);
		let b = int(&[1, 2, 3]);
		assert_eq!(a.divide(&b), Ok(Integer::zero()));
		assert_eq!(a.remainder(&b), Ok(a.clone()));
		assert_eq!(a.negate().remainder(&b), Ok(a.negate()));
	}

	#[test]
	fn test_exact_multi_limb_division() {
		let a = int(&[1, 2, 3, 4, 5]);
		let b = int(&[BASE - 1, 7]);
		let product = a.multiply(&b);
		assert_eq!(product.divide(&b), Ok(a.clone()));
		assert_eq!(product.divide(&a), Ok(b.clone()));
		assert_eq!(product.remainder(&b), Ok(Integer::zero()));
	}

	#[test]
	fn test_single_limb_divisor() {
		check_division(&int(&[BASE - 1, BASE - 1, BASE - 1]), &int(&[3]));
		check_division(&int(&[0, 0, 1]), &int(&[BASE - 1]));
		check_division(&int(&[12345, 678]), &int(&[2]));
	}

	#[test]
	fn test_already_normalized_divisor() {
		// Top limb at BASE / 2 gives lambda = 1.
		check_division(&int(&[5, 6, 7, BASE - 1]), &int(&[1, BASE / 2]));
		check_division(&int(&[0, 0, 0, BASE / 2]), &int(&[BASE - 1, BASE - 1]));
	}

	#[test]
	fn test_quotient_digit_capped_at_base_minus_one() {
		// The first digit estimate of 1 is too large and is corrected to 0. The remainder
		// window then starts with the divisor top limb, forcing the BASE - 1 estimate.
		let b = int(&[1, BASE / 2]);
		let a = int(&[0, 0, BASE / 2]);
		assert_eq!(a.divide(&b), Ok(int(&[BASE - 1])));
		assert_eq!(a.remainder(&b), Ok(int(&[1, BASE / 2 - 1])));
		check_division(&a.negate(), &b);
	}

	#[test]
	fn test_add_back_path() {
		// Divisors with small top limbs and large lower limbs make the estimate overshoot.
		let b = int(&[BASE - 1, BASE - 1, 1]);
		let a = int(&[0, 0, 0, 0, 2]);
		check_division(&a, &b);

		let b = int(&[BASE - 1, 0, BASE / 2]);
		let a = int(&[0, 0, BASE / 2 - 1, BASE / 2]);
		check_division(&a, &b);
	}

	#[test]
	fn test_division_by_self_and_by_negation() {
		let a = int(&[7, 8, 9]);
		assert_eq!(a.divide(&a), Ok(Integer::one()));
		assert_eq!(a.divide(&a.negate()), Ok(Integer::one().negate()));
		assert_eq!(a.remainder(&a.negate()), Ok(Integer::zero()));
	}
}
