// Copyright 2025 Irreducible Inc.
use dekker_limb::{Limb, limb_consts};
use smallvec::smallvec;

use crate::integer::{Integer, Limbs};

/// Schoolbook product of two non-empty magnitudes.
///
/// For every limb of `b` the row `a * b[i]` is accumulated into `result[i..]` with the exact
/// multiply-with-carry primitive. Each step adds the existing result limb to the running
/// carry first; when that sum exceeds one limb the excess is carried separately, so the
/// primitive always sees a carry below `BASE`.
///
/// The returned magnitude has exactly `a.len() + b.len()` limbs and may have a zero most
/// significant limb.
pub(crate) fn textbook_mul(a: &[Limb], b: &[Limb]) -> Limbs {
	let consts = limb_consts();
	let base = consts.base_limb();

	let mut result: Limbs = smallvec![0; a.len() + b.len()];
	for (i, &b_limb) in b.iter().enumerate() {
		let mut carry = 0;
		for (j, &a_limb) in a.iter().enumerate() {
			let mut acc = carry + result[i + j];
			let overflow = if acc >= base {
				acc -= base;
				1
			} else {
				0
			};
			let (lo, hi) = consts.mul_carry(acc, a_limb, b_limb);
			result[i + j] = lo;
			carry = hi + overflow;
		}
		result[i + a.len()] = carry;
	}
	result
}

impl Integer {
	/// Returns `self * other`.
	pub fn multiply(&self, other: &Integer) -> Integer {
		if self.is_zero() || other.is_zero() {
			return Integer::zero();
		}

		let sign = self.sign() * other.sign();
		if self.is_unit_magnitude() {
			return other.with_sign(sign);
		}
		if other.is_unit_magnitude() {
			return self.with_sign(sign);
		}

		Integer::from_limbs(sign, textbook_mul(self.limbs(), other.limbs()))
	}
}
