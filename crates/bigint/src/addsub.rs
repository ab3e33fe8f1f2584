// Copyright 2025 Irreducible Inc.
use std::cmp::Ordering;

use dekker_limb::limb_consts;

use crate::{
	cmp::cmp_magnitude,
	integer::{Integer, Limbs, Sign},
};

/// Adds or subtracts two signed integers.
///
/// Subtraction flips the effective sign of `b` and then follows the same path as addition.
/// The operand with the larger magnitude determines the sign of the result; when the
/// effective signs differ the smaller magnitude is subtracted from the larger one, otherwise
/// the magnitudes are added.
///
/// Limb sums and differences stay far below `2^63`, so carries and borrows are tracked with
/// plain integer arithmetic.
///
/// # Arguments
/// * `a` - left operand
/// * `b` - right operand
/// * `is_subtraction` - computes `a - b` when set, `a + b` otherwise
pub(crate) fn add_and_subtract(a: &Integer, b: &Integer, is_subtraction: bool) -> Integer {
	let b_sign = if is_subtraction {
		b.sign().flip()
	} else {
		b.sign()
	};

	let (min, max, result_sign) = match cmp_magnitude(a.limbs(), b.limbs()) {
		Ordering::Less => (a, b, b_sign),
		_ => (b, a, a.sign()),
	};

	if min.is_zero() {
		return max.with_sign(result_sign);
	}

	let subtract = a.sign() != b_sign;
	let (min, max) = (min.limbs(), max.limbs());
	let mut result_len = max.len();

	if subtract && min.len() == result_len {
		// Equal high limbs cancel exactly.
		while result_len > 0 && min[result_len - 1] == max[result_len - 1] {
			result_len -= 1;
		}
		if result_len == 0 {
			return Integer::zero();
		}
	}

	let base = limb_consts().base_limb() as i64;
	let mut result = Limbs::with_capacity(result_len + 1);
	let mut carry = 0i64;
	for (i, &max_limb) in max[..result_len].iter().enumerate() {
		let min_limb = min.get(i).copied().unwrap_or(0) as i64;
		let mut limb = max_limb as i64 + carry;
		if subtract {
			limb -= min_limb;
			carry = if limb < 0 {
				limb += base;
				-1
			} else {
				0
			};
		} else {
			limb += min_limb;
			carry = if limb >= base {
				limb -= base;
				1
			} else {
				0
			};
		}
		result.push(limb as u64);
	}

	// |max| >= |min| rules out a final borrow.
	debug_assert!(carry >= 0);
	if carry != 0 {
		result.push(carry as u64);
	}

	Integer::from_limbs(result_sign, result)
}

impl Integer {
	/// Returns `self + other`.
	pub fn add(&self, other: &Integer) -> Integer {
		add_and_subtract(self, other, false)
	}

	/// Returns `self - other`.
	pub fn subtract(&self, other: &Integer) -> Integer {
		add_and_subtract(self, other, true)
	}
}
