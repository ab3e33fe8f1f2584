// Copyright 2025 Irreducible Inc.
//! Derivation of the limb base and the operand-splitting constant.

use std::sync::OnceLock;

use crate::limb::Limb;

/// Constants derived from the precision of `f64`.
///
/// `base` is the limb radix, `2 / epsilon`, and `split` is the Veltkamp-Dekker splitting
/// constant, the smallest `2^k + 1` with `(2^k)^2 >= base`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbConsts {
	epsilon: f64,
	base: f64,
	split: f64,
}

impl LimbConsts {
	/// Derives the constants by probing the floating-point arithmetic.
	///
	/// Most callers want the process-wide instance returned by [`limb_consts`].
	pub fn derive() -> Self {
		let mut epsilon = 1.0f64;
		while 1.0 + epsilon / 2.0 != 1.0 {
			epsilon /= 2.0;
		}
		let base = 2.0 / epsilon;

		let mut threshold = 1.0f64;
		while threshold * threshold < base {
			threshold *= 2.0;
		}
		let split = threshold + 1.0;

		tracing::debug!(epsilon, base, split, "derived limb constants");

		Self {
			epsilon,
			base,
			split,
		}
	}

	/// Machine epsilon of the host floating-point type.
	pub fn epsilon(&self) -> f64 {
		self.epsilon
	}

	/// The limb radix as a float.
	pub fn base(&self) -> f64 {
		self.base
	}

	/// The limb radix as an integer. Every limb is strictly below this value.
	pub fn base_limb(&self) -> Limb {
		self.base as Limb
	}

	/// The Dekker splitting constant.
	pub fn split(&self) -> f64 {
		self.split
	}
}

/// Returns the process-wide limb constants, deriving them on first use.
pub fn limb_consts() -> &'static LimbConsts {
	static CONSTS: OnceLock<LimbConsts> = OnceLock::new();
	CONSTS.get_or_init(LimbConsts::derive)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_binary64_constants() {
		let consts = LimbConsts::derive();
		assert_eq!(consts.epsilon(), f64::EPSILON);
		assert_eq!(consts.base(), 9007199254740992.0);
		assert_eq!(consts.base_limb(), 1 << 53);
		assert_eq!(consts.split(), 134217729.0);
	}

	#[test]
	fn test_base_is_twice_inverse_epsilon() {
		let consts = limb_consts();
		assert_eq!(consts.base() * consts.epsilon(), 2.0);
		assert!(consts.base_limb().is_power_of_two());
	}

	#[test]
	fn test_split_brackets_square_root_of_base() {
		let consts = limb_consts();
		let threshold = consts.split() - 1.0;
		assert!(threshold * threshold >= consts.base());
		assert!((threshold / 2.0) * (threshold / 2.0) < consts.base());
	}

	#[test]
	fn test_shared_instance_is_stable() {
		let first = limb_consts() as *const LimbConsts;
		let second = limb_consts() as *const LimbConsts;
		assert_eq!(first, second);
		assert_eq!(*limb_consts(), LimbConsts::derive());
	}
}
