// Copyright 2025 Irreducible Inc.
//! Compensated limb primitives.
//!
//! A [`Limb`] is an integer in `[0, BASE)`. Limbs are stored as `u64` and only converted to
//! `f64` inside this module, where every conversion is exact because `BASE = 2^53`.
//!
//! The two primitives compute results that do not fit a single float exactly. Each one takes
//! the rounded floating-point result, recovers the rounding error with Veltkamp-Dekker
//! operand splitting, and then corrects the result by at most a couple of units so that it
//! is the exact integer answer.

use crate::consts::LimbConsts;

/// One digit of a big integer magnitude, in `[0, BASE)`.
pub type Limb = u64;

impl LimbConsts {
	/// Returns `a * b + addend` exactly, provided `addend` is close to `-fl(a * b)`.
	///
	/// Both operands are split into a high and a low half with [`LimbConsts::split`]; the four
	/// partial products are exact and are summed in order of decreasing magnitude.
	#[inline]
	fn product_error(&self, a: f64, b: f64, addend: f64) -> f64 {
		let split = self.split();
		let at = split * a;
		let a_hi = at - (at - a);
		let a_lo = a - a_hi;
		let bt = split * b;
		let b_hi = bt - (bt - b);
		let b_lo = b - b_hi;
		((a_hi * b_hi + addend) + a_hi * b_lo + a_lo * b_hi) + a_lo * b_lo
	}

	/// Floor of `x` for `0 <= x <= BASE`.
	///
	/// Adding and removing `BASE` rounds `x` to the nearest integer; a result above `x` is
	/// stepped down by one.
	#[inline]
	fn floor_limb(&self, x: f64) -> f64 {
		let base = self.base();
		let rounded = (x - base) + base;
		if rounded > x { rounded - 1.0 } else { rounded }
	}

	/// Exact multiply-with-carry.
	///
	/// Returns `(lo, hi)` such that `carry + a * b = hi * BASE + lo` with both halves in
	/// `[0, BASE)`.
	///
	/// `carry` and `a` must be limbs. `b` may additionally equal `BASE`, which lets callers
	/// multiply by a digit group radix that is exactly the limb base.
	#[inline]
	pub fn mul_carry(&self, carry: Limb, a: Limb, b: Limb) -> (Limb, Limb) {
		let base_limb = self.base_limb();
		debug_assert!(carry < base_limb && a < base_limb && b <= base_limb);

		let base = self.base();
		let (carry, a, b) = (carry as f64, a as f64, b as f64);

		let product = a * b;
		let error = self.product_error(a, b, -product);

		let mut hi = self.floor_limb(product / base);
		let mut lo = product - hi * base + error;
		if lo < 0.0 {
			lo += base;
			hi -= 1.0;
		}

		lo += carry - base;
		if lo < 0.0 {
			lo += base;
		} else {
			hi += 1.0;
		}

		debug_assert!((0.0..base).contains(&lo) && (0.0..base).contains(&hi));
		(lo as Limb, hi as Limb)
	}

	/// Exact two-limb by one-limb division.
	///
	/// Returns `(q, r)` such that `hi * BASE + lo = q * divisor + r` with `0 <= r < divisor`.
	/// `divisor` must be in `[1, BASE]` and `lo` must be a limb.
	///
	/// # Panics
	///
	/// Panics if `hi >= divisor`; the quotient would not fit in a single limb. Correct callers
	/// never reach this.
	#[inline]
	pub fn div_wide(&self, hi: Limb, lo: Limb, divisor: Limb) -> (Limb, Limb) {
		assert!(hi < divisor, "div_wide: high limb {hi} is not below divisor {divisor}");
		debug_assert!(lo < self.base_limb() && divisor <= self.base_limb());

		let base = self.base();
		let (hi, lo, divisor) = (hi as f64, lo as f64, divisor as f64);

		let scaled = hi * base;
		let mut q = self.floor_limb(scaled / divisor);

		// Exact `scaled - q * divisor`.
		let mut r = 0.0 - self.product_error(q, divisor, -scaled);
		if r < 0.0 {
			q -= 1.0;
			r += divisor;
		}

		r += lo - divisor;
		if r < 0.0 {
			r += divisor;
		} else {
			q += 1.0;
		}

		let extra = self.floor_limb(r / divisor);
		r -= extra * divisor;
		q += extra;

		debug_assert!((0.0..divisor).contains(&r));
		(q as Limb, r as Limb)
	}
}
