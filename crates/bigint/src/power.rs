// Copyright 2025 Irreducible Inc.
use std::cmp::Ordering;

use crate::{error::Error, integer::Integer};

impl Integer {
	/// Returns `self^exponent` by repeated multiplication, starting from one.
	///
	/// The cost is linear in `exponent`. `x.pow(0)` is one for every `x`, zero included.
	pub fn pow(&self, exponent: u32) -> Integer {
		(0..exponent).fold(Integer::one(), |acc, _| acc.multiply(self))
	}

	/// Returns the largest `k` with `base^k < self`, found by multiplying up from one.
	///
	/// Values of at most one, zero and negatives included, give `-1`. An exact power
	/// `base^n` gives `n - 1`.
	pub fn log(&self, base: &Integer) -> Result<i64, Error> {
		if base.compare(&Integer::from(2u32)) == Ordering::Less {
			return Err(Error::InvalidLogBase);
		}

		let mut power = Integer::one();
		let mut k = -1;
		while self.compare(&power) == Ordering::Greater {
			power = power.multiply(base);
			k += 1;
		}
		Ok(k)
	}
}
