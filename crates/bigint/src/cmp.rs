// Copyright 2025 Irreducible Inc.
use std::cmp::Ordering;

use dekker_limb::Limb;

use crate::integer::{Integer, Sign};

/// Compares two canonical magnitudes.
///
/// The longer magnitude is larger; equal lengths are compared limb by limb from the most
/// significant end.
pub(crate) fn cmp_magnitude(a: &[Limb], b: &[Limb]) -> Ordering {
	a.len()
		.cmp(&b.len())
		.then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

impl Integer {
	/// Three-way signed comparison.
	pub fn compare(&self, other: &Integer) -> Ordering {
		match (self.sign(), other.sign()) {
			(Sign::NonNegative, Sign::NonNegative) => cmp_magnitude(self.limbs(), other.limbs()),
			(Sign::Negative, Sign::Negative) => cmp_magnitude(other.limbs(), self.limbs()),
			(Sign::NonNegative, Sign::Negative) => Ordering::Greater,
			(Sign::Negative, Sign::NonNegative) => Ordering::Less,
		}
	}

	/// Compares absolute values.
	pub fn compare_magnitude(&self, other: &Integer) -> Ordering {
		cmp_magnitude(self.limbs(), other.limbs())
	}
}

impl PartialOrd for Integer {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Integer {
	fn cmp(&self, other: &Self) -> Ordering {
		self.compare(other)
	}
}
