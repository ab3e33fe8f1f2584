// Copyright 2025 Irreducible Inc.

/// Errors a caller can trigger through the public API.
///
/// Internal invariant violations inside the limb algorithms are not represented here; they
/// indicate a defect and panic instead.
#[allow(missing_docs)] // errors are self-documenting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("radix {radix} must be an integer between 2 and 36")]
	InvalidRadix { radix: u32 },
	#[error("numeral has no digits")]
	EmptyNumeral,
	#[error("invalid digit {digit:?} at position {position} for radix {radix}")]
	InvalidDigit {
		digit: char,
		position: usize,
		radix: u32,
	},
	#[error("division by zero")]
	DivisionByZero,
	#[error("logarithm base must be at least 2")]
	InvalidLogBase,
}

impl Error {
	/// Whether the error reports a numeral or radix that could not be parsed.
	pub fn is_malformed_input(&self) -> bool {
		matches!(
			self,
			Error::InvalidRadix { .. } | Error::EmptyNumeral | Error::InvalidDigit { .. }
		)
	}
}
