// Copyright 2025 Irreducible Inc.
//! Conversion between [`Integer`]s and digit strings in radixes 2 through 36.
//!
//! Both directions work on groups of digits. A group is the longest run of radix-`r` digits
//! whose value always fits in one limb, so each group converts with native integer
//! arithmetic and only the combination of groups needs the limb primitives.

use std::{fmt, str::FromStr};

use dekker_limb::{Limb, limb_consts};

use crate::{
	error::Error,
	integer::{Integer, Limbs, Sign},
};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A validated numeral radix in `[2, 36]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Radix(u32);

/// Digit grouping for a radix: `group_radix = radix^group_len <= BASE < group_radix * radix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DigitGroups {
	pub group_len: usize,
	pub group_radix: Limb,
}

impl Radix {
	/// Radix used when none is given.
	pub const DEFAULT: Radix = Radix(10);
	/// Smallest supported radix.
	pub const MIN: u32 = 2;
	/// Largest supported radix; digits beyond 9 are the letters `a` through `z`.
	pub const MAX: u32 = 36;

	/// Validates `radix`.
	pub fn new(radix: u32) -> Result<Self, Error> {
		if (Self::MIN..=Self::MAX).contains(&radix) {
			Ok(Radix(radix))
		} else {
			Err(Error::InvalidRadix { radix })
		}
	}

	/// The radix as an integer.
	pub fn get(self) -> u32 {
		self.0
	}

	/// Number of digits converted natively as one group.
	pub fn group_len(self) -> usize {
		self.groups().group_len
	}

	/// `radix^group_len`, the largest power of the radix not above the limb base.
	pub fn group_radix(self) -> Limb {
		self.groups().group_radix
	}

	pub(crate) fn groups(self) -> DigitGroups {
		let radix = self.0 as Limb;
		let limit = limb_consts().base_limb() / radix;

		let mut group_len = 0;
		let mut group_radix: Limb = 1;
		while group_radix <= limit {
			group_len += 1;
			group_radix *= radix;
		}
		DigitGroups {
			group_len,
			group_radix,
		}
	}

	/// Value of an ASCII digit, accepting letters of either case.
	fn digit_value(self, byte: u8) -> Option<Limb> {
		let value = match byte {
			b'0'..=b'9' => byte - b'0',
			b'a'..=b'z' => byte - b'a' + 10,
			b'A'..=b'Z' => byte - b'A' + 10,
			_ => return None,
		};
		(u32::from(value) < self.0).then_some(value as Limb)
	}
}

impl Default for Radix {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl TryFrom<u32> for Radix {
	type Error = Error;

	fn try_from(radix: u32) -> Result<Self, Error> {
		Radix::new(radix)
	}
}

/// Evaluates one group of digits. `offset` is the byte position of `digits` in `text`.
fn parse_group(text: &str, digits: &[u8], offset: usize, radix: Radix) -> Result<Limb, Error> {
	let mut value: Limb = 0;
	for (i, &byte) in digits.iter().enumerate() {
		let Some(digit) = radix.digit_value(byte) else {
			let position = offset + i;
			return Err(Error::InvalidDigit {
				digit: text
					.get(position..)
					.and_then(|rest| rest.chars().next())
					.unwrap_or(char::REPLACEMENT_CHARACTER),
				position,
				radix: radix.get(),
			});
		};
		value = value * radix.get() as Limb + digit;
	}
	Ok(value)
}

/// Appends `value` in `radix`, left-padded with zeros to at least `width` digits.
fn push_digits(out: &mut String, mut value: Limb, radix: Radix, width: usize) {
	let radix = radix.get() as Limb;
	// 53 binary digits is the longest a limb can get.
	let mut buf = [b'0'; 64];
	let mut start = buf.len();
	while value != 0 {
		start -= 1;
		buf[start] = DIGITS[(value % radix) as usize];
		value /= radix;
	}
	start = start.min(buf.len() - width.max(1));
	out.extend(buf[start..].iter().map(|&byte| byte as char));
}

impl Integer {
	/// Parses a numeral with an optional leading `+` or `-`.
	///
	/// Digits beyond 9 are letters, case-insensitive. The numeral is split into digit groups
	/// from the least significant end; each group is evaluated natively and folded into the
	/// magnitude Horner-style, multiplying by the group radix with the exact limb primitive.
	///
	/// A numeral evaluating to zero yields the canonical zero whatever its sign.
	pub fn parse(text: &str, radix: Radix) -> Result<Integer, Error> {
		let (sign, offset) = match text.as_bytes().first() {
			Some(b'-') => (Sign::Negative, 1),
			Some(b'+') => (Sign::NonNegative, 1),
			_ => (Sign::NonNegative, 0),
		};
		let digits = &text.as_bytes()[offset..];
		if digits.is_empty() {
			return Err(Error::EmptyNumeral);
		}

		let _scope =
			tracing::trace_span!("Radix parse", radix = radix.get(), digits = digits.len())
				.entered();

		let DigitGroups {
			group_len,
			group_radix,
		} = radix.groups();

		// Group values, most significant first. The leading group may be short.
		let leading_len = (digits.len() - 1) % group_len + 1;
		let mut groups = Vec::with_capacity(digits.len().div_ceil(group_len));
		let mut start = 0;
		let mut end = leading_len;
		while start < digits.len() {
			groups.push(parse_group(text, &digits[start..end], offset + start, radix)?);
			start = end;
			end += group_len;
		}

		let consts = limb_consts();
		let mut magnitude = Limbs::with_capacity(groups.len());
		for group in groups {
			let mut carry = group;
			for limb in magnitude.iter_mut() {
				let (lo, hi) = consts.mul_carry(carry, *limb, group_radix);
				*limb = lo;
				carry = hi;
			}
			magnitude.push(carry);
		}

		Ok(Integer::from_limbs(sign, magnitude))
	}

	/// Parses a numeral in the given radix, validating the radix first.
	pub fn from_str_radix(text: &str, radix: u32) -> Result<Integer, Error> {
		Integer::parse(text, Radix::new(radix)?)
	}

	/// Digits of the magnitude, without sign.
	///
	/// The magnitude is divided by the group radix until it vanishes, peeling one group of
	/// digits off the least significant end per pass. All groups but the most significant are
	/// zero-padded to the full group length.
	fn format_magnitude(&self, radix: Radix) -> String {
		let mut out = String::new();
		match self.limbs() {
			[] => out.push('0'),
			&[limb] => push_digits(&mut out, limb, radix, 0),
			limbs => {
				let _scope =
					tracing::trace_span!("Radix format", radix = radix.get(), limbs = limbs.len())
						.entered();

				let consts = limb_consts();
				let DigitGroups {
					group_len,
					group_radix,
				} = radix.groups();
				assert!(
					group_radix * radix.get() as Limb > consts.base_limb(),
					"radix format: digit group for radix {} is not maximal",
					radix.get()
				);

				let mut remainder = limbs.to_vec();
				let mut len = remainder.len();
				let mut groups = Vec::new();
				while len != 0 {
					let mut rest = 0;
					for limb in remainder[..len].iter_mut().rev() {
						let (q, r) = consts.div_wide(rest, *limb, group_radix);
						*limb = q;
						rest = r;
					}
					while len > 0 && remainder[len - 1] == 0 {
						len -= 1;
					}
					groups.push(rest);
				}

				let mut groups = groups.into_iter().rev();
				if let Some(leading) = groups.next() {
					push_digits(&mut out, leading, radix, 0);
				}
				for group in groups {
					push_digits(&mut out, group, radix, group_len);
				}
			}
		}
		out
	}

	/// Formats the value in `radix`, with a leading `-` when negative. Letter digits are
	/// lowercase.
	pub fn format(&self, radix: Radix) -> String {
		let digits = self.format_magnitude(radix);
		if self.is_negative() {
			format!("-{digits}")
		} else {
			digits
		}
	}

	/// Formats the value in the given radix, validating the radix first.
	pub fn to_string_radix(&self, radix: u32) -> Result<String, Error> {
		Ok(self.format(Radix::new(radix)?))
	}
}

impl FromStr for Integer {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Integer::parse(s, Radix::DEFAULT)
	}
}

impl fmt::Display for Integer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "", &self.format_magnitude(Radix::DEFAULT))
	}
}

impl fmt::LowerHex for Integer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "0x", &self.format_magnitude(Radix(16)))
	}
}

impl fmt::UpperHex for Integer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let digits = self.format_magnitude(Radix(16)).to_ascii_uppercase();
		f.pad_integral(!self.is_negative(), "0x", &digits)
	}
}

impl fmt::Octal for Integer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "0o", &self.format_magnitude(Radix(8)))
	}
}

impl fmt::Binary for Integer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "0b", &self.format_magnitude(Radix(2)))
	}
}
