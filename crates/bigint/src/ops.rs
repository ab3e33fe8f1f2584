// Copyright 2025 Irreducible Inc.
//! Operator traits forwarding to the named [`Integer`] operations.
//!
//! Every binary operator is implemented for all four owned/borrowed operand combinations,
//! together with its compound assignment form.

use std::{
	iter::{Product, Sum},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
};

use crate::{
	addsub::add_and_subtract,
	div::{DivMode, divide_and_remainder},
	error::Error,
	integer::Integer,
};

/// Operators have no error channel; a zero divisor panics like it does for primitive integers.
fn expect_divisor(result: Result<Integer, Error>) -> Integer {
	result.unwrap_or_else(|err| panic!("attempt to divide: {err}"))
}

macro_rules! impl_binary_op {
	($op:ident, $op_fn:ident, $op_assign:ident, $op_assign_fn:ident, |$a:ident, $b:ident| $body:expr) => {
		impl $op<&Integer> for &Integer {
			type Output = Integer;

			fn $op_fn(self, rhs: &Integer) -> Integer {
				let ($a, $b) = (self, rhs);
				$body
			}
		}

		impl $op<Integer> for &Integer {
			type Output = Integer;

			fn $op_fn(self, rhs: Integer) -> Integer {
				$op::$op_fn(self, &rhs)
			}
		}

		impl $op<&Integer> for Integer {
			type Output = Integer;

			fn $op_fn(self, rhs: &Integer) -> Integer {
				$op::$op_fn(&self, rhs)
			}
		}

		impl $op<Integer> for Integer {
			type Output = Integer;

			fn $op_fn(self, rhs: Integer) -> Integer {
				$op::$op_fn(&self, &rhs)
			}
		}

		impl $op_assign<&Integer> for Integer {
			fn $op_assign_fn(&mut self, rhs: &Integer) {
				*self = $op::$op_fn(&*self, rhs);
			}
		}

		impl $op_assign<Integer> for Integer {
			fn $op_assign_fn(&mut self, rhs: Integer) {
				*self = $op::$op_fn(&*self, &rhs);
			}
		}
	};
}

impl_binary_op!(Add, add, AddAssign, add_assign, |a, b| add_and_subtract(a, b, false));
impl_binary_op!(Sub, sub, SubAssign, sub_assign, |a, b| add_and_subtract(a, b, true));
impl_binary_op!(Mul, mul, MulAssign, mul_assign, |a, b| a.multiply(b));
impl_binary_op!(Div, div, DivAssign, div_assign, |a, b| {
	expect_divisor(divide_and_remainder(a, b, DivMode::Quotient))
});
impl_binary_op!(Rem, rem, RemAssign, rem_assign, |a, b| {
	expect_divisor(divide_and_remainder(a, b, DivMode::Remainder))
});

impl Neg for Integer {
	type Output = Integer;

	fn neg(self) -> Integer {
		self.negate()
	}
}

impl Neg for &Integer {
	type Output = Integer;

	fn neg(self) -> Integer {
		self.negate()
	}
}

impl Sum for Integer {
	fn sum<I: Iterator<Item = Integer>>(iter: I) -> Self {
		iter.fold(Integer::zero(), |acc, x| acc + x)
	}
}

impl<'a> Sum<&'a Integer> for Integer {
	fn sum<I: Iterator<Item = &'a Integer>>(iter: I) -> Self {
		iter.fold(Integer::zero(), |acc, x| acc + x)
	}
}

impl Product for Integer {
	fn product<I: Iterator<Item = Integer>>(iter: I) -> Self {
		iter.fold(Integer::one(), |acc, x| acc * x)
	}
}

impl<'a> Product<&'a Integer> for Integer {
	fn product<I: Iterator<Item = &'a Integer>>(iter: I) -> Self {
		iter.fold(Integer::one(), |acc, x| acc * x)
	}
}
