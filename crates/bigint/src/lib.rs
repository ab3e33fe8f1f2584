// Copyright 2025 Irreducible Inc.
//! Exact arbitrary-precision signed integers.
//!
//! An [`Integer`] stores a sign and a little-endian magnitude of limbs in `[0, BASE)`, where
//! `BASE = 2^53` is derived at runtime from the binary64 epsilon. All limb products and
//! quotients go through the compensated primitives of [`dekker_limb`], so results are exact
//! at every size.
//!
//! The API offers the named operations ([`Integer::add`], [`Integer::subtract`],
//! [`Integer::multiply`], [`Integer::divide`], [`Integer::remainder`], [`Integer::negate`],
//! [`Integer::compare`]) alongside the standard operator and formatting traits. Division by
//! zero and malformed numerals are reported through [`Error`]; the `/` and `%` operators
//! panic on a zero divisor instead, like primitive integers.
//!
//! ```
//! use dekker_bigint::{Integer, Radix};
//!
//! let a: Integer = "123456789012345678901234567890".parse().unwrap();
//! let b = Integer::from(987654321u32);
//! assert_eq!((&a * &b).to_string(), "121932631124828532112482853211126352690");
//! assert_eq!(a.remainder(&b).unwrap().format(Radix::new(16).unwrap()), "224372e5");
//! ```

#![warn(missing_docs)]

mod addsub;
mod cmp;
mod div;
mod error;
mod integer;
mod mul;
mod ops;
mod power;
mod radix;


pub use dekker_limb::Limb;
pub use error::Error;
pub use integer::{Integer, Narrowed, Sign};
pub use radix::Radix;
