// Copyright 2025 Irreducible Inc.
//! Limb-level arithmetic on top of the host floating-point type.
//!
//! Big integers built on this crate store their magnitude as a sequence of limbs in
//! `[0, BASE)`, where `BASE` is the largest power of two at which binary64 arithmetic
//! still represents every integer exactly. The only floating-point code lives here: the
//! one-time derivation of `BASE` and the Dekker splitting constant in [`consts`], and
//! the two compensated primitives in [`limb`] that recover the exact result of a limb
//! product and of a two-limb-by-one-limb quotient.
//!
//! Everything built on top of [`LimbConsts::mul_carry`] and [`LimbConsts::div_wide`]
//! treats limbs as plain exact integers.

#![warn(missing_docs)]

pub mod consts;
pub mod limb;

pub use consts::{LimbConsts, limb_consts};
pub use limb::Limb;
