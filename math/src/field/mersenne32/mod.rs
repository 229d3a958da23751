// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of arithmetic modulo $2^{32} - 1$.
//!
//! The modulus is composite ($3 \cdot 5 \cdot 17 \cdot 257 \cdot 65537$), but the units of the
//! ring have exponent $2^{16}$ (the Carmichael function of the modulus), and 7 is a unit of
//! maximal order. Hence roots of unity of every power-of-two order up to $2^{16}$ exist and
//! inverses can be computed as $x^{2^{16} - 1}$.
//!
//! Reduction modulo $2^{32} - 1$ is an end-around carry, so elements are stored lazily: the
//! backing `u32` is in the range [0, M], where M itself is a second representation of zero.
//! This redundancy is never observable: comparison, hashing, formatting and integer conversion
//! all operate on canonical values.

use core::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use utils::Randomizable;

use super::{FieldElement, NttField};


// CONSTANTS
// ================================================================================================

/// Ring modulus = 2^32 - 1
const M: u32 = u32::MAX;

/// Exponent of the group of units (Carmichael function of M).
const LAMBDA: u64 = 1 << 16;

/// Number of bytes needed to represent field element
const ELEMENT_BYTES: usize = core::mem::size_of::<u32>();

// FIELD ELEMENT
// ================================================================================================

/// Represents an element of the ring of integers modulo 2^32 - 1.
///
/// Internal values are in the range [0, M] with M representing zero. The backing type is `u32`.
#[derive(Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(from = "u32", into = "u32"))]
pub struct BaseElement(u32);

impl BaseElement {
    /// Creates a new element from the provided `value`. Every `u32` value is a valid
    /// representation; M is interpreted as zero.
    pub const fn new(value: u32) -> BaseElement {
        BaseElement(value)
    }

    /// Returns canonical integer representation of this element.
    #[inline(always)]
    pub const fn as_int(&self) -> u32 {
        normalize(self.0)
    }
}

impl FieldElement for BaseElement {
    type PositiveInteger = u32;

    const ELEMENT_BYTES: usize = ELEMENT_BYTES;

    const ZERO: Self = BaseElement(0);
    const ONE: Self = BaseElement(1);

    #[inline]
    fn inv(self) -> Self {
        self.exp(LAMBDA - 1)
    }

    #[inline]
    fn normalize(self) -> Self {
        BaseElement(normalize(self.0))
    }
}

impl NttField for BaseElement {
    const MODULUS: Self::PositiveInteger = M;
    const MODULUS_BITS: u32 = 32;

    /// 7 has multiplicative order 2^16, which is the exponent of the group of units.
    const GENERATOR: Self = BaseElement(7);

    const GROUP_ORDER: u64 = LAMBDA;
    const TWO_ADICITY: u32 = 16;

    const IS_PRIME: bool = false;

    #[inline]
    fn as_int(&self) -> Self::PositiveInteger {
        normalize(self.0)
    }
}

impl Randomizable for BaseElement {
    const VALUE_SIZE: usize = ELEMENT_BYTES;

    fn from_random_bytes(bytes: &[u8]) -> Option<Self> {
        let value = u32::from_le_bytes(bytes[..ELEMENT_BYTES].try_into().ok()?);
        Some(BaseElement(value))
    }
}

impl Debug for BaseElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self)
    }
}

impl Display for BaseElement {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

// EQUALITY CHECKS
// ================================================================================================

impl PartialEq for BaseElement {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        normalize(self.0) == normalize(other.0)
    }
}

impl Eq for BaseElement {}

impl Hash for BaseElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_int().hash(state);
    }
}

// OVERLOADED OPERATORS
// ================================================================================================

impl Add for BaseElement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(add(self.0, rhs.0))
    }
}

impl AddAssign for BaseElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl Sub for BaseElement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(add(self.0, !rhs.0))
    }
}

impl SubAssign for BaseElement {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for BaseElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(mul(self.0, rhs.0))
    }
}

impl MulAssign for BaseElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl Div for BaseElement {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl DivAssign for BaseElement {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs
    }
}

impl Neg for BaseElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        // M - x is the bitwise complement of x
        Self(!self.0)
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl From<u64> for BaseElement {
    /// Converts a 64-bit value into an element, folding the high half into the low half.
    fn from(value: u64) -> Self {
        Self(add(value as u32, (value >> 32) as u32))
    }
}

impl From<u32> for BaseElement {
    /// Converts a 32-bit value into an element.
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<u16> for BaseElement {
    /// Converts a 16-bit value into an element.
    fn from(value: u16) -> Self {
        Self(value as u32)
    }
}

impl From<u8> for BaseElement {
    /// Converts an 8-bit value into an element.
    fn from(value: u8) -> Self {
        Self(value as u32)
    }
}

impl From<BaseElement> for u32 {
    fn from(value: BaseElement) -> Self {
        value.as_int()
    }
}

impl From<BaseElement> for u64 {
    fn from(value: BaseElement) -> Self {
        value.as_int() as u64
    }
}

// RING ARITHMETIC
// ================================================================================================

/// Computes (a + b) mod M with the result in [0, M]; a and b are assumed to be in [0, M].
#[inline(always)]
fn add(a: u32, b: u32) -> u32 {
    let res = a as u64 + b as u64;
    (res as u32) + ((res >> 32) as u32)
}

/// Computes (a * b) mod M with the result in [0, M]; a and b are assumed to be in [0, M].
#[inline(always)]
fn mul(a: u32, b: u32) -> u32 {
    let res = (a as u64) * (b as u64);
    let res = (res & M as u64) + (res >> 32);
    ((res & M as u64) + (res >> 32)) as u32
}

/// Maps M to zero; all other values are already canonical.
#[inline(always)]
const fn normalize(value: u32) -> u32 {
    if value == M {
        0
    } else {
        value
    }
}
