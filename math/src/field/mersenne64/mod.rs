// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of arithmetic modulo $2^{64} - 1$.
//!
//! The modulus factors as $3 \cdot 5 \cdot 17 \cdot 257 \cdot 641 \cdot 65537 \cdot 6700417$.
//! The group of units has exponent $\lambda = 2^{16} \cdot 3 \cdot 5 \cdot 17449$ and 7 is a
//! unit of order $\lambda$, so inverses are computed as $x^{\lambda - 1}$.
//!
//! Elements are stored lazily in the range [0, M] (M is a second representation of zero) and
//! are normalized whenever their value is observed.

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

/// Ring modulus = 2^64 - 1
const M: u64 = u64::MAX;

/// Exponent of the group of units (Carmichael function of M) = 2^16 * 3 * 5 * 17449.
const LAMBDA: u64 = 17_153_064_960;

/// Number of bytes needed to represent field element
const ELEMENT_BYTES: usize = core::mem::size_of::<u64>();

// FIELD ELEMENT
// ================================================================================================

/// Represents an element of the ring of integers modulo 2^64 - 1.
///
/// Internal values are in the range [0, M] with M representing zero. The backing type is `u64`.
#[derive(Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(from = "u64", into = "u64"))]
pub struct BaseElement(u64);

impl BaseElement {
    /// Creates a new element from the provided `value`. Every `u64` value is a valid
    /// representation; M is interpreted as zero.
    pub const fn new(value: u64) -> BaseElement {
        BaseElement(value)
    }

    /// Returns canonical integer representation of this element.
    #[inline(always)]
    pub const fn as_int(&self) -> u64 {
        normalize(self.0)
    }
}

impl FieldElement for BaseElement {
    type PositiveInteger = u64;

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
    const MODULUS_BITS: u32 = 64;

    /// 7 has multiplicative order equal to the exponent of the group of units.
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
        let value = u64::from_le_bytes(bytes[..ELEMENT_BYTES].try_into().ok()?);
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
        Self(sub(self.0, rhs.0))
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

impl From<u128> for BaseElement {
    /// Converts a 128-bit value into an element, folding the high half into the low half.
    fn from(value: u128) -> Self {
        Self(add(value as u64, (value >> 64) as u64))
    }
}

impl From<u64> for BaseElement {
    /// Converts a 64-bit value into an element.
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<u32> for BaseElement {
    /// Converts a 32-bit value into an element.
    fn from(value: u32) -> Self {
        Self(value as u64)
    }
}

impl From<u16> for BaseElement {
    /// Converts a 16-bit value into an element.
    fn from(value: u16) -> Self {
        Self(value as u64)
    }
}

impl From<u8> for BaseElement {
    /// Converts an 8-bit value into an element.
    fn from(value: u8) -> Self {
        Self(value as u64)
    }
}

impl From<BaseElement> for u64 {
    fn from(value: BaseElement) -> Self {
        value.as_int()
    }
}

impl From<BaseElement> for u128 {
    fn from(value: BaseElement) -> Self {
        value.as_int() as u128
    }
}

// RING ARITHMETIC
// ================================================================================================

/// Computes (a + b) mod M with the result in [0, M]; a and b are assumed to be in [0, M].
#[inline(always)]
fn add(a: u64, b: u64) -> u64 {
    let res = a.wrapping_add(b);
    res + ((res < a) as u64)
}

/// Computes (a - b) mod M with the result in [0, M]; a and b are assumed to be in [0, M].
#[inline(always)]
fn sub(a: u64, b: u64) -> u64 {
    let res = a.wrapping_sub(b);
    res - ((res > a) as u64)
}

/// Computes (a * b) mod M with the result in [0, M]; a and b are assumed to be in [0, M].
#[inline(always)]
fn mul(a: u64, b: u64) -> u64 {
    let res = (a as u128) * (b as u128);
    add(res as u64, (res >> 64) as u64)
}

/// Maps M to zero; all other values are already canonical.
#[inline(always)]
const fn normalize(value: u64) -> u64 {
    if value == M {
        0
    } else {
        value
    }
}
