// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of a 32-bit prime field with modulus $2^{32} - 2^{20} + 1$.
//!
//! The modulus is a Proth prime: $p - 1 = 2^{20} \cdot 3^2 \cdot 5 \cdot 7 \cdot 13$, which means
//! that transforms of length $2^k$ (up to $2^{20}$) as well as lengths with small odd factors
//! (3, 9, 5, 7, 13) are supported.
//!
//! Elements are always kept in canonical form in the range [0, M). Multiplication uses a
//! quotient estimate obtained from a precomputed reciprocal of the modulus: the estimate is
//! never above the true quotient and is at most one below it, so a single conditional
//! subtraction completes the reduction. Two variants are provided: [mul_wide] relies on a
//! 64x64-bit multiplication with 128-bit result, and [mul_split] uses only 32x32-bit
//! multiplications with 64-bit results. Multiplication operator picks the variant based on the
//! pointer width of the target.

use core::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use utils::Randomizable;

use super::{FieldElement, NttField};

#[cfg(test)]
mod tests;

// CONSTANTS
// ================================================================================================

/// Field modulus = 2^32 - 2^20 + 1
const M: u32 = 0xfff0_0001;

/// floor(2^64 / M)
const INV_M: u64 = ((1u128 << 64) / M as u128) as u64;

/// floor(2^64 / M) - 2^32; this value fits into 32 bits.
const INV_M_LOW: u64 = INV_M - (1u64 << 32);

/// Generator of the entire multiplicative group.
const G: u32 = 19;

/// Number of bytes needed to represent field element
const ELEMENT_BYTES: usize = core::mem::size_of::<u32>();

// FIELD ELEMENT
// ================================================================================================

/// Represents base field element in the field.
///
/// Internal values are stored in their canonical form in the range [0, M). The backing type is
/// `u32`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(from = "u32", into = "u32"))]
pub struct BaseElement(u32);

impl BaseElement {
    /// Creates a new field element from the provided `value`. If the value is greater than or
    /// equal to the field modulus, modular reduction is silently performed.
    pub const fn new(value: u32) -> BaseElement {
        if value >= M {
            BaseElement(value - M)
        } else {
            BaseElement(value)
        }
    }

    /// Returns a field element for the provided `value`, or None if the value is not smaller
    /// than the field modulus.
    pub const fn from_canonical(value: u32) -> Option<Self> {
        if value < M {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns canonical integer representation of this field element.
    #[inline(always)]
    pub const fn as_int(&self) -> u32 {
        self.0
    }
}

impl FieldElement for BaseElement {
    type PositiveInteger = u32;

    const ELEMENT_BYTES: usize = ELEMENT_BYTES;

    const ZERO: Self = BaseElement(0);
    const ONE: Self = BaseElement(1);

    #[inline]
    fn inv(self) -> Self {
        self.exp((M - 2) as u64)
    }
}

impl NttField for BaseElement {
    /// sage: MODULUS = 2^32 - 2^20 + 1 \
    /// sage: GF(MODULUS).is_prime_field() \
    /// True
    const MODULUS: Self::PositiveInteger = M;
    const MODULUS_BITS: u32 = 32;

    /// sage: GF(MODULUS).primitive_element() \
    /// 19
    const GENERATOR: Self = BaseElement(G);

    const GROUP_ORDER: u64 = (M - 1) as u64;

    /// sage: is_odd((MODULUS - 1) / 2^20) \
    /// True
    const TWO_ADICITY: u32 = 20;

    const IS_PRIME: bool = true;

    #[inline]
    fn as_int(&self) -> Self::PositiveInteger {
        self.0
    }
}

impl Randomizable for BaseElement {
    const VALUE_SIZE: usize = ELEMENT_BYTES;

    fn from_random_bytes(bytes: &[u8]) -> Option<Self> {
        let value = u32::from_le_bytes(bytes[..ELEMENT_BYTES].try_into().ok()?);
        Self::from_canonical(value)
    }
}

impl Debug for BaseElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self)
    }
}

impl Display for BaseElement {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        write!(f, "{}", self.0)
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
        #[cfg(target_pointer_width = "64")]
        let result = mul_wide(self.0, rhs.0);

        #[cfg(not(target_pointer_width = "64"))]
        let result = mul_split(self.0, rhs.0);

        Self(result)
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
        Self(sub(0, self.0))
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl From<u64> for BaseElement {
    /// Converts a 64-bit value into a field element. If the value is greater than or equal to
    /// the field modulus, modular reduction is silently performed.
    fn from(value: u64) -> Self {
        Self((value % M as u64) as u32)
    }
}

impl From<u32> for BaseElement {
    /// Converts a 32-bit value into a field element. If the value is greater than or equal to
    /// the field modulus, modular reduction is silently performed.
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<u16> for BaseElement {
    /// Converts a 16-bit value into a field element.
    fn from(value: u16) -> Self {
        Self(value as u32)
    }
}

impl From<u8> for BaseElement {
    /// Converts an 8-bit value into a field element.
    fn from(value: u8) -> Self {
        Self(value as u32)
    }
}

impl From<BaseElement> for u32 {
    fn from(value: BaseElement) -> Self {
        value.0
    }
}

impl From<BaseElement> for u64 {
    fn from(value: BaseElement) -> Self {
        value.0 as u64
    }
}

// FINITE FIELD ARITHMETIC
// ================================================================================================

/// Computes (a + b) mod M; a and b are assumed to be in [0, M).
#[inline(always)]
fn add(a: u32, b: u32) -> u32 {
    sub(a, M - b)
}

/// Computes (a - b) mod M; a and b are assumed to be in [0, M).
#[inline(always)]
fn sub(a: u32, b: u32) -> u32 {
    let res = a.wrapping_sub(b);
    res.wrapping_add(((res > a) as u32) * M)
}

/// Computes (a * b) mod M using a 128-bit product of the intermediate value with the reciprocal
/// of the modulus; a and b are assumed to be in [0, M).
#[inline(always)]
pub fn mul_wide(a: u32, b: u32) -> u32 {
    let x = (a as u64) * (b as u64);
    let q = (((x as u128) * (INV_M as u128)) >> 64) as u64;
    reduce_once(x - q * M as u64)
}

/// Computes (a * b) mod M using only 32x32-bit multiplications; a and b are assumed to be in
/// [0, M).
///
/// The reciprocal 2^64 / M is split into 2^32 and a 32-bit remainder; the product of the low
/// half of the intermediate value with the remainder is dropped from the quotient estimate.
#[inline(always)]
pub fn mul_split(a: u32, b: u32) -> u32 {
    let x = (a as u64) * (b as u64);
    let q = (x + (x >> 32) * INV_M_LOW) >> 32;
    reduce_once(x - q * M as u64)
}

/// Reduces a value in [0, 2M) range to [0, M) range.
#[inline(always)]
fn reduce_once(value: u64) -> u32 {
    if value >= M as u64 {
        (value - M as u64) as u32
    } else {
        value as u32
    }
}
