// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of the prime field with Fermat modulus $2^{16} + 1$.
//!
//! The multiplicative group of this field has order $2^{16}$, so transforms of any power-of-two
//! length up to 65536 are supported. Elements are stored in canonical form using `u32` as the
//! backing type. Reduction after multiplication relies on $2^{16} \equiv -1 \pmod{M}$.

use core::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use utils::Randomizable;

use super::{FieldElement, NttField};


// CONSTANTS
// ================================================================================================

/// Field modulus = 2^16 + 1
const M: u32 = 0x1_0001;

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
        BaseElement(value % M)
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
    const MODULUS: Self::PositiveInteger = M;
    const MODULUS_BITS: u32 = 17;

    /// 3 is a quadratic non-residue modulo any Fermat prime, and thus, generates the entire
    /// multiplicative group.
    const GENERATOR: Self = BaseElement(3);

    const GROUP_ORDER: u64 = (M - 1) as u64;
    const TWO_ADICITY: u32 = 16;

    const IS_PRIME: bool = true;

    #[inline]
    fn as_int(&self) -> Self::PositiveInteger {
        self.0
    }
}

impl Randomizable for BaseElement {
    const VALUE_SIZE: usize = ELEMENT_BYTES;

    fn from_random_bytes(bytes: &[u8]) -> Option<Self> {
        // keep 17 bits so that roughly half of the samples are accepted
        let value = u32::from_le_bytes(bytes[..ELEMENT_BYTES].try_into().ok()?) & 0x1_ffff;
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
    let res = a + b;
    res - ((res >= M) as u32) * M
}

/// Computes (a - b) mod M; a and b are assumed to be in [0, M).
#[inline(always)]
fn sub(a: u32, b: u32) -> u32 {
    let res = a.wrapping_sub(b);
    res.wrapping_add((((res as i32) < 0) as u32) * M)
}

/// Computes (a * b) mod M; a and b are assumed to be in [0, M).
///
/// The 32-bit product is split as hi * 2^16 + lo, which is congruent to lo - hi. The only
/// product which does not fit into 32 bits is 2^16 * 2^16 = (-1) * (-1).
#[inline(always)]
fn mul(a: u32, b: u32) -> u32 {
    let res = a.wrapping_mul(b);
    if res == 0 && a != 0 && b != 0 {
        return 1;
    }
    let lo = (res & 0xffff) as i32;
    let hi = (res >> 16) as i32;
    let res = lo - hi;
    if res < 0 {
        (res + M as i32) as u32
    } else {
        res as u32
    }
}
