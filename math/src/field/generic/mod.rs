// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A generic implementation of prime fields with the modulus specified as a const parameter.
//!
//! Multiplication is reduced with a 128-bit remainder operation. This is considerably slower
//! than the specialized fields, but works for any prime modulus below $2^{64}$. The main uses
//! of this field are as a reference against which the specialized fields are checked, and as a
//! fallback for moduli which do not have a specialized implementation.

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

/// Number of bytes needed to represent field element
const ELEMENT_BYTES: usize = core::mem::size_of::<u64>();

/// Field with modulus 2^64 - 2^32 + 1 and generator 7.
pub type Goldilocks = PrimeElement<0xffff_ffff_0000_0001, 7>;

// FIELD ELEMENT
// ================================================================================================

/// Represents an element of the prime field with modulus `M`.
///
/// `M` must be prime and `G` must generate the multiplicative group of the field; neither is
/// checked. Internal values are stored in their canonical form in the range [0, M).
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(from = "u64", into = "u64"))]
pub struct PrimeElement<const M: u64, const G: u64>(u64);

impl<const M: u64, const G: u64> PrimeElement<M, G> {
    /// Creates a new field element from the provided `value`. If the value is greater than or
    /// equal to the field modulus, modular reduction is silently performed.
    pub const fn new(value: u64) -> Self {
        Self(value % M)
    }

    /// Returns a field element for the provided `value`, or None if the value is not smaller
    /// than the field modulus.
    pub const fn from_canonical(value: u64) -> Option<Self> {
        if value < M {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns canonical integer representation of this field element.
    #[inline(always)]
    pub const fn as_int(&self) -> u64 {
        self.0
    }
}

impl<const M: u64, const G: u64> FieldElement for PrimeElement<M, G> {
    type PositiveInteger = u64;

    const ELEMENT_BYTES: usize = ELEMENT_BYTES;

    const ZERO: Self = Self(0);
    const ONE: Self = Self(1 % M);

    #[inline]
    fn inv(self) -> Self {
        self.exp(M - 2)
    }
}

impl<const M: u64, const G: u64> NttField for PrimeElement<M, G> {
    const MODULUS: Self::PositiveInteger = M;
    const MODULUS_BITS: u32 = 64 - M.leading_zeros();

    const GENERATOR: Self = Self(G % M);

    const GROUP_ORDER: u64 = M - 1;
    const TWO_ADICITY: u32 = (M - 1).trailing_zeros();

    const IS_PRIME: bool = true;

    #[inline]
    fn as_int(&self) -> Self::PositiveInteger {
        self.0
    }
}

impl<const M: u64, const G: u64> Randomizable for PrimeElement<M, G> {
    const VALUE_SIZE: usize = ELEMENT_BYTES;

    fn from_random_bytes(bytes: &[u8]) -> Option<Self> {
        let value = u64::from_le_bytes(bytes[..ELEMENT_BYTES].try_into().ok()?);
        // drop the bits above the modulus to keep the rejection rate below one half
        let mask = u64::MAX >> M.leading_zeros();
        Self::from_canonical(value & mask)
    }
}

impl<const M: u64, const G: u64> Debug for PrimeElement<M, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self)
    }
}

impl<const M: u64, const G: u64> Display for PrimeElement<M, G> {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// OVERLOADED OPERATORS
// ================================================================================================

impl<const M: u64, const G: u64> Add for PrimeElement<M, G> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(sub(self.0, M - rhs.0, M))
    }
}

impl<const M: u64, const G: u64> AddAssign for PrimeElement<M, G> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl<const M: u64, const G: u64> Sub for PrimeElement<M, G> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(sub(self.0, rhs.0, M))
    }
}

impl<const M: u64, const G: u64> SubAssign for PrimeElement<M, G> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const M: u64, const G: u64> Mul for PrimeElement<M, G> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(((self.0 as u128 * rhs.0 as u128) % M as u128) as u64)
    }
}

impl<const M: u64, const G: u64> MulAssign for PrimeElement<M, G> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl<const M: u64, const G: u64> Div for PrimeElement<M, G> {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl<const M: u64, const G: u64> DivAssign for PrimeElement<M, G> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs
    }
}

impl<const M: u64, const G: u64> Neg for PrimeElement<M, G> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(sub(0, self.0, M))
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl<const M: u64, const G: u64> From<u64> for PrimeElement<M, G> {
    /// Converts a 64-bit value into a field element. If the value is greater than or equal to
    /// the field modulus, modular reduction is silently performed.
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const M: u64, const G: u64> From<u32> for PrimeElement<M, G> {
    /// Converts a 32-bit value into a field element.
    fn from(value: u32) -> Self {
        Self::new(value as u64)
    }
}

impl<const M: u64, const G: u64> From<u16> for PrimeElement<M, G> {
    /// Converts a 16-bit value into a field element.
    fn from(value: u16) -> Self {
        Self::new(value as u64)
    }
}

impl<const M: u64, const G: u64> From<u8> for PrimeElement<M, G> {
    /// Converts an 8-bit value into a field element.
    fn from(value: u8) -> Self {
        Self::new(value as u64)
    }
}

impl<const M: u64, const G: u64> From<PrimeElement<M, G>> for u64 {
    fn from(value: PrimeElement<M, G>) -> Self {
        value.0
    }
}

// FINITE FIELD ARITHMETIC
// ================================================================================================

/// Computes (a - b) mod m; a and b are assumed to be in [0, m].
#[inline(always)]
fn sub(a: u64, b: u64, m: u64) -> u64 {
    let res = a.wrapping_sub(b);
    res.wrapping_add(((res > a) as u64) * m)
}
