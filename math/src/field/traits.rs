// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use utils::Randomizable;

// FIELD ELEMENT
// ================================================================================================

/// Defines an element in a finite field (or in a finite ring whose units behave like a field for
/// the purposes of number-theoretic transforms).
///
/// This trait defines basic arithmetic operations for elements in finite fields (e.g. addition
/// subtraction, multiplication, division) as well as several convenience functions (e.g.
/// double, square, exponentiation). Equality, hashing, and formatting of elements always
/// operate on canonical values, even for fields which store elements in a lazy form.
pub trait FieldElement:
    Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + PartialEq
    + Hash
    + Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + Neg<Output = Self>
    + From<u64>
    + From<u32>
    + From<u16>
    + From<u8>
    + Randomizable
{
    /// A type defining positive integers big enough to describe a field modulus for
    /// `Self::BaseField` with no loss of precision.
    type PositiveInteger: Debug
        + Display
        + Copy
        + Eq
        + Ord
        + From<u32>
        + Into<u64>
        + Into<u128>;

    /// Number of bytes needed to encode an element.
    const ELEMENT_BYTES: usize;

    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    /// Returns this field element added to itself.
    #[inline]
    #[must_use]
    fn double(self) -> Self {
        self + self
    }

    /// Returns this field element raised to power 2.
    #[inline]
    #[must_use]
    fn square(self) -> Self {
        self * self
    }

    /// Exponentiates this field element by `power` parameter using square-and-multiply.
    #[must_use]
    fn exp(self, power: u64) -> Self {
        let mut b = self;

        if power == 0 {
            return Self::ONE;
        } else if b == Self::ZERO {
            return Self::ZERO;
        }

        let mut r = if power & 1 == 1 { b } else { Self::ONE };
        for i in 1..64 - power.leading_zeros() {
            b = b.square();
            if (power >> i) & 1 == 1 {
                r *= b;
            }
        }

        r
    }

    /// Returns a multiplicative inverse of this field element.
    ///
    /// The result is unspecified for elements which are not invertible; for prime fields the
    /// inverse of ZERO is ZERO.
    #[must_use]
    fn inv(self) -> Self;

    /// Returns a canonical representation of this element.
    ///
    /// Fields which keep elements in a lazy form override this to collapse the redundant
    /// representation of ZERO; for all other fields this is the identity.
    #[inline]
    #[must_use]
    fn normalize(self) -> Self {
        self
    }

    // INITIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Returns a vector initialized with all zero elements.
    fn zeroed_vector(n: usize) -> Vec<Self> {
        vec![Self::ZERO; n]
    }
}

// NTT FIELD
// ================================================================================================

/// Defines a field with a multiplicative subgroup large enough to support number-theoretic
/// transforms.
pub trait NttField: FieldElement {
    /// Modulus of the field.
    const MODULUS: Self::PositiveInteger;

    /// The number of bits needed to represents `Self::MODULUS`.
    const MODULUS_BITS: u32;

    /// A generator of the largest multiplicative subgroup used for transforms.
    const GENERATOR: Self;

    /// Order of `Self::GENERATOR`; roots of unity exist for every order dividing this value.
    const GROUP_ORDER: u64;

    /// The largest n such that 2^n divides `Self::GROUP_ORDER`.
    const TWO_ADICITY: u32;

    /// True if `Self::MODULUS` is prime.
    ///
    /// For composite moduli a root of unity `w` of order `n > 2` does not satisfy
    /// `w^(n / 2) = -1`. Butterfly-based transforms over such roots still invert each other, but
    /// they differ from the direct sum of `x_j * w^(j * k)`.
    const IS_PRIME: bool;

    /// Returns true if a root of unity of order `n` exists in this field.
    fn has_root_of_unity(n: usize) -> bool {
        n != 0 && Self::GROUP_ORDER % n as u64 == 0
    }

    /// Returns true if transforms of length `n` can be computed over this field.
    ///
    /// For composite moduli only power-of-two lengths are supported, since these are built
    /// entirely out of radix-2 butterflies.
    fn supports_transform(n: usize) -> bool {
        Self::has_root_of_unity(n) && (Self::IS_PRIME || n.is_power_of_two())
    }

    /// Returns a primitive root of unity of order `n`.
    ///
    /// # Panics
    /// Panics if `n` is zero or does not divide `Self::GROUP_ORDER`.
    fn get_root_of_unity(n: usize) -> Self {
        assert!(n != 0, "cannot get root of unity for n = 0");
        assert!(
            Self::has_root_of_unity(n),
            "root of unity of order {} does not exist in a group of order {}",
            n,
            Self::GROUP_ORDER
        );
        Self::GENERATOR.exp(Self::GROUP_ORDER / n as u64)
    }

    /// Returns a canonical integer representation of the field element.
    fn as_int(&self) -> Self::PositiveInteger;
}
