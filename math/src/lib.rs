// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains modules with mathematical operations needed for erasure coding over
//! prime (and prime-like) fields.
//!
//! # Finite fields
//! Every field is represented by its own element type implementing [FieldElement] and [NttField]
//! traits, so that all transforms are specialized for a given modulus at compile time. The
//! following moduli are provided:
//!
//! * [proth32](fields::proth32): $2^{32} - 2^{20} + 1$, reduced with a quotient-estimate
//!   (Barrett) multiplication.
//! * [fermat](fields::fermat): $2^{16} + 1$, reduced by folding $2^{16} \equiv -1$.
//! * [mersenne32](fields::mersenne32) and [mersenne64](fields::mersenne64): $2^{32} - 1$ and
//!   $2^{64} - 1$. These moduli are not prime, but units of the corresponding rings have large
//!   power-of-two multiplicative orders. Elements are stored lazily (the raw value may equal the
//!   modulus) but all observable values are canonical.
//! * [generic](fields::generic): any prime below $2^{64}$, reduced with a remainder operation.
//!
//! # Number-theoretic transforms
//! The [ntt] module transforms sequences of *blocks*: a transform of length $n$ is applied to
//! $n$ equally sized blocks of field elements, independently for every element position inside
//! a block. Blocks are passed as a slice of mutable references, and the transforms reorder the
//! references rather than the data. [BlockArena] owns the underlying storage.
//!
//! Supported transform lengths are $2^k$, $3 \cdot 2^k$, and $9 \cdot 2^k$, provided that a root
//! of unity of the requested order exists in the field.
#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ntt;
pub mod utils;

mod blocks;
pub use blocks::BlockArena;

mod field;
pub use field::{FieldElement, NttField};
pub mod fields {
    //! Finite field implementations.
    //!
    //! This module contains concrete implementations of the fields over which transforms can be
    //! computed.

    pub use super::field::{fermat, generic, mersenne32, mersenne64, proth32};
}

mod errors;
pub use errors::AllocationError;
