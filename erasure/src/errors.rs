// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt;

use math::AllocationError;

// ERASURE ERROR
// ================================================================================================
/// Represents an error returned while configuring an encoder or encoding a set of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErasureError {
    /// This error occurs when the number of source blocks is zero.
    NoSourceBlocks,
    /// This error occurs when the number of source blocks is not of the form 2^k, 3 * 2^k, or
    /// 9 * 2^k.
    UnsupportedSourceBlockCount(usize),
    /// This error occurs when the block size is zero.
    EmptyBlocks,
    /// This error occurs when the field has no root of unity of the codeword length; the second
    /// value is the order of the multiplicative group used for transforms.
    MissingRootOfUnity(usize, u64),
    /// This error occurs when the codeword length is not smaller than the field modulus.
    CodewordTooLong(usize, u128),
    /// This error occurs when the field modulus is not prime.
    CompositeModulus(u128),
    /// This error occurs when the number of blocks passed to the encoder differs from the
    /// configured number of source blocks.
    WrongBlockCount(usize, usize),
    /// This error occurs when the size of blocks passed to the encoder differs from the
    /// configured block size.
    WrongBlockSize(usize, usize),
    /// This error occurs when memory for the output could not be reserved.
    Allocation(AllocationError),
}

impl fmt::Display for ErasureError {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSourceBlocks => {
                write!(f, "number of source blocks must be greater than zero")
            }
            Self::UnsupportedSourceBlockCount(num_blocks) => {
                write!(f, "encoding {num_blocks} source blocks is not supported; the number of source blocks must be of the form 2^k, 3 * 2^k, or 9 * 2^k")
            }
            Self::EmptyBlocks => {
                write!(f, "block size must be greater than zero")
            }
            Self::MissingRootOfUnity(length, group_order) => {
                write!(f, "codeword length {length} does not divide the order of the multiplicative group {group_order}")
            }
            Self::CodewordTooLong(length, modulus) => {
                write!(f, "codeword length {length} must be smaller than the field modulus {modulus}")
            }
            Self::CompositeModulus(modulus) => {
                write!(f, "encoding requires a prime field, but modulus {modulus} is composite")
            }
            Self::WrongBlockCount(expected, actual) => {
                write!(f, "expected {expected} source blocks, but received {actual}")
            }
            Self::WrongBlockSize(expected, actual) => {
                write!(f, "expected blocks of {expected} elements, but received blocks of {actual} elements")
            }
            Self::Allocation(err) => {
                write!(f, "failed to allocate encoder output: {err}")
            }
        }
    }
}

impl core::error::Error for ErasureError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Allocation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AllocationError> for ErasureError {
    fn from(err: AllocationError) -> Self {
        Self::Allocation(err)
    }
}
