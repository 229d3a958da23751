// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains utility traits, functions, and macros used by the fastecc transform and
//! erasure coding crates.
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod iterators;

use alloc::vec::Vec;


// FEATURE-BASED RE-EXPORTS
// ================================================================================================

#[cfg(feature = "concurrent")]
use iterators::*;
#[cfg(feature = "concurrent")]
pub use rayon;

// VECTOR FUNCTIONS
// ================================================================================================

/// Splits `source` into consecutive mutable chunks of `chunk_size` elements and returns a vector
/// of references to these chunks.
///
/// When `concurrent` feature is enabled, the references are collected using multiple threads.
///
/// # Panics
/// Panics if `chunk_size` is zero or if the length of `source` is not divisible by `chunk_size`.
///
/// # Example
/// ```
/// # use fastecc_utils::chunk_refs_mut;
/// let mut a = [0_u32, 1, 2, 3, 4, 5];
/// let mut b = chunk_refs_mut(&mut a, 2);
/// b.swap(0, 2);
///
/// assert_eq!(&[4, 5], b[0]);
/// assert_eq!(&[0, 1], b[2]);
/// ```
pub fn chunk_refs_mut<T: Send>(source: &mut [T], chunk_size: usize) -> Vec<&mut [T]> {
    assert!(chunk_size > 0, "chunk size must be greater than zero");
    assert_eq!(
        source.len() % chunk_size,
        0,
        "source length must be divisible by {}, but was {}",
        chunk_size,
        source.len()
    );

    #[cfg(not(feature = "concurrent"))]
    let result = source.chunks_mut(chunk_size).collect();

    #[cfg(feature = "concurrent")]
    let result = source.par_chunks_mut(chunk_size).collect();

    result
}

// RANDOMNESS
// ================================================================================================

/// Defines how `Self` can be read from a sequence of random bytes.
pub trait Randomizable: Sized {
    /// Size of `Self` in bytes.
    ///
    /// This is used to determine how many bytes should be passed to the
    /// [from_random_bytes()](Self::from_random_bytes) function.
    const VALUE_SIZE: usize;

    /// Returns `Self` if the set of bytes forms a valid value, otherwise returns None.
    fn from_random_bytes(source: &[u8]) -> Option<Self>;
}

impl Randomizable for u128 {
    const VALUE_SIZE: usize = 16;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        if let Ok(bytes) = source[..Self::VALUE_SIZE].try_into() {
            Some(u128::from_le_bytes(bytes))
        } else {
            None
        }
    }
}

impl Randomizable for u64 {
    const VALUE_SIZE: usize = 8;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        if let Ok(bytes) = source[..Self::VALUE_SIZE].try_into() {
            Some(u64::from_le_bytes(bytes))
        } else {
            None
        }
    }
}

impl Randomizable for u32 {
    const VALUE_SIZE: usize = 4;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        if let Ok(bytes) = source[..Self::VALUE_SIZE].try_into() {
            Some(u32::from_le_bytes(bytes))
        } else {
            None
        }
    }
}

impl Randomizable for u16 {
    const VALUE_SIZE: usize = 2;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        if let Ok(bytes) = source[..Self::VALUE_SIZE].try_into() {
            Some(u16::from_le_bytes(bytes))
        } else {
            None
        }
    }
}

impl Randomizable for u8 {
    const VALUE_SIZE: usize = 1;

    fn from_random_bytes(source: &[u8]) -> Option<Self> {
        Some(source[0])
    }
}
