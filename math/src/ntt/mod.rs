// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Number-theoretic transforms over blocks of field elements.
//!
//! A transform of length `n` takes `n` blocks of equal size and, for every element position `i`
//! inside a block, replaces the sequence of elements `x_j = blocks[j][i]` with
//!
//! X_k = sum of x_j * w^(j * k) for j in 0..n
//!
//! where `w` is a primitive root of unity of order `n` (or its inverse for the inverse
//! transform). Transforms are computed in place: blocks are passed as a slice of mutable
//! references, and whole blocks are reordered by swapping the references. Inverse transforms are
//! not scaled by 1/n; this can be done with [scale()] or folded into other multiplications by
//! the caller.
//!
//! Several engines are available:
//! * [Engine::Naive] evaluates the definition directly in O(n^2) time.
//! * [Engine::Iterative] applies bit-reversal and butterfly stages of increasing size.
//! * [Engine::Recursive] splits transforms in halves recursively; when `concurrent` feature is
//!   enabled, the halves are processed in parallel.
//! * [Engine::MatrixFourier] decomposes a transform into row and column transforms of a matrix
//!   to keep the working set of each pass small.
//!
//! Lengths of the form 2^k, 3 * 2^k, and 9 * 2^k are supported; the latter two only by the
//! matrix decomposition (and the naive engine).
//!
//! Over composite moduli (see [NttField::IS_PRIME]) only power-of-two lengths are supported.
//! The fast engines agree with each other and invert each other exactly in this case, but the
//! result differs from the direct sum above, so [Engine::Naive] is rejected for lengths above 2.

use alloc::vec::Vec;

use tracing::debug;
#[cfg(feature = "concurrent")]
use utils::iterators::*;
use utils::iter_mut;

use crate::field::{FieldElement, NttField};

pub mod codelets;
pub use codelets::Codelet;

mod roots;
pub use roots::get_root_table;

pub mod iterative;
pub mod mfa;
pub mod naive;
pub mod recursive;

#[cfg(test)]
mod tests;

// CONSTANTS
// ================================================================================================

const MIN_CONCURRENT_SIZE: usize = 1024;

/// Sub-transforms of the recursive engine which occupy at most this many bytes are computed with
/// the iterative stages.
pub const RECURSION_CUTOFF_BYTES: usize = 1 << 19;

/// Power-of-two transforms which occupy at least this many bytes are computed with the matrix
/// decomposition when the engine is selected automatically.
pub const MFA_MIN_BYTES: usize = 1 << 22;

/// Maximum number of rows in the matrix decomposition.
pub const MAX_MFA_ROWS: usize = 1 << 16;

// ENGINE
// ================================================================================================

/// Algorithm used to compute a transform.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Engine {
    /// Pick an engine based on the length of the transform and the size of the blocks.
    #[default]
    Auto,
    Naive,
    Iterative,
    Recursive,
    MatrixFourier,
}

impl Engine {
    /// Returns the engine which will be used for a transform of `n` blocks of `block_size`
    /// elements with `element_bytes` bytes each.
    ///
    /// For [Engine::Auto] this is:
    /// * [Engine::MatrixFourier] for lengths which are not powers of two, and for power-of-two
    ///   lengths of at least 4 when the data occupies at least [MFA_MIN_BYTES] bytes.
    /// * [Engine::Recursive] when `concurrent` feature is enabled and `n` is large enough to be
    ///   worth splitting between threads.
    /// * [Engine::Iterative] otherwise.
    ///
    /// All other engines are returned unchanged.
    pub fn resolve(self, n: usize, block_size: usize, element_bytes: usize) -> Self {
        if self != Self::Auto {
            return self;
        }
        let num_bytes = n.saturating_mul(block_size).saturating_mul(element_bytes);
        if !n.is_power_of_two() || (n >= 4 && num_bytes >= MFA_MIN_BYTES) {
            Self::MatrixFourier
        } else if cfg!(feature = "concurrent") && n >= MIN_CONCURRENT_SIZE {
            Self::Recursive
        } else {
            Self::Iterative
        }
    }
}

// TRANSFORMS
// ================================================================================================

/// Transforms `blocks` in place choosing the engine automatically.
///
/// If `inverse` is true, the inverse transform (without scaling by 1/n) is computed.
///
/// # Panics
/// Panics if:
/// * The number of blocks is not of the form 2^k, 3 * 2^k, or 9 * 2^k.
/// * Field `E` does not support transforms of this length.
/// * Blocks are not all of the same size.
///
/// # Examples
/// ```
/// # use fastecc_math::{ntt, fields::proth32::BaseElement, FieldElement};
/// let original: Vec<BaseElement> = (0..16u32).map(BaseElement::from).collect();
/// let mut values = original.clone();
/// let mut blocks: Vec<&mut [BaseElement]> = values.chunks_mut(1).collect();
///
/// ntt::transform(&mut blocks, false);
/// ntt::transform(&mut blocks, true);
/// ntt::scale(&mut blocks, BaseElement::from(16u8).inv());
///
/// let result: Vec<BaseElement> = blocks.iter().map(|b| b[0]).collect();
/// assert_eq!(original, result);
/// ```
pub fn transform<E: NttField>(blocks: &mut [&mut [E]], inverse: bool) {
    transform_with(Engine::Auto, blocks, inverse)
}

/// Transforms `blocks` in place using the specified engine.
///
/// If `inverse` is true, the inverse transform (without scaling by 1/n) is computed.
///
/// # Panics
/// Panics if:
/// * The number of blocks is not of the form 2^k, 3 * 2^k, or 9 * 2^k.
/// * Field `E` does not support transforms of this length.
/// * Blocks are not all of the same size.
/// * `engine` is [Engine::Iterative] or [Engine::Recursive] and the number of blocks is not a
///   power of two.
/// * `engine` is [Engine::Naive], the modulus of `E` is composite, and the number of blocks is
///   greater than 2.
pub fn transform_with<E: NttField>(engine: Engine, blocks: &mut [&mut [E]], inverse: bool) {
    let n = blocks.len();
    assert!(is_supported_length(n), "transform length {n} is not supported");
    assert!(
        E::supports_transform(n),
        "transforms of length {} are not supported in a field with modulus {}",
        n,
        E::MODULUS
    );
    let block_size = blocks[0].len();
    assert!(
        blocks.iter().all(|block| block.len() == block_size),
        "all blocks must contain {block_size} elements"
    );
    assert!(
        E::IS_PRIME || n <= 2 || engine != Engine::Naive,
        "naive engine requires a prime modulus for transforms of length {n}"
    );
    if n == 1 {
        return;
    }

    // over composite moduli a root of order 2 may differ from -1, and only -1 is principal
    let root = if n == 2 { -E::ONE } else { E::get_root_of_unity(n) };
    let root = if inverse { root.inv() } else { root };
    run(engine, blocks, root);
}

/// Transforms `blocks` in place with the specified engine using `root` as the root of unity.
///
/// This is the same as [transform_with()] but skips all validity checks.
pub(crate) fn run<E: FieldElement>(engine: Engine, blocks: &mut [&mut [E]], root: E) {
    let n = blocks.len();
    let block_size = blocks.first().map_or(0, |block| block.len());
    let engine = engine.resolve(n, block_size, E::ELEMENT_BYTES);
    debug!(n, block_size, ?engine, "computing transform");

    match engine {
        Engine::Naive => naive::transform(blocks, root),
        Engine::Iterative => {
            assert!(n.is_power_of_two(), "iterative engine requires a power-of-two length");
            iterative::transform(blocks, &get_root_table(root, n));
        },
        Engine::Recursive => {
            assert!(n.is_power_of_two(), "recursive engine requires a power-of-two length");
            recursive::transform(blocks, &get_root_table(root, n), RECURSION_CUTOFF_BYTES);
        },
        Engine::MatrixFourier | Engine::Auto => mfa::transform(blocks, root),
    }
}

/// Returns true if transforms of length `n` can be computed by this module; whether the root of
/// unity of this order exists depends on the field.
pub fn is_supported_length(n: usize) -> bool {
    n.is_power_of_two()
        || (n % 3 == 0 && (n / 3).is_power_of_two())
        || (n % 9 == 0 && (n / 9).is_power_of_two())
}

// SCALING
// ================================================================================================

/// Multiplies every element of every block by `factor`.
///
/// When `concurrent` feature is enabled, blocks are processed in multiple threads.
pub fn scale<E: FieldElement>(blocks: &mut [&mut [E]], factor: E) {
    iter_mut!(blocks, 16).for_each(|block| block.iter_mut().for_each(|v| *v *= factor));
}

// PERMUTATIONS
// ================================================================================================

/// Computes bit reverse of the specified index in the domain of the specified size.
///
/// Domain size is assumed to be a power of two and index must be smaller than domain size.
pub fn permute_index(size: usize, index: usize) -> usize {
    const USIZE_BITS: u32 = 0_usize.count_zeros();

    debug_assert!(index < size);
    debug_assert!(size.is_power_of_two());

    let bits = size.trailing_zeros();
    index.reverse_bits().wrapping_shr(USIZE_BITS - bits)
}

/// Reorders `values` by bit-reversing their indexes. The permutation is its own inverse.
pub fn permute<T>(values: &mut [T]) {
    let n = values.len();
    for i in 0..n {
        let j = permute_index(n, i);
        if j > i {
            values.swap(i, j);
        }
    }
}

/// Returns references to consecutive blocks of `block_size` elements in `values`.
///
/// # Panics
/// Panics if `block_size` is zero or does not divide the length of `values`.
pub fn as_blocks_mut<E: FieldElement>(values: &mut [E], block_size: usize) -> Vec<&mut [E]> {
    utils::chunk_refs_mut(values, block_size)
}
