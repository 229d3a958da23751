// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

use crate::{field::FieldElement, utils::log2};

// ROOT TABLES
// ================================================================================================

/// Returns a table of stage roots for a power-of-two transform of length `n` driven by `root`.
///
/// The table is [root, root^2, root^4, ..., root^(n/2)], i.e. it contains log2(n) entries, the
/// first of which has order `n` and the last of which has order 2. A butterfly stage combining
/// sub-transforms of length `h` uses the entry at index `log2(n) - 1 - log2(h)`; the table for
/// a transform of length `n / 2^i` is the suffix starting at index `i`.
///
/// # Panics
/// Panics if `n` is not a power of two.
pub fn get_root_table<E: FieldElement>(root: E, n: usize) -> Vec<E> {
    let num_stages = log2(n) as usize;
    let mut result = Vec::with_capacity(num_stages);
    let mut r = root;
    for _ in 0..num_stages {
        result.push(r);
        r = r.square();
    }
    debug_assert_eq!(E::ONE, r, "root order is not {n}");
    result
}

/// Returns the stage root for combining sub-transforms of length `half` out of `roots`.
#[inline(always)]
pub(super) fn stage_root<E: FieldElement>(roots: &[E], half: usize) -> E {
    roots[roots.len() - 1 - half.trailing_zeros() as usize]
}
