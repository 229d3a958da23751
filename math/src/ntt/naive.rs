// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

use crate::{field::FieldElement, utils::get_power_series};

// DIRECT TRANSFORM
// ================================================================================================

/// Computes the transform of `blocks` directly from its definition:
///
/// X[k] = sum of x[j] * root^(j * k) for j in 0..n
///
/// This takes O(n^2) multiplications and is intended for verifying the fast engines on small
/// inputs. Works for any `n` as long as `root` has order `n`.
pub fn transform<E: FieldElement>(blocks: &mut [&mut [E]], root: E) {
    let n = blocks.len();
    if n <= 1 {
        return;
    }
    let block_size = blocks[0].len();
    if block_size == 0 {
        return;
    }
    let powers = get_power_series(root, n);

    let mut result: Vec<E> = E::zeroed_vector(n * block_size);
    for (k, output) in result.chunks_mut(block_size).enumerate() {
        for (j, input) in blocks.iter().enumerate() {
            let w = powers[(j * k) % n];
            for (o, &x) in output.iter_mut().zip(input.iter()) {
                *o += x * w;
            }
        }
    }

    for (block, values) in blocks.iter_mut().zip(result.chunks(block_size)) {
        block.copy_from_slice(values);
    }
}
