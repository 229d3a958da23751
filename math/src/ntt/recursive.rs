// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

#[cfg(feature = "concurrent")]
use utils::{iterators::*, rayon};

use super::{iterative, permute, MIN_CONCURRENT_SIZE};
use crate::field::FieldElement;

// RECURSIVE TRANSFORM
// ================================================================================================

/// Transforms `blocks` in place by recursively splitting them into halves.
///
/// Sub-transforms which occupy at most `cutoff_bytes` bytes are handed over to the iterative
/// stages. When `concurrent` feature is enabled, the two halves of large sub-transforms are
/// processed in parallel.
pub fn transform<E: FieldElement>(blocks: &mut [&mut [E]], roots: &[E], cutoff_bytes: usize) {
    if blocks.is_empty() {
        return;
    }
    let block_bytes = blocks[0].len() * E::ELEMENT_BYTES;
    let cutoff = (cutoff_bytes / block_bytes.max(1)).max(2);

    permute(blocks);
    transform_permuted(blocks, roots, cutoff);
}

fn transform_permuted<E: FieldElement>(blocks: &mut [&mut [E]], roots: &[E], cutoff: usize) {
    let n = blocks.len();
    if n <= cutoff {
        iterative::run_stages(blocks, roots);
        return;
    }

    let w = roots[0];
    let sub_roots = &roots[1..];
    let (low, high) = blocks.split_at_mut(n / 2);

    if cfg!(feature = "concurrent") && n >= MIN_CONCURRENT_SIZE {
        #[cfg(feature = "concurrent")]
        {
            rayon::join(
                || transform_permuted(low, sub_roots, cutoff),
                || transform_permuted(high, sub_roots, cutoff),
            );
            combine_concurrent(low, high, w);
        }
    } else {
        transform_permuted(low, sub_roots, cutoff);
        transform_permuted(high, sub_roots, cutoff);
        iterative::combine_from(low, high, w, E::ONE);
    }
}

#[cfg(feature = "concurrent")]
fn combine_concurrent<E: FieldElement>(low: &mut [&mut [E]], high: &mut [&mut [E]], w: E) {
    let batch_size = (low.len() / rayon_num_threads().next_power_of_two()).max(1);
    low.par_chunks_mut(batch_size)
        .zip(high.par_chunks_mut(batch_size))
        .enumerate()
        .for_each(|(i, (low, high))| {
            let start = w.exp((i * batch_size) as u64);
            iterative::combine_from(low, high, w, start);
        });
}
