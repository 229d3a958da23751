// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{permute, roots::stage_root};
use crate::field::FieldElement;

// ITERATIVE TRANSFORM
// ================================================================================================

/// Transforms `blocks` in place using bit-reversal followed by butterfly stages of increasing
/// size. The number of blocks must be a power of two and `roots` must be the root table for
/// this length.
pub fn transform<E: FieldElement>(blocks: &mut [&mut [E]], roots: &[E]) {
    permute(blocks);
    run_stages(blocks, roots);
}

/// Runs all butterfly stages over `blocks`, which are assumed to be in bit-reversed order.
///
/// The first two stages are fused into a single pass of order-4 transforms.
pub(super) fn run_stages<E: FieldElement>(blocks: &mut [&mut [E]], roots: &[E]) {
    let n = blocks.len();
    debug_assert!(n.is_power_of_two());
    debug_assert_eq!(n.trailing_zeros() as usize, roots.len());

    let mut half = 1;
    if n >= 4 {
        let w4 = stage_root(roots, 2);
        for group in blocks.chunks_exact_mut(4) {
            fused_butterfly(group, w4);
        }
        half = 4;
    }

    while half < n {
        let w = stage_root(roots, half);
        for chunk in blocks.chunks_exact_mut(2 * half) {
            combine(chunk, w);
        }
        half *= 2;
    }
}

/// Combines two halves of `blocks` (the transforms of even and odd inputs) into a transform of
/// the full length using twiddles 1, w, w^2, ...
#[inline(always)]
pub(super) fn combine<E: FieldElement>(blocks: &mut [&mut [E]], w: E) {
    let (low, high) = blocks.split_at_mut(blocks.len() / 2);
    combine_from(low, high, w, E::ONE);
}

/// Same as [combine()] but for a window of the halves starting at twiddle `start`.
#[inline(always)]
pub(super) fn combine_from<E: FieldElement>(
    low: &mut [&mut [E]],
    high: &mut [&mut [E]],
    w: E,
    start: E,
) {
    let mut twiddle = start;
    for (a, b) in low.iter_mut().zip(high.iter_mut()) {
        if twiddle == E::ONE {
            butterfly(a, b);
        } else {
            butterfly_twiddle(a, b, twiddle);
        }
        twiddle *= w;
    }
}

// HELPER FUNCTIONS
// ================================================================================================

#[inline(always)]
fn butterfly<E: FieldElement>(low: &mut [E], high: &mut [E]) {
    for (a, b) in low.iter_mut().zip(high.iter_mut()) {
        let t = *b;
        *b = *a - t;
        *a += t;
    }
}

#[inline(always)]
fn butterfly_twiddle<E: FieldElement>(low: &mut [E], high: &mut [E], twiddle: E) {
    for (a, b) in low.iter_mut().zip(high.iter_mut()) {
        let t = *b * twiddle;
        *b = *a - t;
        *a += t;
    }
}

/// Two radix-2 stages over a group of 4 bit-reversed blocks.
#[inline(always)]
fn fused_butterfly<E: FieldElement>(group: &mut [&mut [E]], w4: E) {
    if let [p0, p1, p2, p3] = group {
        let iter = p0.iter_mut().zip(p1.iter_mut()).zip(p2.iter_mut()).zip(p3.iter_mut());
        for (((x0, x1), x2), x3) in iter {
            let a0 = *x0 + *x1;
            let a1 = *x0 - *x1;
            let b0 = *x2 + *x3;
            let b1 = (*x2 - *x3) * w4;
            *x0 = a0 + b0;
            *x1 = a1 + b1;
            *x2 = a0 - b0;
            *x3 = a1 - b1;
        }
    }
}
