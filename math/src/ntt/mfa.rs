// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

#[cfg(feature = "concurrent")]
use utils::iterators::*;
use utils::chunks_mut;

use super::{codelets::Codelet, iterative, roots::get_root_table, MAX_MFA_ROWS};
use crate::{field::FieldElement, utils::get_power_series};

// MATRIX-FOURIER TRANSFORM
// ================================================================================================

/// Transforms `blocks` in place by viewing them as an R x C matrix (row-major), where R * C is
/// the number of blocks.
///
/// For power-of-two lengths R is the largest power of two such that R^2 <= n; for lengths of
/// the form 3 * 2^k and 9 * 2^k, R is 3 and 9 respectively. The transform proceeds as follows:
/// 1. Transpose the matrix so that columns become contiguous.
/// 2. Run C transforms of length R over the columns.
/// 3. Transpose the matrix back.
/// 4. Multiply the element at (r, c) by root^(r * c).
/// 5. Run R transforms of length C over the rows.
/// 6. Transpose the matrix so that the output is in natural order.
///
/// Lengths 2, 3, 4, 6, and 9 are computed directly by the corresponding codelet.
///
/// # Panics
/// Panics if the length is not supported or R exceeds `MAX_MFA_ROWS`.
pub fn transform<E: FieldElement>(blocks: &mut [&mut [E]], root: E) {
    let n = blocks.len();
    if n <= 1 {
        return;
    }
    if matches!(n, 2 | 3 | 4 | 6 | 9) {
        Codelet::new(n, root).apply(blocks);
        return;
    }

    let num_rows = get_num_rows(n);
    let num_cols = n / num_rows;
    assert!(
        num_rows <= MAX_MFA_ROWS,
        "number of matrix rows {num_rows} exceeds the maximum of {MAX_MFA_ROWS}"
    );

    let column_transform = SubTransform::new(num_rows, root.exp(num_cols as u64));
    let row_transform = SubTransform::new(num_cols, root.exp(num_rows as u64));

    // transform columns
    transpose(blocks, num_rows, num_cols);
    chunks_mut!(blocks, num_rows).for_each(|column| column_transform.apply(column));
    transpose(blocks, num_cols, num_rows);

    // apply twiddles and transform rows
    let row_twiddles = get_power_series(root, num_rows);
    chunks_mut!(blocks, num_cols).enumerate().skip(1).for_each(|(i, row)| {
        let step = row_twiddles[i];
        let mut twiddle = step;
        for block in row.iter_mut().skip(1) {
            block.iter_mut().for_each(|v| *v *= twiddle);
            twiddle *= step;
        }
    });
    chunks_mut!(blocks, num_cols).for_each(|row| row_transform.apply(row));

    transpose(blocks, num_rows, num_cols);
}

/// Returns the number of rows in the matrix decomposition of a transform of length `n`.
pub(super) fn get_num_rows(n: usize) -> usize {
    if n.is_power_of_two() {
        1 << (n.trailing_zeros() / 2)
    } else if (n / 9).is_power_of_two() && n % 9 == 0 {
        9
    } else {
        3
    }
}

// SUB-TRANSFORMS
// ================================================================================================

/// A row or column transform with all constants precomputed.
enum SubTransform<E: FieldElement> {
    Codelet(Codelet<E>),
    Stages(Vec<E>),
}

impl<E: FieldElement> SubTransform<E> {
    fn new(n: usize, root: E) -> Self {
        match n {
            2 | 3 | 4 | 6 | 9 => Self::Codelet(Codelet::new(n, root)),
            _ => Self::Stages(get_root_table(root, n)),
        }
    }

    fn apply(&self, blocks: &mut [&mut [E]]) {
        match self {
            Self::Codelet(codelet) => codelet.apply(blocks),
            Self::Stages(roots) => iterative::transform(blocks, roots),
        }
    }
}

// TRANSPOSING
// ================================================================================================

/// Transposes a `num_rows` x `num_cols` row-major matrix of `items` into a `num_cols` x
/// `num_rows` row-major matrix in place. Only the items themselves are moved.
///
/// Square matrices are transposed by swapping across the diagonal. Other shapes are transposed
/// by following the cycles of the index permutation, with a bit per item to track which items
/// are already in place.
pub(super) fn transpose<T>(items: &mut [T], num_rows: usize, num_cols: usize) {
    debug_assert_eq!(items.len(), num_rows * num_cols);
    if num_rows == 1 || num_cols == 1 {
        return;
    }

    if num_rows == num_cols {
        for row in 0..num_rows {
            for col in row + 1..num_cols {
                items.swap(row * num_cols + col, col * num_rows + row);
            }
        }
        return;
    }

    // item at position `c * num_rows + r` of the result comes from `r * num_cols + c`
    let source = |i: usize| (i % num_rows) * num_cols + i / num_rows;

    let n = items.len();
    let mut done = vec![0u64; n.div_ceil(64)];
    for start in 1..n - 1 {
        if done[start / 64] & (1 << (start % 64)) != 0 {
            continue;
        }
        let mut pos = start;
        loop {
            done[pos / 64] |= 1 << (pos % 64);
            let next = source(pos);
            if next == start {
                break;
            }
            items.swap(pos, next);
            pos = next;
        }
    }
}
