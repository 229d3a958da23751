// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Unrolled transforms of a fixed small length.
//!
//! A codelet is built once for a given order and root of unity (forward or inverse) and can then
//! be applied to any number of block groups. All constants needed by a codelet are computed in
//! [Codelet::new()] so that applying it costs only field additions and a few multiplications per
//! element.

use crate::field::FieldElement;

// CODELET
// ================================================================================================

/// A transform of order 2, 3, 4, 6, or 9 with precomputed constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codelet<E: FieldElement> {
    Radix2,
    Radix3(Radix3<E>),
    Radix4 { w4: E },
    /// 2x3 prime-factor (Good-Thomas) decomposition.
    Radix6(Radix3<E>),
    /// 3x3 Cooley-Tukey decomposition with twiddles w, w^2, and w^4.
    Radix9 { r3: Radix3<E>, w: E, w2: E, w4: E },
}

impl<E: FieldElement> Codelet<E> {
    /// Returns a codelet computing the transform of the specified `order` driven by `root`.
    ///
    /// `root` must have multiplicative order exactly `order`; to build an inverse codelet pass
    /// the inverse of the forward root.
    ///
    /// # Panics
    /// Panics if `order` is not one of 2, 3, 4, 6, or 9.
    pub fn new(order: usize, root: E) -> Self {
        debug_assert_eq!(E::ONE, root.exp(order as u64), "root order is not {order}");
        match order {
            2 => Self::Radix2,
            3 => Self::Radix3(Radix3::new(root)),
            4 => Self::Radix4 { w4: root },
            6 => Self::Radix6(Radix3::new(root.square())),
            9 => {
                let w2 = root.square();
                Self::Radix9 {
                    r3: Radix3::new(w2 * root),
                    w: root,
                    w2,
                    w4: w2.square(),
                }
            },
            _ => panic!("codelets of order {order} are not supported"),
        }
    }

    /// Returns the transform length of this codelet.
    pub fn order(&self) -> usize {
        match self {
            Self::Radix2 => 2,
            Self::Radix3(_) => 3,
            Self::Radix4 { .. } => 4,
            Self::Radix6(_) => 6,
            Self::Radix9 { .. } => 9,
        }
    }

    /// Transforms `blocks` in place; element `i` of every block is transformed independently of
    /// all other elements. The output is in natural order.
    ///
    /// # Panics
    /// Panics if the number of blocks differs from the order of this codelet.
    pub fn apply(&self, blocks: &mut [&mut [E]]) {
        assert_eq!(
            self.order(),
            blocks.len(),
            "expected {} blocks, but received {}",
            self.order(),
            blocks.len()
        );
        match self {
            Self::Radix2 => apply_elementwise(blocks, radix2),
            Self::Radix3(r3) => apply_elementwise(blocks, |x| r3.apply(x)),
            Self::Radix4 { w4 } => apply_elementwise(blocks, |x| radix4(x, *w4)),
            Self::Radix6(r3) => apply_elementwise(blocks, |x| radix6(x, r3)),
            Self::Radix9 { r3, w, w2, w4 } => {
                apply_elementwise(blocks, |x| radix9(x, r3, *w, *w2, *w4))
            },
        }
    }
}

// RADIX-3 CONSTANTS
// ================================================================================================

/// Order-3 transform with constants (w + w^2) / 2 and (w - w^2) / 2.
///
/// With s = b + c and d = b - c the outputs are:
/// * X0 = a + s
/// * X1 = a + half_sum * s + half_diff * d
/// * X2 = a + half_sum * s - half_diff * d
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix3<E: FieldElement> {
    half_sum: E,
    half_diff: E,
}

impl<E: FieldElement> Radix3<E> {
    fn new(w: E) -> Self {
        let w2 = w.square();
        let inv_two = E::from(2u8).inv();
        Self {
            half_sum: (w + w2) * inv_two,
            half_diff: (w - w2) * inv_two,
        }
    }

    #[inline(always)]
    fn apply(&self, [a, b, c]: [E; 3]) -> [E; 3] {
        let s = b + c;
        let d = b - c;
        let t = a + self.half_sum * s;
        let u = self.half_diff * d;
        [a + s, t + u, t - u]
    }
}

// KERNELS
// ================================================================================================

#[inline(always)]
fn radix2<E: FieldElement>([a, b]: [E; 2]) -> [E; 2] {
    [a + b, a - b]
}

#[inline(always)]
fn radix4<E: FieldElement>([x0, x1, x2, x3]: [E; 4], w4: E) -> [E; 4] {
    let [a0, a1] = radix2([x0, x2]);
    let [b0, b1] = radix2([x1, x3]);
    let b1 = b1 * w4;
    [a0 + b0, a1 + b1, a0 - b0, a1 - b1]
}

#[inline(always)]
fn radix6<E: FieldElement>(x: [E; 6], r3: &Radix3<E>) -> [E; 6] {
    // input map n = 3 * n1 + 2 * n2 (mod 6)
    let [a0, b0] = radix2([x[0], x[3]]);
    let [a1, b1] = radix2([x[2], x[5]]);
    let [a2, b2] = radix2([x[4], x[1]]);

    let [c0, c1, c2] = r3.apply([a0, a1, a2]);
    let [d0, d1, d2] = r3.apply([b0, b1, b2]);

    // output map k = (k1, k2) with k = k1 (mod 2) and k = k2 (mod 3)
    [c0, d1, c2, d0, c1, d2]
}

#[inline(always)]
fn radix9<E: FieldElement>(x: [E; 9], r3: &Radix3<E>, w: E, w2: E, w4: E) -> [E; 9] {
    let [y00, y01, y02] = r3.apply([x[0], x[3], x[6]]);
    let [y10, y11, y12] = r3.apply([x[1], x[4], x[7]]);
    let [y20, y21, y22] = r3.apply([x[2], x[5], x[8]]);

    let [z0, z3, z6] = r3.apply([y00, y10, y20]);
    let [z1, z4, z7] = r3.apply([y01, y11 * w, y21 * w2]);
    let [z2, z5, z8] = r3.apply([y02, y12 * w2, y22 * w4]);

    [z0, z1, z2, z3, z4, z5, z6, z7, z8]
}

// HELPER FUNCTIONS
// ================================================================================================

/// Applies `kernel` to each element position across `N` blocks.
#[inline(always)]
fn apply_elementwise<E, const N: usize>(blocks: &mut [&mut [E]], kernel: impl Fn([E; N]) -> [E; N])
where
    E: FieldElement,
{
    let block_size = blocks[0].len();
    for i in 0..block_size {
        let input: [E; N] = core::array::from_fn(|j| blocks[j][i]);
        for (block, value) in blocks.iter_mut().zip(kernel(input)) {
            block[i] = value;
        }
    }
}
