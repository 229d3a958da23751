// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

use rand_utils::{rand_value, rand_vector};

use super::{
    get_root_table, iterative, mfa, naive, permute, permute_index, recursive, transform,
    transform_with, Codelet, Engine,
};
use crate::{
    fields::{fermat, generic::Goldilocks, mersenne32, mersenne64, proth32::BaseElement},
    BlockArena, FieldElement, NttField,
};

const ENGINES: [Engine; 4] =
    [Engine::Iterative, Engine::Recursive, Engine::MatrixFourier, Engine::Auto];

// ROUND TRIPS
// ================================================================================================

#[test]
fn round_trip_small_sequence() {
    let n = 1 << 4;
    let original: Vec<BaseElement> = (0..n as u32).map(BaseElement::from).collect();

    for engine in ENGINES {
        let mut values = original.clone();
        let mut blocks: Vec<&mut [BaseElement]> = values.chunks_mut(1).collect();
        transform_with(engine, &mut blocks, false);
        transform_with(engine, &mut blocks, true);
        super::scale(&mut blocks, BaseElement::from(n as u32).inv());

        assert_eq!(original, collect(&blocks), "engine {engine:?}");
    }
}

#[test]
fn round_trip_random_blocks() {
    for n in [2, 4, 8, 32, 256, 12, 24, 18, 72] {
        let original: Vec<BaseElement> = rand_vector(n * 5);
        let mut values = original.clone();
        let mut blocks: Vec<&mut [BaseElement]> = values.chunks_mut(5).collect();

        transform(&mut blocks, false);
        assert_ne!(original, collect(&blocks));
        transform(&mut blocks, true);
        super::scale(&mut blocks, BaseElement::from(n as u32).inv());

        assert_eq!(original, collect(&blocks), "n = {n}");
    }
}

#[test]
fn round_trip_fermat() {
    let n = 1 << 10;
    let original: Vec<fermat::BaseElement> = rand_vector(n * 2);
    let mut values = original.clone();
    let mut blocks: Vec<&mut [fermat::BaseElement]> = values.chunks_mut(2).collect();

    transform(&mut blocks, false);
    transform(&mut blocks, true);
    super::scale(&mut blocks, fermat::BaseElement::from(n as u32).inv());

    assert_eq!(original, collect(&blocks));
}

// ENGINE AGREEMENT
// ================================================================================================

#[test]
fn engines_agree_with_naive_transform() {
    for n in [1, 2, 4, 8, 16, 32, 64] {
        check_engines::<BaseElement>(n, 3);
        check_engines::<fermat::BaseElement>(n, 3);
        check_engines::<Goldilocks>(n, 3);
    }
}

#[test]
fn mixed_lengths_agree_with_naive_transform() {
    for n in [3, 6, 9, 12, 18, 24, 36, 48, 72, 96] {
        let values: Vec<BaseElement> = rand_vector(n * 2);
        for inverse in [false, true] {
            let expected = apply(Engine::Naive, &values, 2, inverse);
            assert_eq!(expected, apply(Engine::MatrixFourier, &values, 2, inverse), "n = {n}");
            assert_eq!(expected, apply(Engine::Auto, &values, 2, inverse), "n = {n}");
        }
    }

    let values: Vec<Goldilocks> = rand_vector(48);
    assert_eq!(
        apply(Engine::Naive, &values, 1, false),
        apply(Engine::MatrixFourier, &values, 1, false)
    );
}

#[test]
fn large_transforms_agree() {
    let n = 1 << 12;
    let values: Vec<BaseElement> = rand_vector(n * 2);

    let expected = apply(Engine::Iterative, &values, 2, false);
    assert_eq!(expected, apply(Engine::Recursive, &values, 2, false));
    assert_eq!(expected, apply(Engine::MatrixFourier, &values, 2, false));

    let n = 3 << 10;
    let values: Vec<BaseElement> = rand_vector(n);
    let mut expected = values.clone();
    let mut blocks: Vec<&mut [BaseElement]> = expected.chunks_mut(1).collect();
    let root = BaseElement::get_root_of_unity(n);
    direct_mixed_transform(&mut blocks, root);
    assert_eq!(collect(&blocks), apply(Engine::MatrixFourier, &values, 1, false));
}

#[test]
fn recursion_down_to_single_butterflies() {
    for n in [2, 8, 64, 2048] {
        let values: Vec<BaseElement> = rand_vector(n);
        let root = BaseElement::get_root_of_unity(n);
        let roots = get_root_table(root, n);

        let mut expected = values.clone();
        let mut blocks: Vec<&mut [BaseElement]> = expected.chunks_mut(1).collect();
        iterative::transform(&mut blocks, &roots);
        let expected = collect(&blocks);

        let mut actual = values.clone();
        let mut blocks: Vec<&mut [BaseElement]> = actual.chunks_mut(1).collect();
        recursive::transform(&mut blocks, &roots, 0);
        assert_eq!(expected, collect(&blocks), "n = {n}");
    }
}

#[test]
fn transform_of_constant_and_impulse() {
    let n = 32;
    let c: BaseElement = rand_value();

    // a constant sequence transforms into an impulse
    let mut values = vec![c; n];
    let mut blocks: Vec<&mut [BaseElement]> = values.chunks_mut(1).collect();
    transform(&mut blocks, false);
    let result = collect(&blocks);
    assert_eq!(c * BaseElement::from(n as u32), result[0]);
    assert!(result[1..].iter().all(|&v| v == BaseElement::ZERO));

    // an impulse transforms into a constant sequence
    let mut values = vec![BaseElement::ZERO; n];
    values[0] = c;
    let mut blocks: Vec<&mut [BaseElement]> = values.chunks_mut(1).collect();
    transform(&mut blocks, true);
    assert!(collect(&blocks).iter().all(|&v| v == c));
}

// PSEUDO-PRIME MODULI
// ================================================================================================

#[test]
fn pseudo_prime_transforms_of_length_two() {
    let values = [mersenne32::BaseElement::new(u32::MAX), mersenne32::BaseElement::new(5)];
    for engine in ENGINES {
        let mut data = values;
        let mut blocks: Vec<&mut [mersenne32::BaseElement]> = data.chunks_mut(1).collect();
        transform_with(engine, &mut blocks, false);
        assert_eq!(5, blocks[0][0].as_int());
        assert_eq!(u32::MAX - 5, blocks[1][0].as_int());
    }

    check_engines::<mersenne32::BaseElement>(2, 3);
    check_engines::<mersenne64::BaseElement>(2, 3);

    let a: mersenne64::BaseElement = rand_value();
    let b: mersenne64::BaseElement = rand_value();
    let mut data = [a, b];
    let mut blocks: Vec<&mut [mersenne64::BaseElement]> = data.chunks_mut(1).collect();
    transform(&mut blocks, false);
    assert_eq!(a + b, blocks[0][0]);
    assert_eq!(a - b, blocks[1][0]);
}

#[test]
fn pseudo_prime_round_trips() {
    for n in [4, 16, 256, 1024] {
        // every 5th element is stored as the modulus itself, i.e. as a non-canonical zero
        let mut values: Vec<mersenne32::BaseElement> = rand_vector(n * 3);
        values.iter_mut().step_by(5).for_each(|v| *v = mersenne32::BaseElement::new(u32::MAX));
        check_round_trips(&values, 3);
        check_engines_against_iterative(&values, 3);

        let mut values: Vec<mersenne64::BaseElement> = rand_vector(n * 3);
        values.iter_mut().step_by(5).for_each(|v| *v = mersenne64::BaseElement::new(u64::MAX));
        check_round_trips(&values, 3);
        check_engines_against_iterative(&values, 3);
    }
}

#[test]
fn pseudo_prime_largest_transform() {
    let n = 1 << 16;
    let mut values: Vec<mersenne32::BaseElement> = rand_vector(n);
    values[1] = mersenne32::BaseElement::new(u32::MAX);
    check_round_trips(&values, 1);
}

#[test]
#[should_panic(expected = "not supported in a field with modulus")]
fn pseudo_prime_mixed_length() {
    // 12 divides the order of the unit group, but only power-of-two lengths are supported
    assert!(mersenne64::BaseElement::has_root_of_unity(12));
    let mut data = [mersenne64::BaseElement::ONE; 12];
    let mut blocks: Vec<&mut [mersenne64::BaseElement]> = data.chunks_mut(1).collect();
    transform(&mut blocks, false);
}

#[test]
#[should_panic(expected = "naive engine requires a prime modulus")]
fn pseudo_prime_naive_engine() {
    let mut data = [mersenne32::BaseElement::ONE; 4];
    let mut blocks: Vec<&mut [mersenne32::BaseElement]> = data.chunks_mut(1).collect();
    transform_with(Engine::Naive, &mut blocks, false);
}

// INVALID INPUTS
// ================================================================================================

#[test]
#[should_panic(expected = "transform length 5 is not supported")]
fn unsupported_length() {
    let mut data = [BaseElement::ONE; 5];
    let mut blocks: Vec<&mut [BaseElement]> = data.chunks_mut(1).collect();
    transform(&mut blocks, false);
}

#[test]
#[should_panic(expected = "not supported in a field with modulus")]
fn length_without_root_of_unity() {
    let mut data = [fermat::BaseElement::ONE; 3];
    let mut blocks: Vec<&mut [fermat::BaseElement]> = data.chunks_mut(1).collect();
    transform(&mut blocks, false);
}

#[test]
#[should_panic(expected = "all blocks must contain 2 elements")]
fn mismatched_block_sizes() {
    let mut data = [BaseElement::ONE; 9];
    let (a, b) = data.split_at_mut(2);
    let (b, c) = b.split_at_mut(3);
    let (c, d) = c.split_at_mut(2);
    let mut blocks = vec![a, b, c, d];
    transform(&mut blocks, false);
}

#[test]
#[should_panic(expected = "iterative engine requires a power-of-two length")]
fn iterative_engine_with_mixed_length() {
    let mut data = [BaseElement::ONE; 12];
    let mut blocks: Vec<&mut [BaseElement]> = data.chunks_mut(1).collect();
    transform_with(Engine::Iterative, &mut blocks, false);
}

// CODELETS
// ================================================================================================

#[test]
fn codelets_agree_with_naive_transform() {
    for order in [2, 3, 4, 6, 9] {
        let root = BaseElement::get_root_of_unity(order);
        for root in [root, root.inv()] {
            let codelet = Codelet::new(order, root);
            assert_eq!(order, codelet.order());

            let values: Vec<BaseElement> = rand_vector(order * 4);
            let mut expected = values.clone();
            let mut blocks: Vec<&mut [BaseElement]> = expected.chunks_mut(4).collect();
            naive::transform(&mut blocks, root);
            let expected = collect(&blocks);

            let mut actual = values.clone();
            let mut blocks: Vec<&mut [BaseElement]> = actual.chunks_mut(4).collect();
            codelet.apply(&mut blocks);
            assert_eq!(expected, collect(&blocks), "order {order}");
        }
    }
}

#[test]
#[should_panic(expected = "codelets of order 5 are not supported")]
fn codelet_of_unsupported_order() {
    Codelet::new(5, BaseElement::get_root_of_unity(5));
}

// HELPERS
// ================================================================================================

#[test]
fn root_table() {
    let n = 1 << 10;
    let root = BaseElement::get_root_of_unity(n);
    let roots = get_root_table(root, n);

    assert_eq!(10, roots.len());
    assert_eq!(root, roots[0]);
    assert_eq!(-BaseElement::ONE, roots[9]);
    assert_eq!(BaseElement::get_root_of_unity(4), roots[8]);
    assert!(get_root_table(BaseElement::ONE, 1).is_empty());
}

#[test]
fn permutations() {
    assert_eq!(0, permute_index(1, 0));
    assert_eq!(4, permute_index(8, 1));
    assert_eq!(3, permute_index(8, 6));

    let original: Vec<u32> = (0..64).collect();
    let mut values = original.clone();
    permute(&mut values);
    assert_eq!(32, values[1]);
    permute(&mut values);
    assert_eq!(original, values);
}

#[test]
fn transpose() {
    let mut values: Vec<u32> = (0..6).collect();
    mfa::transpose(&mut values, 2, 3);
    assert_eq!(vec![0, 3, 1, 4, 2, 5], values);
    mfa::transpose(&mut values, 3, 2);
    assert_eq!((0..6).collect::<Vec<_>>(), values);
}

#[test]
fn transpose_matrix_shapes() {
    for (num_rows, num_cols) in [(4, 4), (4, 8), (8, 4), (3, 16), (16, 3), (9, 4), (32, 64)] {
        let mut values: Vec<usize> = (0..num_rows * num_cols).collect();
        mfa::transpose(&mut values, num_rows, num_cols);
        for (i, &value) in values.iter().enumerate() {
            let (row, col) = (i / num_rows, i % num_rows);
            assert_eq!(col * num_cols + row, value, "{num_rows}x{num_cols} at {i}");
        }
        mfa::transpose(&mut values, num_cols, num_rows);
        assert_eq!((0..num_rows * num_cols).collect::<Vec<_>>(), values);
    }
}

#[test]
fn naive_empty_blocks() {
    let mut storage: [[BaseElement; 0]; 8] = [[]; 8];
    let mut blocks: Vec<&mut [BaseElement]> =
        storage.iter_mut().map(|block| block.as_mut_slice()).collect();
    naive::transform(&mut blocks, BaseElement::get_root_of_unity(8));
    transform_with(Engine::Naive, &mut blocks, false);
    assert!(blocks.iter().all(|block| block.is_empty()));
}

#[test]
fn num_matrix_rows() {
    assert_eq!(2, mfa::get_num_rows(8));
    assert_eq!(4, mfa::get_num_rows(16));
    assert_eq!(1 << 10, mfa::get_num_rows(1 << 21));
    assert_eq!(3, mfa::get_num_rows(3 << 5));
    assert_eq!(9, mfa::get_num_rows(9 << 5));
}

#[test]
fn engine_resolution() {
    assert_eq!(Engine::MatrixFourier, Engine::Auto.resolve(12, 1, 4));
    assert_eq!(Engine::MatrixFourier, Engine::Auto.resolve(1 << 12, 1 << 10, 4));
    assert_eq!(Engine::Iterative, Engine::Auto.resolve(2, 1 << 30, 4));
    assert_eq!(Engine::Naive, Engine::Naive.resolve(1 << 20, 1 << 10, 8));

    let expected = if cfg!(feature = "concurrent") { Engine::Recursive } else { Engine::Iterative };
    assert_eq!(expected, Engine::Auto.resolve(1 << 12, 1, 4));
    assert_eq!(Engine::Iterative, Engine::Auto.resolve(16, 1, 4));
}

#[test]
fn scale() {
    let values: Vec<BaseElement> = rand_vector(64 * 3);
    let factor: BaseElement = rand_value();

    let mut actual = values.clone();
    let mut blocks: Vec<&mut [BaseElement]> = actual.chunks_mut(3).collect();
    super::scale(&mut blocks, factor);

    let expected: Vec<BaseElement> = values.iter().map(|&v| v * factor).collect();
    assert_eq!(expected, collect(&blocks));
}

#[test]
fn transform_in_block_arena() {
    let n = 16;
    let values: Vec<BaseElement> = rand_vector(n * 4);
    let expected = apply(Engine::Iterative, &values, 4, false);

    let mut arena = BlockArena::from_elements(values.clone(), 4);
    arena.with_blocks_mut(|blocks| transform_with(Engine::Iterative, blocks, false));

    // payloads were not moved, only the order of blocks changed
    assert_ne!(expected, arena.as_raw());
    assert_eq!(expected, arena.to_elements());
    for i in 0..n {
        assert_eq!(&expected[i * 4..(i + 1) * 4], arena.block(i));
    }
}

// HELPER FUNCTIONS
// ================================================================================================

fn collect<E: FieldElement>(blocks: &[&mut [E]]) -> Vec<E> {
    blocks.iter().flat_map(|block| block.iter().copied()).collect()
}

fn apply<E: NttField>(engine: Engine, values: &[E], block_size: usize, inverse: bool) -> Vec<E> {
    let mut data = values.to_vec();
    let mut blocks: Vec<&mut [E]> = data.chunks_mut(block_size).collect();
    transform_with(engine, &mut blocks, inverse);
    collect(&blocks)
}

fn check_engines<E: NttField>(n: usize, block_size: usize) {
    let values: Vec<E> = rand_vector(n * block_size);
    for inverse in [false, true] {
        let expected = apply(Engine::Naive, &values, block_size, inverse);
        for engine in ENGINES {
            let actual = apply(engine, &values, block_size, inverse);
            assert_eq!(expected, actual, "engine {engine:?}, n = {n}, inverse = {inverse}");
        }
    }
}

/// Checks that an inverse transform scaled by 1/n restores `values` for all fast engines.
fn check_round_trips<E: NttField>(values: &[E], block_size: usize) {
    let n = values.len() / block_size;
    for engine in ENGINES {
        let mut data = values.to_vec();
        let mut blocks: Vec<&mut [E]> = data.chunks_mut(block_size).collect();
        transform_with(engine, &mut blocks, false);
        transform_with(engine, &mut blocks, true);
        super::scale(&mut blocks, E::from(n as u64).inv());
        assert_eq!(values.to_vec(), collect(&blocks), "engine {engine:?}, n = {n}");
    }
}

fn check_engines_against_iterative<E: NttField>(values: &[E], block_size: usize) {
    let n = values.len() / block_size;
    for inverse in [false, true] {
        let expected = apply(Engine::Iterative, values, block_size, inverse);
        for engine in ENGINES {
            let actual = apply(engine, values, block_size, inverse);
            assert_eq!(expected, actual, "engine {engine:?}, n = {n}, inverse = {inverse}");
        }
    }
}

/// Splits a transform of length 3 * m into three interleaved transforms of length m computed
/// by the iterative engine; this does not rely on the matrix decomposition.
fn direct_mixed_transform(blocks: &mut [&mut [BaseElement]], root: BaseElement) {
    let n = blocks.len();
    let m = n / 3;
    let sub_roots = get_root_table(root.exp(3), m);

    let parts: Vec<Vec<BaseElement>> = (0..3)
        .map(|r| {
            let mut part: Vec<BaseElement> = (0..m).map(|j| blocks[3 * j + r][0]).collect();
            let mut refs: Vec<&mut [BaseElement]> = part.chunks_mut(1).collect();
            iterative::transform(&mut refs, &sub_roots);
            collect(&refs)
        })
        .collect();

    for (k, block) in blocks.iter_mut().enumerate() {
        let mut value = BaseElement::ZERO;
        for (r, part) in parts.iter().enumerate() {
            value += part[k % m] * root.exp((r * k) as u64);
        }
        block[0] = value;
    }
}
