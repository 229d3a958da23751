// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crates contains functions for generating random values.
//!
//! These functions are intended to be used in tests and benchmarks. When compiled to WebAssembly
//! target, all of the functions are omitted.

pub use internal::*;

#[cfg(not(target_family = "wasm"))]
mod internal {
    use rand::prelude::*;
    use utils::Randomizable;

    // RANDOM VALUE GENERATION
    // ============================================================================================

    /// Returns a single random value of the specified type.
    ///
    /// # Panics
    /// Panics if:
    /// * A valid value requires over 32 bytes.
    /// * A valid value could not be generated after 1000 tries.
    pub fn rand_value<R: Randomizable>() -> R {
        for _ in 0..1000 {
            let bytes = rand::rng().random::<[u8; 32]>();
            if let Some(value) = R::from_random_bytes(&bytes[..R::VALUE_SIZE]) {
                return value;
            }
        }

        panic!("failed generate a random value");
    }

    /// Returns `n` random values of the specified type drawn from a freshly seeded generator.
    ///
    /// # Panics
    /// Panics under the same conditions as [prng_vector()].
    pub fn rand_vector<R: Randomizable>(n: usize) -> Vec<R> {
        let seed = rand::rng().random::<[u8; 32]>();
        prng_vector(seed, n)
    }

    /// Returns `n` values of the specified type generated deterministically from `seed`.
    ///
    /// Benchmarks and tests use this to fill blocks reproducibly.
    ///
    /// # Panics
    /// Panics if a valid value requires over 32 bytes, or if fewer than `n` valid values came
    /// out of `1000 * n` draws.
    pub fn prng_vector<R: Randomizable>(seed: [u8; 32], n: usize) -> Vec<R> {
        let mut result = Vec::with_capacity(n);
        if n == 0 {
            return result;
        }

        let mut g = StdRng::from_seed(seed);
        for _ in 0..1000 * n {
            let bytes = g.random::<[u8; 32]>();
            if let Some(element) = R::from_random_bytes(&bytes[..R::VALUE_SIZE]) {
                result.push(element);
                if result.len() == n {
                    return result;
                }
            }
        }

        panic!("failed to generate enough random values");
    }
}

#[cfg(target_family = "wasm")]
mod internal {}

// TESTS
// ================================================================================================
