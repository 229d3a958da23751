// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use math::ntt::{self, Engine};

use crate::ErasureError;

// ENCODER OPTIONS
// ================================================================================================

/// Erasure coding parameters.
///
/// An encoder configured with these options takes `K` source blocks of `block_size` elements
/// each and produces `K` parity blocks of the same size, so that the full codeword consists of
/// `2K` blocks. Any `K` blocks of the codeword are sufficient to recover the source data.
///
/// Options which depend on the field (e.g. whether a root of unity of order `2K` exists) are
/// checked when an [Encoder](crate::Encoder) is instantiated.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EncoderOptions {
    num_source_blocks: usize,
    block_size: usize,
    engine: Engine,
}

// ENCODER OPTIONS IMPLEMENTATION
// ================================================================================================
impl EncoderOptions {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------
    /// Returns a new instance of [EncoderOptions] constructed from the specified parameters.
    ///
    /// The transform engine is selected automatically; use [with_engine()](Self::with_engine)
    /// to override it.
    ///
    /// # Errors
    /// Returns an error if:
    /// * `num_source_blocks` is zero or is not of the form 2^k, 3 * 2^k, or 9 * 2^k.
    /// * `block_size` is zero.
    pub fn new(num_source_blocks: usize, block_size: usize) -> Result<Self, ErasureError> {
        if num_source_blocks == 0 {
            return Err(ErasureError::NoSourceBlocks);
        }
        if !ntt::is_supported_length(num_source_blocks) {
            return Err(ErasureError::UnsupportedSourceBlockCount(num_source_blocks));
        }
        if block_size == 0 {
            return Err(ErasureError::EmptyBlocks);
        }

        Ok(EncoderOptions {
            num_source_blocks,
            block_size,
            engine: Engine::Auto,
        })
    }

    /// Returns these options with the transform engine set to `engine`.
    ///
    /// [Engine::Iterative] and [Engine::Recursive] handle only power-of-two lengths; for other
    /// numbers of source blocks they are replaced with [Engine::MatrixFourier].
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = match engine {
            Engine::Iterative | Engine::Recursive if !self.num_source_blocks.is_power_of_two() => {
                Engine::MatrixFourier
            },
            _ => engine,
        };
        self
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the number of source blocks `K`.
    pub fn num_source_blocks(&self) -> usize {
        self.num_source_blocks
    }

    /// Returns the number of parity blocks produced by the encoder; this is always equal to the
    /// number of source blocks.
    pub fn num_parity_blocks(&self) -> usize {
        self.num_source_blocks
    }

    /// Returns the length `2K` of a full codeword measured in blocks.
    pub fn codeword_length(&self) -> usize {
        2 * self.num_source_blocks
    }

    /// Returns the number of field elements in every block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the transform engine used by the encoder.
    pub fn engine(&self) -> Engine {
        self.engine
    }
}
