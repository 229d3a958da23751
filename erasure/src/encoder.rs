// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

use math::{ntt, utils::get_power_series_with_offset, BlockArena, FieldElement, NttField};
use tracing::{event, info_span, instrument, Level};
use utils::batch_iter_mut;
#[cfg(feature = "concurrent")]
use utils::iterators::*;

use crate::{EncoderOptions, ErasureError};

// ENCODER
// ================================================================================================

/// Systematic Reed-Solomon encoder over field `E`.
///
/// `K` source blocks are treated as evaluations of a polynomial of degree smaller than `K` at
/// the powers of a root of unity `w` of order `2K` with even exponents: source block `i` is the
/// value at `w^(2i)`. Parity block `i` is the value of the same polynomial at `w^(2i + 1)`.
/// Thus, in the codeword of `2K` blocks, source blocks occupy even positions and parity blocks
/// occupy odd positions.
///
/// Parity is computed element-wise across blocks with two transforms of length `K`:
/// 1. An inverse transform of the source blocks to get the coefficients of the polynomial.
/// 2. Multiplication of coefficient `i` by `w^i / K`.
/// 3. A forward transform of the scaled coefficients.
#[derive(Debug, Clone)]
pub struct Encoder<E: NttField> {
    options: EncoderOptions,
    twiddles: Vec<E>,
}

impl<E: NttField> Encoder<E> {
    // CONSTRUCTOR
    // --------------------------------------------------------------------------------------------
    /// Returns a new encoder for the specified options.
    ///
    /// # Errors
    /// Returns an error if:
    /// * The modulus of field `E` is not prime.
    /// * The field does not contain a root of unity of order `2K`.
    /// * `2K` is not smaller than the field modulus.
    pub fn new(options: EncoderOptions) -> Result<Self, ErasureError> {
        let modulus: u128 = E::MODULUS.into();
        if !E::IS_PRIME {
            return Err(ErasureError::CompositeModulus(modulus));
        }

        let num_blocks = options.num_source_blocks();
        let codeword_length = options.codeword_length();
        if !E::has_root_of_unity(codeword_length) {
            return Err(ErasureError::MissingRootOfUnity(codeword_length, E::GROUP_ORDER));
        }
        if codeword_length as u128 >= modulus {
            return Err(ErasureError::CodewordTooLong(codeword_length, modulus));
        }

        let root = E::get_root_of_unity(codeword_length);
        let inv_length = E::from(num_blocks as u64).inv();
        let twiddles = get_power_series_with_offset(root, inv_length, num_blocks);

        Ok(Encoder { options, twiddles })
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the options this encoder was instantiated with.
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    // ENCODING
    // --------------------------------------------------------------------------------------------

    /// Returns parity blocks for the provided source blocks.
    ///
    /// # Errors
    /// Returns an error if the shape of `source` does not match encoder options, or if memory
    /// for the output could not be allocated. No output is produced in these cases.
    pub fn encode(&self, source: &BlockArena<E>) -> Result<BlockArena<E>, ErasureError> {
        self.check_shape(source.num_blocks(), source.block_size())?;
        let mut parity = source.try_clone()?;
        self.encode_in_place(&mut parity)?;
        Ok(parity)
    }

    /// Replaces the source blocks in `blocks` with parity blocks.
    ///
    /// # Errors
    /// Returns an error if the shape of `blocks` does not match encoder options; in this case
    /// `blocks` are left unchanged.
    pub fn encode_in_place(&self, blocks: &mut BlockArena<E>) -> Result<(), ErasureError> {
        self.check_shape(blocks.num_blocks(), blocks.block_size())?;
        blocks.with_blocks_mut(|blocks| self.encode_blocks(blocks))
    }

    /// Replaces the blocks referenced by `blocks` with parity blocks.
    ///
    /// The references themselves may be reordered; after this function returns, `blocks[i]`
    /// refers to parity block `i`.
    ///
    /// # Errors
    /// Returns an error if the number of blocks or the size of any block does not match encoder
    /// options; in this case the data is left unchanged.
    #[instrument(skip_all, fields(num_blocks = blocks.len(), block_size = self.options.block_size()))]
    pub fn encode_blocks(&self, blocks: &mut [&mut [E]]) -> Result<(), ErasureError> {
        self.check_shape(blocks.len(), self.options.block_size())?;
        if let Some(block) = blocks.iter().find(|b| b.len() != self.options.block_size()) {
            return Err(ErasureError::WrongBlockSize(self.options.block_size(), block.len()));
        }

        let engine = self.options.engine();
        event!(
            Level::DEBUG,
            "engine: {:?}",
            engine.resolve(blocks.len(), self.options.block_size(), E::ELEMENT_BYTES)
        );

        info_span!("interpolate_source_blocks")
            .in_scope(|| ntt::transform_with(engine, blocks, true));

        info_span!("apply_twiddles").in_scope(|| apply_twiddles(blocks, &self.twiddles));

        info_span!("evaluate_parity_blocks")
            .in_scope(|| ntt::transform_with(engine, blocks, false));

        Ok(())
    }

    /// Returns the full codeword for the provided source blocks: source block `i` is placed at
    /// position `2i` and parity block `i` at position `2i + 1`.
    ///
    /// # Errors
    /// Returns an error if the shape of `source` does not match encoder options, or if memory
    /// for the output could not be allocated.
    pub fn codeword(&self, source: &BlockArena<E>) -> Result<BlockArena<E>, ErasureError> {
        let parity = self.encode(source)?;
        let mut result =
            BlockArena::try_new(self.options.codeword_length(), self.options.block_size())?;
        for (i, (data, check)) in source.iter().zip(parity.iter()).enumerate() {
            result.block_mut(2 * i).copy_from_slice(data);
            result.block_mut(2 * i + 1).copy_from_slice(check);
        }
        Ok(result)
    }

    // HELPER METHODS
    // --------------------------------------------------------------------------------------------

    fn check_shape(&self, num_blocks: usize, block_size: usize) -> Result<(), ErasureError> {
        if num_blocks != self.options.num_source_blocks() {
            return Err(ErasureError::WrongBlockCount(self.options.num_source_blocks(), num_blocks));
        }
        if block_size != self.options.block_size() {
            return Err(ErasureError::WrongBlockSize(self.options.block_size(), block_size));
        }
        Ok(())
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Multiplies every element of `blocks[i]` by `twiddles[i]`.
fn apply_twiddles<E: FieldElement>(blocks: &mut [&mut [E]], twiddles: &[E]) {
    debug_assert_eq!(blocks.len(), twiddles.len());
    batch_iter_mut!(blocks, 16, |batch: &mut [&mut [E]], offset: usize| {
        for (block, &twiddle) in batch.iter_mut().zip(&twiddles[offset..]) {
            block.iter_mut().for_each(|v| *v *= twiddle);
        }
    });
}
