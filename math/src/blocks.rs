// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;
use core::mem;

use utils::chunk_refs_mut;
#[cfg(feature = "concurrent")]
use utils::iterators::*;

use crate::{errors::AllocationError, field::FieldElement};

// BLOCK ARENA
// ================================================================================================

/// Contiguous storage for a sequence of equally sized blocks of field elements.
///
/// Transforms operate on slices of block references and reorder the references rather than the
/// data. The arena keeps track of this reordering: after every call to
/// [with_blocks_mut()](Self::with_blocks_mut) the logical order of blocks is updated to match
/// the order of references as left by the closure, while block payloads stay where they were
/// originally allocated.
#[derive(Debug, PartialEq, Eq)]
pub struct BlockArena<E: FieldElement> {
    data: Vec<E>,
    block_size: usize,
    order: Vec<usize>,
}

impl<E: FieldElement> BlockArena<E> {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns a new arena with `num_blocks` blocks of `block_size` elements each, with all
    /// elements set to ZERO.
    ///
    /// # Errors
    /// Returns an error if:
    /// * `block_size` is zero.
    /// * The total number of bytes overflows the address space.
    /// * The allocator fails to provide the requested memory.
    pub fn try_new(num_blocks: usize, block_size: usize) -> Result<Self, AllocationError> {
        if block_size == 0 {
            return Err(AllocationError::EmptyBlocks);
        }
        let num_elements = num_blocks
            .checked_mul(block_size)
            .filter(|n| n.checked_mul(E::ELEMENT_BYTES).is_some_and(|b| b <= isize::MAX as usize))
            .ok_or(AllocationError::CapacityOverflow(num_blocks, block_size))?;

        let mut data = Vec::new();
        data.try_reserve_exact(num_elements)
            .map_err(|_| AllocationError::OutOfMemory(num_elements * E::ELEMENT_BYTES))?;
        data.resize(num_elements, E::ZERO);

        let mut order = Vec::new();
        order
            .try_reserve_exact(num_blocks)
            .map_err(|_| AllocationError::OutOfMemory(num_blocks * mem::size_of::<usize>()))?;
        order.extend(0..num_blocks);

        Ok(Self { data, block_size, order })
    }

    /// Returns an arena holding the provided elements split into blocks of `block_size`
    /// elements each.
    ///
    /// # Panics
    /// Panics if `block_size` is zero or the number of elements is not a multiple of
    /// `block_size`.
    pub fn from_elements(data: Vec<E>, block_size: usize) -> Self {
        assert!(block_size > 0, "block size must be greater than zero");
        assert_eq!(
            data.len() % block_size,
            0,
            "number of elements must be a multiple of {}, but was {}",
            block_size,
            data.len()
        );
        let order = (0..data.len() / block_size).collect();
        Self { data, block_size, order }
    }

    /// Returns a copy of this arena; blocks of the copy are stored in logical order.
    ///
    /// # Errors
    /// Returns an error if memory for the copy could not be allocated.
    pub fn try_clone(&self) -> Result<Self, AllocationError> {
        let mut result = Self::try_new(self.num_blocks(), self.block_size)?;
        for (target, source) in result.data.chunks_mut(self.block_size).zip(self.iter()) {
            target.copy_from_slice(source);
        }
        Ok(result)
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the number of blocks in this arena.
    pub fn num_blocks(&self) -> usize {
        self.order.len()
    }

    /// Returns the number of elements in every block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the block at the specified logical position.
    pub fn block(&self, index: usize) -> &[E] {
        let start = self.order[index] * self.block_size;
        &self.data[start..start + self.block_size]
    }

    /// Returns a mutable reference to the block at the specified logical position.
    pub fn block_mut(&mut self, index: usize) -> &mut [E] {
        let start = self.order[index] * self.block_size;
        &mut self.data[start..start + self.block_size]
    }

    /// Returns an iterator over all blocks in logical order.
    pub fn iter(&self) -> impl Iterator<Item = &[E]> {
        self.order.iter().map(move |&i| {
            let start = i * self.block_size;
            &self.data[start..start + self.block_size]
        })
    }

    /// Returns mutable references to all blocks in logical order.
    pub fn blocks_mut(&mut self) -> Vec<&mut [E]> {
        let mut physical: Vec<Option<&mut [E]>> =
            chunk_refs_mut(&mut self.data, self.block_size).into_iter().map(Some).collect();
        self.order
            .iter()
            .filter_map(|&i| physical[i].take())
            .collect()
    }

    /// Returns all elements of this arena as a single vector with blocks in logical order.
    pub fn to_elements(&self) -> Vec<E> {
        let mut result = Vec::with_capacity(self.data.len());
        self.iter().for_each(|block| result.extend_from_slice(block));
        result
    }

    // TRANSFORMATIONS
    // --------------------------------------------------------------------------------------------

    /// Passes references to all blocks (in logical order) to the provided closure and updates
    /// the logical order of blocks to match the order of references left by the closure.
    ///
    /// The closure may reorder the references arbitrarily (e.g. as transforms do), but must not
    /// replace them with references to memory outside of this arena.
    pub fn with_blocks_mut<R>(&mut self, f: impl FnOnce(&mut [&mut [E]]) -> R) -> R {
        let base = self.data.as_ptr() as usize;
        let stride = self.block_size * mem::size_of::<E>();

        let mut blocks = self.blocks_mut();
        let result = f(&mut blocks);

        let order: Vec<usize> =
            blocks.iter().map(|block| (block.as_ptr() as usize - base) / stride).collect();
        drop(blocks);

        debug_assert_eq!(order.len(), self.order.len(), "number of blocks changed");
        self.order = order;
        result
    }

    /// Replaces every element with its canonical representation.
    ///
    /// This is needed only by consumers which read the raw memory of the arena; all equality
    /// checks on field elements already operate on canonical values.
    pub fn normalize(&mut self) {
        #[cfg(not(feature = "concurrent"))]
        self.data.iter_mut().for_each(|v| *v = v.normalize());

        #[cfg(feature = "concurrent")]
        self.data.par_iter_mut().for_each(|v| *v = v.normalize());
    }

    /// Returns the underlying storage of this arena in physical order.
    pub fn as_raw(&self) -> &[E] {
        &self.data
    }
}

// TESTS
// ================================================================================================
