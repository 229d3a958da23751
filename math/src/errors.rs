// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt;

// ALLOCATION ERROR
// ================================================================================================

/// Defines errors which can occur while reserving memory for block storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The requested number of elements does not fit into the address space.
    CapacityOverflow(usize, usize),
    /// The allocator could not provide the requested number of bytes.
    OutOfMemory(usize),
    /// Block size was zero.
    EmptyBlocks,
}

impl fmt::Display for AllocationError {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow(num_blocks, block_size) => {
                write!(f, "storage for {num_blocks} blocks of {block_size} elements exceeds the address space")
            }
            Self::OutOfMemory(bytes) => {
                write!(f, "failed to allocate {bytes} bytes for block storage")
            }
            Self::EmptyBlocks => {
                write!(f, "block size must be greater than zero")
            }
        }
    }
}

impl core::error::Error for AllocationError {}
