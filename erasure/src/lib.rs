// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains a systematic Reed-Solomon erasure encoder built on top of
//! number-theoretic transforms over prime fields.
//!
//! Data is split into `K` *source blocks* of equal size. The encoder produces `K` *parity
//! blocks* of the same size, such that the source data can be recovered from any `K` of the
//! `2K` codeword blocks. Each element position inside the blocks forms an independent codeword,
//! which lets the transforms process whole blocks at a time.
//!
//! Encoding is done in three steps: the source blocks are interpolated with an inverse transform
//! of length `K`, the resulting coefficients are multiplied by powers of a root of unity of
//! order `2K`, and a forward transform of length `K` evaluates the polynomial at the points
//! interleaved with the source points. The overall cost is $O(K \log K)$ field operations per
//! element position.
//!
//! # Usage
//! ```
//! # use fastecc::{math::{fields::proth32::BaseElement, BlockArena}, Encoder, EncoderOptions};
//! let options = EncoderOptions::new(4, 2).unwrap();
//! let encoder = Encoder::<BaseElement>::new(options).unwrap();
//!
//! let data: Vec<BaseElement> = (1..=8u32).map(BaseElement::from).collect();
//! let source = BlockArena::from_elements(data, 2);
//!
//! let parity = encoder.encode(&source).unwrap();
//! assert_eq!(4, parity.num_blocks());
//!
//! let codeword = encoder.codeword(&source).unwrap();
//! assert_eq!(source.block(1), codeword.block(2));
//! assert_eq!(parity.block(1), codeword.block(3));
//! ```
//!
//! # Concurrent execution
//! When the crate is compiled with `concurrent` feature enabled, transforms and twiddle
//! multiplications are executed in multiple threads using rayon's global thread pool. The number
//! of threads can be configured via `RAYON_NUM_THREADS` environment variable.
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub use math;
pub use math::ntt::Engine;

mod encoder;
pub use encoder::Encoder;

mod options;
pub use options::EncoderOptions;

mod errors;
pub use errors::ErasureError;
