// Copyright (c) fastecc contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

mod traits;
pub use traits::{FieldElement, NttField};

pub mod fermat;
pub mod generic;
pub mod mersenne32;
pub mod mersenne64;
pub mod proth32;
