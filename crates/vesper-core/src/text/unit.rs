// Copyright 2025 vesper
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the code-unit abstraction the text containers are generic over.

use std::fmt::Debug;
use std::hash::Hash;

/// A fixed-width code unit usable as the element type of the text containers.
///
/// The containers treat units as opaque fixed-width values: no encoding is
/// assumed and no validation is performed. Implementations are provided for
/// the 8-, 16-, and 32-bit widths ([`u8`], [`u16`], [`u32`]); the wide
/// aliases in [`crate::text`] pick the platform-appropriate width.
pub trait Unit:
    Copy + Eq + Ord + Default + Debug + Hash + Send + Sync + 'static
{
    /// The terminator unit kept one past the end of every owning string.
    const NUL: Self;

    /// Widens the unit to `u32` for hashing and diagnostic formatting.
    fn to_u32(self) -> u32;
}

impl Unit for u8 {
    const NUL: Self = 0;

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }
}

impl Unit for u16 {
    const NUL: Self = 0;

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }
}

impl Unit for u32 {
    const NUL: Self = 0;

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }
}
