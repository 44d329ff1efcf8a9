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

//! Provides the 64-bit FNV-1a hash used for content hashing.
//!
//! FNV-1a is deterministic and well distributed for short keys, which is all
//! the engine's lookup tables need. It is **not** collision resistant; never
//! use it for security purposes.

/// The FNV-1a 64-bit offset basis; also the hash of empty input.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// The FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A streaming FNV-1a 64-bit hasher.
///
/// # Examples
///
/// ```
/// use vesper_core::hash::Fnv1a;
///
/// let mut hasher = Fnv1a::new();
/// hasher.write(b"render");
/// hasher.write(b"_pass");
/// assert_eq!(hasher.finish(), vesper_core::hash::fnv1a64(b"render_pass"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fnv1a {
    state: u64,
}

impl Fnv1a {
    /// Creates a hasher seeded with the offset basis.
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }

    /// Folds the given bytes into the hash state.
    pub fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    /// Returns the current hash value.
    #[inline]
    pub const fn finish(&self) -> u64 {
        self.state
    }
}

impl Default for Fnv1a {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Hashes a byte slice in one call.
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hasher = Fnv1a::new();
    hasher.write(bytes);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_hashes_to_the_offset_basis() {
        assert_eq!(fnv1a64(b""), FNV_OFFSET_BASIS);
        assert_ne!(fnv1a64(b""), 0);
    }

    #[test]
    fn known_vectors() {
        assert_eq!(fnv1a64(b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a64(b"foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn streaming_matches_one_shot() {
        let mut hasher = Fnv1a::new();
        hasher.write(b"Hello ");
        hasher.write(b"World");
        assert_eq!(hasher.finish(), fnv1a64(b"Hello World"));
    }
}
