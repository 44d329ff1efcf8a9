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

//! Provides the engine's hashing primitives.
//!
//! Two hashes with two jobs: [`fnv1a64`] is the fast, non-cryptographic
//! content hash backing [`crate::text::StringView::content_hash`] and the
//! engine's lookup tables; [`Sha512`] is the standard digest used where
//! stable content identity matters (asset pipelines, caches on disk).

mod fnv;
mod sha512;

pub use fnv::{fnv1a64, Fnv1a, FNV_OFFSET_BASIS, FNV_PRIME};
pub use sha512::{Sha512, DIGEST_SIZE};
