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

//! Provides the engine's text containers.
//!
//! Two cooperating types form the module:
//!
//! - [`StringView`]: a non-owning, zero-copy view over a range of code
//!   units, carrying the whole read-only algorithm surface (search,
//!   comparison, hashing, iteration).
//! - [`BasicString`]: an owning, mutable, always-NUL-terminated string with
//!   small-string optimization; short content lives inline, long content on
//!   the heap, and every read-only operation delegates to a view over the
//!   current buffer.
//!
//! Both are generic over the code-unit width (see [`Unit`]); the aliases
//! below pin the widths used across the engine. Contents are treated as raw
//! code units: no encoding validation, normalization, or collation is
//! performed.

mod error;
mod string;
mod unit;
mod view;

pub use error::TextError;
pub use string::BasicString;
pub use unit::Unit;
pub use view::StringView;

/// An owning 8-bit string with a 23-unit inline buffer (three machine words
/// on 64-bit targets, minus the terminator slot).
pub type String8 = BasicString<u8, 24>;

/// An owning string of UTF-16-width units with an 11-unit inline buffer.
pub type String16 = BasicString<u16, 12>;

/// An owning string of UTF-32-width units with a 5-unit inline buffer.
pub type String32 = BasicString<u32, 6>;

/// The wide string used at platform boundaries; 32-bit units.
pub type WideString = String32;

/// A view over 8-bit units.
pub type StringView8<'a> = StringView<'a, u8>;

/// A view over UTF-16-width units.
pub type StringView16<'a> = StringView<'a, u16>;

/// A view over UTF-32-width units.
pub type StringView32<'a> = StringView<'a, u32>;
