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

//! Provides the non-owning string view and its search algorithms.

use std::cmp::{min, Ordering};
use std::fmt;
use std::iter::Rev;
use std::ops::Index;
use std::slice;

use crate::hash::Fnv1a;
use crate::text::error::TextError;
use crate::text::unit::Unit;

/// A non-owning view over a contiguous range of code units.
///
/// A view is a borrowed `(pointer, length)` pair: it never allocates, never
/// mutates, and never extends or terminates the range it references. The
/// borrow checker ties its lifetime to the owner of the underlying units, so
/// a view cannot outlive its source and cannot be constructed from a null
/// pointer.
///
/// # Examples
///
/// ```
/// use vesper_core::text::StringView;
///
/// let view = StringView::new(b"Hello World");
/// assert_eq!(view.len(), 11);
/// assert_eq!(view.find(StringView::new(b"World")), Some(6));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringView<'a, C: Unit> {
    units: &'a [C],
}

impl<'a, C: Unit> StringView<'a, C> {
    /// Creates a view over the given units.
    #[inline]
    pub const fn new(units: &'a [C]) -> Self {
        Self { units }
    }

    /// Creates an empty view.
    #[inline]
    pub const fn empty() -> Self {
        Self { units: &[] }
    }

    /// Creates a view over the units preceding the first [`Unit::NUL`].
    ///
    /// If the slice holds no terminator the whole slice is viewed.
    pub fn from_nul_terminated(units: &'a [C]) -> Self {
        let len = units
            .iter()
            .position(|&u| u == C::NUL)
            .unwrap_or(units.len());
        Self {
            units: &units[..len],
        }
    }

    /// Returns the number of units in the view.
    #[inline]
    pub const fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the view covers no units.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns the viewed units as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &'a [C] {
        self.units
    }

    /// Returns the unit at `index`, or [`TextError::OutOfRange`] when
    /// `index >= len()`.
    pub fn at(&self, index: usize) -> Result<C, TextError> {
        self.units
            .get(index)
            .copied()
            .ok_or(TextError::OutOfRange {
                index,
                len: self.units.len(),
            })
    }

    /// Returns a sub-view of up to `count` units starting at `pos`.
    ///
    /// A `pos` past the end yields the empty view rather than an error, and
    /// `count` is clamped to the available remainder. Pass `usize::MAX` as
    /// `count` to take everything from `pos` onward.
    ///
    /// # Examples
    ///
    /// ```
    /// use vesper_core::text::StringView;
    ///
    /// let view = StringView::new(b"Hello World");
    /// assert_eq!(view.substr(6, 5).as_slice(), b"World");
    /// assert_eq!(view.substr(6, 100).as_slice(), b"World");
    /// assert!(view.substr(42, 5).is_empty());
    /// ```
    pub fn substr(&self, pos: usize, count: usize) -> StringView<'a, C> {
        let start = min(pos, self.units.len());
        let end = start + min(count, self.units.len() - start);
        Self::new(&self.units[start..end])
    }

    /// Returns the index of the first occurrence of `needle`.
    ///
    /// An empty needle matches at position `0`.
    #[inline]
    pub fn find(&self, needle: StringView<'_, C>) -> Option<usize> {
        self.find_from(needle, 0)
    }

    /// Returns the index of the first occurrence of `needle` at or after
    /// `pos`.
    ///
    /// An empty needle matches at `pos` itself as long as `pos <= len()`.
    pub fn find_from(&self, needle: StringView<'_, C>, pos: usize) -> Option<usize> {
        let len = self.units.len();
        let n = needle.len();
        if pos > len {
            return None;
        }
        if n == 0 {
            return Some(pos);
        }
        if n > len - pos {
            return None;
        }
        (pos..=len - n).find(|&start| self.units[start..start + n] == *needle.units)
    }

    /// Returns the index of the last occurrence of `needle`.
    #[inline]
    pub fn rfind(&self, needle: StringView<'_, C>) -> Option<usize> {
        self.rfind_from(needle, usize::MAX)
    }

    /// Returns the index of the last occurrence of `needle` whose starting
    /// position is at or before `pos`.
    pub fn rfind_from(&self, needle: StringView<'_, C>, pos: usize) -> Option<usize> {
        let len = self.units.len();
        let n = needle.len();
        if n > len {
            return None;
        }
        let last = min(pos, len - n);
        (0..=last)
            .rev()
            .find(|&start| self.units[start..start + n] == *needle.units)
    }

    /// Returns the index of the first occurrence of the unit `c` at or after
    /// `pos`.
    pub fn find_unit_from(&self, c: C, pos: usize) -> Option<usize> {
        if pos > self.units.len() {
            return None;
        }
        self.units[pos..].iter().position(|&u| u == c).map(|i| i + pos)
    }

    /// Returns the index of the first occurrence of the unit `c`.
    #[inline]
    pub fn find_unit(&self, c: C) -> Option<usize> {
        self.find_unit_from(c, 0)
    }

    /// Returns the index of the last occurrence of the unit `c` at or before
    /// `pos`.
    pub fn rfind_unit_from(&self, c: C, pos: usize) -> Option<usize> {
        if self.units.is_empty() {
            return None;
        }
        let last = min(pos, self.units.len() - 1);
        (0..=last).rev().find(|&i| self.units[i] == c)
    }

    /// Returns the index of the last occurrence of the unit `c`.
    #[inline]
    pub fn rfind_unit(&self, c: C) -> Option<usize> {
        self.rfind_unit_from(c, usize::MAX)
    }

    /// Returns the index of the first unit at or after `pos` that is a
    /// member of `set`.
    ///
    /// The argument is a *set* of units, not a subsequence; an empty set
    /// never matches.
    pub fn find_first_of(&self, set: StringView<'_, C>, pos: usize) -> Option<usize> {
        let start = min(pos, self.units.len());
        (start..self.units.len()).find(|&i| set.contains_unit(self.units[i]))
    }

    /// Returns the index of the last unit at or before `pos` that is a
    /// member of `set`.
    pub fn find_last_of(&self, set: StringView<'_, C>, pos: usize) -> Option<usize> {
        if self.units.is_empty() {
            return None;
        }
        let last = min(pos, self.units.len() - 1);
        (0..=last).rev().find(|&i| set.contains_unit(self.units[i]))
    }

    /// Returns the index of the first unit at or after `pos` that is *not* a
    /// member of `set`.
    ///
    /// With an empty set every position matches, so any valid `pos` finds
    /// itself.
    pub fn find_first_not_of(&self, set: StringView<'_, C>, pos: usize) -> Option<usize> {
        let start = min(pos, self.units.len());
        (start..self.units.len()).find(|&i| !set.contains_unit(self.units[i]))
    }

    /// Returns the index of the last unit at or before `pos` that is *not* a
    /// member of `set`.
    pub fn find_last_not_of(&self, set: StringView<'_, C>, pos: usize) -> Option<usize> {
        if self.units.is_empty() {
            return None;
        }
        let last = min(pos, self.units.len() - 1);
        (0..=last).rev().find(|&i| !set.contains_unit(self.units[i]))
    }

    /// Returns `true` if the view contains the unit `c`.
    #[inline]
    pub fn contains_unit(&self, c: C) -> bool {
        self.units.contains(&c)
    }

    /// Returns `true` if the view contains `needle` as a subsequence.
    #[inline]
    pub fn contains(&self, needle: StringView<'_, C>) -> bool {
        self.find(needle).is_some()
    }

    /// Returns `true` if the view starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: StringView<'_, C>) -> bool {
        self.units.starts_with(prefix.units)
    }

    /// Returns `true` if the view ends with `suffix`.
    #[inline]
    pub fn ends_with(&self, suffix: StringView<'_, C>) -> bool {
        self.units.ends_with(suffix.units)
    }

    /// Three-way lexicographic comparison by unit value.
    ///
    /// When one view is a prefix of the other, the shorter compares less.
    #[inline]
    pub fn compare(&self, other: StringView<'_, C>) -> Ordering {
        self.units.cmp(other.units)
    }

    /// Returns a deterministic 64-bit content hash (FNV-1a over the unit
    /// bytes in little-endian order).
    ///
    /// Equal content always hashes equal, and the empty view hashes to the
    /// (non-zero) FNV offset basis. The hash is not collision resistant and
    /// must not be used for security purposes.
    pub fn content_hash(&self) -> u64 {
        let width = std::mem::size_of::<C>();
        let mut hasher = Fnv1a::new();
        for &u in self.units {
            hasher.write(&u.to_u32().to_le_bytes()[..width]);
        }
        hasher.finish()
    }

    /// Returns a forward iterator over the viewed units.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, C> {
        self.units.iter()
    }

    /// Returns a reverse iterator over the viewed units.
    #[inline]
    pub fn iter_rev(&self) -> Rev<slice::Iter<'a, C>> {
        self.units.iter().rev()
    }
}

impl<C: Unit> Index<usize> for StringView<'_, C> {
    type Output = C;

    /// Unchecked positional access; panics when `index >= len()`. Use
    /// [`StringView::at`] for a recoverable error.
    #[inline]
    fn index(&self, index: usize) -> &C {
        &self.units[index]
    }
}

impl<C: Unit> PartialOrd for StringView<'_, C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Unit> Ord for StringView<'_, C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.units.cmp(other.units)
    }
}

impl<C: Unit> PartialEq<&[C]> for StringView<'_, C> {
    #[inline]
    fn eq(&self, other: &&[C]) -> bool {
        self.units == *other
    }
}

impl PartialEq<&str> for StringView<'_, u8> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.units == other.as_bytes()
    }
}

impl<'a> From<&'a str> for StringView<'a, u8> {
    #[inline]
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a, C: Unit> From<&'a [C]> for StringView<'a, C> {
    #[inline]
    fn from(units: &'a [C]) -> Self {
        Self::new(units)
    }
}

impl<'a, C: Unit> IntoIterator for StringView<'a, C> {
    type Item = &'a C;
    type IntoIter = slice::Iter<'a, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

impl<C: Unit> fmt::Debug for StringView<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for &u in self.units {
            match char::from_u32(u.to_u32()) {
                Some(c) => write!(f, "{}", c.escape_debug())?,
                None => write!(f, "\\u{{{:x}}}", u.to_u32())?,
            }
        }
        write!(f, "\"")
    }
}

impl fmt::Display for StringView<'_, u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.units))
    }
}
