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

//! Provides the owning, growable string with small-string optimization.

use std::cmp::{max, min, Ordering};
use std::fmt;
use std::ops::{Add, AddAssign, Index, Range};
use std::slice;

use log::trace;

use crate::text::error::TextError;
use crate::text::unit::Unit;
use crate::text::view::StringView;

/// Storage for a [`BasicString`]: either the inline buffer or a heap vector.
///
/// The heap vector always holds the content plus one trailing [`Unit::NUL`],
/// so `vec.len() == len + 1` at all times. The inline buffer keeps its
/// terminator at `buf[len]`, which is why `N` slots yield `N - 1` units of
/// capacity.
#[derive(Clone)]
enum Repr<C: Unit, const N: usize> {
    Inline { len: u8, buf: [C; N] },
    Heap(Vec<C>),
}

/// An owning, growable, always-NUL-terminated string of code units.
///
/// Short contents (up to [`Self::SSO_CAPACITY`] units) live inline in the
/// object itself; longer contents are promoted to a heap buffer. The
/// promotion is automatic and one-way: mutators that shrink the string never
/// demote it back, only [`BasicString::shrink_to_fit`] does.
///
/// `N` is the inline slot count *including* the terminator slot; use the
/// width aliases ([`crate::text::String8`], [`crate::text::String16`],
/// [`crate::text::String32`]) rather than spelling `N` out. `N` must be at
/// least 1 and at most 256.
///
/// The type has plain value semantics: no internal locking, external
/// synchronization required for concurrent mutation.
///
/// # Examples
///
/// ```
/// use vesper_core::text::String8;
///
/// let mut s = String8::from("Hello");
/// assert!(s.is_inline());
/// s.append(" World".into());
/// assert_eq!(s, "Hello World");
/// ```
#[derive(Clone)]
pub struct BasicString<C: Unit, const N: usize> {
    repr: Repr<C, N>,
}

impl<C: Unit, const N: usize> BasicString<C, N> {
    /// The number of units the inline buffer can hold before the string is
    /// promoted to the heap.
    pub const SSO_CAPACITY: usize = N - 1;

    /// Creates an empty string in inline mode. Never allocates.
    #[inline]
    pub const fn new() -> Self {
        Self {
            repr: Repr::Inline {
                len: 0,
                buf: [C::NUL; N],
            },
        }
    }

    /// Creates an empty string with at least `capacity` units of storage.
    ///
    /// Capacities within [`Self::SSO_CAPACITY`] stay inline.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut s = Self::new();
        s.ensure_capacity(capacity);
        s
    }

    /// Creates a string by copying the given units.
    pub fn from_slice(units: &[C]) -> Self {
        let mut s = Self::new();
        s.assign_slice(units);
        s
    }

    /// Creates a string of `count` copies of `unit`.
    pub fn from_elem(unit: C, count: usize) -> Self {
        let mut s = Self::with_capacity(count);
        s.resize(count, unit);
        s
    }

    // --- Accessors ---

    /// Returns the number of units in the string, excluding the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Inline { len, .. } => *len as usize,
            Repr::Heap(v) => v.len() - 1,
        }
    }

    /// Returns `true` if the string holds no units.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of units the string can hold without reallocating,
    /// excluding the terminator slot.
    #[inline]
    pub fn capacity(&self) -> usize {
        match &self.repr {
            Repr::Inline { .. } => Self::SSO_CAPACITY,
            Repr::Heap(v) => v.capacity() - 1,
        }
    }

    /// Returns `true` while the content lives in the inline buffer.
    #[inline]
    pub fn is_inline(&self) -> bool {
        matches!(self.repr, Repr::Inline { .. })
    }

    /// Returns the content as a slice, excluding the terminator.
    #[inline]
    pub fn as_slice(&self) -> &[C] {
        match &self.repr {
            Repr::Inline { len, buf } => &buf[..*len as usize],
            Repr::Heap(v) => &v[..v.len() - 1],
        }
    }

    /// Returns the content including the trailing [`Unit::NUL`], for handoff
    /// to terminator-expecting consumers.
    #[inline]
    pub fn as_slice_with_nul(&self) -> &[C] {
        match &self.repr {
            Repr::Inline { len, buf } => &buf[..=*len as usize],
            Repr::Heap(v) => v,
        }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [C] {
        match &mut self.repr {
            Repr::Inline { len, buf } => &mut buf[..*len as usize],
            Repr::Heap(v) => {
                let len = v.len() - 1;
                &mut v[..len]
            }
        }
    }

    /// Returns a non-owning view over the current content.
    ///
    /// The view borrows the string, so it is invalidated by the next
    /// mutation (the borrow checker enforces this).
    #[inline]
    pub fn view(&self) -> StringView<'_, C> {
        StringView::new(self.as_slice())
    }

    /// Returns the unit at `index`, or [`TextError::OutOfRange`].
    #[inline]
    pub fn at(&self, index: usize) -> Result<C, TextError> {
        self.view().at(index)
    }

    /// Returns a forward iterator over the units.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, C> {
        self.as_slice().iter()
    }

    // --- Growth ---

    /// Grows storage so that at least `required` units fit.
    ///
    /// No-op when the current capacity suffices. Otherwise the new capacity
    /// is `max(required, 2 * capacity)` so repeated appends amortize to
    /// O(1). Growth allocates the new buffer before touching the old one, so
    /// an allocation failure leaves the string in its prior valid state.
    fn ensure_capacity(&mut self, required: usize) {
        let cap = self.capacity();
        if required <= cap {
            return;
        }
        let new_cap = max(required, cap * 2);
        match &mut self.repr {
            Repr::Inline { len, buf } => {
                let len = *len as usize;
                let mut v = Vec::with_capacity(new_cap + 1);
                v.extend_from_slice(&buf[..len]);
                v.push(C::NUL);
                trace!("text: inline buffer promoted to heap (len {len}, capacity {new_cap})");
                self.repr = Repr::Heap(v);
            }
            Repr::Heap(v) => v.reserve_exact(new_cap + 1 - v.len()),
        }
    }

    /// Reserves storage for at least `additional` more units.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len() + additional;
        self.ensure_capacity(required);
    }

    /// Releases excess storage.
    ///
    /// A heap string whose content fits the inline buffer is demoted back to
    /// inline mode and its heap buffer freed; a longer heap string is
    /// reallocated to exactly `len()`. Inline strings are untouched.
    pub fn shrink_to_fit(&mut self) {
        if let Repr::Heap(v) = &mut self.repr {
            let len = v.len() - 1;
            if len <= Self::SSO_CAPACITY {
                let mut buf = [C::NUL; N];
                buf[..len].copy_from_slice(&v[..len]);
                trace!("text: heap buffer demoted to inline (len {len})");
                self.repr = Repr::Inline {
                    len: len as u8,
                    buf,
                };
            } else {
                v.shrink_to_fit();
            }
        }
    }

    // --- Funnel primitives ---
    //
    // Every public mutator goes through these two (plus the splice logic in
    // insert/erase). They keep the terminator and the length tag coherent in
    // both modes.

    fn assign_slice(&mut self, src: &[C]) {
        self.ensure_capacity(src.len());
        match &mut self.repr {
            Repr::Inline { len, buf } => {
                buf[..src.len()].copy_from_slice(src);
                buf[src.len()] = C::NUL;
                *len = src.len() as u8;
            }
            Repr::Heap(v) => {
                v.clear();
                v.extend_from_slice(src);
                v.push(C::NUL);
            }
        }
    }

    fn append_slice(&mut self, src: &[C]) {
        let len = self.len();
        self.ensure_capacity(len + src.len());
        match &mut self.repr {
            Repr::Inline { len: tag, buf } => {
                buf[len..len + src.len()].copy_from_slice(src);
                buf[len + src.len()] = C::NUL;
                *tag = (len + src.len()) as u8;
            }
            Repr::Heap(v) => {
                v.truncate(len);
                v.extend_from_slice(src);
                v.push(C::NUL);
            }
        }
    }

    // --- Mutators ---

    /// Replaces the entire content with `content`.
    ///
    /// The borrow checker rules out passing a view of this string into its
    /// own `assign`; use [`BasicString::append_from_within`] and friends for
    /// self-referential edits.
    #[inline]
    pub fn assign(&mut self, content: StringView<'_, C>) {
        self.assign_slice(content.as_slice());
    }

    /// Appends `content` to the end of the string, growing and promoting to
    /// heap mode as needed.
    #[inline]
    pub fn append(&mut self, content: StringView<'_, C>) {
        self.append_slice(content.as_slice());
    }

    /// Appends a copy of this string's own `src` range to its end.
    ///
    /// This is the self-referential form of [`BasicString::append`]:
    /// `s.append_from_within(0..s.len())` doubles the content. Growth happens
    /// before the copy, so the source range stays valid even when the buffer
    /// moves.
    pub fn append_from_within(&mut self, src: Range<usize>) -> Result<(), TextError> {
        let len = self.len();
        if src.start > src.end || src.end > len {
            return Err(TextError::OutOfRange {
                index: max(src.start, src.end),
                len,
            });
        }
        let count = src.end - src.start;
        if count == 0 {
            return Ok(());
        }
        self.ensure_capacity(len + count);
        match &mut self.repr {
            Repr::Inline { len: tag, buf } => {
                buf.copy_within(src, len);
                buf[len + count] = C::NUL;
                *tag = (len + count) as u8;
            }
            Repr::Heap(v) => {
                v.truncate(len);
                v.extend_from_within(src);
                v.push(C::NUL);
            }
        }
        Ok(())
    }

    /// Appends a single unit.
    #[inline]
    pub fn push(&mut self, unit: C) {
        self.append_slice(&[unit]);
    }

    /// Removes and returns the last unit, or `None` on an empty string.
    pub fn pop(&mut self) -> Option<C> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let last = self.as_slice()[len - 1];
        self.truncate(len - 1);
        Some(last)
    }

    /// Empties the string. Mode and capacity are retained.
    pub fn clear(&mut self) {
        match &mut self.repr {
            Repr::Inline { len, buf } => {
                buf[0] = C::NUL;
                *len = 0;
            }
            Repr::Heap(v) => {
                v.clear();
                v.push(C::NUL);
            }
        }
    }

    /// Shortens the string to `new_len` units. No-op when `new_len >= len()`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len() {
            return;
        }
        match &mut self.repr {
            Repr::Inline { len, buf } => {
                buf[new_len] = C::NUL;
                *len = new_len as u8;
            }
            Repr::Heap(v) => {
                v.truncate(new_len);
                v.push(C::NUL);
            }
        }
    }

    /// Inserts `content` at `index`, shifting the tail right.
    ///
    /// `index` may be anywhere in `[0, len()]`; anything past that is
    /// [`TextError::OutOfRange`].
    pub fn insert(&mut self, index: usize, content: StringView<'_, C>) -> Result<(), TextError> {
        let len = self.len();
        if index > len {
            return Err(TextError::OutOfRange { index, len });
        }
        let src = content.as_slice();
        if src.is_empty() {
            return Ok(());
        }
        let count = src.len();
        self.ensure_capacity(len + count);
        match &mut self.repr {
            Repr::Inline { len: tag, buf } => {
                // Shift the tail (terminator included) right, then fill the gap.
                buf.copy_within(index..=len, index + count);
                buf[index..index + count].copy_from_slice(src);
                *tag = (len + count) as u8;
            }
            Repr::Heap(v) => {
                v.resize(len + count + 1, C::NUL);
                v.copy_within(index..=len, index + count);
                v[index..index + count].copy_from_slice(src);
            }
        }
        Ok(())
    }

    /// Inserts a copy of this string's own `src` range at `index`.
    ///
    /// The source units are captured before the splice, so the inserted copy
    /// reflects the content as it was when the call was made.
    pub fn insert_from_within(&mut self, index: usize, src: Range<usize>) -> Result<(), TextError> {
        let len = self.len();
        if src.start > src.end || src.end > len {
            return Err(TextError::OutOfRange {
                index: max(src.start, src.end),
                len,
            });
        }
        let captured: Vec<C> = self.as_slice()[src].to_vec();
        self.insert(index, StringView::new(&captured))
    }

    /// Removes up to `count` units starting at `index`, shifting the tail
    /// left.
    ///
    /// `count` clamps to the available remainder; `index` is strict.
    pub fn erase(&mut self, index: usize, count: usize) -> Result<(), TextError> {
        let len = self.len();
        if index > len {
            return Err(TextError::OutOfRange { index, len });
        }
        let count = min(count, len - index);
        if count == 0 {
            return Ok(());
        }
        match &mut self.repr {
            Repr::Inline { len: tag, buf } => {
                buf.copy_within(index + count..=len, index);
                *tag = (len - count) as u8;
            }
            Repr::Heap(v) => {
                v.copy_within(index + count..=len, index);
                v.truncate(len - count + 1);
            }
        }
        Ok(())
    }

    /// Replaces up to `count` units at `pos` with `content`.
    ///
    /// Observable behavior is erase-then-insert: `count` clamps, `pos` is
    /// strict, and the string grows when the replacement is longer than the
    /// replaced range. The equal-length case overwrites in place.
    pub fn replace(
        &mut self,
        pos: usize,
        count: usize,
        content: StringView<'_, C>,
    ) -> Result<(), TextError> {
        let len = self.len();
        if pos > len {
            return Err(TextError::OutOfRange { index: pos, len });
        }
        let count = min(count, len - pos);
        let src = content.as_slice();
        if count == src.len() {
            self.as_mut_slice()[pos..pos + count].copy_from_slice(src);
            return Ok(());
        }
        self.erase(pos, count)?;
        self.insert(pos, content)
    }

    /// Resizes the string to `new_len` units.
    ///
    /// Growth appends copies of `fill` (promoting to heap mode when the SSO
    /// boundary is crossed); shrinking truncates. Equal length is a no-op.
    pub fn resize(&mut self, new_len: usize, fill: C) {
        let len = self.len();
        match new_len.cmp(&len) {
            Ordering::Equal => {}
            Ordering::Less => self.truncate(new_len),
            Ordering::Greater => {
                self.ensure_capacity(new_len);
                match &mut self.repr {
                    Repr::Inline { len: tag, buf } => {
                        buf[len..new_len].fill(fill);
                        buf[new_len] = C::NUL;
                        *tag = new_len as u8;
                    }
                    Repr::Heap(v) => {
                        v.truncate(len);
                        v.resize(new_len, fill);
                        v.push(C::NUL);
                    }
                }
            }
        }
    }

    // --- Search and comparison (delegating to the view) ---

    /// Returns a sub-view of up to `count` units starting at `pos`; same
    /// clamping rules as [`StringView::substr`].
    #[inline]
    pub fn substr(&self, pos: usize, count: usize) -> StringView<'_, C> {
        self.view().substr(pos, count)
    }

    /// Returns the index of the first occurrence of `needle`.
    #[inline]
    pub fn find(&self, needle: StringView<'_, C>) -> Option<usize> {
        self.view().find(needle)
    }

    /// Returns the index of the first occurrence of `needle` at or after
    /// `pos`.
    #[inline]
    pub fn find_from(&self, needle: StringView<'_, C>, pos: usize) -> Option<usize> {
        self.view().find_from(needle, pos)
    }

    /// Returns the index of the last occurrence of `needle`.
    #[inline]
    pub fn rfind(&self, needle: StringView<'_, C>) -> Option<usize> {
        self.view().rfind(needle)
    }

    /// Returns the index of the first unit at or after `pos` that is a
    /// member of `set`.
    #[inline]
    pub fn find_first_of(&self, set: StringView<'_, C>, pos: usize) -> Option<usize> {
        self.view().find_first_of(set, pos)
    }

    /// Returns the index of the last unit at or before `pos` that is a
    /// member of `set`.
    #[inline]
    pub fn find_last_of(&self, set: StringView<'_, C>, pos: usize) -> Option<usize> {
        self.view().find_last_of(set, pos)
    }

    /// Returns the index of the first unit at or after `pos` that is not a
    /// member of `set`.
    #[inline]
    pub fn find_first_not_of(&self, set: StringView<'_, C>, pos: usize) -> Option<usize> {
        self.view().find_first_not_of(set, pos)
    }

    /// Returns the index of the last unit at or before `pos` that is not a
    /// member of `set`.
    #[inline]
    pub fn find_last_not_of(&self, set: StringView<'_, C>, pos: usize) -> Option<usize> {
        self.view().find_last_not_of(set, pos)
    }

    /// Returns `true` if the string starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: StringView<'_, C>) -> bool {
        self.view().starts_with(prefix)
    }

    /// Returns `true` if the string ends with `suffix`.
    #[inline]
    pub fn ends_with(&self, suffix: StringView<'_, C>) -> bool {
        self.view().ends_with(suffix)
    }

    /// Returns `true` if the string contains `needle` as a subsequence.
    #[inline]
    pub fn contains(&self, needle: StringView<'_, C>) -> bool {
        self.view().contains(needle)
    }

    /// Three-way lexicographic comparison against a view.
    #[inline]
    pub fn compare(&self, other: StringView<'_, C>) -> Ordering {
        self.view().compare(other)
    }

    /// Returns the deterministic content hash; see
    /// [`StringView::content_hash`].
    #[inline]
    pub fn content_hash(&self) -> u64 {
        self.view().content_hash()
    }
}

impl<C: Unit, const N: usize> Default for BasicString<C, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Unit, const N: usize> From<StringView<'_, C>> for BasicString<C, N> {
    #[inline]
    fn from(view: StringView<'_, C>) -> Self {
        Self::from_slice(view.as_slice())
    }
}

impl<C: Unit, const N: usize> From<&[C]> for BasicString<C, N> {
    #[inline]
    fn from(units: &[C]) -> Self {
        Self::from_slice(units)
    }
}

impl<const N: usize> From<&str> for BasicString<u8, N> {
    #[inline]
    fn from(s: &str) -> Self {
        Self::from_slice(s.as_bytes())
    }
}

impl<C: Unit, const N: usize> FromIterator<C> for BasicString<C, N> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

impl<C: Unit, const N: usize> Extend<C> for BasicString<C, N> {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (low, _) = iter.size_hint();
        self.reserve(low);
        for unit in iter {
            self.push(unit);
        }
    }
}

impl<C: Unit, const N: usize> Index<usize> for BasicString<C, N> {
    type Output = C;

    /// Unchecked positional access; panics when `index >= len()`. Use
    /// [`BasicString::at`] for a recoverable error.
    #[inline]
    fn index(&self, index: usize) -> &C {
        &self.as_slice()[index]
    }
}

impl<'a, C: Unit, const N: usize> IntoIterator for &'a BasicString<C, N> {
    type Item = &'a C;
    type IntoIter = slice::Iter<'a, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

// --- Equality and ordering ---

impl<C: Unit, const N: usize> PartialEq for BasicString<C, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<C: Unit, const N: usize> Eq for BasicString<C, N> {}

impl<C: Unit, const N: usize> PartialOrd for BasicString<C, N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Unit, const N: usize> Ord for BasicString<C, N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<C: Unit, const N: usize> PartialEq<StringView<'_, C>> for BasicString<C, N> {
    #[inline]
    fn eq(&self, other: &StringView<'_, C>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<C: Unit, const N: usize> PartialEq<BasicString<C, N>> for StringView<'_, C> {
    #[inline]
    fn eq(&self, other: &BasicString<C, N>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<C: Unit, const N: usize> PartialEq<&[C]> for BasicString<C, N> {
    #[inline]
    fn eq(&self, other: &&[C]) -> bool {
        self.as_slice() == *other
    }
}

impl<const N: usize> PartialEq<&str> for BasicString<u8, N> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl<C: Unit, const N: usize> std::hash::Hash for BasicString<C, N> {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

// --- Concatenation ---

impl<C: Unit, const N: usize> Add<StringView<'_, C>> for &BasicString<C, N> {
    type Output = BasicString<C, N>;

    /// Builds a new string holding both operands; neither operand is
    /// mutated.
    fn add(self, rhs: StringView<'_, C>) -> BasicString<C, N> {
        let mut out = BasicString::with_capacity(self.len() + rhs.len());
        out.append(self.view());
        out.append(rhs);
        out
    }
}

impl<C: Unit, const N: usize> Add<&BasicString<C, N>> for &BasicString<C, N> {
    type Output = BasicString<C, N>;

    #[inline]
    fn add(self, rhs: &BasicString<C, N>) -> BasicString<C, N> {
        self + rhs.view()
    }
}

impl<C: Unit, const N: usize> AddAssign<StringView<'_, C>> for BasicString<C, N> {
    #[inline]
    fn add_assign(&mut self, rhs: StringView<'_, C>) {
        self.append(rhs);
    }
}

impl<C: Unit, const N: usize> AddAssign<&BasicString<C, N>> for BasicString<C, N> {
    #[inline]
    fn add_assign(&mut self, rhs: &BasicString<C, N>) {
        self.append_slice(rhs.as_slice());
    }
}

impl<C: Unit, const N: usize> fmt::Debug for BasicString<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view(), f)
    }
}

impl<const N: usize> fmt::Display for BasicString<u8, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A deliberately small inline buffer (capacity 7) keeps the SSO
    // boundary cheap to reach in tests.
    type Tiny = BasicString<u8, 8>;
    type String8 = BasicString<u8, 24>;

    fn v(s: &str) -> StringView<'_, u8> {
        StringView::new(s.as_bytes())
    }

    fn check_invariants<C: Unit, const N: usize>(s: &BasicString<C, N>) {
        assert_eq!(s.as_slice_with_nul()[s.len()], C::NUL);
        assert_eq!(s.as_slice_with_nul().len(), s.len() + 1);
        assert!(s.len() <= s.capacity());
        if s.is_inline() {
            assert!(s.len() <= BasicString::<C, N>::SSO_CAPACITY);
        }
        if s.len() > BasicString::<C, N>::SSO_CAPACITY {
            assert!(!s.is_inline());
        }
    }

    #[test]
    fn default_is_empty_inline() {
        let s = String8::default();
        assert_eq!(s.len(), 0);
        assert!(s.is_inline());
        assert_eq!(s.capacity(), String8::SSO_CAPACITY);
        check_invariants(&s);
    }

    #[test]
    fn short_literal_stays_inline() {
        let s = String8::from("Hello");
        assert_eq!(s.len(), 5);
        assert!(s.is_inline());
        assert_eq!(s.as_slice_with_nul(), b"Hello\0");
        check_invariants(&s);
    }

    #[test]
    fn long_content_goes_to_heap() {
        let long = "x".repeat(80);
        let s = String8::from(long.as_str());
        assert_eq!(s.len(), 80);
        assert!(!s.is_inline());
        check_invariants(&s);
    }

    #[test]
    fn filling_to_sso_capacity_is_the_boundary() {
        let mut s = Tiny::new();
        for _ in 0..Tiny::SSO_CAPACITY {
            s.push(b'a');
            assert!(s.is_inline());
            check_invariants(&s);
        }
        assert_eq!(s.len(), 7);
        // One more unit flips to heap mode.
        s.push(b'b');
        assert!(!s.is_inline());
        assert_eq!(s.len(), 8);
        check_invariants(&s);
    }

    #[test]
    fn growth_is_geometric() {
        let mut s = Tiny::new();
        let mut reallocations = 0;
        let mut last_cap = s.capacity();
        for _ in 0..1024 {
            s.push(b'x');
            if s.capacity() != last_cap {
                reallocations += 1;
                // Factor of at least 1.5 between successive capacities.
                assert!(s.capacity() as f64 >= last_cap as f64 * 1.5);
                last_cap = s.capacity();
            }
        }
        assert!(reallocations <= 12, "too many reallocations: {reallocations}");
        check_invariants(&s);
    }

    #[test]
    fn move_steals_the_heap_pointer() {
        let s = Tiny::from("a long heap string");
        assert!(!s.is_inline());
        let ptr = s.as_slice().as_ptr();
        let s2 = s;
        assert_eq!(s2.as_slice().as_ptr(), ptr);
    }

    #[test]
    fn take_leaves_an_empty_inline_string() {
        let mut s = Tiny::from("a long heap string");
        let taken = std::mem::take(&mut s);
        assert_eq!(taken.len(), 18);
        assert!(s.is_empty());
        assert!(s.is_inline());
        check_invariants(&s);
    }

    #[test]
    fn assign_replaces_contents_in_both_modes() {
        let mut s = Tiny::from("abc");
        s.assign(v("yz"));
        assert_eq!(s, "yz");
        assert!(s.is_inline());

        s.assign(v("something much longer than seven"));
        assert!(!s.is_inline());
        // Shrinking assignments keep heap mode; no automatic demotion.
        s.assign(v("tiny"));
        assert_eq!(s, "tiny");
        assert!(!s.is_inline());
        check_invariants(&s);
    }

    #[test]
    fn append_crossing_the_boundary() {
        let mut s = Tiny::from("abcd");
        s.append(v("efgh"));
        assert_eq!(s, "abcdefgh");
        assert!(!s.is_inline());
        check_invariants(&s);
    }

    #[test]
    fn self_append_doubles_content() {
        let mut s = Tiny::from("abc");
        s.append_from_within(0..s.len()).unwrap();
        assert_eq!(s.len(), 6);
        assert_eq!(s, "abcabc");
        check_invariants(&s);

        // Again, now forcing a promotion mid-append.
        s.append_from_within(0..s.len()).unwrap();
        assert_eq!(s, "abcabcabcabc");
        assert!(!s.is_inline());
        check_invariants(&s);
    }

    #[test]
    fn self_append_partial_range() {
        let mut s = String8::from("Hello World");
        s.append_from_within(5..11).unwrap();
        assert_eq!(s, "Hello World World");
        assert_eq!(
            s.append_from_within(0..100),
            Err(TextError::OutOfRange { index: 100, len: 17 })
        );
    }

    #[test]
    fn insert_basic() {
        let mut s = String8::from("AC");
        s.insert(1, v("B")).unwrap();
        assert_eq!(s, "ABC");
        s.insert(0, v(">>")).unwrap();
        s.insert(s.len(), v("<<")).unwrap();
        assert_eq!(s, ">>ABC<<");
        check_invariants(&s);
    }

    #[test]
    fn insert_out_of_range_is_an_error() {
        let mut s = String8::from("abc");
        assert_eq!(
            s.insert(4, v("x")),
            Err(TextError::OutOfRange { index: 4, len: 3 })
        );
        assert_eq!(s, "abc");
    }

    #[test]
    fn insert_growing_past_the_boundary() {
        let mut s = Tiny::from("abcdef");
        s.insert(3, v("01234")).unwrap();
        assert_eq!(s, "abc01234def");
        assert!(!s.is_inline());
        check_invariants(&s);
    }

    #[test]
    fn insert_from_within_reads_the_pre_splice_content() {
        let mut s = String8::from("abcdef");
        s.insert_from_within(1, 3..6).unwrap();
        assert_eq!(s, "adefbcdef");
        check_invariants(&s);
    }

    #[test]
    fn erase_clamps_count_but_not_index() {
        let mut s = String8::from("Hello World");
        s.erase(5, 100).unwrap();
        assert_eq!(s, "Hello");
        assert_eq!(
            s.erase(6, 1),
            Err(TextError::OutOfRange { index: 6, len: 5 })
        );
        s.erase(0, 0).unwrap();
        assert_eq!(s, "Hello");
        s.erase(1, 3).unwrap();
        assert_eq!(s, "Ho");
        check_invariants(&s);
    }

    #[test]
    fn append_then_erase_restores_original() {
        let original = String8::from("stable");
        let mut s = original.clone();
        let old_len = s.len();
        s.append(v("garnish"));
        s.erase(old_len, 7).unwrap();
        assert_eq!(s, original);
        check_invariants(&s);
    }

    #[test]
    fn replace_shorter_longer_and_equal() {
        let mut s = String8::from("Hello World");
        s.replace(0, 5, v("Hi")).unwrap();
        assert_eq!(s, "Hi World");

        let mut s = String8::from("Hello World");
        s.replace(6, 5, v("Engine")).unwrap();
        assert_eq!(s, "Hello Engine");

        // Equal length takes the in-place path.
        let mut s = String8::from("Hello World");
        s.replace(0, 5, v("Howdy")).unwrap();
        assert_eq!(s, "Howdy World");

        // Count clamps past the end; position is strict.
        let mut s = String8::from("abc");
        s.replace(1, 100, v("Z")).unwrap();
        assert_eq!(s, "aZ");
        assert_eq!(
            s.replace(3, 1, v("x")),
            Err(TextError::OutOfRange { index: 3, len: 2 })
        );
        check_invariants(&s);
    }

    #[test]
    fn replace_growing_past_the_boundary() {
        let mut s = Tiny::from("abcdefg");
        assert!(s.is_inline());
        s.replace(3, 1, v("0123456789")).unwrap();
        assert_eq!(s, "abc0123456789efg");
        assert!(!s.is_inline());
        check_invariants(&s);
    }

    #[test]
    fn resize_grows_with_fill_and_shrinks() {
        let mut s = Tiny::from("ab");
        s.resize(5, b'.');
        assert_eq!(s, "ab...");
        assert!(s.is_inline());

        s.resize(12, b'-');
        assert_eq!(s, "ab...-------");
        assert!(!s.is_inline());

        s.resize(2, b'x');
        assert_eq!(s, "ab");
        // Shrinking never demotes.
        assert!(!s.is_inline());

        s.resize(2, b'x');
        assert_eq!(s, "ab");

        // The zero unit is a legal fill.
        let mut z = Tiny::new();
        z.resize(3, 0);
        assert_eq!(z.len(), 3);
        assert_eq!(z.as_slice(), &[0, 0, 0]);
        check_invariants(&z);
    }

    #[test]
    fn push_pop() {
        let mut s = String8::new();
        s.push(b'a');
        s.push(b'b');
        assert_eq!(s.pop(), Some(b'b'));
        assert_eq!(s.pop(), Some(b'a'));
        assert_eq!(s.pop(), None);
        check_invariants(&s);
    }

    #[test]
    fn clear_keeps_mode() {
        let mut s = Tiny::from("large enough for the heap");
        s.clear();
        assert!(s.is_empty());
        assert!(!s.is_inline());
        check_invariants(&s);
    }

    #[test]
    fn shrink_to_fit_demotes_when_content_fits() {
        let mut s = Tiny::from("large enough for the heap");
        s.truncate(4);
        assert!(!s.is_inline());
        s.shrink_to_fit();
        assert!(s.is_inline());
        assert_eq!(s, "larg");
        check_invariants(&s);

        // Inline shrink is a no-op.
        s.shrink_to_fit();
        assert!(s.is_inline());
    }

    #[test]
    fn shrink_to_fit_exact_when_still_heap() {
        let mut s = Tiny::with_capacity(100);
        s.assign(v("0123456789"));
        assert!(s.capacity() >= 100);
        s.shrink_to_fit();
        assert!(!s.is_inline());
        assert_eq!(s.capacity(), 10);
        check_invariants(&s);
    }

    #[test]
    fn shrink_reserve_round_trip_preserves_equality() {
        for n in [0usize, 3, 30, 300] {
            let mut s = Tiny::from("round trip content");
            s.shrink_to_fit();
            let mut s2 = s.clone();
            s2.reserve(n);
            s2.shrink_to_fit();
            assert_eq!(s2, s);
        }
    }

    #[test]
    fn view_round_trip() {
        let view = v("round trip");
        let s: String8 = view.into();
        assert_eq!(s.view(), view);
        assert_eq!(s, view);
    }

    #[test]
    fn substr_agrees_with_view_substr() {
        let s = String8::from("Hello World");
        for pos in 0..=12 {
            for count in [0, 1, 5, 100] {
                assert_eq!(s.substr(pos, count), s.view().substr(pos, count));
            }
        }
    }

    #[test]
    fn search_delegation() {
        let s = String8::from("Hello World");
        assert_eq!(s.find(v("o")), Some(4));
        assert_eq!(s.find_from(v("o"), 5), Some(7));
        assert_eq!(s.rfind(v("o")), Some(7));
        assert_eq!(s.find(v("")), Some(0));
        assert_eq!(String8::new().find(v("x")), None);
        assert_eq!(s.find_first_of(v("lo"), 0), Some(2));
        assert_eq!(s.find_first_not_of(v("Helo"), 0), Some(5));
        assert_eq!(s.find_last_of(v("l"), usize::MAX), Some(9));
        assert_eq!(s.find_last_not_of(v("dl"), usize::MAX), Some(8));
        assert!(s.starts_with(v("Hell")));
        assert!(s.ends_with(v("rld")));
        assert!(s.contains(v("o W")));
        assert_eq!(s.compare(v("Hello World")), Ordering::Equal);
    }

    #[test]
    fn equality_across_types() {
        let s = String8::from("abc");
        assert_eq!(s, v("abc"));
        assert_eq!(v("abc"), s);
        assert_eq!(s, b"abc".as_slice());
        assert_eq!(s, "abc");
        assert!(String8::from("ab") < String8::from("abc"));
    }

    #[test]
    fn concatenation_does_not_mutate_operands() {
        let a = String8::from("Hello ");
        let b = String8::from("World");
        let c = &a + &b;
        assert_eq!(c, "Hello World");
        assert_eq!(a, "Hello ");
        assert_eq!(b, "World");

        let mut d = a.clone();
        d += b.view();
        assert_eq!(d, "Hello World");
    }

    #[test]
    fn hash_matches_view_hash() {
        let s = String8::from("hash me");
        assert_eq!(s.content_hash(), s.view().content_hash());
        assert_ne!(String8::new().content_hash(), 0);
    }

    #[test]
    fn from_elem_and_iterators() {
        let s = Tiny::from_elem(b'=', 10);
        assert_eq!(s.len(), 10);
        assert!(!s.is_inline());
        assert!(s.iter().all(|&u| u == b'='));

        let collected: Tiny = b"xyz".iter().copied().collect();
        assert_eq!(collected, "xyz");
        check_invariants(&collected);
    }

    #[test]
    fn wide_instantiations_share_the_logic() {
        let mut s16: BasicString<u16, 12> = BasicString::new();
        for u in [0x48u16, 0x69, 0x21] {
            s16.push(u);
        }
        assert_eq!(s16.len(), 3);
        assert!(s16.is_inline());
        s16.resize(20, 0x2D);
        assert!(!s16.is_inline());
        check_invariants(&s16);

        let mut s32: BasicString<u32, 6> = BasicString::from_slice(&[0x1F600, 0x1F601]);
        assert!(s32.is_inline());
        s32.append_from_within(0..2).unwrap();
        assert_eq!(s32.as_slice(), &[0x1F600, 0x1F601, 0x1F600, 0x1F601]);
        assert_eq!(s32.view().find_unit(0x1F601), Some(1));
        check_invariants(&s32);
    }

    #[test]
    fn at_is_checked() {
        let s = String8::from("ab");
        assert_eq!(s.at(1), Ok(b'b'));
        assert_eq!(s.at(2), Err(TextError::OutOfRange { index: 2, len: 2 }));
        assert_eq!(s[0], b'a');
    }

    #[test]
    fn debug_and_display() {
        let s = String8::from("engine");
        assert_eq!(format!("{s}"), "engine");
        assert_eq!(format!("{s:?}"), "\"engine\"");
    }
}
