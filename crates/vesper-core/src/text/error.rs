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

//! Defines the error type for the text containers.

use std::fmt;

/// An error produced by a text container operation.
///
/// Position arguments (`at`, `insert`, `erase`, `replace`) are strict and
/// report [`TextError::OutOfRange`] when they fall outside the valid range.
/// Count arguments are permissive and clamp instead; a failed search is not
/// an error (the search family returns `Option`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// An index or position argument was outside the valid range.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the container at the time of the access.
        len: usize,
    },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl std::error::Error for TextError {}
