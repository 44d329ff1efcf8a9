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

//! # Vesper Core
//!
//! Foundational crate for the Vesper engine: math primitives, owning and
//! non-owning text containers, hashing utilities, and the interface
//! contracts consumed by the graphics layer.

#![warn(missing_docs)]

pub mod hash;
pub mod math;
pub mod rhi;
pub mod text;

pub use text::{BasicString, String16, String32, String8, StringView, TextError, WideString};
