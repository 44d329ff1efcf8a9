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

//! Provides the rendering hardware interface contracts.
//!
//! This module declares the types and traits graphics backends implement;
//! no backend ships with `vesper-core`. Descriptors carry their labels and
//! shader source as owned [`crate::text::String8`] values, and lookups take
//! zero-copy [`crate::text::StringView8`] parameters.

mod device;
mod error;
mod shader;

pub use device::{BufferDescriptor, BufferId, GraphicsDevice};
pub use error::RhiError;
pub use shader::{ShaderModuleDescriptor, ShaderModuleId, ShaderStage};
