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

//! Defines the shader-related descriptors consumed by the graphics device.

use crate::text::{String8, StringView8};

/// The pipeline stage a shader module targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// The vertex stage.
    Vertex,
    /// The fragment stage.
    Fragment,
    /// The compute stage.
    Compute,
}

/// An opaque handle representing a compiled shader module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShaderModuleId(pub usize);

/// Describes a shader module to be created by the
/// [`crate::rhi::GraphicsDevice`].
///
/// The descriptor owns its text so it can outlive the call site that built
/// it (asset pipelines assemble these from loaded files).
#[derive(Debug, Clone)]
pub struct ShaderModuleDescriptor {
    /// A human-readable label for diagnostics.
    pub label: String8,
    /// The shader source text.
    pub source: String8,
    /// The stage the module targets.
    pub stage: ShaderStage,
    /// The entry point to invoke, e.g. `vs_main`.
    pub entry_point: String8,
}

impl ShaderModuleDescriptor {
    /// Borrows the label as a view.
    #[inline]
    pub fn label_view(&self) -> StringView8<'_> {
        self.label.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_module_id_creation_and_equality() {
        let id1 = ShaderModuleId(1);
        let id2 = ShaderModuleId(2);
        let id1_again = ShaderModuleId(1);

        assert_eq!(id1, id1_again);
        assert_ne!(id1, id2);
    }

    #[test]
    fn shader_module_descriptor_creation() {
        let descriptor = ShaderModuleDescriptor {
            label: String8::from("test_shader"),
            source: String8::from("fn main() {}"),
            stage: ShaderStage::Vertex,
            entry_point: String8::from("main"),
        };

        assert_eq!(descriptor.label, "test_shader");
        assert_eq!(descriptor.entry_point, "main");
        assert_eq!(descriptor.stage, ShaderStage::Vertex);
        assert!(descriptor.label_view().starts_with("test".into()));
    }
}
