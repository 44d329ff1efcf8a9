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

//! Defines the graphics device contract implemented by backends.

use crate::rhi::error::RhiError;
use crate::rhi::shader::{ShaderModuleDescriptor, ShaderModuleId};
use crate::text::{String8, StringView8};
use std::fmt::Debug;

/// An opaque handle representing a GPU buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub usize);

/// Describes a GPU buffer to be created by the [`GraphicsDevice`].
#[derive(Debug, Clone)]
pub struct BufferDescriptor {
    /// A human-readable label for diagnostics.
    pub label: String8,
    /// The size of the buffer in bytes.
    pub size: u64,
}

/// The contract every graphics backend implements.
///
/// All methods are declarations of intent only; `vesper-core` ships no
/// backend. Implementations live in the backend crates and are registered
/// with the runtime.
pub trait GraphicsDevice: Send + Sync + Debug + 'static {
    /// Creates a shader module from the provided descriptor.
    ///
    /// # Errors
    /// Returns [`RhiError`] when compilation fails or the entry point is
    /// invalid.
    fn create_shader_module(
        &self,
        descriptor: &ShaderModuleDescriptor,
    ) -> Result<ShaderModuleId, RhiError>;

    /// Destroys the shader module associated with the given ID.
    ///
    /// # Errors
    /// Returns [`RhiError::ShaderNotFound`] when the ID is stale.
    fn destroy_shader_module(&self, id: ShaderModuleId) -> Result<(), RhiError>;

    /// Looks up a previously created shader module by its label.
    fn find_shader_module(&self, label: StringView8<'_>) -> Option<ShaderModuleId>;

    /// Creates a new GPU buffer.
    ///
    /// # Errors
    /// Returns [`RhiError::ResourceCreationFailed`] when the backend rejects
    /// the descriptor.
    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<BufferId, RhiError>;

    /// Destroys a GPU buffer.
    ///
    /// # Errors
    /// Returns [`RhiError`] when the ID is stale.
    fn destroy_buffer(&self, id: BufferId) -> Result<(), RhiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal in-memory device, enough to exercise the contract and the
    // label-based lookup path.
    #[derive(Debug, Default)]
    struct NullDevice {
        shaders: std::sync::Mutex<Vec<String8>>,
    }

    impl GraphicsDevice for NullDevice {
        fn create_shader_module(
            &self,
            descriptor: &ShaderModuleDescriptor,
        ) -> Result<ShaderModuleId, RhiError> {
            if descriptor.entry_point.is_empty() {
                return Err(RhiError::InvalidEntryPoint {
                    id: ShaderModuleId(0),
                    entry_point: descriptor.entry_point.clone(),
                });
            }
            let mut shaders = self.shaders.lock().unwrap();
            shaders.push(descriptor.label.clone());
            Ok(ShaderModuleId(shaders.len() - 1))
        }

        fn destroy_shader_module(&self, id: ShaderModuleId) -> Result<(), RhiError> {
            let shaders = self.shaders.lock().unwrap();
            if id.0 < shaders.len() {
                Ok(())
            } else {
                Err(RhiError::ShaderNotFound { id })
            }
        }

        fn find_shader_module(&self, label: StringView8<'_>) -> Option<ShaderModuleId> {
            let shaders = self.shaders.lock().unwrap();
            shaders
                .iter()
                .position(|stored| stored.view() == label)
                .map(ShaderModuleId)
        }

        fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<BufferId, RhiError> {
            if descriptor.size == 0 {
                return Err(RhiError::ResourceCreationFailed(String8::from(
                    "zero-sized buffer",
                )));
            }
            Ok(BufferId(0))
        }

        fn destroy_buffer(&self, _id: BufferId) -> Result<(), RhiError> {
            Ok(())
        }
    }

    #[test]
    fn shader_lifecycle_through_the_contract() {
        use crate::rhi::shader::ShaderStage;

        let device = NullDevice::default();
        let descriptor = ShaderModuleDescriptor {
            label: String8::from("forward_opaque"),
            source: String8::from("fn vs_main() {}"),
            stage: ShaderStage::Vertex,
            entry_point: String8::from("vs_main"),
        };
        let id = device.create_shader_module(&descriptor).unwrap();
        assert_eq!(device.find_shader_module("forward_opaque".into()), Some(id));
        assert_eq!(device.find_shader_module("missing".into()), None);
        device.destroy_shader_module(id).unwrap();
    }

    #[test]
    fn zero_sized_buffer_is_rejected() {
        let device = NullDevice::default();
        let descriptor = BufferDescriptor {
            label: String8::from("staging"),
            size: 0,
        };
        assert!(device.create_buffer(&descriptor).is_err());
    }
}
