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

//! Defines the error types for the rendering hardware interface.

use crate::rhi::shader::ShaderModuleId;
use crate::text::String8;
use std::fmt;

/// An error reported by a [`crate::rhi::GraphicsDevice`] implementation.
#[derive(Debug)]
pub enum RhiError {
    /// The shader source failed to compile into a backend-specific module.
    ShaderCompilationFailed {
        /// The label of the shader being compiled.
        label: String8,
        /// Detailed error messages from the shader compiler.
        details: String8,
    },
    /// The requested shader module could not be found.
    ShaderNotFound {
        /// The ID of the missing shader module.
        id: ShaderModuleId,
    },
    /// The specified entry point is not valid for the shader module.
    InvalidEntryPoint {
        /// The ID of the shader module.
        id: ShaderModuleId,
        /// The entry point name that was not found.
        entry_point: String8,
    },
    /// A resource could not be created by the backend.
    ResourceCreationFailed(String8),
    /// The graphics device was lost and needs to be reinitialized.
    DeviceLost,
}

impl fmt::Display for RhiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RhiError::ShaderCompilationFailed { label, details } => {
                write!(f, "Shader compilation failed for '{label}': {details}")
            }
            RhiError::ShaderNotFound { id } => {
                write!(f, "Shader module not found for ID: {id:?}")
            }
            RhiError::InvalidEntryPoint { id, entry_point } => {
                write!(f, "Invalid entry point '{entry_point}' for shader module {id:?}")
            }
            RhiError::ResourceCreationFailed(msg) => {
                write!(f, "Resource creation failed: {msg}")
            }
            RhiError::DeviceLost => {
                write!(f, "The graphics device was lost and needs to be reinitialized.")
            }
        }
    }
}

impl std::error::Error for RhiError {}
