// SPDX-License-Identifier: Apache-2.0
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

//! Renderer error types
//!
//! The vertex transform itself cannot fail; the only fallible operations
//! in this crate are wgpu adapter and device acquisition.

use thiserror::Error;

/// Errors raised while setting up the rendering backend
#[derive(Debug, Error)]
pub enum RendererError {
    /// No suitable GPU adapter was found
    #[error("failed to find a suitable GPU adapter: {0}")]
    AdapterNotFound(String),

    /// Device creation failed
    #[error("failed to create device: {0}")]
    DeviceCreation(String),
}
