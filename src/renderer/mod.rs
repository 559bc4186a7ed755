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

//! Rendering subsystem
//!
//! This module hosts the vertex attribute transform and the wgpu plumbing
//! around it:
//!
//! - [`transform`]: maps one [`DrawVertex`](crate::gpu::DrawVertex) to a
//!   [`TransformedVertex`] in normalized device coordinates, with every
//!   per-fragment attribute tagged flat or smooth
//! - [`DrawPipeline`]: the render pipeline whose vertex layout and WGSL
//!   interface carry that flat/smooth contract to the rasterizer
//! - [`RenderContext`]: headless wgpu device/queue setup for offscreen
//!   rendering into a VRAM-shaped target

pub mod context;
pub mod draw_pipeline;
pub mod error;
pub mod transform;

#[cfg(test)]
mod tests;

pub use context::RenderContext;
pub use draw_pipeline::DrawPipeline;
pub use error::RendererError;
pub use transform::{transform, Interpolation, TransformedVertex, ATTRIBUTE_INTERPOLATION};
