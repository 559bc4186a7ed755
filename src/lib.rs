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

//! psxhw: hardware-accelerated rendering backend for a PSX GPU emulator
//!
//! This crate implements the vertex stage of a hardware-accelerated
//! PlayStation GPU renderer. Draw commands decoded by an external GP0
//! command decoder arrive as [`gpu::DrawVertex`] records in VRAM pixel
//! coordinates; this crate maps each of them to a normalized-device-space
//! position plus a set of per-fragment attributes carrying explicit
//! interpolation qualifiers, ready for a wgpu render pipeline.
//!
//! # Architecture
//!
//! - [`gpu`]: Boundary types shared with the command decoder (vertex
//!   positions, colors, texture page/CLUT locations, blend modes)
//! - [`renderer`]: The vertex attribute transform and the wgpu pipeline
//!   that carries its flat/smooth interpolation contract
//!
//! # Coordinate System
//!
//! PSX VRAM is a 1024×512 pixel framebuffer with the origin at the
//! top-left. The renderer maps VRAM pixel coordinates to normalized device
//! coordinates so that the render target can be an exact 1024×512 image of
//! VRAM: pixel (0, 0) lands at NDC (-1, -1) and pixel (1024, 512) at
//! (+1, +1), with no aspect correction.
//!
//! # Example
//!
//! ```
//! use psxhw::gpu::{Color, DrawVertex, Position};
//! use psxhw::renderer::transform;
//!
//! let vertex = DrawVertex::shaded(
//!     Position { x: 512, y: 256 },
//!     Color { r: 255, g: 0, b: 0 },
//! );
//!
//! // Drawing offset (0, 0): the VRAM center maps to the NDC origin.
//! let out = transform(&vertex, (0, 0));
//! assert_eq!(out.clip_position, [0.0, 0.0, 0.0, 1.0]);
//! ```
//!
//! # Error Handling
//!
//! The vertex transform itself is a pure, infallible function. The only
//! fallible surface is wgpu pipeline construction, which returns
//! [`renderer::RendererError`].

pub mod gpu;
pub mod renderer;

// Re-export commonly used types
pub use gpu::DrawVertex;
pub use renderer::{transform, DrawPipeline, RendererError, TransformedVertex};
