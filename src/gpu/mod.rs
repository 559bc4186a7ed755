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

//! GPU-side data model
//!
//! This module defines the boundary types shared with the external GP0
//! command decoder: vertex positions in VRAM coordinates, 24-bit shading
//! colors, texture page and CLUT locations, texture blend modes and color
//! depths, and the assembled per-vertex draw record ([`DrawVertex`]).
//!
//! # VRAM Layout
//!
//! The GPU addresses 1MB of VRAM as a 1024×512 pixel framebuffer where each
//! pixel is 16-bit (5-5-5 RGB). The same memory holds display buffers,
//! texture pages, and color lookup tables (CLUTs).
//!
//! # Coordinate System
//!
//! The coordinate system origin (0, 0) is at the top-left corner of VRAM:
//! - X-axis: 0 to 1023 (left to right)
//! - Y-axis: 0 to 511 (top to bottom)
//! - The drawing offset (GP1 state) is added to vertex positions before
//!   rasterization
//!
//! # References
//!
//! - [PSX-SPX: GPU](http://problemkaputt.de/psx-spx.htm#gpu)
//! - [PSX-SPX: GPU Rendering](http://problemkaputt.de/psx-spx.htm#gpurenderstatecommands)

// Module declarations
mod primitives;
mod vertex;

#[cfg(test)]
mod tests;

// Public re-exports
pub use primitives::*;
pub use vertex::*;

/// VRAM width in pixels
pub const VRAM_WIDTH: u32 = 1024;

/// VRAM height in pixels
pub const VRAM_HEIGHT: u32 = 512;

/// Drawing offset applied to every vertex position of a draw call
///
/// Set by GP1 command E5h, owned by the external GPU-state component and
/// injected into the renderer once per draw call. The components are signed
/// and added to vertex coordinates with 16-bit wrapping, matching hardware
/// truncation.
pub type DrawingOffset = (i16, i16);
