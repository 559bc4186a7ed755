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

//! Draw vertex record
//!
//! One [`DrawVertex`] is produced by the command decoder for every vertex
//! of a draw command. It carries the vertex-granular attributes (position,
//! shading color, texture coordinate) together with a copy of the
//! primitive-granular state (texture mapping, dither enable) so that the
//! renderer can treat every vertex as self-contained.

use super::primitives::{Color, Position, TexCoord, TextureMapping};

/// One decoded draw-command vertex
///
/// The record is immutable for the duration of the vertex transform. The
/// decoder is responsible for range-checking; this crate forwards the
/// fields mechanically and never validates them.
///
/// Primitive-granular fields (`texture`, `dither`) must be identical
/// across all vertices of one primitive; the renderer emits them with flat
/// interpolation, so the rasterizer picks the provoking vertex's copy.
///
/// # Examples
///
/// ```
/// use psxhw::gpu::{Color, DrawVertex, Position};
///
/// let v = DrawVertex::shaded(
///     Position { x: 100, y: 50 },
///     Color { r: 255, g: 0, b: 0 },
/// );
/// assert!(!v.dither);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawVertex {
    /// Vertex position in VRAM coordinates (before the drawing offset)
    pub position: Position,
    /// Per-vertex Gouraud shading color
    pub shading_color: Color,
    /// Per-vertex texel coordinate within the texture page
    pub texture_coord: TexCoord,
    /// Primitive-constant texture mapping state
    pub texture: TextureMapping,
    /// Per-pixel dithering enable (primitive-constant)
    pub dither: bool,
}

impl DrawVertex {
    /// Create a vertex for an untextured (flat or Gouraud shaded) primitive
    ///
    /// The texture mapping is [`TextureMapping::none`] and dithering is
    /// disabled; use [`DrawVertex::with_dither`] for shaded primitives
    /// with dithering enabled in the drawing mode.
    pub fn shaded(position: Position, shading_color: Color) -> Self {
        Self {
            position,
            shading_color,
            texture_coord: TexCoord { u: 0, v: 0 },
            texture: TextureMapping::none(),
            dither: false,
        }
    }

    /// Create a vertex for a textured primitive
    ///
    /// `shading_color` is still carried: in
    /// [`TextureBlendMode::ModulatedTexture`](super::TextureBlendMode)
    /// mode the fragment stage modulates the texel with it.
    pub fn textured(
        position: Position,
        shading_color: Color,
        texture_coord: TexCoord,
        texture: TextureMapping,
    ) -> Self {
        Self {
            position,
            shading_color,
            texture_coord,
            texture,
            dither: false,
        }
    }

    /// Set the dither enable flag
    pub fn with_dither(mut self, dither: bool) -> Self {
        self.dither = dither;
        self
    }
}
