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

//! Vertex attribute transform
//!
//! This is the core of the hardware renderer's vertex stage: a pure
//! function mapping one decoded draw vertex plus the current drawing
//! offset to a [`TransformedVertex`], the exact record the render pipeline
//! consumes per vertex.
//!
//! # Coordinate transform
//!
//! VRAM coordinates (origin top-left, 1024×512) are converted to
//! normalized device coordinates by an affine map using the fixed VRAM
//! half-extents: pixel x = 0 maps to NDC -1, x = 1024 to +1, and likewise
//! vertically through the 256-pixel half-height. The render target is
//! expected to be an exact 1024×512 image of VRAM, so no aspect
//! correction is applied. Depth is fixed at 0; the PSX GPU has no depth
//! buffer and z exists only for pipeline compatibility.
//!
//! # Interpolation qualifiers
//!
//! Which attributes interpolate is a hardware fact, not a configuration
//! choice. Shading color and texture coordinates are vertex-granular and
//! must interpolate (Gouraud shading, affine texture mapping); texture
//! page, CLUT, blend mode, depth shift and dither enable are
//! primitive-granular and must not, or texture addressing and blending
//! would be corrupted mid-primitive. The assignment is fixed in
//! [`ATTRIBUTE_INTERPOLATION`] and mirrored by the `@interpolate(flat)`
//! annotations in `shaders/draw.wgsl`.

use crate::gpu::{DrawVertex, DrawingOffset, VRAM_HEIGHT, VRAM_WIDTH};

/// VRAM half-width, the horizontal NDC scale divisor
///
/// Hardware constant: the transform targets the full fixed 1024×512 VRAM
/// extent, not a configurable output resolution.
pub const VRAM_HALF_WIDTH: f32 = VRAM_WIDTH as f32 / 2.0;

/// VRAM half-height, the vertical NDC scale divisor
pub const VRAM_HALF_HEIGHT: f32 = VRAM_HEIGHT as f32 / 2.0;

/// Interpolation qualifier for a per-fragment attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// Linearly interpolated across the primitive's area
    Smooth,
    /// Constant across the primitive (provoking vertex's value)
    Flat,
}

/// Interpolation qualifier of every per-fragment attribute, by name
///
/// Attribute-intrinsic and fixed by design: the tagging never varies per
/// draw call, per primitive type, or per configuration. Tests check the
/// WGSL interface against this table.
pub const ATTRIBUTE_INTERPOLATION: [(&str, Interpolation); 7] = [
    ("shading_color", Interpolation::Smooth),
    ("texture_coord", Interpolation::Smooth),
    ("texture_page", Interpolation::Flat),
    ("clut", Interpolation::Flat),
    ("texture_blend_mode", Interpolation::Flat),
    ("depth_shift", Interpolation::Flat),
    ("dither", Interpolation::Flat),
];

/// Output of the vertex attribute transform
///
/// Doubles as the vertex-buffer element for [`DrawPipeline`]
/// (`#[repr(C)]`, [`bytemuck::Pod`]): the clip-space position followed by
/// the seven per-fragment attributes in shader-location order. The
/// smooth attributes are already in the representation the fragment stage
/// expects (unit-range color, f32 texel coordinates); the flat attributes
/// are widened to u32 and otherwise untouched.
///
/// [`DrawPipeline`]: crate::renderer::DrawPipeline
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformedVertex {
    /// Position in normalized device coordinates (z = 0, w = 1)
    pub clip_position: [f32; 4],
    /// Gouraud shading color, unit range (smooth)
    pub shading_color: [f32; 3],
    /// Texel coordinate within the texture page (smooth)
    pub texture_coord: [f32; 2],
    /// Texture page location in VRAM pixels (flat)
    pub texture_page: [u32; 2],
    /// CLUT location in VRAM pixels (flat)
    pub clut: [u32; 2],
    /// Texture blend mode index (flat)
    pub texture_blend_mode: u32,
    /// Texel-per-halfword shift for the texture depth (flat)
    pub depth_shift: u32,
    /// Dither enable, 0 or 1 (flat)
    pub dither: u32,
}

impl TransformedVertex {
    /// Vertex attributes in shader-location order
    ///
    /// Locations 0-2 are the smooth inputs (position, color, texcoord),
    /// 3-7 the flat ones. Offsets follow the `#[repr(C)]` field layout.
    const ATTRIBUTES: [wgpu::VertexAttribute; 8] = wgpu::vertex_attr_array![
        0 => Float32x4,
        1 => Float32x3,
        2 => Float32x2,
        3 => Uint32x2,
        4 => Uint32x2,
        5 => Uint32,
        6 => Uint32,
        7 => Uint32,
    ];

    /// Vertex buffer layout matching this struct's memory layout
    ///
    /// # Examples
    ///
    /// ```
    /// use psxhw::renderer::TransformedVertex;
    ///
    /// let layout = TransformedVertex::desc();
    /// assert_eq!(
    ///     layout.array_stride,
    ///     std::mem::size_of::<TransformedVertex>() as u64,
    /// );
    /// ```
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TransformedVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Transform one draw vertex into clip space
///
/// Pure function of its two inputs, no failure modes: malformed upstream
/// data (out-of-range positions, degenerate geometry) passes through the
/// same affine formula and yields visually wrong but non-fatal output,
/// matching the permissiveness of the original hardware. Positions
/// landing outside VRAM produce clip coordinates outside [-1, 1] and are
/// left for the rasterizer's clipper.
///
/// # Arguments
///
/// * `vertex` - Decoded draw-command vertex in VRAM coordinates
/// * `draw_offset` - Current drawing offset (GP1 state), added to the
///   position with 16-bit wrapping before the NDC conversion
///
/// # Examples
///
/// ```
/// use psxhw::gpu::{Color, DrawVertex, Position};
/// use psxhw::renderer::transform;
///
/// let v = DrawVertex::shaded(
///     Position { x: 0, y: 0 },
///     Color { r: 255, g: 128, b: 0 },
/// );
/// let out = transform(&v, (0, 0));
///
/// // VRAM origin is the top-left NDC corner
/// assert_eq!(out.clip_position, [-1.0, -1.0, 0.0, 1.0]);
/// // Shading color is normalized to unit range
/// assert_eq!(out.shading_color[0], 1.0);
/// ```
pub fn transform(vertex: &DrawVertex, draw_offset: DrawingOffset) -> TransformedVertex {
    // Apply drawing offset
    let x = vertex.position.x.wrapping_add(draw_offset.0);
    let y = vertex.position.y.wrapping_add(draw_offset.1);

    // VRAM (0..1024, 0..512) to NDC (-1..1, -1..1)
    let x_ndc = f32::from(x) / VRAM_HALF_WIDTH - 1.0;
    let y_ndc = f32::from(y) / VRAM_HALF_HEIGHT - 1.0;

    let color = vertex.shading_color;

    TransformedVertex {
        clip_position: [x_ndc, y_ndc, 0.0, 1.0],
        shading_color: [
            f32::from(color.r) / 255.0,
            f32::from(color.g) / 255.0,
            f32::from(color.b) / 255.0,
        ],
        texture_coord: [
            f32::from(vertex.texture_coord.u),
            f32::from(vertex.texture_coord.v),
        ],
        texture_page: [
            u32::from(vertex.texture.page.x),
            u32::from(vertex.texture.page.y),
        ],
        clut: [
            u32::from(vertex.texture.clut.x),
            u32::from(vertex.texture.clut.y),
        ],
        texture_blend_mode: vertex.texture.blend_mode.index(),
        depth_shift: vertex.texture.depth.depth_shift(),
        dither: u32::from(vertex.dither),
    }
}
