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

//! GPU primitive attribute definitions
//!
//! This module contains the per-vertex and per-primitive attribute types
//! that the command decoder resolves out of GP0 draw commands: positions,
//! colors, texture coordinates, texture page and CLUT locations, blend
//! modes and texture color depths.

/// A 24-bit RGB color used in GPU commands
///
/// PlayStation GPU commands use 24-bit RGB colors (8 bits per channel).
/// For Gouraud-shaded primitives one color is attached to each vertex and
/// interpolated across the primitive by the rasterizer.
///
/// # Examples
///
/// ```
/// use psxhw::gpu::Color;
///
/// let color = Color::from_u32(0x00FF8040);
/// assert_eq!(color.r, 0x40);
/// assert_eq!(color.g, 0x80);
/// assert_eq!(color.b, 0xFF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Create a Color from a 32-bit command word
    ///
    /// The color is encoded in the lower 24 bits:
    /// - Bits 0-7: Red
    /// - Bits 8-15: Green
    /// - Bits 16-23: Blue
    ///
    /// # Examples
    ///
    /// ```
    /// use psxhw::gpu::Color;
    ///
    /// let color = Color::from_u32(0xFF8040);
    /// assert_eq!(color.r, 0x40);
    /// assert_eq!(color.g, 0x80);
    /// assert_eq!(color.b, 0xFF);
    /// ```
    pub fn from_u32(value: u32) -> Self {
        Self {
            r: (value & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: ((value >> 16) & 0xFF) as u8,
        }
    }
}

/// A 2D vertex position in VRAM coordinates
///
/// Positions are signed 16-bit pairs as decoded from GP0 vertex words.
/// The nominal addressable range is 0..1024 horizontally and 0..512
/// vertically; coordinates outside that range are not rejected here (the
/// rasterizer's own clipping discards off-screen geometry).
///
/// # Examples
///
/// ```
/// use psxhw::gpu::Position;
///
/// let pos = Position::from_u32(0x00640032);
/// assert_eq!(pos.x, 50);
/// assert_eq!(pos.y, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// X coordinate (signed 16-bit)
    pub x: i16,
    /// Y coordinate (signed 16-bit)
    pub y: i16,
}

impl Position {
    /// Create a Position from a 32-bit command word
    ///
    /// Vertex words encode:
    /// - Bits 0-15: X coordinate (signed 16-bit)
    /// - Bits 16-31: Y coordinate (signed 16-bit)
    ///
    /// # Examples
    ///
    /// ```
    /// use psxhw::gpu::Position;
    ///
    /// let p = Position::from_u32(0xFFFF0064); // y = -1, x = 100
    /// assert_eq!(p.x, 100);
    /// assert_eq!(p.y, -1);
    /// ```
    pub fn from_u32(value: u32) -> Self {
        let x = (value & 0xFFFF) as i16;
        let y = ((value >> 16) & 0xFFFF) as i16;
        Self { x, y }
    }
}

/// Texture coordinate for textured primitives
///
/// Texel coordinates within the active texture page, in texel units.
/// Like the shading color they are attached per vertex and interpolated
/// across the primitive (affine, no perspective correction).
///
/// # Examples
///
/// ```
/// use psxhw::gpu::TexCoord;
///
/// let tc = TexCoord::from_u32(0x00804020);
/// assert_eq!(tc.u, 0x20);
/// assert_eq!(tc.v, 0x40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexCoord {
    /// U coordinate (horizontal, 0-255)
    pub u: u8,
    /// V coordinate (vertical, 0-255)
    pub v: u8,
}

impl TexCoord {
    /// Create a TexCoord from a 32-bit command word
    ///
    /// Texture coordinates occupy the lower 16 bits:
    /// - Bits 0-7: U coordinate
    /// - Bits 8-15: V coordinate
    pub fn from_u32(value: u32) -> Self {
        Self {
            u: (value & 0xFF) as u8,
            v: ((value >> 8) & 0xFF) as u8,
        }
    }
}

/// Texture page location in VRAM
///
/// Texture pages are anchored on a 64×256 pixel grid: the texpage
/// attribute addresses the page base as a multiple of 64 pixels
/// horizontally and 256 pixels vertically. The location is constant for
/// all vertices of a primitive.
///
/// # Examples
///
/// ```
/// use psxhw::gpu::TexturePage;
///
/// // Texpage attribute 0x11: X base 1 (64px), Y base 1 (256px)
/// let page = TexturePage::from_attribute(0x11);
/// assert_eq!(page.x, 64);
/// assert_eq!(page.y, 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexturePage {
    /// Page base X coordinate in VRAM pixels (multiple of 64)
    pub x: u16,
    /// Page base Y coordinate in VRAM pixels (0 or 256)
    pub y: u16,
}

impl TexturePage {
    /// Decode a texture page location from a texpage attribute
    ///
    /// The texpage attribute (bits 16-31 of the texpage word in textured
    /// draw commands) encodes the page base as:
    /// - Bits 0-3: X base in 64-pixel units
    /// - Bit 4: Y base in 256-pixel units
    ///
    /// Higher attribute bits (semi-transparency, color depth) are decoded
    /// separately and ignored here.
    pub fn from_attribute(attribute: u16) -> Self {
        Self {
            x: (attribute & 0xF) << 6,
            y: ((attribute >> 4) & 1) << 8,
        }
    }
}

/// CLUT (color lookup table) location in VRAM
///
/// For 4-bit and 8-bit textures the texture data holds palette indices
/// that are resolved against a CLUT stored elsewhere in VRAM. The CLUT
/// location is constant for all vertices of a primitive.
///
/// # Examples
///
/// ```
/// use psxhw::gpu::Clut;
///
/// // CLUT attribute: X in 16-pixel units (bits 0-5), Y in lines (bits 6-14)
/// let clut = Clut::from_attribute(0x4832); // x = 0x32 * 16, y = 0x120
/// assert_eq!(clut.x, 800);
/// assert_eq!(clut.y, 288);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clut {
    /// CLUT X position in VRAM pixels (multiple of 16)
    pub x: u16,
    /// CLUT Y position in VRAM lines (0-511)
    pub y: u16,
}

impl Clut {
    /// Decode a CLUT location from a clut attribute
    ///
    /// The clut attribute (bits 16-31 of the first texcoord word in
    /// textured draw commands) encodes:
    /// - Bits 0-5: X position in 16-pixel units
    /// - Bits 6-14: Y position in lines
    pub fn from_attribute(attribute: u16) -> Self {
        Self {
            x: (attribute & 0x3F) << 4,
            y: (attribute >> 6) & 0x1FF,
        }
    }
}

/// Texture blend modes
///
/// Selects how the fragment stage combines the sampled texel with the
/// interpolated shading color. Constant for all vertices of a primitive.
///
/// - **NoTexture**: the primitive is untextured; only the shading color
///   is used (flat or Gouraud)
/// - **RawTexture**: the texel is drawn as-is
/// - **ModulatedTexture**: the texel is modulated by the shading color
///   (the hardware's "texture blending")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureBlendMode {
    /// Untextured primitive, shading color only
    NoTexture,
    /// Raw texture, texel drawn unmodified
    RawTexture,
    /// Texel modulated by the shading color
    ModulatedTexture,
}

impl TextureBlendMode {
    /// Blend mode index as forwarded to the fragment stage
    ///
    /// # Examples
    ///
    /// ```
    /// use psxhw::gpu::TextureBlendMode;
    ///
    /// assert_eq!(TextureBlendMode::NoTexture.index(), 0);
    /// assert_eq!(TextureBlendMode::RawTexture.index(), 1);
    /// assert_eq!(TextureBlendMode::ModulatedTexture.index(), 2);
    /// ```
    pub fn index(self) -> u32 {
        match self {
            TextureBlendMode::NoTexture => 0,
            TextureBlendMode::RawTexture => 1,
            TextureBlendMode::ModulatedTexture => 2,
        }
    }
}

/// Texture color depth modes
///
/// The PlayStation GPU supports three texture formats:
/// - 4-bit: 16 colors using a 16-color CLUT
/// - 8-bit: 256 colors using a 256-color CLUT
/// - 15-bit: direct color (no CLUT)
///
/// Each VRAM halfword holds 4, 2 or 1 texels respectively; the fragment
/// stage scales texel fetches by the corresponding depth shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureDepth {
    /// 4-bit indexed color (16 colors, uses CLUT)
    T4Bit,
    /// 8-bit indexed color (256 colors, uses CLUT)
    T8Bit,
    /// 15-bit direct color (no CLUT)
    T15Bit,
}

impl TextureDepth {
    /// Texel-per-halfword shift for this depth
    ///
    /// The fragment stage divides the U texture coordinate by
    /// `1 << depth_shift()` to find the VRAM halfword containing the
    /// texel: 4 texels per halfword in 4-bit mode, 2 in 8-bit mode, 1 in
    /// 15-bit mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use psxhw::gpu::TextureDepth;
    ///
    /// assert_eq!(TextureDepth::T4Bit.depth_shift(), 2);
    /// assert_eq!(TextureDepth::T8Bit.depth_shift(), 1);
    /// assert_eq!(TextureDepth::T15Bit.depth_shift(), 0);
    /// ```
    pub fn depth_shift(self) -> u32 {
        match self {
            TextureDepth::T4Bit => 2,
            TextureDepth::T8Bit => 1,
            TextureDepth::T15Bit => 0,
        }
    }
}

impl From<u8> for TextureDepth {
    /// Convert the texpage color-depth field to a TextureDepth
    ///
    /// # Mapping
    ///
    /// - 0 → 4-bit
    /// - 1 → 8-bit
    /// - 2 and 3 (reserved) → 15-bit
    fn from(value: u8) -> Self {
        match value {
            0 => TextureDepth::T4Bit,
            1 => TextureDepth::T8Bit,
            _ => TextureDepth::T15Bit,
        }
    }
}

/// Texture mapping state for one primitive
///
/// Bundles the primitive-constant texture attributes: page and CLUT
/// location, blend mode and color depth. Untextured primitives use
/// [`TextureMapping::none`], which keeps the fragment-stage interface
/// uniform (blend mode [`TextureBlendMode::NoTexture`], zeroed locations).
///
/// # Examples
///
/// ```
/// use psxhw::gpu::{TextureBlendMode, TextureMapping};
///
/// let mapping = TextureMapping::none();
/// assert_eq!(mapping.blend_mode, TextureBlendMode::NoTexture);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureMapping {
    /// Texture page location in VRAM
    pub page: TexturePage,
    /// CLUT location in VRAM (meaningful for 4-bit/8-bit depths)
    pub clut: Clut,
    /// Texel blend behavior
    pub blend_mode: TextureBlendMode,
    /// Texture color depth
    pub depth: TextureDepth,
}

impl TextureMapping {
    /// Texture mapping for an untextured primitive
    pub fn none() -> Self {
        Self {
            page: TexturePage { x: 0, y: 0 },
            clut: Clut { x: 0, y: 0 },
            blend_mode: TextureBlendMode::NoTexture,
            depth: TextureDepth::T15Bit,
        }
    }
}

#[cfg(test)]
mod color_tests {
    use super::*;

    #[test]
    fn test_color_from_u32() {
        let color = Color::from_u32(0x00FF8040);
        assert_eq!(color.r, 0x40);
        assert_eq!(color.g, 0x80);
        assert_eq!(color.b, 0xFF);

        // Command byte in bits 24-31 is ignored
        let color = Color::from_u32(0xFFFFFFFF);
        assert_eq!(color.r, 0xFF);
        assert_eq!(color.g, 0xFF);
        assert_eq!(color.b, 0xFF);

        let color = Color::from_u32(0x00000000);
        assert_eq!(color.r, 0);
        assert_eq!(color.g, 0);
        assert_eq!(color.b, 0);
    }
}

#[cfg(test)]
mod position_tests {
    use super::*;

    #[test]
    fn test_position_from_u32() {
        let p = Position::from_u32(0x00640032);
        assert_eq!(p.x, 50); // 0x0032
        assert_eq!(p.y, 100); // 0x0064

        let p = Position::from_u32(0x00000000);
        assert_eq!(p.x, 0);
        assert_eq!(p.y, 0);
    }

    #[test]
    fn test_position_negative_coordinates() {
        // Sign extension from the 16-bit halves
        let p = Position::from_u32(0xFFFFFFFF);
        assert_eq!(p.x, -1);
        assert_eq!(p.y, -1);

        let p = Position::from_u32(0xFFFF0064);
        assert_eq!(p.x, 100);
        assert_eq!(p.y, -1);

        // Per PSX-SPX the hardware range is -1024 to +1023
        let p = Position::from_u32(0xFC00FC00);
        assert_eq!(p.x, -1024);
        assert_eq!(p.y, -1024);
    }
}


#[cfg(test)]
mod texture_page_tests {
    use super::*;

    #[test]
    fn test_texture_page_from_attribute() {
        // X base in 64-pixel units
        let page = TexturePage::from_attribute(0x0);
        assert_eq!(page.x, 0);
        assert_eq!(page.y, 0);

        let page = TexturePage::from_attribute(0xF);
        assert_eq!(page.x, 960);
        assert_eq!(page.y, 0);

        // Bit 4 selects the lower VRAM half
        let page = TexturePage::from_attribute(0x10);
        assert_eq!(page.x, 0);
        assert_eq!(page.y, 256);
    }

    #[test]
    fn test_texture_page_ignores_high_attribute_bits() {
        // Semi-transparency / depth fields live above bit 4
        let page = TexturePage::from_attribute(0x1FF);
        assert_eq!(page.x, 960);
        assert_eq!(page.y, 256);
    }
}
