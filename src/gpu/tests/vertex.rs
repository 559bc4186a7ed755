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

//! Unit tests for the draw vertex record

use crate::gpu::{
    Clut, Color, DrawVertex, Position, TexCoord, TextureBlendMode, TextureDepth, TextureMapping,
    TexturePage,
};

#[test]
fn test_shaded_vertex_has_no_texture() {
    let v = DrawVertex::shaded(Position { x: 10, y: 20 }, Color { r: 1, g: 2, b: 3 });

    assert_eq!(v.texture.blend_mode, TextureBlendMode::NoTexture);
    assert_eq!(v.texture.page, TexturePage { x: 0, y: 0 });
    assert_eq!(v.texture.clut, Clut { x: 0, y: 0 });
    assert_eq!(v.texture_coord, TexCoord { u: 0, v: 0 });
    assert!(!v.dither);
}

#[test]
fn test_textured_vertex_carries_mapping() {
    let mapping = TextureMapping {
        page: TexturePage::from_attribute(0x11),
        clut: Clut::from_attribute(0x4832),
        blend_mode: TextureBlendMode::ModulatedTexture,
        depth: TextureDepth::T4Bit,
    };
    let v = DrawVertex::textured(
        Position { x: 0, y: 0 },
        Color {
            r: 128,
            g: 128,
            b: 128,
        },
        TexCoord { u: 32, v: 64 },
        mapping,
    );

    assert_eq!(v.texture, mapping);
    assert_eq!(v.texture_coord, TexCoord { u: 32, v: 64 });
}

#[test]
fn test_with_dither() {
    let v = DrawVertex::shaded(Position { x: 0, y: 0 }, Color { r: 0, g: 0, b: 0 })
        .with_dither(true);
    assert!(v.dither);
}
