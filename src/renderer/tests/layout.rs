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

//! Tests for the vertex buffer layout and the interpolation contract
//!
//! The flat/smooth tagging lives in three places that must agree: the
//! [`ATTRIBUTE_INTERPOLATION`] table, the `TransformedVertex` field
//! layout consumed by `desc()`, and the `@interpolate(flat)` annotations
//! in `draw.wgsl`. These tests pin all three together.

use std::mem::{offset_of, size_of};

use crate::renderer::transform::{Interpolation, TransformedVertex, ATTRIBUTE_INTERPOLATION};

const DRAW_SHADER: &str = include_str!("../shaders/draw.wgsl");

#[test]
fn test_vertex_layout_stride_matches_struct_size() {
    let layout = TransformedVertex::desc();
    assert_eq!(layout.array_stride, size_of::<TransformedVertex>() as u64);
    // 4 f32 + 3 f32 + 2 f32 + 2 u32 + 2 u32 + 3 u32, no padding
    assert_eq!(size_of::<TransformedVertex>(), 64);
}

#[test]
fn test_vertex_layout_offsets_match_fields() {
    let attrs = TransformedVertex::desc().attributes;
    assert_eq!(attrs.len(), 8);

    let expected = [
        offset_of!(TransformedVertex, clip_position),
        offset_of!(TransformedVertex, shading_color),
        offset_of!(TransformedVertex, texture_coord),
        offset_of!(TransformedVertex, texture_page),
        offset_of!(TransformedVertex, clut),
        offset_of!(TransformedVertex, texture_blend_mode),
        offset_of!(TransformedVertex, depth_shift),
        offset_of!(TransformedVertex, dither),
    ];

    for (location, (attr, offset)) in attrs.iter().zip(expected).enumerate() {
        assert_eq!(attr.shader_location, location as u32);
        assert_eq!(attr.offset, offset as u64, "location {location}");
    }
}

#[test]
fn test_vertex_layout_formats() {
    let attrs = TransformedVertex::desc().attributes;

    assert_eq!(attrs[0].format, wgpu::VertexFormat::Float32x4);
    assert_eq!(attrs[1].format, wgpu::VertexFormat::Float32x3);
    assert_eq!(attrs[2].format, wgpu::VertexFormat::Float32x2);
    assert_eq!(attrs[3].format, wgpu::VertexFormat::Uint32x2);
    assert_eq!(attrs[4].format, wgpu::VertexFormat::Uint32x2);
    for attr in &attrs[5..] {
        assert_eq!(attr.format, wgpu::VertexFormat::Uint32);
    }
}

#[test]
fn test_qualifier_table_is_fixed_by_design() {
    // Gouraud color and texel coordinates interpolate; every
    // primitive-granular attribute is flat
    let expected = [
        ("shading_color", Interpolation::Smooth),
        ("texture_coord", Interpolation::Smooth),
        ("texture_page", Interpolation::Flat),
        ("clut", Interpolation::Flat),
        ("texture_blend_mode", Interpolation::Flat),
        ("depth_shift", Interpolation::Flat),
        ("dither", Interpolation::Flat),
    ];
    assert_eq!(ATTRIBUTE_INTERPOLATION, expected);
}

#[test]
fn test_shader_flat_annotations_match_qualifier_table() {
    for (name, qualifier) in ATTRIBUTE_INTERPOLATION {
        let annotated = format!("@interpolate(flat) {name}:");
        match qualifier {
            Interpolation::Flat => {
                assert!(
                    DRAW_SHADER.contains(&annotated),
                    "{name} must be flat in draw.wgsl"
                );
            }
            Interpolation::Smooth => {
                assert!(
                    !DRAW_SHADER.contains(&annotated),
                    "{name} must not be flat in draw.wgsl"
                );
            }
        }
    }

    let flat_count = DRAW_SHADER.matches("@interpolate(flat)").count();
    let flat_expected = ATTRIBUTE_INTERPOLATION
        .iter()
        .filter(|(_, q)| *q == Interpolation::Flat)
        .count();
    assert_eq!(flat_count, flat_expected);
}

#[test]
fn test_shader_declares_every_attribute() {
    for (name, _) in ATTRIBUTE_INTERPOLATION {
        assert!(
            DRAW_SHADER.contains(&format!("{name}:")),
            "{name} missing from draw.wgsl"
        );
    }
}
