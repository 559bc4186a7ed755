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

//! Draw command render pipeline
//!
//! Builds the wgpu render pipeline that rasterizes transformed draw
//! vertices into the VRAM-shaped render target. The pipeline's vertex
//! layout is [`TransformedVertex::desc`] and its WGSL interface carries
//! the flat/smooth interpolation contract of the vertex stage: the
//! rasterizer interpolates shading color and texture coordinates across
//! each primitive while holding texture page, CLUT, blend mode, depth
//! shift and dither constant at the provoking vertex's values.

use super::transform::TransformedVertex;

/// Render pipeline for PSX draw primitives
///
/// # Examples
///
/// ```no_run
/// use psxhw::renderer::DrawPipeline;
///
/// # fn example(device: &wgpu::Device, format: wgpu::TextureFormat) {
/// let pipeline = DrawPipeline::new(device, format);
/// # }
/// ```
pub struct DrawPipeline {
    /// Render pipeline for the draw shader
    pipeline: wgpu::RenderPipeline,
}

impl DrawPipeline {
    /// Create a new draw pipeline
    ///
    /// # Arguments
    ///
    /// * `device` - wgpu device for creating GPU resources
    /// * `target_format` - Format of the VRAM render target
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> Self {
        // Load shader
        let shader_source = include_str!("shaders/draw.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Draw Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        // Create pipeline layout (no bind groups: every input is a vertex
        // attribute, texture sampling lives in the fragment stage's own
        // pipeline)
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Draw Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        // Create render pipeline
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Draw Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[TransformedVertex::desc()],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None, // PSX primitives have no winding convention
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None, // 2D rasterizer, no depth buffering
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            multiview: None,
            cache: None,
        });

        log::info!("Draw pipeline initialized");

        Self { pipeline }
    }

    /// Record a draw pass over the given vertex buffer
    ///
    /// Renders `vertex_count` vertices (a multiple of 3; quads are split
    /// into triangles upstream) into `target_view`. The target is loaded,
    /// not cleared: draw commands paint over whatever VRAM already holds.
    ///
    /// # Arguments
    ///
    /// * `encoder` - Command encoder for recording GPU commands
    /// * `target_view` - VRAM render target view
    /// * `vertex_buffer` - Buffer of [`TransformedVertex`] records
    /// * `vertex_count` - Number of vertices to draw
    pub fn draw(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target_view: &wgpu::TextureView,
        vertex_buffer: &wgpu::Buffer,
        vertex_count: u32,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Draw Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.draw(0..vertex_count, 0..1);
    }
}
