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

//! wgpu rendering context
//!
//! Headless device and queue setup for the hardware renderer. The draw
//! pipeline renders into an offscreen VRAM-shaped texture, so no window
//! surface is involved; presentation belongs to the embedding frontend.

use crate::gpu::{VRAM_HEIGHT, VRAM_WIDTH};
use crate::renderer::error::RendererError;

/// Texture format of the offscreen VRAM render target
///
/// PSX VRAM is 16-bit 5-5-5 RGB; the hardware renderer draws into an
/// 8-bit-per-channel target and lets the display path downconvert, which
/// sidesteps the lack of widely supported 16-bit renderable formats.
pub const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// wgpu rendering context
///
/// Manages the GPU device and queue, and owns the offscreen render target
/// sized exactly to VRAM (1024×512) so that the NDC transform in the
/// vertex stage needs no per-resolution scaling.
pub struct RenderContext {
    /// wgpu device for creating GPU resources
    pub device: wgpu::Device,
    /// Command queue for submitting GPU commands
    pub queue: wgpu::Queue,
    /// Offscreen render target, one texel per VRAM pixel
    pub target: wgpu::Texture,
    /// Render view of the target texture
    pub target_view: wgpu::TextureView,
}

impl RenderContext {
    /// Create a new headless rendering context
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No suitable GPU adapter is found
    /// - Device creation fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// use psxhw::renderer::RenderContext;
    ///
    /// async fn create_context() {
    ///     let context = RenderContext::new().await.unwrap();
    /// }
    /// ```
    pub async fn new() -> Result<Self, RendererError> {
        // Create wgpu instance
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // Request adapter (no surface: offscreen rendering only)
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| RendererError::AdapterNotFound(e.to_string()))?;

        log::info!("Using adapter: {}", adapter.get_info().name);

        // Request device and queue
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("PSX Renderer Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| RendererError::DeviceCreation(e.to_string()))?;

        // Create the VRAM-shaped render target
        let target = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("VRAM Render Target"),
            size: wgpu::Extent3d {
                width: VRAM_WIDTH,
                height: VRAM_HEIGHT,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TARGET_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });

        let target_view = target.create_view(&wgpu::TextureViewDescriptor::default());

        log::info!(
            "Render context initialized ({}x{} target)",
            VRAM_WIDTH,
            VRAM_HEIGHT
        );

        Ok(Self {
            device,
            queue,
            target,
            target_view,
        })
    }
}
