use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;
use winit::{dpi::PhysicalSize, window::Window};

#[derive(Debug)]
pub struct WgpuContext<'a> {
  pub instance: wgpu::Instance,
  pub adapter: wgpu::Adapter,
  pub device: wgpu::Device,
  pub queue: wgpu::Queue,
  pub surface: wgpu::Surface<'a>,
  pub config: wgpu::SurfaceConfiguration,
  pub size: PhysicalSize<u32>,
  pub format: wgpu::TextureFormat,
  pub sample_count: u32,
}

impl WgpuContext<'static> {
  pub async fn new(window: Arc<Window>, sample_count: u32) -> Result<Self> {
    let size = window.inner_size();
    let instance = wgpu::Instance::default();
    let surface = instance
      .create_surface(window)
      .context("Failed to create surface")?;

    let adapter = instance
      .request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::default(),
        compatible_surface: Some(&surface),
        force_fallback_adapter: false,
      })
      .await
      .context("Failed to find an appropriate adapter")?;
    info!("Using adapter {:?}", adapter.get_info().name);

    let (device, queue) = adapter
      .request_device(
        &wgpu::DeviceDescriptor {
          label: None,
          required_features: adapter.features()
            & wgpu::Features::TEXTURE_ADAPTER_SPECIFIC_FORMAT_FEATURES,
          required_limits: wgpu::Limits::default(),
          ..Default::default()
        },
        None,
      )
      .await
      .context("Failed to create device")?;

    let surface_caps = surface.get_capabilities(&adapter);
    let format = surface_caps
      .formats
      .iter()
      .copied()
      .find(|f| f.is_srgb())
      .or(surface_caps.formats.first().copied())
      .context("Surface reports no texture formats")?;

    let config = wgpu::SurfaceConfiguration {
      usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
      format,
      width: size.width.max(1),
      height: size.height.max(1),
      present_mode: wgpu::PresentMode::Fifo,
      alpha_mode: surface_caps.alpha_modes[0],
      view_formats: vec![],
      desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    Ok(Self {
      instance,
      adapter,
      device,
      queue,
      surface,
      config,
      size,
      format,
      sample_count,
    })
  }
}

impl WgpuContext<'_> {
  /// Ignores zero-sized (minimized) windows.
  pub fn resize(&mut self, size: PhysicalSize<u32>) -> bool {
    if size.width == 0 || size.height == 0 {
      return false;
    }
    self.size = size;
    self.config.width = size.width;
    self.config.height = size.height;
    self.surface.configure(&self.device, &self.config);
    true
  }

  pub fn aspect(&self) -> f32 {
    self.config.width as f32 / self.config.height as f32
  }
}
