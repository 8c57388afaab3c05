use crate::ctx::WgpuContext;
use crate::ppl::DEPTH_FORMAT;

pub fn create_bind_group_layout_for_buffer(
  device: &wgpu::Device,
  binding_types: &[wgpu::BufferBindingType],
  shader_stages: &[wgpu::ShaderStages],
) -> wgpu::BindGroupLayout {
  let entries = shader_stages.iter().enumerate().map(|(i, stage)| {
    wgpu::BindGroupLayoutEntry {
      binding: i as u32,
      visibility: *stage,
      ty: wgpu::BindingType::Buffer {
        ty: binding_types[i],
        has_dynamic_offset: false,
        min_binding_size: None,
      },
      count: None,
    }
  });

  device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
    label: Some("Bind Group Layout"),
    entries: entries.collect::<Vec<_>>().as_slice(),
  })
}

pub fn create_bind_group(
  device: &wgpu::Device,
  layout: &wgpu::BindGroupLayout,
  resources: &[wgpu::BindingResource],
) -> wgpu::BindGroup {
  let entries =
    resources.iter().enumerate().map(|(i, resource)| wgpu::BindGroupEntry {
      binding: i as u32,
      resource: resource.clone(),
    });

  device.create_bind_group(&wgpu::BindGroupDescriptor {
    label: Some("Bind Group"),
    layout,
    entries: &entries.collect::<Vec<_>>(),
  })
}

pub fn create_color_attachment(
  texture_view: &wgpu::TextureView,
  clear: wgpu::Color,
) -> wgpu::RenderPassColorAttachment {
  wgpu::RenderPassColorAttachment {
    view: texture_view,
    resolve_target: None,
    ops: wgpu::Operations {
      load: wgpu::LoadOp::Clear(clear),
      store: wgpu::StoreOp::Store,
    },
  }
}

pub fn create_msaa_color_attachment<'a>(
  texture_view: &'a wgpu::TextureView,
  msaa_view: &'a wgpu::TextureView,
  clear: wgpu::Color,
) -> wgpu::RenderPassColorAttachment<'a> {
  wgpu::RenderPassColorAttachment {
    view: msaa_view,
    resolve_target: Some(texture_view),
    ops: wgpu::Operations {
      load: wgpu::LoadOp::Clear(clear),
      store: wgpu::StoreOp::Store,
    },
  }
}

fn create_attachment_texture(
  ctx: &WgpuContext,
  label: &str,
  format: wgpu::TextureFormat,
) -> wgpu::TextureView {
  let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
    label: Some(label),
    size: wgpu::Extent3d {
      width: ctx.config.width,
      height: ctx.config.height,
      depth_or_array_layers: 1,
    },
    mip_level_count: 1,
    sample_count: ctx.sample_count,
    dimension: wgpu::TextureDimension::D2,
    format,
    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
    view_formats: &[],
  });

  texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// `None` without multisampling.
pub fn create_msaa_texture_view(
  ctx: &WgpuContext,
) -> Option<wgpu::TextureView> {
  (ctx.sample_count > 1)
    .then(|| create_attachment_texture(ctx, "MSAA Texture", ctx.format))
}

pub fn create_depth_view(ctx: &WgpuContext) -> wgpu::TextureView {
  create_attachment_texture(ctx, "Depth Texture", DEPTH_FORMAT)
}

pub fn create_depth_stencil_attachment(
  depth_view: &wgpu::TextureView,
) -> wgpu::RenderPassDepthStencilAttachment {
  wgpu::RenderPassDepthStencilAttachment {
    view: depth_view,
    depth_ops: Some(wgpu::Operations {
      load: wgpu::LoadOp::Clear(1.0),
      store: wgpu::StoreOp::Discard,
    }),
    stencil_ops: None,
  }
}
