use std::{iter, sync::Arc};

use anyhow::{Context, Result};
use bytemuck::cast_slice;
use log::{debug, info};
use shape_data::{Figure, ViewAngle};
use wgpu::util::DeviceExt;
use winit::{dpi::PhysicalSize, window::Window};

use crate::camera;
use crate::ctx::WgpuContext;
use crate::mesh::{self, Batch, Vertex};
use crate::ppl::RenderPipelineBuilder;
use crate::render::Render;
use crate::util;

pub struct PlotInputs {
  pub figure: Figure,
  pub sample_count: u32,
}

struct GpuBatch {
  vertex_buffer: wgpu::Buffer,
  index_buffer: wgpu::Buffer,
  index_count: u32,
}

impl GpuBatch {
  fn new(device: &wgpu::Device, batch: &Batch, label: &str) -> Option<Self> {
    if batch.is_empty() {
      return None;
    }

    let vertex_buffer =
      device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{label} Vertex Buffer")),
        contents: cast_slice(&batch.vertices),
        usage: wgpu::BufferUsages::VERTEX,
      });
    let index_buffer =
      device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{label} Index Buffer")),
        contents: cast_slice(&batch.indices),
        usage: wgpu::BufferUsages::INDEX,
      });

    Some(Self {
      vertex_buffer,
      index_buffer,
      index_count: batch.indices.len() as u32,
    })
  }

  fn draw(
    &self,
    render_pass: &mut wgpu::RenderPass,
    pipeline: &wgpu::RenderPipeline,
  ) {
    render_pass.set_pipeline(pipeline);
    render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
    render_pass
      .set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
    render_pass.draw_indexed(0..self.index_count, 0, 0..1);
  }
}

/// GPU state for one static figure.
pub struct PlotState {
  ctx: WgpuContext<'static>,

  triangle_pipeline: wgpu::RenderPipeline,
  line_pipeline: wgpu::RenderPipeline,

  triangles: Option<GpuBatch>,
  lines: Option<GpuBatch>,

  bind_group: wgpu::BindGroup,
  vp_uniform_buffer: wgpu::Buffer,

  msaa_texture_view: Option<wgpu::TextureView>,
  depth_texture_view: wgpu::TextureView,

  limits: [f32; 2],
  view: ViewAngle,
  clear_color: wgpu::Color,
}

impl Render for PlotState {
  type Inputs = PlotInputs;

  async fn new(window: Arc<Window>, inputs: &PlotInputs) -> Result<Self> {
    let ctx = WgpuContext::new(window, inputs.sample_count).await?;
    let figure = &inputs.figure;

    let shader = ctx
      .device
      .create_shader_module(wgpu::include_wgsl!("./plot.wgsl"));

    //
    // uniform
    //

    let vp_mat = camera::create_vp_mat(figure.limits, figure.view, ctx.aspect());
    let vp_ref: &[f32; 16] = vp_mat.as_ref();
    let vp_uniform_buffer =
      ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("View-Projection Buffer"),
        contents: cast_slice(vp_ref),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
      });

    let bind_group_layout = util::create_bind_group_layout_for_buffer(
      &ctx.device,
      &[wgpu::BufferBindingType::Uniform],
      &[wgpu::ShaderStages::VERTEX],
    );
    let bind_group = util::create_bind_group(
      &ctx.device,
      &bind_group_layout,
      &[vp_uniform_buffer.as_entire_binding()],
    );

    //
    // pipelines
    //

    let pipeline_layout =
      ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Plot Pipeline Layout"),
        bind_group_layouts: &[&bind_group_layout],
        push_constant_ranges: &[],
      });
    let vertex_buffer_layout = [Vertex::layout()];

    let triangle_pipeline = RenderPipelineBuilder::new(&ctx)
      .label("Surface Pipeline")
      .vs_shader(&shader, "vs_main")
      .fs_shader(&shader, "fs_main")
      .pipeline_layout(&pipeline_layout)
      .vertex_buffer_layout(&vertex_buffer_layout)
      .translucent()
      .build()
      .context("Surface pipeline has no vertex shader")?;

    let line_pipeline = RenderPipelineBuilder::new(&ctx)
      .label("Line Pipeline")
      .vs_shader(&shader, "vs_main")
      .fs_shader(&shader, "fs_main")
      .pipeline_layout(&pipeline_layout)
      .vertex_buffer_layout(&vertex_buffer_layout)
      .topology(wgpu::PrimitiveTopology::LineList)
      .build()
      .context("Line pipeline has no vertex shader")?;

    //
    // geometry
    //

    let mut tessellation = mesh::tessellate(figure);
    let mut background = [
      figure.background[0],
      figure.background[1],
      figure.background[2],
      1.,
    ];
    if ctx.format.is_srgb() {
      tessellation.triangles.map_colors(mesh::to_linear);
      tessellation.lines.map_colors(mesh::to_linear);
      background = mesh::to_linear(background);
    }
    debug!(
      "{} triangle indices, {} line indices",
      tessellation.triangles.indices.len(),
      tessellation.lines.indices.len()
    );

    let triangles =
      GpuBatch::new(&ctx.device, &tessellation.triangles, "Triangle");
    let lines = GpuBatch::new(&ctx.device, &tessellation.lines, "Line");

    //
    // texture views
    //

    let msaa_texture_view = util::create_msaa_texture_view(&ctx);
    let depth_texture_view = util::create_depth_view(&ctx);

    info!(
      "Plot ready: {} layer(s), format {:?}, {}x msaa",
      figure.layers.len(),
      ctx.format,
      ctx.sample_count
    );

    let [r, g, b, a] = background.map(f64::from);
    Ok(Self {
      ctx,
      triangle_pipeline,
      line_pipeline,
      triangles,
      lines,
      bind_group,
      vp_uniform_buffer,
      msaa_texture_view,
      depth_texture_view,
      limits: figure.limits,
      view: figure.view,
      clear_color: wgpu::Color { r, g, b, a },
    })
  }

  fn get_size(&self) -> PhysicalSize<u32> {
    self.ctx.size
  }

  fn resize(&mut self, size: PhysicalSize<u32>) {
    if !self.ctx.resize(size) {
      return;
    }

    let vp_mat =
      camera::create_vp_mat(self.limits, self.view, self.ctx.aspect());
    let vp_ref: &[f32; 16] = vp_mat.as_ref();
    self
      .ctx
      .queue
      .write_buffer(&self.vp_uniform_buffer, 0, cast_slice(vp_ref));

    self.depth_texture_view = util::create_depth_view(&self.ctx);
    self.msaa_texture_view = util::create_msaa_texture_view(&self.ctx);
  }

  fn draw(&mut self) -> Result<(), wgpu::SurfaceError> {
    let frame = self.ctx.surface.get_current_texture()?;
    let view =
      frame.texture.create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = self.ctx.device.create_command_encoder(
      &wgpu::CommandEncoderDescriptor {
        label: Some("Render Encoder"),
      },
    );

    let color_attachment = match &self.msaa_texture_view {
      Some(msaa_view) => {
        util::create_msaa_color_attachment(&view, msaa_view, self.clear_color)
      }
      None => util::create_color_attachment(&view, self.clear_color),
    };
    let depth_attachment =
      util::create_depth_stencil_attachment(&self.depth_texture_view);

    let mut render_pass =
      encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Render Pass"),
        color_attachments: &[Some(color_attachment)],
        depth_stencil_attachment: Some(depth_attachment),
        ..Default::default()
      });

    render_pass.set_bind_group(0, &self.bind_group, &[]);

    // opaque lines first so they write depth before the translucent faces
    if let Some(lines) = &self.lines {
      lines.draw(&mut render_pass, &self.line_pipeline);
    }
    if let Some(triangles) = &self.triangles {
      triangles.draw(&mut render_pass, &self.triangle_pipeline);
    }

    drop(render_pass);

    self.ctx.queue.submit(iter::once(encoder.finish()));
    frame.present();

    Ok(())
  }
}
