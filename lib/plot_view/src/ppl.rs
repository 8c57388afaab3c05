use crate::ctx::WgpuContext;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

pub struct RenderPipelineBuilder<'a> {
  ctx: &'a WgpuContext<'a>,
  label: &'a str,
  pipeline_layout: Option<&'a wgpu::PipelineLayout>,

  depth_write: bool,

  vs_shader: Option<&'a wgpu::ShaderModule>,
  vs_entry: &'a str,
  vertex_buffer_layout: &'a [wgpu::VertexBufferLayout<'a>],

  fs_shader: Option<&'a wgpu::ShaderModule>,
  fs_entry: &'a str,
  blend: Option<wgpu::BlendState>,

  primitive: wgpu::PrimitiveState,
}

impl<'a> RenderPipelineBuilder<'a> {
  pub fn new(ctx: &'a WgpuContext<'a>) -> Self {
    Self {
      ctx,
      label: "Render Pipeline",
      pipeline_layout: None,
      depth_write: true,
      vs_shader: None,
      vs_entry: "vs_main",
      fs_shader: None,
      fs_entry: "fs_main",
      vertex_buffer_layout: &[],
      blend: None,
      primitive: wgpu::PrimitiveState::default(),
    }
  }

  pub fn label(mut self, label: &'a str) -> Self {
    self.label = label;
    self
  }

  pub fn pipeline_layout(mut self, layout: &'a wgpu::PipelineLayout) -> Self {
    self.pipeline_layout = Some(layout);
    self
  }

  pub fn vs_shader(
    mut self,
    module: &'a wgpu::ShaderModule,
    entry: &'a str,
  ) -> Self {
    self.vs_shader = Some(module);
    self.vs_entry = entry;
    self
  }

  pub fn fs_shader(
    mut self,
    module: &'a wgpu::ShaderModule,
    entry: &'a str,
  ) -> Self {
    self.fs_shader = Some(module);
    self.fs_entry = entry;
    self
  }

  pub fn vertex_buffer_layout(
    mut self,
    layouts: &'a [wgpu::VertexBufferLayout<'a>],
  ) -> Self {
    self.vertex_buffer_layout = layouts;
    self
  }

  pub fn topology(mut self, topology: wgpu::PrimitiveTopology) -> Self {
    self.primitive.topology = topology;
    self
  }

  /// Alpha blending, depth tested but not written, so that every
  /// translucent layer stays visible through the others.
  pub fn translucent(mut self) -> Self {
    self.blend = Some(wgpu::BlendState::ALPHA_BLENDING);
    self.depth_write = false;
    self
  }

  pub fn build(&self) -> Option<wgpu::RenderPipeline> {
    let vs_shader = self.vs_shader?;

    let targets = [Some(wgpu::ColorTargetState {
      format: self.ctx.format,
      blend: self.blend,
      write_mask: wgpu::ColorWrites::ALL,
    })];

    let pipeline =
      self.ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(self.label),
        layout: self.pipeline_layout,
        vertex: wgpu::VertexState {
          module: vs_shader,
          entry_point: self.vs_entry,
          buffers: self.vertex_buffer_layout,
          compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: self.fs_shader.map(|fs_shader| wgpu::FragmentState {
          module: fs_shader,
          entry_point: self.fs_entry,
          targets: &targets,
          compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: self.primitive,
        depth_stencil: Some(wgpu::DepthStencilState {
          format: DEPTH_FORMAT,
          depth_write_enabled: self.depth_write,
          depth_compare: wgpu::CompareFunction::LessEqual,
          stencil: wgpu::StencilState::default(),
          bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
          count: self.ctx.sample_count,
          ..Default::default()
        },
        multiview: None,
        cache: None,
      });

    Some(pipeline)
  }
}
