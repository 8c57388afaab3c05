use bytemuck::{Pod, Zeroable};
use shape_data::{Figure, Layer, SurfaceGrid};

pub const AXIS_BOX_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 1.];

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
  pub position: [f32; 3],
  pub color: [f32; 4],
}

impl Vertex {
  pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

  pub fn layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
      array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
      step_mode: wgpu::VertexStepMode::Vertex,
      attributes: &Self::ATTRIBUTES,
    }
  }
}

/// Vertices plus indices for one primitive topology.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Batch {
  pub vertices: Vec<Vertex>,
  pub indices: Vec<u32>,
}

impl Batch {
  fn push_vertex(&mut self, position: [f32; 3], color: [f32; 4]) -> u32 {
    self.vertices.push(Vertex { position, color });
    (self.vertices.len() - 1) as u32
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  pub fn map_colors(&mut self, f: impl Fn([f32; 4]) -> [f32; 4]) {
    for vertex in &mut self.vertices {
      vertex.color = f(vertex.color);
    }
  }
}

/// Everything a figure draws: translucent triangles and opaque lines.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tessellation {
  pub triangles: Batch,
  pub lines: Batch,
}

pub fn tessellate(figure: &Figure) -> Tessellation {
  let mut out = Tessellation::default();

  push_axis_box(&mut out.lines, figure.limits);

  for layer in &figure.layers {
    match layer {
      Layer::Surface {
        grid,
        colormap,
        alpha,
      } => {
        let (lo, hi) = grid.z_range().unwrap_or((0., 0.));
        push_surface(&mut out.triangles, grid, |z| {
          let [r, g, b] = colormap.sample_range(z, lo, hi);
          [r, g, b, *alpha]
        });
      }
      Layer::Polygons {
        polygons,
        face_color,
        edge_color,
        alpha,
      } => {
        let [r, g, b] = *face_color;
        let [er, eg, eb] = *edge_color;
        for quad in polygons {
          push_quad(&mut out.triangles, quad, [r, g, b, *alpha]);
          push_outline(&mut out.lines, quad, [er, eg, eb, 1.]);
        }
      }
    }
  }

  out
}

/// Two triangles per grid cell, coloured per vertex from its height.
fn push_surface(
  batch: &mut Batch,
  grid: &SurfaceGrid,
  color: impl Fn(f32) -> [f32; 4],
) {
  if grid.rows < 2 || grid.cols < 2 {
    return;
  }

  let base = batch.vertices.len() as u32;
  for p in grid.points() {
    batch.push_vertex(p, color(p[2]));
  }

  let cols = grid.cols as u32;
  for i in 0..grid.rows as u32 - 1 {
    for j in 0..cols - 1 {
      let idx0 = base + j + i * cols;
      let idx1 = base + j + 1 + i * cols;
      let idx2 = base + j + 1 + (i + 1) * cols;
      let idx3 = base + j + (i + 1) * cols;

      batch.indices.extend([idx0, idx1, idx2, idx2, idx3, idx0]);
    }
  }
}

fn push_quad(batch: &mut Batch, quad: &[[f32; 3]; 4], color: [f32; 4]) {
  let idx = quad.map(|p| batch.push_vertex(p, color));
  batch
    .indices
    .extend([idx[0], idx[1], idx[2], idx[2], idx[3], idx[0]]);
}

fn push_outline(batch: &mut Batch, quad: &[[f32; 3]; 4], color: [f32; 4]) {
  let idx = quad.map(|p| batch.push_vertex(p, color));
  for k in 0..4 {
    batch.indices.extend([idx[k], idx[(k + 1) % 4]]);
  }
}

/// The 12 edges of the `limits` cube.
fn push_axis_box(batch: &mut Batch, [min, max]: [f32; 2]) {
  let base = batch.vertices.len() as u32;
  for k in 0..8u32 {
    let pick = |bit: u32| if k & bit == 0 { min } else { max };
    batch.push_vertex([pick(1), pick(2), pick(4)], AXIS_BOX_COLOR);
  }
  for a in 0..8u32 {
    for bit in [1, 2, 4] {
      if a & bit == 0 {
        batch.indices.extend([base + a, base + (a | bit)]);
      }
    }
  }
}

fn srgb_channel_to_linear(c: f32) -> f32 {
  if c <= 0.04045 {
    c / 12.92
  } else {
    ((c + 0.055) / 1.055).powf(2.4)
  }
}

/// sRGB colour to linear light, alpha untouched. Needed when the surface
/// format encodes to sRGB on write.
pub fn to_linear([r, g, b, a]: [f32; 4]) -> [f32; 4] {
  [
    srgb_channel_to_linear(r),
    srgb_channel_to_linear(g),
    srgb_channel_to_linear(b),
    a,
  ]
}
