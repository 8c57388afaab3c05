use cgmath::Rad;

/// Samples per angular dimension.
pub const RESOLUTION: usize = 100;

/// `n` evenly spaced values from `start` to `end`, both ends included.
pub fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
  match n {
    0 => vec![],
    1 => vec![start],
    _ => {
      let step = (end - start) / (n - 1) as f32;
      (0..n)
        .map(|i| if i == n - 1 { end } else { start + step * i as f32 })
        .collect()
    }
  }
}

/// Two angle sequences expanded into every `(u, v)` pair.
///
/// `u` walks the columns and `v` walks the rows of anything mapped from it.
#[derive(Debug, Clone)]
pub struct AngleGrid {
  pub u: Vec<Rad<f32>>,
  pub v: Vec<Rad<f32>>,
}

impl AngleGrid {
  pub fn new(u_end: f32, v_end: f32, resolution: usize) -> Self {
    Self {
      u: linspace(0., u_end, resolution).into_iter().map(Rad).collect(),
      v: linspace(0., v_end, resolution).into_iter().map(Rad).collect(),
    }
  }

  pub fn map<F>(&self, f: F) -> SurfaceGrid
  where
    F: Fn(Rad<f32>, Rad<f32>) -> [f32; 3],
  {
    let rows = self.v.len();
    let cols = self.u.len();
    let mut x = Vec::with_capacity(rows * cols);
    let mut y = Vec::with_capacity(rows * cols);
    let mut z = Vec::with_capacity(rows * cols);

    for &v in &self.v {
      for &u in &self.u {
        let [px, py, pz] = f(u, v);
        x.push(px);
        y.push(py);
        z.push(pz);
      }
    }

    SurfaceGrid { rows, cols, x, y, z }
  }
}

/// Structured point cloud: one point per grid cell, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
  pub rows: usize,
  pub cols: usize,
  pub x: Vec<f32>,
  pub y: Vec<f32>,
  pub z: Vec<f32>,
}

impl SurfaceGrid {
  pub fn len(&self) -> usize {
    self.rows * self.cols
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn point(&self, row: usize, col: usize) -> [f32; 3] {
    let i = row * self.cols + col;
    [self.x[i], self.y[i], self.z[i]]
  }

  pub fn points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
    (0..self.len()).map(|i| [self.x[i], self.y[i], self.z[i]])
  }

  /// `(min, max)` of the z values, `None` for an empty grid.
  pub fn z_range(&self) -> Option<(f32, f32)> {
    self.z.iter().fold(None, |range, &z| match range {
      None => Some((z, z)),
      Some((lo, hi)) => Some((lo.min(z), hi.max(z))),
    })
  }
}
