//! Explicit scene object handed to each plot function and then to the
//! renderer. Nothing about a plot lives outside of a [`Figure`].

use crate::colormap::Colormap;
use crate::grid::SurfaceGrid;

pub type Rgb = [f32; 3];

pub const CYAN: Rgb = [0., 1., 1.];
pub const RED: Rgb = [1., 0., 0.];
pub const WHITE: Rgb = [1., 1., 1.];

#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
  /// Grid surface coloured by height.
  Surface {
    grid: SurfaceGrid,
    colormap: Colormap,
    alpha: f32,
  },
  /// Flat quads with outlined edges.
  Polygons {
    polygons: Vec<[[f32; 3]; 4]>,
    face_color: Rgb,
    edge_color: Rgb,
    alpha: f32,
  },
}

/// Camera direction in degrees, z up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewAngle {
  pub elevation: f32,
  pub azimuth: f32,
}

impl Default for ViewAngle {
  fn default() -> Self {
    Self {
      elevation: 30.,
      azimuth: -60.,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
  pub width: u32,
  pub height: u32,
  pub title: String,
  pub axis_labels: [String; 3],
  /// Shared `[min, max]` of the x, y and z axes.
  pub limits: [f32; 2],
  pub view: ViewAngle,
  pub background: Rgb,
  pub layers: Vec<Layer>,
}

impl Default for Figure {
  fn default() -> Self {
    Self::new(800, 800)
  }
}

impl Figure {
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      width,
      height,
      title: String::new(),
      axis_labels: ["X-axis".into(), "Y-axis".into(), "Z-axis".into()],
      limits: [-1., 1.],
      view: ViewAngle::default(),
      background: WHITE,
      layers: vec![],
    }
  }

  pub fn with_title(mut self, title: impl Into<String>) -> Self {
    self.title = title.into();
    self
  }

  pub fn with_axis_labels(mut self, x: &str, y: &str, z: &str) -> Self {
    self.axis_labels = [x.into(), y.into(), z.into()];
    self
  }

  /// Same limits on all three axes so the shape keeps its proportions.
  pub fn with_limits(mut self, min: f32, max: f32) -> Self {
    self.limits = [min, max];
    self
  }

  pub fn with_layer(mut self, layer: Layer) -> Self {
    self.layers.push(layer);
    self
  }

  pub fn plot_surface(
    self,
    grid: SurfaceGrid,
    colormap: Colormap,
    alpha: f32,
  ) -> Self {
    self.with_layer(Layer::Surface {
      grid,
      colormap,
      alpha,
    })
  }

  pub fn add_polygons(
    self,
    polygons: Vec<[[f32; 3]; 4]>,
    face_color: Rgb,
    edge_color: Rgb,
    alpha: f32,
  ) -> Self {
    self.with_layer(Layer::Polygons {
      polygons,
      face_color,
      edge_color,
      alpha,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builder_keeps_layers_in_order() {
    let grid = SurfaceGrid {
      rows: 1,
      cols: 1,
      x: vec![0.],
      y: vec![0.],
      z: vec![0.],
    };
    let figure = Figure::default()
      .plot_surface(grid, Colormap::Viridis, 0.9)
      .add_polygons(vec![], CYAN, RED, 0.6)
      .with_limits(-3., 3.);

    assert_eq!(figure.limits, [-3., 3.]);
    assert!(matches!(figure.layers[0], Layer::Surface { .. }));
    assert!(matches!(figure.layers[1], Layer::Polygons { .. }));
  }

  #[test]
  fn default_is_a_square_white_figure() {
    let figure = Figure::default();
    assert_eq!((figure.width, figure.height), (800, 800));
    assert_eq!(figure.background, WHITE);
    assert_eq!(figure.axis_labels[2], "Z-axis");
  }
}
