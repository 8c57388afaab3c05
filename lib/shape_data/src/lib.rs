pub mod colormap;
pub mod config;
pub mod cube;
pub mod error;
pub mod figure;
pub mod grid;
pub mod sphere;
pub mod torus;

pub use colormap::Colormap;
pub use config::{
  ConfigError, CubeConfig, ShapeConfig, SphereConfig, TorusConfig,
};
pub use cube::CubeGeometry;
pub use error::ShapeError;
pub use figure::{Figure, Layer, Rgb, ViewAngle};
pub use grid::{SurfaceGrid, RESOLUTION};

pub mod generator {
  pub use super::cube::cube_surface;
  pub use super::sphere::sphere_surface;
  pub use super::torus::torus_surface;
}
