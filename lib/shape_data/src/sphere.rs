use std::f32::consts::PI;

use cgmath::*;
use log::debug;

use crate::error::{require_positive, ShapeError, RADIUS_NOT_POSITIVE};
use crate::grid::{AngleGrid, SurfaceGrid, RESOLUTION};

fn sphere_position(r: f32, azimuth: Rad<f32>, polar: Rad<f32>) -> [f32; 3] {
  let x = r * azimuth.cos() * polar.sin();
  let y = r * azimuth.sin() * polar.sin();
  let z = r * polar.cos();
  [x, y, z]
}

/// Azimuth over `[0, 2π]` on the columns, polar angle over `[0, π]` on the
/// rows.
pub fn sphere_surface(radius: f32) -> Result<SurfaceGrid, ShapeError> {
  require_positive(radius, RADIUS_NOT_POSITIVE)?;

  let grid = AngleGrid::new(2. * PI, PI, RESOLUTION);
  let surface =
    grid.map(|azimuth, polar| sphere_position(radius, azimuth, polar));

  debug!(
    "sphere r={radius}: {}x{} samples",
    surface.rows, surface.cols
  );

  Ok(surface)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_point_lies_on_the_sphere() {
    for radius in [0.25, 1., 2.5, 40.] {
      let surface = sphere_surface(radius).unwrap();
      let expected = radius * radius;
      for [x, y, z] in surface.points() {
        let d = x * x + y * y + z * z;
        assert!((d - expected).abs() <= 1e-4 * expected);
      }
    }
  }

  #[test]
  fn poles_sit_on_the_z_axis() {
    let surface = sphere_surface(2.).unwrap();
    let [_, _, top] = surface.point(0, 0);
    let [_, _, bottom] = surface.point(RESOLUTION - 1, 0);
    assert!((top - 2.).abs() < 1e-6);
    assert!((bottom + 2.).abs() < 1e-6);
  }

  #[test]
  fn non_positive_radius_is_rejected() {
    for radius in [0., -1., f32::NAN, f32::INFINITY] {
      assert_eq!(
        sphere_surface(radius),
        Err(ShapeError::InvalidParameter(RADIUS_NOT_POSITIVE))
      );
    }
  }
}
