use std::f32::consts::PI;

use cgmath::*;
use log::debug;

use crate::error::{
  is_valid_size, ShapeError, TORUS_RADII_INVERTED, TORUS_RADII_NOT_POSITIVE,
};
use crate::grid::{AngleGrid, SurfaceGrid, RESOLUTION};

fn torus_position(
  r_torus: f32,
  r_tube: f32,
  phi: Rad<f32>,
  theta: Rad<f32>,
) -> [f32; 3] {
  let x = (r_torus + r_tube * theta.cos()) * phi.cos();
  let y = (r_torus + r_tube * theta.cos()) * phi.sin();
  let z = r_tube * theta.sin();
  [x, y, z]
}

pub fn validate_radii(
  major_radius: f32,
  minor_radius: f32,
) -> Result<(), ShapeError> {
  if !(is_valid_size(major_radius) && is_valid_size(minor_radius)) {
    return Err(ShapeError::InvalidParameter(TORUS_RADII_NOT_POSITIVE));
  }
  if minor_radius >= major_radius {
    return Err(ShapeError::InvalidParameter(TORUS_RADII_INVERTED));
  }
  Ok(())
}

/// `phi` (around the hole) on the columns, `theta` (around the tube) on the
/// rows, both over `[0, 2π]`. The torus lies flat in the xy plane.
pub fn torus_surface(
  major_radius: f32,
  minor_radius: f32,
) -> Result<SurfaceGrid, ShapeError> {
  validate_radii(major_radius, minor_radius)?;

  let grid = AngleGrid::new(2. * PI, 2. * PI, RESOLUTION);
  let surface = grid
    .map(|phi, theta| torus_position(major_radius, minor_radius, phi, theta));

  debug!(
    "torus R={major_radius} r={minor_radius}: {}x{} samples",
    surface.rows, surface.cols
  );

  Ok(surface)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_point_lies_on_the_tube() {
    for (big, small) in [(2., 1.), (3., 0.8), (1.5, 0.5), (10., 9.9)] {
      let surface = torus_surface(big, small).unwrap();
      let expected = small * small;
      for [x, y, z] in surface.points() {
        let ring = (x * x + y * y).sqrt() - big;
        let d = ring * ring + z * z;
        assert!((d - expected).abs() <= 1e-3 * expected.max(1.));
      }
    }
  }

  #[test]
  fn first_sample_is_the_outer_equator() {
    let surface = torus_surface(2., 1.).unwrap();
    assert_eq!(surface.point(0, 0), [3., 0., 0.]);
  }

  #[test]
  fn inverted_or_equal_radii_are_rejected() {
    let inverted = Err(ShapeError::InvalidParameter(TORUS_RADII_INVERTED));
    assert_eq!(torus_surface(1., 1.), inverted);
    assert_eq!(torus_surface(1., 2.), inverted);
  }

  #[test]
  fn non_positive_radii_are_rejected() {
    let not_positive =
      Err(ShapeError::InvalidParameter(TORUS_RADII_NOT_POSITIVE));
    assert_eq!(torus_surface(0., -1.), not_positive);
    assert_eq!(torus_surface(2., 0.), not_positive);
    assert_eq!(torus_surface(f32::NAN, 1.), not_positive);
    assert_eq!(torus_surface(f32::INFINITY, 1.), not_positive);
    assert_eq!(torus_surface(2., f32::INFINITY), not_positive);
  }
}
