use log::debug;

use crate::error::{require_positive, ShapeError, SIDE_LENGTH_NOT_POSITIVE};

/// Vertex indices per face, counter-clockwise seen from outside the cube.
#[rustfmt::skip]
pub const FACES: [[usize; 4]; 6] = [
  [0, 3, 2, 1], // bottom
  [4, 5, 6, 7], // top
  [0, 1, 5, 4], // front
  [2, 3, 7, 6], // back
  [1, 2, 6, 5], // right
  [0, 4, 7, 3], // left
];

#[derive(Debug, Clone, PartialEq)]
pub struct CubeGeometry {
  pub vertices: [[f32; 3]; 8],
  pub faces: [[usize; 4]; 6],
}

impl CubeGeometry {
  /// Corner coordinates of every face, in face order.
  pub fn face_coords(&self) -> Vec<[[f32; 3]; 4]> {
    self
      .faces
      .iter()
      .map(|face| face.map(|i| self.vertices[i]))
      .collect()
  }
}

/// Cube centred at the origin.
pub fn cube_surface(side_length: f32) -> Result<CubeGeometry, ShapeError> {
  require_positive(side_length, SIDE_LENGTH_NOT_POSITIVE)?;

  let h = side_length / 2.;

  #[rustfmt::skip]
  let vertices = [
    [-h, -h, -h], // 0: ---
    [ h, -h, -h], // 1: +--
    [ h,  h, -h], // 2: ++-
    [-h,  h, -h], // 3: -+-
    [-h, -h,  h], // 4: --+
    [ h, -h,  h], // 5: +-+
    [ h,  h,  h], // 6: +++
    [-h,  h,  h], // 7: -++
  ];

  debug!("cube side={side_length}: half side {h}");

  Ok(CubeGeometry {
    vertices,
    faces: FACES,
  })
}

#[cfg(test)]
mod tests {
  use cgmath::{InnerSpace, Vector3};

  use super::*;

  #[test]
  fn vertices_are_every_signed_half_side() {
    let cube = cube_surface(3.).unwrap();
    for sx in [-1.5, 1.5] {
      for sy in [-1.5, 1.5] {
        for sz in [-1.5, 1.5] {
          assert!(cube.vertices.contains(&[sx, sy, sz]));
        }
      }
    }
  }

  #[test]
  fn faces_are_planar_quads_of_distinct_vertices() {
    let cube = cube_surface(2.).unwrap();
    for (face, coords) in cube.faces.iter().zip(cube.face_coords()) {
      let mut sorted = *face;
      sorted.sort();
      assert!(sorted.windows(2).all(|w| w[0] != w[1]));

      // a face of an axis-aligned cube shares exactly one coordinate
      let shared = (0..3)
        .filter(|&axis| coords.iter().all(|p| p[axis] == coords[0][axis]))
        .count();
      assert_eq!(shared, 1);
    }
  }

  #[test]
  fn faces_wind_outward() {
    let cube = cube_surface(2.).unwrap();
    for coords in cube.face_coords() {
      let [a, b, c, _] = coords.map(Vector3::from);
      let normal = (b - a).cross(c - a);
      let centre = coords
        .iter()
        .fold(Vector3::new(0., 0., 0.), |acc, &p| acc + Vector3::from(p))
        / 4.;
      assert!(normal.dot(centre) > 0.);
    }
  }

  #[test]
  fn every_vertex_is_used_by_three_faces() {
    let mut uses = [0; 8];
    for face in FACES {
      for i in face {
        uses[i] += 1;
      }
    }
    assert_eq!(uses, [3; 8]);
  }

  #[test]
  fn non_positive_side_is_rejected() {
    assert_eq!(
      cube_surface(0.),
      Err(ShapeError::InvalidParameter(SIDE_LENGTH_NOT_POSITIVE))
    );
    assert!(cube_surface(-2.).is_err());
    assert!(cube_surface(f32::INFINITY).is_err());
  }
}
