use cgmath::*;
use shape_data::ViewAngle;

// cgmath is built for OpenGL's coordinate system
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
  1.0, 0.0, 0.0, 0.0,
  0.0, 1.0, 0.0, 0.0,
  0.0, 0.0, 0.5, 0.0,
  0.0, 0.0, 0.5, 1.0,
);

pub fn create_view_mat(
  camera_position: Point3<f32>,
  look_direction: Point3<f32>,
  up_direction: Vector3<f32>,
) -> Matrix4<f32> {
  Matrix4::look_at_rh(camera_position, look_direction, up_direction)
}

pub fn create_ortho_mat(
  left: f32,
  right: f32,
  bottom: f32,
  top: f32,
  near: f32,
  far: f32,
) -> Matrix4<f32> {
  OPENGL_TO_WGPU_MATRIX * ortho(left, right, bottom, top, near, far)
}

/// Unit vector from the scene centre towards the camera, z up.
pub fn eye_direction(view: ViewAngle) -> Vector3<f32> {
  let elevation = Rad::from(Deg(view.elevation));
  let azimuth = Rad::from(Deg(view.azimuth));
  Vector3::new(
    elevation.cos() * azimuth.cos(),
    elevation.cos() * azimuth.sin(),
    elevation.sin(),
  )
}

/// View-projection matrix that fits the whole `limits` cube in the window,
/// whatever the view angle and aspect ratio.
pub fn create_vp_mat(
  limits: [f32; 2],
  view: ViewAngle,
  aspect: f32,
) -> Matrix4<f32> {
  let [min, max] = limits;
  let centre = (min + max) / 2.;
  let half = match (max - min) / 2. {
    h if h > 0. => h,
    _ => 1.,
  };
  // the box's bounding sphere, so any rotation of it stays in frame
  let reach = half * 3f32.sqrt();

  let target = Point3::new(centre, centre, centre);
  let direction = eye_direction(view);
  let distance = 3. * reach;
  let eye = target + direction * distance;

  let up = if direction.z.abs() > 0.999 {
    Vector3::unit_y()
  } else {
    Vector3::unit_z()
  };

  let view_mat = create_view_mat(eye, target, up);

  let (half_w, half_h) = if aspect >= 1. {
    (reach * aspect, reach)
  } else {
    (reach, reach / aspect.max(f32::EPSILON))
  };
  let project_mat = create_ortho_mat(
    -half_w,
    half_w,
    -half_h,
    half_h,
    distance - 2. * reach,
    distance + 2. * reach,
  );

  project_mat * view_mat
}
