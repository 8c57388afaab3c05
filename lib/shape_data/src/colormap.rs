/// Gradient colormaps for surface layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
  Plasma,
  Viridis,
}

#[rustfmt::skip]
const PLASMA: [[f32; 3]; 5] = [
  [0.050, 0.030, 0.528],
  [0.494, 0.012, 0.658],
  [0.798, 0.280, 0.470],
  [0.973, 0.585, 0.252],
  [0.940, 0.975, 0.131],
];

#[rustfmt::skip]
const VIRIDIS: [[f32; 3]; 5] = [
  [0.267, 0.005, 0.329],
  [0.229, 0.322, 0.546],
  [0.128, 0.567, 0.551],
  [0.369, 0.789, 0.383],
  [0.993, 0.906, 0.144],
];

impl Colormap {
  fn stops(&self) -> &'static [[f32; 3]] {
    match self {
      Colormap::Plasma => &PLASMA,
      Colormap::Viridis => &VIRIDIS,
    }
  }

  /// Colour at `t`, clamped to `[0, 1]`.
  pub fn sample(&self, t: f32) -> [f32; 3] {
    let stops = self.stops();
    let t = if t.is_nan() { 0. } else { t.clamp(0., 1.) };
    if t == 1. {
      return stops[stops.len() - 1];
    }

    let scaled = t * (stops.len() - 1) as f32;
    let i = (scaled.floor() as usize).min(stops.len() - 2);
    let f = scaled - i as f32;

    let [r0, g0, b0] = stops[i];
    let [r1, g1, b1] = stops[i + 1];
    [r0 + (r1 - r0) * f, g0 + (g1 - g0) * f, b0 + (b1 - b0) * f]
  }

  /// Colour for `value` normalized over `[min, max]`.
  pub fn sample_range(&self, value: f32, min: f32, max: f32) -> [f32; 3] {
    let span = max - min;
    if span.abs() <= f32::EPSILON {
      return self.sample(0.5);
    }
    self.sample((value - min) / span)
  }
}
