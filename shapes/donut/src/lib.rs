use anyhow::Result;
use log::info;
use shape_data::generator::torus_surface;
use shape_data::{Colormap, Figure, ShapeConfig, ShapeError, TorusConfig};

/// Adds a torus surface to `figure`; the limits reach exactly the outer
/// equator.
pub fn plot_donut_shape(
  figure: Figure,
  config: &TorusConfig,
) -> Result<Figure, ShapeError> {
  let TorusConfig {
    major_radius: big_r,
    minor_radius: small_r,
  } = *config;
  let surface = torus_surface(big_r, small_r)?;

  let max_dim = big_r + small_r;
  let figure = figure
    .plot_surface(surface, Colormap::Viridis, 0.9)
    .with_axis_labels("X-axis", "Y-axis", "Z-axis")
    .with_title(format!(
      "3D Donut (Torus) Shape (R={big_r:?}, r={small_r:?})"
    ))
    .with_limits(-max_dim, max_dim);

  Ok(figure)
}

/// Figure and MSAA sample count from the arguments after the target name.
/// `None` when the shape parameters are invalid; the reason is printed and
/// nothing is plotted.
pub fn prepare(args: &[String]) -> Result<Option<(Figure, u32)>> {
  let (config, rest) = TorusConfig::parse(args)?;
  let sample_count =
    plot_view::parse_sample_count(rest.first().map(String::as_str))?;

  if let Err(err) = config.validate() {
    eprintln!("Error: {err}");
    return Ok(None);
  }
  info!("{config:?}");

  let figure = plot_donut_shape(Figure::default(), &config)?;
  Ok(Some((figure, sample_count)))
}

pub fn run() -> Result<()> {
  env_logger::init();

  let args = std::env::args().collect::<Vec<String>>();
  match prepare(args.get(2..).unwrap_or(&[]))? {
    Some((figure, sample_count)) => plot_view::show(figure, sample_count),
    None => Ok(()),
  }
}

#[cfg(test)]
mod tests {
  use shape_data::Layer;

  use super::*;

  #[test]
  fn figure_uses_viridis_and_outer_radius_limits() {
    let figure =
      plot_donut_shape(Figure::default(), &TorusConfig::default()).unwrap();

    assert_eq!(figure.limits, [-3., 3.]);
    assert_eq!(figure.title, "3D Donut (Torus) Shape (R=2.0, r=1.0)");
    match &figure.layers[..] {
      [Layer::Surface {
        grid,
        colormap,
        alpha,
      }] => {
        assert_eq!(grid.point(0, 0), [3., 0., 0.]);
        assert_eq!(*colormap, Colormap::Viridis);
        assert_eq!(*alpha, 0.9);
      }
      layers => panic!("unexpected layers {layers:?}"),
    }
  }

  #[test]
  fn equal_radii_leave_nothing_to_plot() {
    let config = TorusConfig {
      major_radius: 1.,
      minor_radius: 1.,
    };
    let result = plot_donut_shape(Figure::default(), &config);
    assert!(matches!(result, Err(ShapeError::InvalidParameter(_))));
  }

  fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn invalid_size_stops_before_plotting() {
    assert!(prepare(&args(&["1", "2"])).unwrap().is_none());
    assert!(prepare(&args(&["1e39"])).unwrap().is_none());
  }

  #[test]
  fn arguments_reach_the_figure() {
    let (figure, sample_count) =
      prepare(&args(&["3", "1", "4"])).unwrap().unwrap();
    assert_eq!(figure.title, "3D Donut (Torus) Shape (R=3.0, r=1.0)");
    assert_eq!(sample_count, 4);

    let (_, sample_count) = prepare(&[]).unwrap().unwrap();
    assert_eq!(sample_count, 1);
  }

  #[test]
  fn malformed_arguments_are_errors() {
    assert!(prepare(&args(&["wide"])).is_err());
    assert!(prepare(&args(&["3", "1", "3"])).is_err());
  }
}
