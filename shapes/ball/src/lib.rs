use anyhow::Result;
use log::info;
use shape_data::generator::sphere_surface;
use shape_data::{Colormap, Figure, ShapeConfig, ShapeError, SphereConfig};

/// Adds a sphere surface to `figure`, with limits padded to 1.2 radii.
pub fn plot_ball_shape(
  figure: Figure,
  config: &SphereConfig,
) -> Result<Figure, ShapeError> {
  let radius = config.radius;
  let surface = sphere_surface(radius)?;

  let max_dim = radius * 1.2;
  let figure = figure
    .plot_surface(surface, Colormap::Plasma, 0.8)
    .with_axis_labels("X-axis", "Y-axis", "Z-axis")
    .with_title(format!("3D Ball (Sphere) Shape (Radius = {radius:?})"))
    .with_limits(-max_dim, max_dim);

  Ok(figure)
}

/// Figure and MSAA sample count from the arguments after the target name.
/// `None` when the shape parameters are invalid; the reason is printed and
/// nothing is plotted.
pub fn prepare(args: &[String]) -> Result<Option<(Figure, u32)>> {
  let (config, rest) = SphereConfig::parse(args)?;
  let sample_count =
    plot_view::parse_sample_count(rest.first().map(String::as_str))?;

  if let Err(err) = config.validate() {
    eprintln!("Error: {err}");
    return Ok(None);
  }
  info!("{config:?}");

  let figure = plot_ball_shape(Figure::default(), &config)?;
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
  fn figure_is_padded_and_titled() {
    let figure =
      plot_ball_shape(Figure::default(), &SphereConfig { radius: 2. })
        .unwrap();

    assert_eq!(figure.limits, [-2.4, 2.4]);
    assert_eq!(figure.title, "3D Ball (Sphere) Shape (Radius = 2.0)");
    assert_eq!(figure.layers.len(), 1);
    match &figure.layers[0] {
      Layer::Surface {
        grid,
        colormap,
        alpha,
      } => {
        assert_eq!(grid.len(), 100 * 100);
        assert_eq!(*colormap, Colormap::Plasma);
        assert_eq!(*alpha, 0.8);
      }
      layer => panic!("unexpected layer {layer:?}"),
    }
  }

  #[test]
  fn default_radius_title() {
    let figure =
      plot_ball_shape(Figure::default(), &SphereConfig::default()).unwrap();
    assert_eq!(figure.title, "3D Ball (Sphere) Shape (Radius = 1.0)");
  }

  #[test]
  fn non_positive_radius_leaves_nothing_to_plot() {
    let result =
      plot_ball_shape(Figure::default(), &SphereConfig { radius: 0. });
    assert!(matches!(result, Err(ShapeError::InvalidParameter(_))));
  }

  fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn invalid_size_stops_before_plotting() {
    assert!(prepare(&args(&["-1"])).unwrap().is_none());
    assert!(prepare(&args(&["1e39"])).unwrap().is_none());
  }

  #[test]
  fn arguments_reach_the_figure() {
    let (figure, sample_count) =
      prepare(&args(&["2.5", "4"])).unwrap().unwrap();
    assert_eq!(figure.title, "3D Ball (Sphere) Shape (Radius = 2.5)");
    assert_eq!(sample_count, 4);

    let (_, sample_count) = prepare(&[]).unwrap().unwrap();
    assert_eq!(sample_count, 1);
  }

  #[test]
  fn malformed_arguments_are_errors() {
    assert!(prepare(&args(&["wide"])).is_err());
    assert!(prepare(&args(&["2.5", "3"])).is_err());
  }
}
