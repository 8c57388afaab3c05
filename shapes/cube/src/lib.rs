use anyhow::Result;
use log::info;
use shape_data::figure::{CYAN, RED};
use shape_data::generator::cube_surface;
use shape_data::{CubeConfig, Figure, ShapeConfig, ShapeError};

/// Adds the six cube faces to `figure`, with limits padded to 1.5 half
/// sides.
pub fn plot_cube_shape(
  figure: Figure,
  config: &CubeConfig,
) -> Result<Figure, ShapeError> {
  let side_length = config.side_length;
  let cube = cube_surface(side_length)?;

  let max_dim = side_length / 2. * 1.5;
  let figure = figure
    .add_polygons(cube.face_coords(), CYAN, RED, 0.6)
    .with_axis_labels("X-axis", "Y-axis", "Z-axis")
    .with_title(format!("3D Cube Shape (Side Length = {side_length:?})"))
    .with_limits(-max_dim, max_dim);

  Ok(figure)
}

/// Figure and MSAA sample count from the arguments after the target name.
/// `None` when the shape parameters are invalid; the reason is printed and
/// nothing is plotted.
pub fn prepare(args: &[String]) -> Result<Option<(Figure, u32)>> {
  let (config, rest) = CubeConfig::parse(args)?;
  let sample_count =
    plot_view::parse_sample_count(rest.first().map(String::as_str))?;

  if let Err(err) = config.validate() {
    eprintln!("Error: {err}");
    return Ok(None);
  }
  info!("{config:?}");

  let figure = plot_cube_shape(Figure::default(), &config)?;
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
