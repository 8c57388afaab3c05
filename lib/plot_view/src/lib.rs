pub mod app;
pub mod camera;
pub mod ctx;
pub mod mesh;
pub mod plot;
pub mod ppl;
pub mod render;
pub mod util;

use anyhow::{bail, Context, Result};
use log::info;
use shape_data::Figure;
use winit::dpi::PhysicalSize;

use app::App;
use plot::{PlotInputs, PlotState};

/// Opens a window showing `figure` and blocks until it is closed.
pub fn show(figure: Figure, sample_count: u32) -> Result<()> {
  let title = figure.title.clone();
  let size = PhysicalSize::new(figure.width, figure.height);
  info!("Showing \"{title}\"");

  let inputs = PlotInputs {
    figure,
    sample_count,
  };
  let mut app: App<PlotState> = App::new(&title, size, inputs);
  app.run()?;

  Ok(())
}

/// MSAA sample count from an optional argument; 1 when absent.
pub fn parse_sample_count(arg: Option<&str>) -> Result<u32> {
  let Some(arg) = arg else {
    return Ok(1);
  };
  let count = arg
    .parse::<u32>()
    .with_context(|| format!("invalid sample count {arg:?}"))?;
  if !matches!(count, 1 | 4) {
    bail!("sample count must be 1 or 4, got {count}");
  }
  Ok(count)
}
