use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
  let args: Vec<String> = env::args().collect();

  if args.len() < 2 {
    eprintln!(
      "Usage: {} <shapes/ball|shapes/cube|shapes/donut> [size ...] [sample_count]",
      args[0]
    );
    return Ok(());
  }

  let target = &args[1];

  match target.as_str() {
    "shapes/ball" => Ok(ball_shape::run()?),
    "shapes/cube" => Ok(cube_shape::run()?),
    "shapes/donut" => Ok(donut_shape::run()?),
    _ => {
      eprintln!("Not found: {}", target);
      Ok(())
    }
  }
}
