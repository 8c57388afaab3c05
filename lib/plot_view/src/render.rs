use std::{future::Future, sync::Arc};

use anyhow::Result;
use winit::{dpi::PhysicalSize, event::WindowEvent, window::Window};

#[allow(opaque_hidden_inferred_bound, unused_variables)]
pub trait Render: Sized {
  type Inputs;

  fn new(
    window: Arc<Window>,
    inputs: &Self::Inputs,
  ) -> impl Future<Output = Result<Self>>;
  fn get_size(&self) -> PhysicalSize<u32>;
  fn resize(&mut self, size: PhysicalSize<u32>);
  fn process_event(&mut self, event: &WindowEvent) -> bool {
    false
  }
  fn draw(&mut self) -> Result<(), wgpu::SurfaceError>;
}
