use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use winit::{
  application::ApplicationHandler,
  dpi::PhysicalSize,
  event::{ElementState, KeyEvent, WindowEvent},
  event_loop::{ActiveEventLoop, EventLoop},
  keyboard::{KeyCode, PhysicalKey},
  window::{Window, WindowId},
};

use crate::render::Render;

/// One window showing one renderer until it is closed.
pub struct App<'a, R>
where
  R: Render,
{
  window: Option<Arc<Window>>,
  window_title: &'a str,
  window_size: PhysicalSize<u32>,
  inputs: R::Inputs,
  handler: Option<R>,
  failure: Option<anyhow::Error>,
}

impl<'a, R: Render> App<'a, R> {
  pub fn new(
    window_title: &'a str,
    window_size: PhysicalSize<u32>,
    inputs: R::Inputs,
  ) -> Self {
    Self {
      window: None,
      window_title,
      window_size,
      inputs,
      handler: None,
      failure: None,
    }
  }

  /// Blocks until the window closes. Window or GPU setup failures are
  /// returned once the event loop has stopped.
  pub fn run(&mut self) -> Result<()> {
    let event_loop = EventLoop::builder().build()?;
    event_loop.run_app(self)?;

    match self.failure.take() {
      Some(err) => Err(err),
      None => Ok(()),
    }
  }

  fn create_handler(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
    let window_attributes = Window::default_attributes()
      .with_title(self.window_title)
      .with_inner_size(self.window_size);
    let window = Arc::new(event_loop.create_window(window_attributes)?);
    info!("Created window {:?} ({})", window.id(), self.window_title);

    let handler =
      pollster::block_on(R::new(Arc::clone(&window), &self.inputs))?;

    window.request_redraw();
    self.window = Some(window);
    self.handler = Some(handler);

    Ok(())
  }
}

impl<'a, R: Render> ApplicationHandler for App<'a, R> {
  fn resumed(&mut self, event_loop: &ActiveEventLoop) {
    if self.handler.is_some() {
      return;
    }
    if let Err(err) = self.create_handler(event_loop) {
      error!("Failed to open plot window: {err:#}");
      self.failure = Some(err);
      event_loop.exit();
    }
  }

  fn window_event(
    &mut self,
    event_loop: &ActiveEventLoop,
    window_id: WindowId,
    event: WindowEvent,
  ) {
    let window = match self.window.as_deref() {
      Some(window) => window,
      None => return,
    };
    if window.id() != window_id {
      return;
    }

    let handler = match &mut self.handler {
      Some(handler) => handler,
      None => return,
    };
    if handler.process_event(&event) {
      return;
    }

    match event {
      WindowEvent::Resized(size) => {
        handler.resize(size);
        window.request_redraw();
      }
      WindowEvent::RedrawRequested => match handler.draw() {
        Ok(()) => {}
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
          handler.resize(handler.get_size());
          window.request_redraw();
        }
        Err(wgpu::SurfaceError::OutOfMemory) => {
          error!("Out of GPU memory, closing plot window");
          event_loop.exit();
        }
        Err(e) => error!("{e:?}"),
      },
      WindowEvent::CloseRequested => {
        info!("Closing window {window_id:?}");
        event_loop.exit();
      }
      WindowEvent::KeyboardInput {
        event:
          KeyEvent {
            physical_key: PhysicalKey::Code(KeyCode::Escape),
            state: ElementState::Pressed,
            ..
          },
        ..
      } => {
        event_loop.exit();
      }
      _ => {}
    }
  }
}
