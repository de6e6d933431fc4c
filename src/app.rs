use std::sync::Arc;

use glam::Vec2;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition},
    event::{ElementState, Force, MouseButton, Touch, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::{PaintError, Result};
use crate::paint::{ContactDevice, ContactSender, FrameDriver, PaintBackend, PaintConfig};
use crate::rendering::GpuPaintPipeline;

struct Canvas {
    window: Arc<Window>,
    driver: FrameDriver<GpuPaintPipeline>,
    contacts: ContactSender,
}

// The touch currently driving the stroke
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pointer {
    Touch(u64),
    Mouse,
}

/// Host window that turns winit input into contact events.
#[derive(Default)]
pub struct App {
    config: PaintConfig,
    canvas: Option<Canvas>,
    pointer: Option<Pointer>,
    pending_moves: Vec<Vec2>,
    pending_device: Option<ContactDevice>,
    cursor: Vec2,
    error: Option<PaintError>,
}

impl App {
    pub fn new(config: PaintConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PaintError) {
        error!("{err}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn create_canvas(&self, event_loop: &ActiveEventLoop) -> Result<Canvas> {
        let (width, height) = self.config.logical_window_size();
        let attributes = Window::default_attributes()
            .with_title("Mercurial Paint")
            .with_inner_size(LogicalSize::new(width, height));
        let window = Arc::new(event_loop.create_window(attributes)?);

        let pipeline = pollster::block_on(GpuPaintPipeline::for_window(window.clone(), &self.config))?;
        let (driver, contacts) = FrameDriver::new(pipeline, &self.config);

        Ok(Canvas {
            window,
            driver,
            contacts,
        })
    }

    fn logical_point(&self, position: PhysicalPosition<f64>) -> Vec2 {
        let scale_factor = self
            .canvas
            .as_ref()
            .map_or(1.0, |canvas| canvas.window.scale_factor());
        let logical = position.to_logical::<f32>(scale_factor);
        Vec2::new(logical.x, logical.y)
    }

    fn begin_contact(&mut self, pointer: Pointer, point: Vec2, device: ContactDevice) -> Result<()> {
        let Some(canvas) = &self.canvas else {
            return Ok(());
        };
        if self.pointer.is_some() {
            return Ok(());
        }

        self.pointer = Some(pointer);
        self.pending_moves.clear();
        canvas.contacts.began(point, device)?;
        // Resume ticking
        canvas.window.request_redraw();
        Ok(())
    }

    fn move_contact(&mut self, pointer: Pointer, point: Vec2, device: ContactDevice) {
        if self.pointer == Some(pointer) {
            self.pending_moves.push(point);
            self.pending_device = Some(device);
        }
    }

    fn end_contact(&mut self, pointer: Pointer) -> Result<()> {
        if self.pointer != Some(pointer) {
            return Ok(());
        }
        self.pointer = None;
        self.flush_moves()?;
        if let Some(canvas) = &self.canvas {
            canvas.contacts.ended()?;
        }
        Ok(())
    }

    // Moves gathered since the last redraw go out as one coalesced event
    fn flush_moves(&mut self) -> Result<()> {
        if self.pending_moves.is_empty() {
            return Ok(());
        }
        let points = std::mem::take(&mut self.pending_moves);
        let device = self.pending_device.take().unwrap_or(ContactDevice::Finger);
        if let Some(canvas) = &self.canvas {
            canvas.contacts.moved(points, device)?;
        }
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        self.flush_moves()?;
        let Some(canvas) = &mut self.canvas else {
            return Ok(());
        };

        canvas.driver.tick()?;
        if canvas.driver.is_active() {
            // Emits a new redraw requested event.
            canvas.window.request_redraw();
        }
        Ok(())
    }

    fn handle_touch(&mut self, touch: Touch) -> Result<()> {
        let pointer = Pointer::Touch(touch.id);
        let point = self.logical_point(touch.location);
        let device = touch_device(touch.force);
        match touch.phase {
            TouchPhase::Started => self.begin_contact(pointer, point, device),
            TouchPhase::Moved => {
                self.move_contact(pointer, point, device);
                Ok(())
            }
            TouchPhase::Ended | TouchPhase::Cancelled => self.end_contact(pointer),
        }
    }
}

fn touch_device(force: Option<Force>) -> ContactDevice {
    match force {
        Some(Force::Calibrated {
            force,
            max_possible_force,
            ..
        }) => ContactDevice::Stylus {
            force: force as f32,
            max_force: max_possible_force as f32,
        },
        Some(Force::Normalized(force)) => ContactDevice::Stylus {
            force: force as f32,
            max_force: 1.0,
        },
        None => ContactDevice::Finger,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.canvas.is_some() {
            return;
        }
        match self.create_canvas(event_loop) {
            Ok(canvas) => {
                info!("canvas ready; waiting for contact");
                self.canvas = Some(canvas);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let result = match event {
            WindowEvent::CloseRequested => {
                info!("The close button was pressed; stopping");
                event_loop.exit();
                Ok(())
            }
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::Resized(size) => {
                if let Some(canvas) = &mut self.canvas {
                    canvas.driver.backend_mut().resize(size.width, size.height);
                }
                Ok(())
            }
            WindowEvent::Touch(touch) => self.handle_touch(touch),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.logical_point(position);
                self.move_contact(Pointer::Mouse, self.cursor, ContactDevice::Finger);
                Ok(())
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => match button_state {
                ElementState::Pressed => {
                    self.begin_contact(Pointer::Mouse, self.cursor, ContactDevice::Finger)
                }
                ElementState::Released => self.end_contact(Pointer::Mouse),
            },
            _ => Ok(()),
        };

        if let Err(err) = result {
            self.fail(event_loop, err);
        }
    }
}

pub fn run() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Create event loop; redraws are only requested while drawing
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(PaintConfig::default());
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touches_without_force_are_fingers() {
        assert_eq!(touch_device(None), ContactDevice::Finger);
    }

    #[test]
    fn calibrated_force_maps_to_stylus() {
        let device = touch_device(Some(Force::Calibrated {
            force: 2.0,
            max_possible_force: 4.0,
            altitude_angle: None,
        }));
        assert_eq!(
            device,
            ContactDevice::Stylus {
                force: 2.0,
                max_force: 4.0
            }
        );
    }
}
