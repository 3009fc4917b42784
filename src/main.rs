use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use glam::Vec2;
use log::{error, info, warn};
use pollster::block_on;
use winit::dpi::LogicalSize;
use winit::event::{DeviceEvent, ElementState, Event, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowBuilder};

use furnished_room::app::aspect_ratio;
use furnished_room::config::USAGE;
use furnished_room::mesh::{CUBE_INDICES, CUBE_VERTICES};
use furnished_room::{
    CliOptions, Group, InputState, KeyCode, NamedKey, Renderer, RoomState, StartupError,
};

const TITLE: &str = "Furnished Room";

// Pixel-precise scroll deltas are converted to wheel "lines" at this rate.
const PIXELS_PER_LINE: f32 = 20.0;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = CliOptions::parse()?;
    if options.help {
        println!("{USAGE}");
        print_controls();
        return Ok(());
    }

    let state = RoomState::new(&options);
    if options.summary_only {
        print_summary(&state);
        return Ok(());
    }
    run_interactive(state, &options)
}

fn run_interactive(state: RoomState, options: &CliOptions) -> Result<()> {
    let event_loop = EventLoop::new().map_err(|err| StartupError::window("event loop", err))?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(TITLE)
            .with_inner_size(LogicalSize::new(
                f64::from(options.width),
                f64::from(options.height),
            ))
            .build(&event_loop)
            .map_err(|err| StartupError::window("window", err))?,
    );
    capture_cursor(&window);

    let renderer =
        block_on(Renderer::new(Arc::clone(&window))).map_err(|err| StartupError::graphics(&err))?;
    info!(
        "rendering {} draws per frame at {}x{}",
        state.room().draw_count(),
        options.width,
        options.height
    );

    let mut app = AppState {
        renderer,
        state,
        input: InputState::new(),
        last_frame: Instant::now(),
        last_error: None,
    };

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run(|event, target| {
            if let Err(err) = app.process_event(event, target) {
                app.last_error = Some(err);
                target.exit();
            }
        })
        .map_err(|err| anyhow!("event loop failed: {err}"))?;

    if let Some(err) = app.last_error {
        return Err(err);
    }
    Ok(())
}

struct AppState {
    renderer: Renderer,
    state: RoomState,
    input: InputState,
    last_frame: Instant,
    last_error: Option<anyhow::Error>,
}

impl AppState {
    fn process_event(
        &mut self,
        event: Event<()>,
        target: &EventLoopWindowTarget<()>,
    ) -> Result<()> {
        match event {
            Event::WindowEvent { event, window_id } if window_id == self.renderer.window_id() => {
                match event {
                    WindowEvent::CloseRequested => target.exit(),
                    WindowEvent::Resized(size) => self.renderer.resize(size),
                    WindowEvent::Focused(false) => self.input.clear(),
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(code),
                                state,
                                ..
                            },
                        ..
                    } => self.handle_keyboard(code, state),
                    WindowEvent::MouseWheel { delta, .. } => {
                        self.input.add_scroll(scroll_lines(delta));
                    }
                    WindowEvent::RedrawRequested => self.redraw(target)?,
                    _ => {}
                }
            }
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => {
                self.input
                    .add_mouse_motion(Vec2::new(delta.0 as f32, delta.1 as f32));
            }
            Event::AboutToWait => {
                self.renderer.window().request_redraw();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_keyboard(&mut self, code: WinitKey, state: ElementState) {
        let Some(key) = map_keycode(code) else {
            return;
        };
        match state {
            ElementState::Pressed => self.input.set_key_down(key),
            ElementState::Released => self.input.set_key_up(key),
        }
    }

    fn redraw(&mut self, target: &EventLoopWindowTarget<()>) -> Result<()> {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.state.update(&mut self.input, delta_time);
        if self.state.quit_requested() {
            target.exit();
            return Ok(());
        }

        let size = self.renderer.size();
        let frame = self.state.frame(aspect_ratio(size.width, size.height));
        self.renderer.update_globals(&frame.uniforms);
        if let Err(err) = self.renderer.render(&frame.draws) {
            match err {
                wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                    let size = self.renderer.window().inner_size();
                    self.renderer.resize(size);
                }
                wgpu::SurfaceError::OutOfMemory => {
                    return Err(anyhow!("GPU is out of memory"));
                }
                wgpu::SurfaceError::Timeout => {
                    info!("Surface timeout; retrying next frame");
                }
            }
        }
        Ok(())
    }
}

fn capture_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(err) = grabbed {
        warn!("cursor grab unavailable: {err}");
    }
    window.set_cursor_visible(false);
}

fn scroll_lines(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
    }
}

fn map_keycode(code: WinitKey) -> Option<KeyCode> {
    use WinitKey as Key;
    Some(match code {
        Key::Escape => KeyCode::Named(NamedKey::Escape),
        Key::Digit0 => KeyCode::Digit(0),
        Key::Digit1 => KeyCode::Digit(1),
        Key::Digit2 => KeyCode::Digit(2),
        Key::Digit3 => KeyCode::Digit(3),
        Key::Digit4 => KeyCode::Digit(4),
        Key::Digit5 => KeyCode::Digit(5),
        Key::Digit6 => KeyCode::Digit(6),
        Key::Digit7 => KeyCode::Digit(7),
        Key::Digit8 => KeyCode::Digit(8),
        Key::Digit9 => KeyCode::Digit(9),
        Key::KeyA => KeyCode::Character('A'),
        Key::KeyB => KeyCode::Character('B'),
        Key::KeyC => KeyCode::Character('C'),
        Key::KeyD => KeyCode::Character('D'),
        Key::KeyE => KeyCode::Character('E'),
        Key::KeyF => KeyCode::Character('F'),
        Key::KeyG => KeyCode::Character('G'),
        Key::KeyH => KeyCode::Character('H'),
        Key::KeyI => KeyCode::Character('I'),
        Key::KeyJ => KeyCode::Character('J'),
        Key::KeyK => KeyCode::Character('K'),
        Key::KeyL => KeyCode::Character('L'),
        Key::KeyM => KeyCode::Character('M'),
        Key::KeyN => KeyCode::Character('N'),
        Key::KeyO => KeyCode::Character('O'),
        Key::KeyP => KeyCode::Character('P'),
        Key::KeyQ => KeyCode::Character('Q'),
        Key::KeyR => KeyCode::Character('R'),
        Key::KeyS => KeyCode::Character('S'),
        Key::KeyT => KeyCode::Character('T'),
        Key::KeyU => KeyCode::Character('U'),
        Key::KeyV => KeyCode::Character('V'),
        Key::KeyW => KeyCode::Character('W'),
        Key::KeyX => KeyCode::Character('X'),
        Key::KeyY => KeyCode::Character('Y'),
        Key::KeyZ => KeyCode::Character('Z'),
        _ => return None,
    })
}

fn print_summary(state: &RoomState) {
    let room = state.room();
    println!(
        "Furnished room: {} draw calls from one cube ({} vertices, {} indices)",
        room.draw_count(),
        CUBE_VERTICES.len(),
        CUBE_INDICES.len()
    );
    for group in Group::ALL {
        println!(" - {group}: {} instance(s)", room.group_count(group));
    }
    println!(" - ceiling fan: {} part(s)", room.fan().part_count());

    println!("Instances:");
    for instance in room.instances() {
        let t = instance.transform.translation;
        let s = instance.transform.scale;
        let c = instance.color;
        println!(
            " - {} / {} pos=({:.2}, {:.2}, {:.2}) scale=({:.2}, {:.2}, {:.2}) color=({:.2}, {:.2}, {:.2})",
            instance.group, instance.name, t.x, t.y, t.z, s.x, s.y, s.z, c.x, c.y, c.z
        );
    }
}

fn print_controls() {
    println!(
        "Controls:
  W/S/A/D      move          1/2          yaw right/left
  mouse        look          wheel        zoom
  Y/Z, R       rotate room about Y/Z, rotate back on active axis
  L/J I/K O/P  translate room along X, Y, Z
  C/V B/N M/U  scale room along X, Y, Z
  X            cycle fan speed
  H/F Q/E T/G  look-at camera eye along X, Y, Z
  3/4 5/6      look-at camera target along Y, Z
  7/8/9        look-at camera up vector X/Y/Z
  0            switch between free-look and look-at camera
  Esc          quit"
    );
}
