//! Paddle Pong entry point
//!
//! Opens the window and runs the game loop: poll input, tick, render.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rand_pcg::Pcg32;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use paddle_pong::consts::*;
use paddle_pong::platform::{FramePacer, KeyAction, KeyboardState};
use paddle_pong::renderer::{self, RenderState};
use paddle_pong::sim::{self, GameEvent, GameState, tick};
use paddle_pong::{GameError, Settings};

/// Game instance holding all state
struct Game {
    settings: Settings,
    state: GameState,
    rng: Pcg32,
    keys: KeyboardState,
    /// Serve requested since the last tick
    serve: bool,
    pacer: FramePacer,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    /// Startup failure, reported after the event loop exits
    failure: Option<GameError>,
}

impl Game {
    fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(clock_seed);
        log::info!("Game initialized with seed: {}", seed);
        let mut rng = sim::rng::seeded(seed);
        let state = GameState::new(&mut rng);
        Self {
            settings,
            state,
            rng,
            keys: KeyboardState::new(),
            serve: false,
            pacer: FramePacer::new(TARGET_FRAME_TIME),
            window: None,
            render_state: None,
            failure: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), GameError> {
        let mut attributes = Window::default_attributes()
            .with_title(self.settings.title_with_score(0, 0))
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false)
            .with_decorations(!self.settings.borderless);

        if let Some(monitor) = event_loop.primary_monitor() {
            let screen = monitor.size();
            let x = screen.width.saturating_sub(WINDOW_WIDTH) / 2;
            let y = screen.height.saturating_sub(WINDOW_HEIGHT) / 2;
            attributes = attributes.with_position(PhysicalPosition::new(x, y));
        }

        let window = Arc::new(event_loop.create_window(attributes)?);
        let render_state = pollster::block_on(RenderState::new(
            window.clone(),
            self.settings.vsync,
        ))?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        Ok(())
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        match event.state {
            ElementState::Pressed => {
                self.keys.press(code);
                if event.repeat {
                    return;
                }
                match KeyAction::from_key(code) {
                    Some(KeyAction::Quit) => {
                        log::info!("Exited game with Escape Key.");
                        event_loop.exit();
                    }
                    Some(KeyAction::Serve) => self.serve = true,
                    None => {}
                }
            }
            ElementState::Released => self.keys.release(code),
        }
    }

    /// Run simulation for one frame
    fn update(&mut self) {
        let dt = self.pacer.wait_for_next_frame();
        let input = self.keys.tick_input(std::mem::take(&mut self.serve));
        tick(&mut self.state, &input, dt, &mut self.rng);

        let mut scored = false;
        for event in &self.state.events {
            match event {
                GameEvent::Miss { side } => {
                    scored = true;
                    log::info!(
                        "{:?} paddle missed, score {} : {}",
                        side,
                        self.state.score.left,
                        self.state.score.right
                    );
                }
                GameEvent::PaddleHit { side } => {
                    log::debug!("{:?} paddle hit, ball velocity {}", side, self.state.ball.vel);
                }
                GameEvent::Serve => log::debug!("Serve"),
                GameEvent::WallBounce => {}
            }
        }

        if scored {
            if let Some(window) = &self.window {
                let score = self.state.score;
                window.set_title(&self.settings.title_with_score(score.left, score.right));
            }
        }
    }

    /// Render the current frame
    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        match render_state.render(&renderer::frame_vertices(&self.state)) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match self.init_window(event_loop) {
            Ok(()) => {
                self.pacer.reset();
                log::info!("Paddle Pong running!");
            }
            Err(e) => {
                self.failure = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.keys.clear(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, event),
            WindowEvent::RedrawRequested => {
                self.update();
                self.render(event_loop);
            }
            _ => {}
        }
    }
}

/// Seed from wall-clock time so every run serves differently
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn run() -> Result<(), GameError> {
    let settings = Settings::load();
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut game = Game::new(settings);
    event_loop.run_app(&mut game)?;

    match game.failure.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Paddle Pong starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
