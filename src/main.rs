use std::time::Instant;

use anyhow::{Context, Result};
use log::{error, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::AssetLoader;
use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use game::settings::{FPS, HEIGHT, WIDTH};
use game::{Level, LevelLayouts};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Grove...");

    // Asset root holding graphics/ and map/
    let root = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let assets = AssetLoader::new(&root);
    let layouts = LevelLayouts::load(&assets)
        .with_context(|| format!("Failed to load map layouts from '{}'", root))?;
    let mut level = Level::build(&layouts, &assets, &mut rand::thread_rng())
        .context("Failed to build level")?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let _window = WindowBuilder::new()
        .with_title("Rusted Grove")
        .with_inner_size(winit::dpi::LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new(FPS);

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => input.process_keyboard_event(&event),
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => input.process_mouse_button(button, state),
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => input.reset(),
            Event::AboutToWait => {
                if input.just_pressed(Action::Menu) {
                    info!("Menu requested, shutting down...");
                    elwt.exit();
                    return;
                }
                if input.just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                    if game_loop.is_paused() {
                        info!(
                            "Paused after {} ticks ({:.1} FPS)",
                            game_loop.tick_count(),
                            game_loop.fps()
                        );
                    }
                }

                if game_loop.begin_frame() {
                    if let Err(e) = level.update(input.player(), &game_loop) {
                        error!("Frame update failed: {}", e);
                        elwt.exit();
                        return;
                    }
                }
                input.update();

                elwt.set_control_flow(ControlFlow::WaitUntil(
                    Instant::now() + game_loop.time_until_next_tick(),
                ));
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
