//! Ore Miner: SDL2 front-end
//!
//! Usage:
//!   cargo run -- [--seed <N>] [--config <file.json>]
//!
//! Set `RUST_LOG=debug` to see every mining action.

use clap::Parser;
use ore_miner::config::GameConfig;
use ore_miner::game::ui_manager::CONTROLS_HELP;
use ore_miner::game::{GameSession, UiScreen};
use ore_miner::input::InputContext;
use sdl2::render::BlendMode;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

mod gui;

use gui::InputSystem;

#[derive(Parser)]
#[command(name = "ore-miner")]
#[command(about = "Dig through a generated world, collect ore, and upgrade your pickaxe")]
struct Args {
    /// World seed (overrides the config file; random when absent)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = GameConfig::load(args.config.as_deref())?;
    let seed = config.world.resolve_seed(args.seed);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window_config = &config.window;
    let window = video_subsystem
        .window(&window_config.title, window_config.width, window_config.height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_blend_mode(BlendMode::Blend);
    let mut event_pump = sdl_context.event_pump()?;

    let mut session = GameSession::new(&config, seed);
    let mut input_system = InputSystem::new();

    info!(seed, "starting main game loop");
    info!("{}", CONTROLS_HELP);

    let frame_time = Duration::from_secs_f64(1.0 / window_config.target_fps.max(1) as f64);
    let mut last_frame = Instant::now();

    while session.is_running() {
        let frame_start = Instant::now();
        let delta_time = frame_start.duration_since(last_frame).as_secs_f32();
        last_frame = frame_start;

        input_system.set_context(InputContext::from(session.screen()));
        let buttons = match session.screen() {
            UiScreen::Shop => session.ui.shop_buttons(&session.shop, &session.player),
            _ => Vec::new(),
        };

        for action in input_system.poll_events(&mut event_pump, &buttons) {
            session.handle_action(action);
        }

        let movement = gui::input_system::move_input(&event_pump.keyboard_state());
        session.update(delta_time, movement);

        gui::render::render_frame(&mut canvas, &session)?;

        // Cap framerate
        if let Some(remaining) = frame_time.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    info!(
        value = session.player.inventory.total_value(),
        pickaxe = session.player.pickaxe.name(),
        "game ended"
    );
    Ok(())
}
