//! Moo Who? main entry point.
//!
//! A single-screen point-and-click game: children identify hidden animals
//! by matching the played call to the right sprite, unlocking the roster
//! one animal at a time. Built with:
//! - **raylib** for windowing, graphics, input, and audio
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! # Project Structure
//!
//! - [`components`] – per-entity data (sprites, hit regions, pop animation)
//! - [`events`] – click events and the audio command/message pair
//! - [`game`] – asset loading and scene setup
//! - [`resources`] – world state (roster, timers, pointer, stores)
//! - [`systems`] – the per-frame systems and the audio thread
//!
//! # Main Loop
//!
//! 1. Load the config and the animal catalog, open the window
//! 2. Spawn the audio thread and queue every sound load
//! 3. Spawn the scene entities and register the click observers
//! 4. Each frame: pointer input → picking/judging → timers and the pop
//!    animation → audio pumping → reconcile/reclaim → render
//! 5. Shut the audio thread down on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

mod components;
mod events;
mod game;
mod resources;
mod systems;
mod wav;

use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::Image;

use crate::resources::audio::{AudioBridge, setup_audio, shutdown_audio};
use crate::resources::feedback::FeedbackBanner;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::PointerState;
use crate::resources::oneshots::OneShots;
use crate::resources::pendingunlock::PendingUnlock;
use crate::resources::roster::Roster;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, reclaim_oneshots, update_audio_cmds,
    update_audio_messages,
};
use crate::systems::feedback::feedback_banner_system;
use crate::systems::input::update_pointer_state;
use crate::systems::picking::pointer_picking;
use crate::systems::pop::pop_system;
use crate::systems::progression::{animal_clicked_observer, pending_unlock_system};
use crate::systems::render::render_system;
use crate::systems::soundboard::{play_toggle_observer, reconcile_soundboard};
use crate::systems::time::update_world_time;

/// Moo Who?
#[derive(Parser)]
#[command(version, about = "Moo Who? Find the hidden animals by their calls.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Directory holding textures, sounds, and the animal catalog.
    #[arg(long, value_name = "DIR", default_value = "./assets")]
    assets: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::info!("config not loaded ({e}); using defaults");
    }

    let roster_def = game::load_roster_def(&cli.assets)
        .unwrap_or_else(|e| panic!("animal catalog: {e}"));

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("Moo Who?")
        .build();
    rl.set_target_fps(config.target_fps);
    // A stray ESC from small hands should not close the game.
    rl.set_exit_key(None);

    let icon_path = cli.assets.join("iconGame.png");
    match Image::load_image(&icon_path.to_string_lossy()) {
        Ok(icon) => rl.set_window_icon(&icon),
        Err(e) => log::warn!("window icon not loaded: {e}"),
    }

    let textures = game::load_textures(&mut rl, &thread, &cli.assets, &roster_def.animals);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(FeedbackBanner::default());
    world.insert_resource(PendingUnlock::default());
    world.insert_resource(OneShots::default());
    world.insert_resource(Roster::from_defs(&roster_def.animals));
    world.insert_resource(textures);
    world.insert_resource(config.clone());

    setup_audio(&mut world);
    {
        let bridge = world.resource::<AudioBridge>();
        game::queue_audio_loads(bridge, &config, &cli.assets, &roster_def.animals);
    }

    game::spawn_scene(&mut world, &roster_def.animals);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(animal_clicked_observer));
    world.spawn(Observer::new(play_toggle_observer));
    world.flush();

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_pointer_state);
    update.add_systems(pointer_picking.after(update_pointer_state));
    update.add_systems(pending_unlock_system.after(pointer_picking));
    update.add_systems(feedback_banner_system.after(pointer_picking));
    update.add_systems(pop_system.after(pointer_picking));
    update.add_systems(
        // audio bridge systems must run together, in order
        (
            update_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_audio_messages,
        )
            .chain()
            .after(pointer_picking),
    );
    update.add_systems(reconcile_soundboard.after(update_audio_messages));
    update.add_systems(reclaim_oneshots.after(update_audio_messages));
    update.add_systems(
        render_system
            .after(pending_unlock_system)
            .after(feedback_banner_system)
            .after(pop_system)
            .after(reconcile_soundboard)
            .after(reclaim_oneshots),
    );
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
    shutdown_audio(&mut world);
}
