//! Scene setup: asset loading and entity creation.
//!
//! The window, textures, and audio device are collaborators; everything
//! here funnels their handles into stores and spawns the entities the
//! systems operate on. Runs once, before the main loop.

use std::fs;
use std::path::Path;

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::animal::Animal;
use crate::components::clickarea::ClickArea;
use crate::components::dynamictext::DynamicText;
use crate::components::pop::Pop;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::soundbutton::SoundButton;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::resources::audio::AudioBridge;
use crate::resources::gameconfig::GameConfig;
use crate::resources::roster::{AnimalDef, AnimalId, RosterDef};
use crate::resources::texturestore::TextureStore;
use crate::systems::progression::{CORRECT_CHIME, INCORRECT_CHIME};

/// Square size of an animal sprite on screen, pixels.
pub const ANIMAL_SPRITE_SIZE: f32 = 140.0;

/// Id of the background music track.
pub const MUSIC_ID: &str = "music";

/// Read and parse the animal catalog from the assets directory.
pub fn load_roster_def(assets: &Path) -> Result<RosterDef, String> {
    let path = assets.join("animals.json");
    let text = fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Load every texture the scene needs into the store: panel art, icons, and
/// one sprite per animal keyed by its catalog name.
pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    assets: &Path,
    defs: &[AnimalDef],
) -> TextureStore {
    let mut store = TextureStore::new();
    let fixed = [
        ("background", "backg.jpg"),
        ("soundboard", "soundboard.jpg"),
        ("lock", "lock.png"),
        ("play", "play.png"),
        ("pause", "pause.png"),
    ];
    for (key, file) in fixed {
        let path = assets.join(file);
        let path_str = path.to_string_lossy();
        let texture = rl
            .load_texture(thread, &path_str)
            .unwrap_or_else(|e| panic!("load {}: {e}", path.display()));
        store.insert(key, texture);
    }
    for def in defs {
        let path = assets.join(&def.texture);
        let path_str = path.to_string_lossy();
        let texture = rl
            .load_texture(thread, &path_str)
            .unwrap_or_else(|e| panic!("load {}: {e}", path.display()));
        store.insert(def.name.clone(), texture);
    }
    info!("{} textures loaded", fixed.len() + defs.len());
    store
}

/// Queue every sound load on the audio thread and start the music.
///
/// Each animal call is loaded twice: into the fire-and-forget bank for
/// guesses and into the preview bank for the soundboard, so the two uses
/// never fight over one device handle.
pub fn queue_audio_loads(
    bridge: &AudioBridge,
    config: &GameConfig,
    assets: &Path,
    defs: &[AnimalDef],
) {
    let send = |cmd: AudioCmd| {
        let _ = bridge.tx_cmd.send(cmd);
    };
    send(AudioCmd::FxVolume {
        volume: config.fx_volume,
    });
    for def in defs {
        let path = assets.join(&def.sound).to_string_lossy().into_owned();
        send(AudioCmd::LoadFx {
            id: def.name.clone(),
            path: path.clone(),
        });
        send(AudioCmd::LoadPreview {
            id: def.name.clone(),
            path,
        });
    }
    for id in [CORRECT_CHIME, INCORRECT_CHIME] {
        send(AudioCmd::LoadFx {
            id: id.into(),
            path: assets.join(format!("{id}.wav")).to_string_lossy().into_owned(),
        });
    }
    send(AudioCmd::LoadMusic {
        id: MUSIC_ID.into(),
        path: assets.join("music.wav").to_string_lossy().into_owned(),
    });
    send(AudioCmd::PlayMusic {
        id: MUSIC_ID.into(),
        volume: config.music_volume,
    });
}

/// Spawn the animal sprites, the panel headline, and the soundboard
/// buttons. Button heights fill a fixed vertical container with equal
/// heights and fixed gaps.
pub fn spawn_scene(world: &mut World, defs: &[AnimalDef]) {
    let config = world.resource::<GameConfig>().clone();
    let screen_w = config.window_width as f32;
    let screen_h = config.window_height as f32;

    for (index, def) in defs.iter().enumerate() {
        let half = ANIMAL_SPRITE_SIZE * 0.5;
        world.spawn((
            Animal {
                id: AnimalId(index),
            },
            ScreenPosition::new(def.x, def.y),
            Sprite {
                tex_key: def.name.clone(),
                width: ANIMAL_SPRITE_SIZE,
                height: ANIMAL_SPRITE_SIZE,
                origin: Vector2 { x: half, y: half },
            },
            Scale::default(),
            Pop::default(),
            ZIndex(index as i32),
            ClickArea::new(ANIMAL_SPRITE_SIZE, ANIMAL_SPRITE_SIZE)
                .with_offset(Vector2 { x: -half, y: -half }),
        ));
    }

    world.spawn((
        DynamicText::new("FIND THE", 22.0, Color::YELLOW),
        ScreenPosition::new(screen_w * 0.06, screen_h * 0.06),
    ));
    world.spawn((
        DynamicText::new("HIDDEN ANIMALS", 22.0, Color::YELLOW),
        ScreenPosition::new(screen_w * 0.035, screen_h * 0.105),
    ));

    let count = defs.len();
    let left = screen_w * 0.015;
    let width = screen_w * 0.25 - screen_w * 0.03;
    let top = screen_h * 0.275;
    let bottom = screen_h * 0.925;
    let gap = screen_h * 0.02;
    let height =
        ((bottom - top) - gap * count.saturating_sub(1) as f32) / count.max(1) as f32;
    let icon_size = (screen_h * 0.04).min(height * 0.8);
    for index in 0..count {
        let y = top + index as f32 * (height + gap);
        let button = SoundButton::new(AnimalId(index), width, height, icon_size);
        let toggle = button.icon_offset(false);
        world.spawn((
            button,
            ScreenPosition::new(left, y),
            ClickArea::new(icon_size, icon_size).with_offset(toggle),
        ));
    }

    info!("scene spawned: {count} animals, {count} sound buttons");
}
