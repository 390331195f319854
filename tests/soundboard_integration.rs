//! Soundboard integration tests: preview toggling, device reconcile, and
//! lock-state derivation from the roster.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use raylib::prelude::Vector2;

use moowho::components::clickarea::ClickArea;
use moowho::components::screenposition::ScreenPosition;
use moowho::components::soundbutton::SoundButton;
use moowho::events::audio::{AudioCmd, AudioMessage};
use moowho::events::click::PlayToggleClicked;
use moowho::resources::input::PointerState;
use moowho::resources::oneshots::OneShots;
use moowho::resources::roster::{AnimalId, Roster};
use moowho::systems::audio::reclaim_oneshots;
use moowho::systems::picking::pointer_picking;
use moowho::systems::soundboard::{play_toggle_observer, reconcile_soundboard};

const ORDER: [(&str, &str); 3] = [("cat", "CAT"), ("bird", "BIRD"), ("lion", "LION")];

const BUTTON_W: f32 = 300.0;
const BUTTON_H: f32 = 80.0;
const ICON: f32 = 36.0;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(Roster::from_names(&ORDER));
    world.insert_resource(PointerState::default());
    world.insert_resource(OneShots::default());
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<AudioMessage>>();

    for index in 0..ORDER.len() {
        let button = SoundButton::new(AnimalId(index), BUTTON_W, BUTTON_H, ICON);
        let toggle = button.icon_offset(false);
        world.spawn((
            button,
            ScreenPosition::new(10.0, 100.0 + index as f32 * 100.0),
            ClickArea::new(ICON, ICON).with_offset(toggle),
        ));
    }

    world.spawn(Observer::new(play_toggle_observer));
    world.flush();
    world
}

fn button_entity(world: &mut World, animal: AnimalId) -> Entity {
    let mut query = world.query::<(Entity, &SoundButton)>();
    query
        .iter(world)
        .find(|(_, button)| button.animal == animal)
        .map(|(entity, _)| entity)
        .expect("button entity")
}

fn button_playing(world: &mut World, animal: AnimalId) -> bool {
    let mut query = world.query::<&SoundButton>();
    query
        .iter(world)
        .find(|button| button.animal == animal)
        .map(|button| button.playing)
        .unwrap()
}

fn audio_cmds(world: &mut World) -> Vec<AudioCmd> {
    let mut state = SystemState::<MessageReader<AudioCmd>>::new(world);
    let mut reader = state.get_mut(world);
    reader.read().cloned().collect()
}

fn clear_audio_cmds(world: &mut World) {
    world.resource_mut::<Messages<AudioCmd>>().clear();
}

fn send_audio_message(world: &mut World, message: AudioMessage) {
    let mut state = SystemState::<MessageWriter<AudioMessage>>::new(world);
    let mut writer = state.get_mut(world);
    writer.write(message);
    state.apply(world);
}

#[test]
fn toggling_twice_returns_the_flag_to_its_original_value() {
    let mut world = make_world();
    let cat = AnimalId(0);
    let entity = button_entity(&mut world, cat);

    assert!(!button_playing(&mut world, cat));

    world.trigger(PlayToggleClicked { button: entity });
    assert!(button_playing(&mut world, cat));
    let cmds = audio_cmds(&mut world);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(&cmds[0], AudioCmd::PlayPreview { id } if id == "cat"));

    clear_audio_cmds(&mut world);
    world.trigger(PlayToggleClicked { button: entity });
    assert!(!button_playing(&mut world, cat));
    let cmds = audio_cmds(&mut world);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(&cmds[0], AudioCmd::StopPreview { id } if id == "cat"));
}

#[test]
fn toggling_a_locked_button_does_nothing() {
    let mut world = make_world();
    let bird = AnimalId(1);
    let entity = button_entity(&mut world, bird);

    world.trigger(PlayToggleClicked { button: entity });

    assert!(!button_playing(&mut world, bird));
    assert!(audio_cmds(&mut world).is_empty());
}

#[test]
fn reconcile_resets_playing_when_the_preview_ends() {
    let mut world = make_world();
    let cat = AnimalId(0);
    let entity = button_entity(&mut world, cat);
    world.trigger(PlayToggleClicked { button: entity });
    assert!(button_playing(&mut world, cat));

    send_audio_message(
        &mut world,
        AudioMessage::PreviewFinished { id: "cat".into() },
    );
    let mut schedule = Schedule::default();
    schedule.add_systems(reconcile_soundboard);
    schedule.run(&mut world);

    assert!(!button_playing(&mut world, cat));
}

#[test]
fn reconcile_ignores_unrelated_messages() {
    let mut world = make_world();
    let cat = AnimalId(0);
    let entity = button_entity(&mut world, cat);
    world.trigger(PlayToggleClicked { button: entity });

    send_audio_message(&mut world, AudioMessage::FxLoaded { id: "cat".into() });
    send_audio_message(
        &mut world,
        AudioMessage::PreviewFinished {
            id: "walrus".into(),
        },
    );
    let mut schedule = Schedule::default();
    schedule.add_systems(reconcile_soundboard);
    schedule.run(&mut world);

    assert!(button_playing(&mut world, cat));
}

#[test]
fn picking_skips_locked_buttons_and_hits_unlocked_ones() {
    let mut world = make_world();
    let mut schedule = Schedule::default();
    schedule.add_systems(pointer_picking);

    // bird's toggle icon region, but bird is locked
    let bird_icon = Vector2 {
        x: 10.0 + BUTTON_W - ICON - 12.0 + ICON * 0.5,
        y: 200.0 + (BUTTON_H - ICON) * 0.5 + ICON * 0.5,
    };
    {
        let mut pointer = world.resource_mut::<PointerState>();
        pointer.pos = bird_icon;
        pointer.left.just_pressed = true;
    }
    schedule.run(&mut world);
    assert!(!button_playing(&mut world, AnimalId(1)));
    assert!(audio_cmds(&mut world).is_empty());

    // cat's toggle icon region works
    let cat_icon = Vector2 {
        x: 10.0 + BUTTON_W - ICON - 12.0 + ICON * 0.5,
        y: 100.0 + (BUTTON_H - ICON) * 0.5 + ICON * 0.5,
    };
    {
        let mut pointer = world.resource_mut::<PointerState>();
        pointer.pos = cat_icon;
    }
    schedule.run(&mut world);
    assert!(button_playing(&mut world, AnimalId(0)));
}

#[test]
fn unlock_propagates_to_the_button_without_mirroring() {
    let mut world = make_world();
    let mut schedule = Schedule::default();
    schedule.add_systems(pointer_picking);

    let bird_icon = Vector2 {
        x: 10.0 + BUTTON_W - ICON - 12.0 + ICON * 0.5,
        y: 200.0 + (BUTTON_H - ICON) * 0.5 + ICON * 0.5,
    };
    {
        let mut pointer = world.resource_mut::<PointerState>();
        pointer.pos = bird_icon;
        pointer.left.just_pressed = true;
    }
    schedule.run(&mut world);
    assert!(!button_playing(&mut world, AnimalId(1)));

    // unlocking the roster record is all it takes
    world.resource_mut::<Roster>().unlock(AnimalId(1));
    schedule.run(&mut world);
    assert!(button_playing(&mut world, AnimalId(1)));
}

#[test]
fn finished_oneshot_handles_are_reclaimed() {
    let mut world = make_world();
    let (first, second) = {
        let mut oneshots = world.resource_mut::<OneShots>();
        (oneshots.issue(), oneshots.issue())
    };

    send_audio_message(&mut world, AudioMessage::OneShotFinished { handle: first });
    let mut schedule = Schedule::default();
    schedule.add_systems(reclaim_oneshots);
    schedule.run(&mut world);

    let oneshots = world.resource::<OneShots>();
    assert!(!oneshots.is_live(first));
    assert!(oneshots.is_live(second));
    assert_eq!(oneshots.live(), 1);
}
