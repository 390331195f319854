//! Progression-engine integration tests on a headless world.
//!
//! These drive the click observer, the deferred unlock, the verdict banner,
//! and the pop animation exactly as the game schedule does, with
//! hand-stepped time and no window or audio device.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use raylib::prelude::Vector2;

use moowho::components::animal::Animal;
use moowho::components::clickarea::ClickArea;
use moowho::components::pop::Pop;
use moowho::components::scale::Scale;
use moowho::components::screenposition::ScreenPosition;
use moowho::events::audio::AudioCmd;
use moowho::events::click::AnimalClicked;
use moowho::resources::feedback::FeedbackBanner;
use moowho::resources::input::PointerState;
use moowho::resources::oneshots::OneShots;
use moowho::resources::pendingunlock::PendingUnlock;
use moowho::resources::roster::{AnimalId, Roster};
use moowho::resources::worldtime::WorldTime;
use moowho::systems::feedback::feedback_banner_system;
use moowho::systems::picking::pointer_picking;
use moowho::systems::pop::pop_system;
use moowho::systems::progression::{
    FEEDBACK_DURATION, UNLOCK_DELAY, animal_clicked_observer, pending_unlock_system,
};
use moowho::systems::time::update_world_time;

const ORDER: [(&str, &str); 6] = [
    ("cat", "CAT"),
    ("bird", "BIRD"),
    ("lion", "LION"),
    ("elephant", "ELEPHANT"),
    ("dog", "DOG"),
    ("cow", "COW"),
];

const SPRITE: f32 = 140.0;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(Roster::from_names(&ORDER));
    world.insert_resource(FeedbackBanner::default());
    world.insert_resource(PendingUnlock::default());
    world.insert_resource(OneShots::default());
    world.insert_resource(PointerState::default());
    world.init_resource::<Messages<AudioCmd>>();

    for index in 0..ORDER.len() {
        world.spawn((
            Animal {
                id: AnimalId(index),
            },
            ScreenPosition::new(100.0 + index as f32 * 200.0, 300.0),
            ClickArea::new(SPRITE, SPRITE).with_offset(Vector2 { x: -70.0, y: -70.0 }),
            Pop::default(),
            Scale::default(),
        ));
    }

    world.spawn(Observer::new(animal_clicked_observer));
    world.flush();
    world
}

fn click(world: &mut World, name: &str) {
    let id = world
        .resource::<Roster>()
        .index_of(name)
        .expect("animal in roster");
    world.trigger(AnimalClicked { id });
}

fn tick(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems((pending_unlock_system, feedback_banner_system, pop_system));
    schedule.run(world);
}

fn audio_cmds(world: &mut World) -> Vec<AudioCmd> {
    let mut state = SystemState::<MessageReader<AudioCmd>>::new(world);
    let mut reader = state.get_mut(world);
    reader.read().cloned().collect()
}

fn clear_audio_cmds(world: &mut World) {
    world.resource_mut::<Messages<AudioCmd>>().clear();
}

fn is_unlocked(world: &World, name: &str) -> bool {
    let roster = world.resource::<Roster>();
    let id = roster.index_of(name).unwrap();
    roster.get(id).unwrap().unlocked()
}

fn is_found(world: &World, name: &str) -> bool {
    let roster = world.resource::<Roster>();
    let id = roster.index_of(name).unwrap();
    roster.get(id).unwrap().found
}

fn pop_of(world: &mut World, name: &str) -> Pop {
    let id = world.resource::<Roster>().index_of(name).unwrap();
    let mut query = world.query::<(&Animal, &Pop)>();
    query
        .iter(world)
        .find(|(animal, _)| animal.id == id)
        .map(|(_, pop)| pop.clone())
        .expect("animal entity")
}

#[test]
fn clicking_a_locked_animal_is_a_no_op() {
    let mut world = make_world();
    click(&mut world, "lion");

    assert!(!is_found(&world, "lion"));
    assert!(!is_unlocked(&world, "lion"));
    assert!(world.resource::<FeedbackBanner>().text.is_empty());
    assert!(world.resource::<PendingUnlock>().is_idle());
    assert!(audio_cmds(&mut world).is_empty());
    assert!(!pop_of(&mut world, "lion").playing);
}

#[test]
fn correct_click_marks_found_and_emits_feedback() {
    let mut world = make_world();
    click(&mut world, "cat");

    assert!(is_found(&world, "cat"));
    let banner = world.resource::<FeedbackBanner>();
    assert_eq!(banner.text, "CORRECT!");
    assert_eq!(banner.remaining, FEEDBACK_DURATION);

    let bird = world.resource::<Roster>().index_of("bird").unwrap();
    assert_eq!(
        *world.resource::<PendingUnlock>(),
        PendingUnlock::Pending {
            target: bird,
            remaining: UNLOCK_DELAY
        }
    );

    // the animal's own call plus the correct chime, each with a fresh handle
    let cmds = audio_cmds(&mut world);
    assert_eq!(cmds.len(), 2);
    assert!(matches!(&cmds[0], AudioCmd::PlayOneShot { id, handle: 0 } if id == "cat"));
    assert!(matches!(&cmds[1], AudioCmd::PlayOneShot { id, handle: 1 } if id == "correct"));
    assert_eq!(world.resource::<OneShots>().live(), 2);

    assert!(pop_of(&mut world, "cat").playing);
}

#[test]
fn successor_unlocks_after_exactly_the_delay() {
    let mut world = make_world();
    click(&mut world, "cat");

    tick(&mut world, UNLOCK_DELAY - 0.05);
    assert!(!is_unlocked(&world, "bird"));
    assert!(!world.resource::<PendingUnlock>().is_idle());

    tick(&mut world, 0.1);
    assert!(is_unlocked(&world, "bird"));
    assert!(world.resource::<PendingUnlock>().is_idle());
}

#[test]
fn wrong_click_changes_nothing_and_emits_wrong() {
    let mut world = make_world();
    // Hand-unlock bird so an unlocked, not-expected, not-found click exists.
    {
        let mut roster = world.resource_mut::<Roster>();
        let bird = roster.index_of("bird").unwrap();
        roster.unlock(bird);
        assert_eq!(roster.expected(), Some(AnimalId(0)));
    }

    click(&mut world, "bird");

    assert!(!is_found(&world, "bird"));
    assert!(!is_found(&world, "cat"));
    assert!(world.resource::<PendingUnlock>().is_idle());
    let banner = world.resource::<FeedbackBanner>();
    assert_eq!(banner.text, "WRONG!");

    let cmds = audio_cmds(&mut world);
    assert_eq!(cmds.len(), 2);
    assert!(matches!(&cmds[0], AudioCmd::PlayOneShot { id, .. } if id == "bird"));
    assert!(matches!(&cmds[1], AudioCmd::PlayOneShot { id, .. } if id == "incorrect"));
}

#[test]
fn found_click_is_a_quiet_acknowledgment() {
    let mut world = make_world();
    click(&mut world, "cat");
    clear_audio_cmds(&mut world);
    world.resource_mut::<FeedbackBanner>().text.clear();

    let pending_before = *world.resource::<PendingUnlock>();
    click(&mut world, "cat");

    // pop and the call replay, but no verdict, no chime, no banner
    assert!(pop_of(&mut world, "cat").playing);
    let cmds = audio_cmds(&mut world);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(&cmds[0], AudioCmd::PlayOneShot { id, .. } if id == "cat"));
    assert!(world.resource::<FeedbackBanner>().text.is_empty());
    assert_eq!(*world.resource::<PendingUnlock>(), pending_before);
}

#[test]
fn feedback_banner_clears_exactly_at_expiry() {
    let mut world = make_world();
    click(&mut world, "cat");

    tick(&mut world, FEEDBACK_DURATION - 0.1);
    assert_eq!(world.resource::<FeedbackBanner>().text, "CORRECT!");

    tick(&mut world, 0.2);
    assert!(world.resource::<FeedbackBanner>().text.is_empty());
    assert!(!world.resource::<FeedbackBanner>().is_visible());
}

#[test]
fn pop_scale_peaks_then_returns_to_exactly_one() {
    let mut world = make_world();
    click(&mut world, "cat");

    let cat = world.resource::<Roster>().index_of("cat").unwrap();
    let scale_of = |world: &mut World| {
        let mut query = world.query::<(&Animal, &Scale)>();
        query
            .iter(world)
            .find(|(animal, _)| animal.id == cat)
            .map(|(_, scale)| scale.factor)
            .unwrap()
    };

    assert_eq!(scale_of(&mut world), 1.0);

    // default pop: 0.5 s duration, 1.3 peak
    tick(&mut world, 0.25);
    assert!((scale_of(&mut world) - 1.3).abs() < 1e-6);

    tick(&mut world, 0.25);
    assert_eq!(scale_of(&mut world), 1.0);
    assert!(!pop_of(&mut world, "cat").playing);
}

#[test]
fn at_most_one_animal_is_expected_until_the_roster_completes() {
    let mut world = make_world();
    let names: Vec<&str> = ORDER.iter().map(|(name, _)| *name).collect();

    for name in &names {
        {
            let roster = world.resource::<Roster>();
            let candidates = roster
                .iter()
                .filter(|(_, record)| record.unlocked() && !record.found)
                .count();
            assert_eq!(candidates, 1);
            assert_eq!(roster.expected(), roster.index_of(name));
        }
        click(&mut world, name);
        tick(&mut world, UNLOCK_DELAY + 0.05);
    }

    let roster = world.resource::<Roster>();
    assert!(roster.is_complete());
    assert_eq!(roster.expected(), None);
}

#[test]
fn end_to_end_scenario() {
    let mut world = make_world();

    // click cat: found, bird scheduled
    click(&mut world, "cat");
    assert!(is_found(&world, "cat"));
    assert!(!is_unlocked(&world, "bird"));

    // after the delay, bird becomes interactive
    tick(&mut world, UNLOCK_DELAY + 0.05);
    assert!(is_unlocked(&world, "bird"));

    // lion is still locked: clicking it does nothing
    clear_audio_cmds(&mut world);
    click(&mut world, "lion");
    assert!(!is_found(&world, "lion"));
    assert!(audio_cmds(&mut world).is_empty());

    // bird is now expected: clicking it schedules lion
    click(&mut world, "bird");
    assert!(is_found(&world, "bird"));
    let lion = world.resource::<Roster>().index_of("lion").unwrap();
    assert!(matches!(
        *world.resource::<PendingUnlock>(),
        PendingUnlock::Pending { target, .. } if target == lion
    ));
}

#[test]
fn click_after_completion_is_quiet() {
    let mut world = make_world();
    for (name, _) in ORDER {
        click(&mut world, name);
        tick(&mut world, UNLOCK_DELAY + 0.05);
    }
    assert!(world.resource::<Roster>().is_complete());

    // let the last banner expire, then re-tap a found animal
    tick(&mut world, FEEDBACK_DURATION);
    clear_audio_cmds(&mut world);
    click(&mut world, "dog");

    assert!(world.resource::<FeedbackBanner>().text.is_empty());
    let cmds = audio_cmds(&mut world);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(&cmds[0], AudioCmd::PlayOneShot { id, .. } if id == "dog"));
}

#[test]
fn picking_routes_clicks_through_hit_regions() {
    let mut world = make_world();

    // cat entity sits at (100, 300) with a 140px region centered on it
    {
        let mut pointer = world.resource_mut::<PointerState>();
        pointer.pos = Vector2 { x: 110.0, y: 310.0 };
        pointer.left.just_pressed = true;
    }
    let mut schedule = Schedule::default();
    schedule.add_systems(pointer_picking);
    schedule.run(&mut world);

    assert!(is_found(&world, "cat"));

    // a click over empty space reaches nothing
    clear_audio_cmds(&mut world);
    {
        let mut pointer = world.resource_mut::<PointerState>();
        pointer.pos = Vector2 {
            x: 700.0,
            y: 800.0,
        };
    }
    schedule.run(&mut world);
    assert!(audio_cmds(&mut world).is_empty());

    // no click edge, no event, even over the sprite
    {
        let mut pointer = world.resource_mut::<PointerState>();
        pointer.pos = Vector2 { x: 110.0, y: 310.0 };
        pointer.left.just_pressed = false;
    }
    schedule.run(&mut world);
    assert!(audio_cmds(&mut world).is_empty());
}
