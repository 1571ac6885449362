use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;

#[test]
fn spawn_creates_player() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn);
    assert!(world.query::<&super::Player>().iter(&world).next().is_some());
}

#[test]
fn apply_movement_sets_velocity() {
    let mut world = World::new();
    world.insert_resource(Tunables {
        player_speed: 100.0,
        ..default()
    });
    world.insert_resource(super::PlayerInput {
        move_axis: Vec2::new(1.0, 0.0),
    });
    world.spawn((super::Player, LinearVelocity::ZERO, Transform::default()));

    run_system_once(&mut world, super::apply_movement);

    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec2::new(100.0, 0.0));
}

#[test]
fn apply_movement_clamps_to_arena() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(super::PlayerInput::default());
    world.spawn((
        super::Player,
        LinearVelocity::ZERO,
        Transform::from_xyz(10_000.0, -10_000.0, 1.0),
    ));

    run_system_once(&mut world, super::apply_movement);

    let tunables = Tunables::default();
    let tf = world.query::<&Transform>().iter(&world).next().unwrap();
    assert_eq!(tf.translation.x, tunables.arena_half_width);
    assert_eq!(tf.translation.y, -tunables.arena_half_height);
}
