//! Timed powerup drops and radius pickup.
//!
//! Pickups are plain sprites with no collider; collection is a distance
//! check against the player each fixed tick. Only one powerup is held at a
//! time and picking up a new one replaces the old.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::Rng;

use crate::common::rng::GameRng;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::effects::{EffectKind, EffectRequest};
use crate::plugins::player::Player;
use crate::plugins::session::{session_running, Session};


pub const PICKUP_RADIUS: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerupKind {
    DoubleShot,
    TripleShot,
    Shield,
}

impl PowerupKind {
    fn color(self) -> Color {
        match self {
            Self::DoubleShot => Color::srgb(0.3, 0.7, 1.0),
            Self::TripleShot => Color::srgb(0.6, 0.3, 1.0),
            Self::Shield => Color::srgb(0.3, 1.0, 0.6),
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Powerup {
    pub kind: PowerupKind,
}

#[derive(Resource, Debug)]
pub struct PowerupSpawnTimer(pub Timer);

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, init_spawn_timer);
    app.add_systems(
        Update,
        spawn_powerups.run_if(in_state(GameState::InGame).and(session_running)),
    );
    app.add_systems(
        FixedUpdate,
        collect_powerups.run_if(in_state(GameState::InGame)),
    );
}

fn init_spawn_timer(mut commands: Commands, tunables: Res<Tunables>) {
    commands.insert_resource(PowerupSpawnTimer(Timer::from_seconds(
        tunables.powerup_spawn_interval,
        TimerMode::Repeating,
    )));
}

fn roll_kind(rng: &mut GameRng) -> PowerupKind {
    match rng.0.gen_range(0..3) {
        0 => PowerupKind::DoubleShot,
        1 => PowerupKind::TripleShot,
        _ => PowerupKind::Shield,
    }
}

pub fn spawn_powerups(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut rng: ResMut<GameRng>,
    mut timer: ResMut<PowerupSpawnTimer>,
) {
    timer.0.tick(time.delta());
    if !timer.0.just_finished() {
        return;
    }

    let kind = roll_kind(&mut rng);
    let margin = 50.0;
    let position = Vec2::new(
        rng.0
            .gen_range(-tunables.arena_half_width + margin..tunables.arena_half_width - margin),
        rng.0
            .gen_range(-tunables.arena_half_height + margin..tunables.arena_half_height - margin),
    );

    debug!("powerup {:?} dropped at {position}", kind);
    commands.spawn((
        Name::new("Powerup"),
        Powerup { kind },
        Sprite {
            color: kind.color(),
            custom_size: Some(Vec2::splat(16.0)),
            ..default()
        },
        Transform::from_translation(position.extend(1.0)),
        DespawnOnExit(GameState::InGame),
    ));
}

pub fn collect_powerups(
    mut commands: Commands,
    players: Query<&Transform, With<Player>>,
    pickups: Query<(Entity, &Powerup, &Transform)>,
    mut session: ResMut<Session>,
    mut effects: MessageWriter<EffectRequest>,
) {
    let Ok(player_tf) = players.single() else {
        return;
    };
    let player_pos = player_tf.translation.truncate();

    for (entity, powerup, transform) in &pickups {
        let position = transform.translation.truncate();
        if player_pos.distance(position) > PICKUP_RADIUS {
            continue;
        }
        info!("picked up {:?}", powerup.kind);
        session.set_powerup(powerup.kind);
        effects.write(EffectRequest {
            kind: EffectKind::Pickup,
            position,
        });
        commands.entity(entity).despawn();
    }
}
