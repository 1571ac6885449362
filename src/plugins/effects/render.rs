//! Visual side of effects: short-lived particle bursts. Render-only; never
//! registered in headless runs.

use bevy::prelude::*;
use rand::Rng;

use crate::common::rng::GameRng;

use super::{EffectKind, EffectRequest};

const PARTICLES_PER_BURST: usize = 8;
const PARTICLE_LIFETIME: f32 = 0.45;

#[derive(Component)]
struct Particle {
    velocity: Vec2,
}

#[derive(Component, Deref, DerefMut)]
struct Lifetime(Timer);

pub fn plugin(app: &mut App) {
    app.add_systems(Update, (spawn_particles, drive_particles));
}

fn spawn_particles(
    mut commands: Commands,
    mut requests: MessageReader<EffectRequest>,
    mut rng: ResMut<GameRng>,
) {
    for request in requests.read() {
        let color = match request.kind {
            EffectKind::Destruction => Color::srgb(1.0, 0.6, 0.2),
            EffectKind::Pickup => Color::srgb(0.4, 1.0, 0.7),
        };
        for _ in 0..PARTICLES_PER_BURST {
            let angle = rng.0.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.0.gen_range(40.0..160.0);
            commands.spawn((
                Particle {
                    velocity: Vec2::from_angle(angle) * speed,
                },
                Lifetime(Timer::from_seconds(PARTICLE_LIFETIME, TimerMode::Once)),
                Sprite {
                    color,
                    custom_size: Some(Vec2::splat(3.0)),
                    ..default()
                },
                Transform::from_translation(request.position.extend(3.0)),
            ));
        }
    }
}

fn drive_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut particles: Query<(Entity, &Particle, &mut Lifetime, &mut Transform, &mut Sprite)>,
) {
    for (entity, particle, mut lifetime, mut transform, mut sprite) in &mut particles {
        lifetime.tick(time.delta());
        if lifetime.is_finished() {
            commands.entity(entity).despawn();
            continue;
        }
        transform.translation += (particle.velocity * time.delta_secs()).extend(0.0);
        let mut color = sprite.color.to_srgba();
        color.alpha = 1.0 - lifetime.fraction();
        sprite.color = color.into();
    }
}
