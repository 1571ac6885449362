//! Enemy lifecycle: catalog, pooling, wave spawning, behavior and contact
//! resolution.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::session::session_running;

pub mod behavior;
pub mod components;
pub mod contact;
pub mod pool;
pub mod registry;
pub mod spawner;


pub use components::{Enemy, EnemyState};
pub use spawner::EnemiesAlive;

pub fn plugin(app: &mut App) {
    app.insert_resource(registry::EnemyRegistry::catalog())
        .init_resource::<pool::EnemyPool>()
        .init_resource::<spawner::EnemiesAlive>();

    app.add_systems(Startup, init_spawn_timer);
    app.add_systems(OnEnter(GameState::InGame), reset_round);

    app.add_systems(
        Update,
        spawner::spawn_waves.run_if(in_state(GameState::InGame).and(session_running)),
    );

    // The fixed clock follows virtual time, so a paused session freezes all
    // behavior including arming timers.
    app.add_systems(
        FixedUpdate,
        (
            behavior::tick_arming,
            behavior::seek_player,
            behavior::wander,
            behavior::spin,
            behavior::reflect_at_walls,
        )
            .chain()
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        (
            contact::resolve_player_contacts
                .after(CollisionEventSystems)
                .before(crate::plugins::projectiles::commit::return_to_pool_commit),
            pool::recycle_enemies
                .after(contact::resolve_player_contacts)
                .after(crate::plugins::projectiles::collision::resolve_shot_collisions),
        )
            .run_if(in_state(GameState::InGame)),
    );
}

fn init_spawn_timer(mut commands: Commands, tunables: Res<Tunables>) {
    commands.insert_resource(spawner::SpawnTimer::from_tunables(&tunables));
}

/// Round boundary: everything live goes back to the pool and the spawn
/// clock starts over. Runs on the initial transition into play and on every
/// restart.
fn reset_round(
    mut enemies: Query<&mut EnemyState>,
    mut alive: ResMut<EnemiesAlive>,
    mut timer: Option<ResMut<spawner::SpawnTimer>>,
) {
    for mut state in &mut enemies {
        if !matches!(*state, EnemyState::Inactive) {
            *state = EnemyState::PendingReturn;
        }
    }
    alive.0 = 0;
    if let Some(timer) = timer.as_mut() {
        timer.0.reset();
    }
}
