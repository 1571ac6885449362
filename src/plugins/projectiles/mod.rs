//! Player shots: message-based producer / consumer spawning over a fixed
//! pool.
//!
//! ```text
//!   Update (variable dt)
//!     request_player_shots   input + aim + powerup -> FireRequest messages
//!     allocate_shots_from_pool   pops ShotPool.free, writes components
//!
//!   FixedPostUpdate (fixed dt)
//!     physics emits CollisionStart
//!     resolve_shot_collisions    walls release, active enemies die + score
//!     return_to_pool_commit      PendingReturn -> Inactive, free list push
//! ```
//!
//! Producers never borrow the pool; the allocator is the single writer.
//! Dormant shots keep their physics components but carry empty collision
//! filters, so the pipeline never toggles archetypes.

pub mod allocator;
pub mod collision;
pub mod commit;
pub mod components;
pub mod messages;
pub mod pool;
pub mod request;


use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::session::session_running;

pub use components::{PooledShot, Shot, ShotState};

pub struct ProjectilesPlugin;

const POOL_CAPACITY: usize = 128;

fn update_fire_messages(mut msgs: ResMut<Messages<messages::FireRequest>>) {
    msgs.update();
}

fn init_fire_cooldown(mut commands: Commands, tunables: Res<Tunables>) {
    commands.insert_resource(request::FireCooldown::from_tunables(&tunables));
}

/// Round boundary: any in-flight shot goes back to the pool.
fn reset_shots(mut shots: Query<&mut ShotState, With<PooledShot>>) {
    for mut state in &mut shots {
        if *state == ShotState::Active {
            *state = ShotState::PendingReturn;
        }
    }
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(pool::ShotPool::new(POOL_CAPACITY))
            .add_systems(Startup, (pool::init_shot_pool, init_fire_cooldown));

        app.init_resource::<Messages<messages::FireRequest>>();
        app.add_systems(PostUpdate, update_fire_messages);

        app.add_systems(OnEnter(GameState::InGame), reset_shots);

        // Firing is rejected outright while the session is paused.
        app.add_systems(
            Update,
            (
                request::request_player_shots,
                allocator::allocate_shots_from_pool.after(request::request_player_shots),
            )
                .run_if(in_state(GameState::InGame).and(session_running)),
        );

        app.add_systems(
            FixedPostUpdate,
            (
                collision::resolve_shot_collisions.after(CollisionEventSystems),
                commit::return_to_pool_commit.after(collision::resolve_shot_collisions),
            )
                .run_if(in_state(GameState::InGame)),
        );
    }
}
