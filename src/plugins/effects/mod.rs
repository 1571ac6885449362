//! Effect requests.
//!
//! Gameplay systems announce "something worth showing happened here" and
//! move on; the render layer consumes the messages. Headless runs keep the
//! buffers without any consumer attached.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

pub mod render;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Destruction,
    Pickup,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct EffectRequest {
    pub kind: EffectKind,
    pub position: Vec2,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Messages<EffectRequest>>();
    app.add_systems(PostUpdate, update_effect_messages);
}

fn update_effect_messages(mut msgs: ResMut<Messages<EffectRequest>>) {
    msgs.update();
}
