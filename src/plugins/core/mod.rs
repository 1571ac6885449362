//! Core plugin: shared resources and global settings.

use bevy::prelude::*;

use crate::common::rng::GameRng;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.insert_resource(GameRng::from_entropy());
    app.insert_resource(ClearColor(Color::srgb(0.04, 0.04, 0.07)));
}
