//! Session readout.
//!
//! Gameplay exposes plain values (score, best, lives); this publishes a
//! line to the log sink whenever any of them change. A text overlay can
//! subscribe to the same snapshot later without touching gameplay.

use bevy::prelude::*;

use crate::plugins::session::Session;

pub fn plugin(app: &mut App) {
    app.add_systems(Update, publish_session);
}

fn publish_session(session: Res<Session>, mut last: Local<Option<(u64, u64, u32)>>) {
    let snapshot = (session.score(), session.high_score(), session.lives());
    if *last == Some(snapshot) {
        return;
    }
    *last = Some(snapshot);
    info!(
        "score {} best {} lives {}",
        snapshot.0, snapshot.1, snapshot.2
    );
}
