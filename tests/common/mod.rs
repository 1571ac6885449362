//! Integration test harness.
//!
//! Keeps integration tests headless: `MinimalPlugins` provides the core
//! runtime, then `neon_swarm::game::configure_headless` installs the
//! gameplay plugins. No window, no renderer, no input devices; input-driven
//! systems tolerate the missing `ButtonInput` resources.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    neon_swarm::game::configure_headless(&mut app);

    // Keep high score persistence out of the working directory.
    let dir = std::env::temp_dir().join(format!("neon-swarm-test-{}", std::process::id()));
    let _ = std::fs::create_dir_all(&dir);
    app.insert_resource(neon_swarm::plugins::session::persistence::HighScoreStore::new(
        dir.join("save.json"),
    ));

    // `app.update()` does not build/finish plugins; avian registers its
    // diagnostics resources in `Plugin::finish`, so run it explicitly.
    app.finish();
    app.cleanup();

    app
}
