use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
// Crate engine modules
use crate::engine::camera::OrbitCameraPlugin;
use crate::engine::core::config::ViewerConfig;
use crate::engine::core::window_config::create_window_config;
use crate::engine::lifecycle::ViewerLifecyclePlugin;
use crate::engine::loading::model_loader::ModelLoaderPlugin;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::systems::load_notifications::LoadNotificationsPlugin;
use crate::engine::systems::viewport::ViewportPlugin;
// Host page bridge
use crate::rpc::web_rpc::WebRpcPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    // Configuration must exist before any Startup system reads it.
    app.insert_resource(ViewerConfig::default());

    app.add_plugins(create_default_plugins())
        .add_plugins(ViewerLifecyclePlugin)
        .add_plugins(ModelLoaderPlugin)
        .add_plugins(OrbitCameraPlugin)
        .add_plugins(ViewportPlugin)
        .add_plugins(WebRpcPlugin)
        .add_plugins(LoadNotificationsPlugin);

    app.add_systems(Startup, spawn_lighting);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    // No .meta files are shipped next to the model.
    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
