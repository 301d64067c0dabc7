//! Headless app harness for lifecycle tests.

use crate::engine::core::app_state::LoadState;
use crate::engine::core::config::ViewerConfig;
use crate::engine::lifecycle::ViewerLifecyclePlugin;
use bevy::ecs::query::QueryFilter;
use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::window::{WindowEvent, WindowResized};
use std::time::Duration;

/// App with the lifecycle plugin and no window, renderer or asset server.
/// Loader results are injected by writing `ModelLoadEvent`s directly.
pub(crate) fn lifecycle_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, InputPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(ViewerConfig::default())
        .add_event::<WindowEvent>()
        .add_event::<WindowResized>()
        .add_plugins(ViewerLifecyclePlugin);
    app
}

pub(crate) fn send<E: Event>(app: &mut App, event: E) {
    app.world_mut().send_event(event);
}

pub(crate) fn count<F: QueryFilter>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    query.iter(app.world()).count()
}

pub(crate) fn load_state(app: &App) -> LoadState {
    *app.world().resource::<State<LoadState>>().get()
}
