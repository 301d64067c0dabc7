use crate::engine::core::app_state::LoadState;
use crate::engine::core::config::ViewerConfig;
use crate::engine::lifecycle::events::ModelLoadEvent;
use crate::engine::loading::error::AssetLoadFailure;
use crate::engine::loading::progress::LoadingProgress;
use bevy::prelude::*;

/// Scene root of the installed model.
#[derive(Component)]
pub struct ViewerModel;

/// Failure that ended the load, kept for diagnostics and host queries.
#[derive(Resource, Debug, Clone)]
pub struct LoadFailure(pub AssetLoadFailure);

/// Apply loader results while the load is outstanding.
///
/// Only runs in `LoadState::Loading`, and stops at the first terminal event,
/// so a second terminal event (same frame or later) can never be applied.
pub fn apply_model_load_events(
    mut commands: Commands,
    mut load_events: EventReader<ModelLoadEvent>,
    config: Res<ViewerConfig>,
    mut progress: ResMut<LoadingProgress>,
    mut next_state: ResMut<NextState<LoadState>>,
) {
    for event in load_events.read() {
        match event {
            ModelLoadEvent::Progress { loaded, total } => {
                on_asset_load_progress(&mut progress, *loaded, *total);
            }
            ModelLoadEvent::Loaded { scene } => {
                on_asset_loaded(&mut commands, &config, scene.clone(), &mut next_state);
                break;
            }
            ModelLoadEvent::Failed(failure) => {
                on_asset_load_failed(&mut commands, failure, &mut next_state);
                break;
            }
        }
    }
}

fn on_asset_load_progress(progress: &mut LoadingProgress, loaded: u64, total: u64) {
    progress.loaded = loaded;
    progress.total = total;
    if let Some(percent) = progress.percent() {
        debug!("Model {percent:.0}% loaded");
    }
}

// The model is spawned here, before the state change; the indicator is only
// removed on entering `Loaded`, which happens after these commands apply.
fn on_asset_loaded(
    commands: &mut Commands,
    config: &ViewerConfig,
    scene: Handle<Scene>,
    next_state: &mut NextState<LoadState>,
) {
    info!("✓ Model loaded, installing at scale {}", config.model_scale);
    commands.spawn((
        ViewerModel,
        Name::new("Model"),
        SceneRoot(scene),
        Transform::from_scale(config.model_scale),
    ));
    next_state.set(LoadState::Loaded);
}

fn on_asset_load_failed(
    commands: &mut Commands,
    failure: &AssetLoadFailure,
    next_state: &mut NextState<LoadState>,
) {
    error!("Model load failed: {failure}");
    commands.insert_resource(LoadFailure(failure.clone()));
    next_state.set(LoadState::Failed);
}
