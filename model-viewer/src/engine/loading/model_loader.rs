use crate::engine::core::config::ViewerConfig;
use crate::engine::lifecycle::events::ModelLoadEvent;
use crate::engine::lifecycle::transitions::apply_model_load_events;
use crate::engine::loading::error::AssetLoadFailure;
use bevy::asset::{LoadState as AssetLoadState, RecursiveDependencyLoadState};
use bevy::gltf::Gltf;
use bevy::prelude::*;

/// Progress units reported by the poller: the document, then its dependencies.
pub const LOAD_STAGES: u64 = 2;

/// Tracks the single outstanding model request.
#[derive(Resource, Default)]
pub struct ModelLoader {
    handle: Option<Handle<Gltf>>,
    reported_stage: u64,
    finished: bool,
}

/// What one look at the asset server says about the request.
#[derive(Debug)]
pub enum LoadPoll {
    Pending { stage: u64 },
    Ready,
    Failed(AssetLoadFailure),
}

impl ModelLoader {
    /// Progress event for `stage`, if it moves past what was already reported.
    fn advance_to(&mut self, stage: u64) -> Option<ModelLoadEvent> {
        if self.finished || stage <= self.reported_stage {
            return None;
        }
        self.reported_stage = stage;
        Some(ModelLoadEvent::Progress {
            loaded: stage,
            total: LOAD_STAGES,
        })
    }

    /// Marks the request finished. Returns `false` if it already was.
    fn finish(&mut self) -> bool {
        !std::mem::replace(&mut self.finished, true)
    }
}

pub struct ModelLoaderPlugin;

impl Plugin for ModelLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModelLoader>()
            .add_systems(Startup, start_loading)
            .add_systems(Update, poll_model_load.before(apply_model_load_events));
    }
}

// Issue the request; the asset server does the I/O on its own task pool.
pub fn start_loading(
    mut loader: ResMut<ModelLoader>,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
) {
    info!("Loading model from: {}", config.model_path);
    loader.handle = Some(asset_server.load(&config.model_path));
}

/// Classify the asset server's view of the document and its dependencies.
pub fn classify_load(
    asset: Option<AssetLoadState>,
    dependencies: Option<RecursiveDependencyLoadState>,
) -> LoadPoll {
    match asset {
        Some(AssetLoadState::Failed(err)) => LoadPoll::Failed(AssetLoadFailure::Load(err)),
        Some(AssetLoadState::Loaded) => match dependencies {
            Some(RecursiveDependencyLoadState::Failed(err)) => {
                LoadPoll::Failed(AssetLoadFailure::Dependency(err))
            }
            Some(RecursiveDependencyLoadState::Loaded) => LoadPoll::Ready,
            _ => LoadPoll::Pending { stage: 1 },
        },
        _ => LoadPoll::Pending { stage: 0 },
    }
}

pub fn poll_model_load(
    mut loader: ResMut<ModelLoader>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    config: Res<ViewerConfig>,
    mut load_events: EventWriter<ModelLoadEvent>,
) {
    if loader.finished {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    let poll = classify_load(
        asset_server.get_load_state(handle.id()),
        asset_server.get_recursive_dependency_load_state(handle.id()),
    );

    match poll {
        LoadPoll::Pending { stage } => {
            if let Some(progress) = loader.advance_to(stage) {
                load_events.write(progress);
            }
        }
        LoadPoll::Failed(failure) => {
            if loader.finish() {
                load_events.write(ModelLoadEvent::Failed(failure));
            }
        }
        LoadPoll::Ready => {
            let Some(gltf) = gltfs.get(&handle) else {
                return;
            };
            if let Some(progress) = loader.advance_to(LOAD_STAGES) {
                load_events.write(progress);
            }
            if !loader.finish() {
                return;
            }

            let event = match select_scene(
                gltf.default_scene.as_ref(),
                &gltf.scenes,
                &config.model_path,
            ) {
                Ok(scene) => ModelLoadEvent::Loaded { scene },
                Err(failure) => ModelLoadEvent::Failed(failure),
            };
            load_events.write(event);
        }
    }
}

/// The document's default scene, else its first scene.
pub fn select_scene(
    default_scene: Option<&Handle<Scene>>,
    scenes: &[Handle<Scene>],
    path: &str,
) -> Result<Handle<Scene>, AssetLoadFailure> {
    default_scene
        .or_else(|| scenes.first())
        .cloned()
        .ok_or_else(|| AssetLoadFailure::NoScene {
            path: path.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::AssetLoadError;
    use bevy::asset::io::AssetReaderError;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn not_found() -> Arc<AssetLoadError> {
        Arc::new(AssetLoadError::from(AssetReaderError::NotFound(
            PathBuf::from("models/scene.gltf"),
        )))
    }

    #[test]
    fn unloaded_document_is_pending_at_stage_zero() {
        assert!(matches!(
            classify_load(None, None),
            LoadPoll::Pending { stage: 0 }
        ));
        assert!(matches!(
            classify_load(Some(AssetLoadState::Loading), None),
            LoadPoll::Pending { stage: 0 }
        ));
    }

    #[test]
    fn document_loaded_with_pending_dependencies_is_stage_one() {
        let poll = classify_load(
            Some(AssetLoadState::Loaded),
            Some(RecursiveDependencyLoadState::Loading),
        );
        assert!(matches!(poll, LoadPoll::Pending { stage: 1 }));
    }

    #[test]
    fn document_and_dependencies_loaded_is_ready() {
        let poll = classify_load(
            Some(AssetLoadState::Loaded),
            Some(RecursiveDependencyLoadState::Loaded),
        );
        assert!(matches!(poll, LoadPoll::Ready));
    }

    #[test]
    fn document_failure_wins_over_dependency_state() {
        let poll = classify_load(
            Some(AssetLoadState::Failed(not_found())),
            Some(RecursiveDependencyLoadState::Loading),
        );
        assert!(matches!(poll, LoadPoll::Failed(AssetLoadFailure::Load(_))));
    }

    #[test]
    fn dependency_failure_is_reported_as_such() {
        let poll = classify_load(
            Some(AssetLoadState::Loaded),
            Some(RecursiveDependencyLoadState::Failed(not_found())),
        );
        assert!(matches!(
            poll,
            LoadPoll::Failed(AssetLoadFailure::Dependency(_))
        ));
    }

    #[test]
    fn default_scene_is_preferred() {
        let default = Handle::<Scene>::weak_from_u128(1);
        let scenes = [Handle::weak_from_u128(2), Handle::weak_from_u128(1)];

        let selected = select_scene(Some(&default), &scenes, "models/scene.gltf");
        assert!(selected.is_ok_and(|scene| scene == default));
    }

    #[test]
    fn first_scene_is_used_without_a_default() {
        let scenes = [Handle::<Scene>::weak_from_u128(2), Handle::weak_from_u128(3)];

        let selected = select_scene(None, &scenes, "models/scene.gltf");
        assert!(selected.is_ok_and(|scene| scene == scenes[0]));
    }

    #[test]
    fn document_without_scenes_fails() {
        let selected = select_scene(None, &[], "models/scene.gltf");
        assert!(matches!(
            selected,
            Err(AssetLoadFailure::NoScene { ref path }) if path == "models/scene.gltf"
        ));
    }

    #[test]
    fn progress_is_reported_once_per_stage() {
        let mut loader = ModelLoader::default();
        assert!(loader.advance_to(0).is_none());
        assert!(matches!(
            loader.advance_to(1),
            Some(ModelLoadEvent::Progress {
                loaded: 1,
                total: LOAD_STAGES
            })
        ));
        assert!(loader.advance_to(1).is_none());
    }

    #[test]
    fn nothing_is_reported_after_finishing() {
        let mut loader = ModelLoader::default();
        assert!(loader.finish());
        assert!(!loader.finish());
        assert!(loader.advance_to(LOAD_STAGES).is_none());
    }
}
