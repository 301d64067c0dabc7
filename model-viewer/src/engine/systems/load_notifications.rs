use crate::engine::core::app_state::LoadState;
use crate::engine::lifecycle::events::HintDismissed;
use crate::engine::lifecycle::transitions::{LoadFailure, apply_model_load_events};
use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;

/// Forwards lifecycle changes to the host page as RPC notifications.
pub struct LoadNotificationsPlugin;

impl Plugin for LoadNotificationsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                notify_load_progress.run_if(resource_changed::<LoadingProgress>),
                notify_load_state.run_if(state_changed::<LoadState>),
                notify_hint_dismissed,
            )
                .after(apply_model_load_events),
        );
    }
}

pub fn notify_load_progress(
    mut rpc_interface: ResMut<WebRpcInterface>,
    progress: Res<LoadingProgress>,
) {
    if progress.total == 0 {
        return;
    }
    rpc_interface.send_notification("model_load_progress", progress.to_json());
}

pub fn notify_load_state(
    mut rpc_interface: ResMut<WebRpcInterface>,
    state: Res<State<LoadState>>,
    failure: Option<Res<LoadFailure>>,
) {
    rpc_interface.send_notification(
        "model_load_state",
        serde_json::json!({
            "state": state.get().as_str(),
            "error": failure.map(|f| f.0.to_string()),
        }),
    );
}

pub fn notify_hint_dismissed(
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut dismissed: EventReader<HintDismissed>,
) {
    for event in dismissed.read() {
        rpc_interface.send_notification(
            "interaction_hint_dismissed",
            serde_json::json!({ "kind": event.kind.as_str() }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::lifecycle::events::ModelLoadEvent;
    use crate::engine::test_support::{lifecycle_app, send};

    fn notification_app() -> App {
        let mut app = lifecycle_app();
        app.init_resource::<WebRpcInterface>()
            .add_plugins(LoadNotificationsPlugin);
        app
    }

    fn sent(app: &App) -> Vec<(String, serde_json::Value)> {
        app.world()
            .resource::<WebRpcInterface>()
            .pending_notifications()
            .iter()
            .map(|n| (n.method.clone(), n.params.clone()))
            .collect()
    }

    #[test]
    fn progress_and_state_are_forwarded_in_order() {
        let mut app = notification_app();
        app.update();

        send(&mut app, ModelLoadEvent::Progress { loaded: 1, total: 2 });
        app.update();
        send(
            &mut app,
            ModelLoadEvent::Loaded {
                scene: Handle::default(),
            },
        );
        app.update();
        app.update();

        let methods: Vec<String> = sent(&app).into_iter().map(|(m, _)| m).collect();
        assert_eq!(
            methods,
            vec![
                "model_load_state".to_string(),
                "model_load_progress".to_string(),
                "model_load_state".to_string(),
            ]
        );

        let last = sent(&app).pop().map(|(_, p)| p).unwrap_or_default();
        assert_eq!(last["state"], "loaded");
    }

    #[test]
    fn failure_notification_includes_error() {
        let mut app = notification_app();
        app.update();

        send(
            &mut app,
            ModelLoadEvent::Failed(crate::engine::loading::error::AssetLoadFailure::NoScene {
                path: "models/scene.gltf".to_string(),
            }),
        );
        app.update();
        app.update();

        let last = sent(&app).pop().map(|(_, p)| p).unwrap_or_default();
        assert_eq!(last["state"], "failed");
        assert!(last["error"].as_str().is_some_and(|e| e.contains("no scene")));
    }
}
