use bevy::prelude::*;

/// Outcome of the single model load this viewer performs.
///
/// Starts in `Loading` and moves exactly once, to `Loaded` or `Failed`.
/// Both of those are terminal; nothing schedules a transition out of them.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl LoadState {
    /// Identifier used in host-page notifications.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed => "failed",
        }
    }
}

/// One-shot "drag to rotate" hint shown after the model is installed.
///
/// Only exists while `LoadState::Loaded` is active, so it can never be armed
/// before the model is in the scene or after a failed load.
#[derive(SubStates, Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[source(LoadState = LoadState::Loaded)]
pub enum InteractionHintState {
    #[default]
    Armed,
    Dismissed,
}

pub fn log_load_state_entered(state: Res<State<LoadState>>) {
    info!("→ Load state: {}", state.get().as_str());
}

// Sub-state resource is absent outside `LoadState::Loaded`.
pub fn log_hint_state_entered(state: Option<Res<State<InteractionHintState>>>) {
    if let Some(state) = state {
        info!("→ Interaction hint: {:?}", state.get());
    }
}
