//! Load-then-reveal sequencing of the viewer.
//!
//! Owns the loading indicator, model installation, the one-shot interaction
//! hint and the failure message. Nothing here gates rendering: the frame loop
//! and camera controls run in every state.
//!
//! ## Flow
//!
//! ```text
//! Startup ── spawn indicator ──> LoadState::Loading
//!                                   │
//!          ModelLoadEvent::Loaded ──┼── ModelLoadEvent::Failed
//!                                   │                 │
//!   spawn model, then remove        │       indicator text replaced,
//!   indicator on entering Loaded    │       indicator stays visible
//!                                   v                 v
//!                       LoadState::Loaded      LoadState::Failed
//!                                   │
//!                  InteractionHintState::Armed (hint at partial opacity)
//!                                   │ first pointer-down / touch-start / wheel
//!                                   v
//!                  InteractionHintState::Dismissed (fade out, despawn)
//! ```

/// Events exchanged between the loader, input and lifecycle systems.
pub mod events;

/// Interaction hint dismissal gate and input collection.
pub mod interaction;

/// Load result handling and state transitions.
pub mod transitions;

use crate::engine::core::app_state::{
    InteractionHintState, LoadState, log_hint_state_entered, log_load_state_entered,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::ui::overlays::{
    arm_interaction_hint, fade_out_hint, remove_loading_indicator, show_load_failure,
    spawn_loading_indicator,
};
use bevy::prelude::*;
use events::{HintDismissed, InteractionEvent, ModelLoadEvent};
use interaction::{DismissalGate, collect_interactions, dismiss_hint_on_first_interaction};
use transitions::apply_model_load_events;

pub struct ViewerLifecyclePlugin;

impl Plugin for ViewerLifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<LoadState>()
            .add_sub_state::<InteractionHintState>()
            .init_resource::<LoadingProgress>()
            .init_resource::<DismissalGate>()
            .add_event::<ModelLoadEvent>()
            .add_event::<InteractionEvent>()
            .add_event::<HintDismissed>()
            .add_systems(Startup, spawn_loading_indicator)
            .add_systems(OnEnter(LoadState::Loaded), remove_loading_indicator)
            .add_systems(OnEnter(LoadState::Failed), show_load_failure)
            .add_systems(OnEnter(InteractionHintState::Armed), arm_interaction_hint)
            .add_systems(
                Update,
                (
                    apply_model_load_events.run_if(in_state(LoadState::Loading)),
                    (
                        collect_interactions,
                        dismiss_hint_on_first_interaction
                            .run_if(in_state(InteractionHintState::Armed)),
                    )
                        .chain(),
                    fade_out_hint,
                    log_load_state_entered.run_if(state_changed::<LoadState>),
                    log_hint_state_entered.run_if(state_changed::<InteractionHintState>),
                ),
            );
    }
}
