use crate::engine::loading::error::AssetLoadFailure;
use bevy::prelude::*;

/// Result stream of the asynchronous model fetch.
///
/// The loader writes zero or more `Progress` events followed by exactly one
/// `Loaded` or `Failed`, and nothing after that.
#[derive(Event, Debug, Clone)]
pub enum ModelLoadEvent {
    Progress { loaded: u64, total: u64 },
    Loaded { scene: Handle<Scene> },
    Failed(AssetLoadFailure),
}

/// Input kinds that count as the user's first interaction with the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    PointerDown,
    TouchStart,
    Wheel,
}

impl InteractionKind {
    /// DOM event name of the equivalent browser input, for the host page.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PointerDown => "pointerdown",
            Self::TouchStart => "touchstart",
            Self::Wheel => "wheel",
        }
    }
}

/// A qualifying input, in window delivery order.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionEvent {
    pub kind: InteractionKind,
}

/// Fired once per session when the interaction hint is dismissed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintDismissed {
    pub kind: InteractionKind,
}
