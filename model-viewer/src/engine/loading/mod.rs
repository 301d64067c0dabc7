//! Model asset loading.
//!
//! Requests the GLTF document from the asset server and polls its load state
//! once per frame, translating it into lifecycle events: zero or more
//! progress reports followed by exactly one success or failure.

/// Load failure type surfaced to the lifecycle.
pub mod error;

/// GLTF request and load-state polling.
pub mod model_loader;

/// Loading progress resource for logging and host notifications.
pub mod progress;
