use bevy::asset::AssetLoadError;
use std::sync::Arc;
use thiserror::Error;

/// Why the model never reached the scene.
///
/// Raised once at the load boundary and kept for diagnostics; the user only
/// ever sees the static failure text.
#[derive(Debug, Clone, Error)]
pub enum AssetLoadFailure {
    /// The GLTF document itself could not be read or parsed.
    #[error("model asset failed to load: {0}")]
    Load(Arc<AssetLoadError>),

    /// A buffer, texture or other file referenced by the document failed.
    #[error("model asset dependency failed to load: {0}")]
    Dependency(Arc<AssetLoadError>),

    /// The document loaded but defines nothing that can be placed in a scene.
    #[error("model asset '{path}' contains no scene")]
    NoScene { path: String },
}
