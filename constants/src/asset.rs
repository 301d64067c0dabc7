use bevy::math::Vec3;

/// Path of the GLTF document, relative to the asset root.
pub const MODEL_PATH: &str = "models/scene.gltf";

/// Uniform scale applied to the model's scene root when it is installed.
pub const MODEL_SCALE: Vec3 = Vec3::splat(0.03);
