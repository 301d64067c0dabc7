//! Viewer camera and orbit controls.
//!
//! The controller runs every frame regardless of load state, so the user can
//! orbit an empty scene while the model is still loading or after it failed.

/// Damped orbit controller, camera spawn and input handling.
pub mod orbit_camera;

use bevy::prelude::*;
use orbit_camera::{orbit_camera_input, spawn_orbit_camera, update_orbit_camera};

pub use orbit_camera::ViewerCamera;

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_orbit_camera)
            .add_systems(Update, (orbit_camera_input, update_orbit_camera).chain());
    }
}
