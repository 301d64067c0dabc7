use bevy::math::Vec3;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;
pub const NEAR_CLIP: f32 = 0.1;
pub const FAR_CLIP: f32 = 1000.0;

pub const START_POSITION: Vec3 = Vec3::new(0.0, 1.0, 5.0);
pub const ORBIT_TARGET: Vec3 = Vec3::ZERO;

/// Fraction of the pending orbit motion applied each frame.
/// The remainder decays by `1 - DAMPING_FACTOR`.
pub const DAMPING_FACTOR: f32 = 0.05;

/// Zoom limits (distance from the orbit target).
pub const MIN_DISTANCE: f32 = 1.0;
pub const MAX_DISTANCE: f32 = 10.0;

/// Radians of orbit per pixel of drag.
pub const ROTATE_SENSITIVITY: f32 = 0.01;

/// Target translation per pixel of drag, as a fraction of the orbit distance.
pub const PAN_SENSITIVITY: f32 = 0.002;

/// Zoom multiplier per wheel line. Pixel deltas are converted to lines first.
pub const ZOOM_STEP: f32 = 0.95;
pub const PIXELS_PER_LINE: f32 = 20.0;

/// Keeps the camera off the poles so `looking_at` stays well defined.
pub const MAX_PITCH: f32 = 1.5;
