use bevy::math::Vec3;

/// Relative light intensities, on the 0..1 scale of the host page's lights.
pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_INTENSITY: f32 = 0.6;

/// Physical units a relative intensity of 1.0 maps to.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 500.0;
pub const DIRECTIONAL_LUX_PER_UNIT: f32 = 10_000.0;

pub const DIRECTIONAL_POSITION: Vec3 = Vec3::new(5.0, 10.0, 7.5);
