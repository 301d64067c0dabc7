use bevy::color::Color;

pub const LOADING_TEXT: &str = "Loading model...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load the model.";
pub const HINT_TEXT: &str = "Drag to rotate, scroll to zoom";

/// Opacity of the interaction hint while it waits for the first input.
pub const HINT_OPACITY: f32 = 0.7;

/// Seconds the hint takes to fade out once dismissed.
pub const HINT_FADE_SECS: f32 = 0.6;

pub const OVERLAY_FONT_SIZE: f32 = 18.0;
pub const OVERLAY_TEXT_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);
