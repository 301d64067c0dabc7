use bevy::prelude::*;
use constants::{asset, camera, lighting, overlay};

/// Everything the viewer reads at runtime, fixed for the page session.
///
/// Systems read this resource rather than the constants directly so tests
/// and alternative hosts can swap values without touching the systems.
#[derive(Resource, Debug, Clone)]
pub struct ViewerConfig {
    pub model_path: String,
    pub model_scale: Vec3,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub overlay: OverlayConfig,
}

#[derive(Debug, Clone)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub start_position: Vec3,
    pub target: Vec3,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_sensitivity: f32,
    pub pan_sensitivity: f32,
    pub zoom_step: f32,
    pub pixels_per_line: f32,
    pub max_pitch: f32,
}

#[derive(Debug, Clone)]
pub struct LightingConfig {
    pub ambient_brightness: f32,
    pub directional_illuminance: f32,
    pub directional_position: Vec3,
}

#[derive(Debug, Clone)]
pub struct OverlayConfig {
    pub loading_text: String,
    pub load_failed_text: String,
    pub hint_text: String,
    pub hint_opacity: f32,
    pub hint_fade_secs: f32,
    pub font_size: f32,
    pub text_color: Color,
    pub background: Color,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_path: asset::MODEL_PATH.to_string(),
            model_scale: asset::MODEL_SCALE,
            camera: CameraConfig::default(),
            lighting: LightingConfig::default(),
            overlay: OverlayConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: camera::FOV_DEGREES,
            near: camera::NEAR_CLIP,
            far: camera::FAR_CLIP,
            start_position: camera::START_POSITION,
            target: camera::ORBIT_TARGET,
            damping_factor: camera::DAMPING_FACTOR,
            min_distance: camera::MIN_DISTANCE,
            max_distance: camera::MAX_DISTANCE,
            rotate_sensitivity: camera::ROTATE_SENSITIVITY,
            pan_sensitivity: camera::PAN_SENSITIVITY,
            zoom_step: camera::ZOOM_STEP,
            pixels_per_line: camera::PIXELS_PER_LINE,
            max_pitch: camera::MAX_PITCH,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_brightness: lighting::AMBIENT_INTENSITY * lighting::AMBIENT_BRIGHTNESS_PER_UNIT,
            directional_illuminance: lighting::DIRECTIONAL_INTENSITY
                * lighting::DIRECTIONAL_LUX_PER_UNIT,
            directional_position: lighting::DIRECTIONAL_POSITION,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            loading_text: overlay::LOADING_TEXT.to_string(),
            load_failed_text: overlay::LOAD_FAILED_TEXT.to_string(),
            hint_text: overlay::HINT_TEXT.to_string(),
            hint_opacity: overlay::HINT_OPACITY,
            hint_fade_secs: overlay::HINT_FADE_SECS,
            font_size: overlay::OVERLAY_FONT_SIZE,
            text_color: overlay::OVERLAY_TEXT_COLOR,
            background: overlay::OVERLAY_BACKGROUND,
        }
    }
}

impl ViewerConfig {
    /// JSON view of the configuration for the host page.
    pub fn to_json(&self) -> serde_json::Value {
        let scale = self.model_scale;
        serde_json::json!({
            "model_path": self.model_path,
            "model_scale": [scale.x, scale.y, scale.z],
            "camera": {
                "fov_degrees": self.camera.fov_degrees,
                "near": self.camera.near,
                "far": self.camera.far,
                "damping_factor": self.camera.damping_factor,
                "min_distance": self.camera.min_distance,
                "max_distance": self.camera.max_distance,
            },
            "overlay": {
                "loading_text": self.overlay.loading_text,
                "load_failed_text": self.overlay.load_failed_text,
                "hint_text": self.overlay.hint_text,
                "hint_opacity": self.overlay.hint_opacity,
                "hint_fade_secs": self.overlay.hint_fade_secs,
            },
        })
    }
}
