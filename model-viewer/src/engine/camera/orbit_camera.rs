use crate::engine::core::config::{CameraConfig, ViewerConfig};
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

/// Marker for the single scene camera.
#[derive(Component)]
pub struct ViewerCamera;

/// Damped orbit controller around a target point.
///
/// Input accumulates into pending deltas; each frame `update` applies
/// `damping_factor` of the pending rotation and pan and decays the rest,
/// so motion eases out after the pointer stops. Zoom is applied at once and
/// clamped to the configured distance bounds.
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    yaw_delta: f32,
    pitch_delta: f32,
    pan_delta: Vec3,
    zoom_scale: f32,
    damping_factor: f32,
    min_distance: f32,
    max_distance: f32,
    max_pitch: f32,
}

impl OrbitCamera {
    /// Controller whose first frame reproduces a camera at `position`
    /// looking at the configured target.
    pub fn new(position: Vec3, config: &CameraConfig) -> Self {
        let offset = position - config.target;
        let length = offset.length().max(f32::EPSILON);

        Self {
            target: config.target,
            distance: length.clamp(config.min_distance, config.max_distance),
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / length)
                .clamp(-1.0, 1.0)
                .asin()
                .clamp(-config.max_pitch, config.max_pitch),
            yaw_delta: 0.0,
            pitch_delta: 0.0,
            pan_delta: Vec3::ZERO,
            zoom_scale: 1.0,
            damping_factor: config.damping_factor,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            max_pitch: config.max_pitch,
        }
    }

    /// Queue an orbit by `angles` radians (x = yaw, y = pitch).
    pub fn rotate(&mut self, angles: Vec2) {
        self.yaw_delta += angles.x;
        self.pitch_delta += angles.y;
    }

    /// Queue a target translation in world space.
    pub fn pan(&mut self, offset: Vec3) {
        self.pan_delta += offset;
    }

    /// Multiply the distance by `scale` on the next update (< 1 zooms in).
    pub fn zoom(&mut self, scale: f32) {
        self.zoom_scale *= scale;
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    /// Advance one frame and return the camera transform for it.
    pub fn update(&mut self) -> Transform {
        let applied = self.damping_factor;
        self.yaw += self.yaw_delta * applied;
        self.pitch = (self.pitch + self.pitch_delta * applied).clamp(-self.max_pitch, self.max_pitch);
        self.target += self.pan_delta * applied;
        self.distance = (self.distance * self.zoom_scale).clamp(self.min_distance, self.max_distance);

        let decay = 1.0 - applied;
        self.yaw_delta *= decay;
        self.pitch_delta *= decay;
        self.pan_delta *= decay;
        self.zoom_scale = 1.0;

        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }
}

pub fn spawn_orbit_camera(mut commands: Commands, config: Res<ViewerConfig>) {
    let camera = &config.camera;

    commands.spawn((
        ViewerCamera,
        Name::new("ViewerCamera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera.fov_degrees.to_radians(),
            near: camera.near,
            far: camera.far,
            ..default()
        }),
        Transform::from_translation(camera.start_position).looking_at(camera.target, Vec3::Y),
        OrbitCamera::new(camera.start_position, camera),
    ));
}

/// Translate pointer, touch and wheel input into pending orbit motion.
///
/// Left drag or one finger orbits, right drag pans in the ground plane,
/// wheel or pinch zooms.
pub fn orbit_camera_input(
    mut cameras: Query<(&mut OrbitCamera, &Transform)>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    touches: Res<Touches>,
    config: Res<ViewerConfig>,
) {
    let camera_config = &config.camera;
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    let scroll_lines: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y / camera_config.pixels_per_line,
        })
        .sum();

    let active_touches: Vec<_> = touches.iter().collect();

    for (mut orbit, transform) in &mut cameras {
        if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
            orbit.rotate(-mouse_delta * camera_config.rotate_sensitivity);
        }

        if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
            // Ground-plane pan: right stays horizontal, "forward" is projected flat.
            let right = transform.right().as_vec3();
            let forward = Vec3::Y.cross(right);
            let scale = camera_config.pan_sensitivity * orbit.distance;
            orbit.pan((-right * mouse_delta.x + forward * mouse_delta.y) * scale);
        }

        if scroll_lines.abs() > f32::EPSILON {
            orbit.zoom(camera_config.zoom_step.powf(scroll_lines));
        }

        match active_touches.as_slice() {
            [touch] => {
                let delta = touch.delta();
                if delta != Vec2::ZERO {
                    orbit.rotate(-delta * camera_config.rotate_sensitivity);
                }
            }
            [first, second] => {
                let previous = first.previous_position().distance(second.previous_position());
                let current = first.position().distance(second.position());
                if previous > f32::EPSILON && current > f32::EPSILON {
                    orbit.zoom(previous / current);
                }
            }
            _ => {}
        }
    }
}

pub fn update_orbit_camera(mut cameras: Query<(&mut OrbitCamera, &mut Transform)>) {
    for (mut orbit, mut transform) in &mut cameras {
        *transform = orbit.update();
    }
}
