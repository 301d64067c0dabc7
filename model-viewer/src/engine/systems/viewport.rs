use crate::engine::camera::ViewerCamera;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

/// Logical size of the render output, tracking the hosting viewport.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportSize>()
            .add_systems(Startup, init_viewport_size)
            .add_systems(Update, handle_viewport_resize);
    }
}

fn init_viewport_size(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
) {
    if let Ok(window) = windows.single() {
        viewport.width = window.width();
        viewport.height = window.height();
    }
}

/// Match camera aspect and output size to the latest resize, in any load state.
pub fn handle_viewport_resize(
    mut resize_events: EventReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    mut projections: Query<&mut Projection, With<ViewerCamera>>,
) {
    let Some(latest) = resize_events.read().last() else {
        return;
    };

    viewport.width = latest.width;
    viewport.height = latest.height;

    // A minimised window reports zero height; keep the last usable aspect.
    let Some(aspect) = viewport.aspect_ratio() else {
        return;
    };
    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect;
        }
    }
}
