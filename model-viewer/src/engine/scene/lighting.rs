use crate::engine::core::config::ViewerConfig;
use bevy::prelude::*;

pub fn spawn_lighting(mut commands: Commands, config: Res<ViewerConfig>) {
    let lighting = &config.lighting;

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: lighting.ambient_brightness,
        ..default()
    });

    commands.spawn((
        Name::new("DirectionalLight"),
        DirectionalLight {
            color: Color::WHITE,
            illuminance: lighting.directional_illuminance,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(lighting.directional_position).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
