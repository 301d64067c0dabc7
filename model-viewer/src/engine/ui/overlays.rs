use crate::engine::core::config::{OverlayConfig, ViewerConfig};
use bevy::prelude::*;

/// Full-screen container of the loading message. Present until the model is
/// installed; stays up (showing the failure text) if the load fails.
#[derive(Component)]
pub struct LoadingIndicator;

#[derive(Component)]
pub struct LoadingIndicatorText;

/// Container of the one-shot interaction hint.
#[derive(Component)]
pub struct InteractionHint;

#[derive(Component)]
pub struct InteractionHintText;

/// Fade-out in progress on a dismissed hint. The hint is despawned when the
/// timer finishes.
#[derive(Component)]
pub struct HintFade {
    timer: Timer,
}

impl HintFade {
    pub fn new(seconds: f32) -> Self {
        Self {
            timer: Timer::from_seconds(seconds, TimerMode::Once),
        }
    }
}

pub fn spawn_loading_indicator(mut commands: Commands, config: Res<ViewerConfig>) {
    let overlay = &config.overlay;

    commands
        .spawn((
            LoadingIndicator,
            Name::new("LoadingIndicator"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                LoadingIndicatorText,
                Text::new(overlay.loading_text.clone()),
                TextFont {
                    font_size: overlay.font_size,
                    ..default()
                },
                TextColor(overlay.text_color),
                BackgroundColor(overlay.background),
                Node {
                    padding: UiRect::axes(Val::Px(16.0), Val::Px(10.0)),
                    ..default()
                },
            ));
        });
}

pub fn remove_loading_indicator(
    mut commands: Commands,
    indicators: Query<Entity, With<LoadingIndicator>>,
) {
    for indicator in &indicators {
        commands.entity(indicator).despawn();
    }
}

// Replace the message in place; the indicator itself stays on screen.
pub fn show_load_failure(
    config: Res<ViewerConfig>,
    mut texts: Query<&mut Text, With<LoadingIndicatorText>>,
) {
    for mut text in &mut texts {
        text.0 = config.overlay.load_failed_text.clone();
    }
}

pub fn arm_interaction_hint(mut commands: Commands, config: Res<ViewerConfig>) {
    let overlay = &config.overlay;
    let mut text_color = TextColor(overlay.text_color);
    let mut background = BackgroundColor(overlay.background);
    apply_hint_opacity(overlay.hint_opacity, overlay, &mut text_color, &mut background);

    commands
        .spawn((
            InteractionHint,
            Name::new("InteractionHint"),
            Node {
                width: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                bottom: Val::Px(24.0),
                display: Display::Flex,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                InteractionHintText,
                Text::new(overlay.hint_text.clone()),
                TextFont {
                    font_size: overlay.font_size,
                    ..default()
                },
                text_color,
                background,
                Node {
                    padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                    ..default()
                },
            ));
        });
}

pub fn fade_out_hint(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<ViewerConfig>,
    mut fading: Query<(Entity, &mut HintFade), With<InteractionHint>>,
    mut texts: Query<(&mut TextColor, &mut BackgroundColor), With<InteractionHintText>>,
) {
    for (hint, mut fade) in &mut fading {
        fade.timer.tick(time.delta());
        if fade.timer.finished() {
            commands.entity(hint).despawn();
            continue;
        }

        let opacity = config.overlay.hint_opacity * (1.0 - fade.timer.fraction());
        for (mut text_color, mut background) in &mut texts {
            apply_hint_opacity(opacity, &config.overlay, &mut text_color, &mut background);
        }
    }
}

/// Scale the configured overlay colours by `opacity`.
fn apply_hint_opacity(
    opacity: f32,
    overlay: &OverlayConfig,
    text_color: &mut TextColor,
    background: &mut BackgroundColor,
) {
    text_color.0 = overlay
        .text_color
        .with_alpha(overlay.text_color.alpha() * opacity);
    background.0 = overlay
        .background
        .with_alpha(overlay.background.alpha() * opacity);
}
