use crate::engine::core::app_state::InteractionHintState;
use crate::engine::core::config::ViewerConfig;
use crate::engine::lifecycle::events::{HintDismissed, InteractionEvent, InteractionKind};
use crate::engine::ui::overlays::{HintFade, InteractionHint};
use bevy::input::ButtonState;
use bevy::input::touch::TouchPhase;
use bevy::prelude::*;
use bevy::window::WindowEvent;
use std::sync::atomic::{AtomicBool, Ordering};

/// Single-fire gate shared by every interaction kind.
///
/// The first caller of `try_close` wins; every later call, for any kind,
/// is a no-op.
#[derive(Resource, Default, Debug)]
pub struct DismissalGate {
    closed: AtomicBool,
}

impl DismissalGate {
    pub fn try_close(&self) -> bool {
        !self.closed.swap(true, Ordering::AcqRel)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

/// Map a raw window event onto the interaction kinds that dismiss the hint.
pub fn interaction_kind(event: &WindowEvent) -> Option<InteractionKind> {
    match event {
        WindowEvent::MouseButtonInput(input) if input.state == ButtonState::Pressed => {
            Some(InteractionKind::PointerDown)
        }
        WindowEvent::TouchInput(touch) if touch.phase == TouchPhase::Started => {
            Some(InteractionKind::TouchStart)
        }
        WindowEvent::MouseWheel(_) => Some(InteractionKind::Wheel),
        _ => None,
    }
}

/// Forward qualifying input while the hint is armed.
///
/// Reads the combined window event stream so kinds keep their delivery order.
/// Input from before arming, or after dismissal, is drained and dropped. That
/// includes the arming frame itself: its input was delivered before the hint
/// existed.
pub fn collect_interactions(
    mut window_events: EventReader<WindowEvent>,
    hint_state: Option<Res<State<InteractionHintState>>>,
    mut interactions: EventWriter<InteractionEvent>,
) {
    let armed = hint_state
        .as_ref()
        .is_some_and(|state| *state.get() == InteractionHintState::Armed);
    let just_armed = hint_state.is_some_and(|state| state.is_changed());
    if !armed || just_armed {
        window_events.clear();
        return;
    }

    for event in window_events.read() {
        if let Some(kind) = interaction_kind(event) {
            interactions.write(InteractionEvent { kind });
        }
    }
}

pub fn dismiss_hint_on_first_interaction(
    mut commands: Commands,
    mut interactions: EventReader<InteractionEvent>,
    gate: Res<DismissalGate>,
    config: Res<ViewerConfig>,
    hints: Query<Entity, With<InteractionHint>>,
    mut next_state: ResMut<NextState<InteractionHintState>>,
    mut dismissed: EventWriter<HintDismissed>,
) {
    if gate.is_closed() {
        interactions.clear();
        return;
    }

    for interaction in interactions.read() {
        if !gate.try_close() {
            continue;
        }

        info!("Interaction hint dismissed by {}", interaction.kind.as_str());
        next_state.set(InteractionHintState::Dismissed);
        for hint in &hints {
            commands
                .entity(hint)
                .insert(HintFade::new(config.overlay.hint_fade_secs));
        }
        dismissed.write(HintDismissed {
            kind: interaction.kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::app_state::LoadState;
    use crate::engine::lifecycle::events::ModelLoadEvent;
    use crate::engine::test_support::{count, lifecycle_app, send};
    use crate::engine::ui::overlays::InteractionHintText;
    use bevy::input::mouse::{MouseButtonInput, MouseScrollUnit, MouseWheel};
    use bevy::input::touch::TouchInput;

    #[derive(Resource, Default)]
    struct DismissalLog(Vec<InteractionKind>);

    fn record_dismissals(mut events: EventReader<HintDismissed>, mut log: ResMut<DismissalLog>) {
        log.0.extend(events.read().map(|event| event.kind));
    }

    fn pointer_down() -> WindowEvent {
        WindowEvent::MouseButtonInput(MouseButtonInput {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
            window: Entity::PLACEHOLDER,
        })
    }

    fn pointer_up() -> WindowEvent {
        WindowEvent::MouseButtonInput(MouseButtonInput {
            button: MouseButton::Left,
            state: ButtonState::Released,
            window: Entity::PLACEHOLDER,
        })
    }

    fn touch(phase: TouchPhase) -> WindowEvent {
        WindowEvent::TouchInput(TouchInput {
            phase,
            position: Vec2::new(10.0, 10.0),
            window: Entity::PLACEHOLDER,
            force: None,
            id: 0,
        })
    }

    fn wheel() -> WindowEvent {
        WindowEvent::MouseWheel(MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: 1.0,
            window: Entity::PLACEHOLDER,
        })
    }

    fn loaded_app() -> App {
        let mut app = lifecycle_app();
        app.init_resource::<DismissalLog>()
            .add_systems(PostUpdate, record_dismissals);
        app.update();
        send(
            &mut app,
            ModelLoadEvent::Loaded {
                scene: Handle::default(),
            },
        );
        app.update();
        app.update();
        app
    }

    fn dismissals(app: &App) -> Vec<InteractionKind> {
        app.world().resource::<DismissalLog>().0.clone()
    }

    #[test]
    fn gate_closes_exactly_once() {
        let gate = DismissalGate::default();
        assert!(!gate.is_closed());
        assert!(gate.try_close());
        assert!(gate.is_closed());
        assert!(!gate.try_close());
        assert!(!gate.try_close());
    }

    #[test]
    fn only_press_like_inputs_qualify() {
        assert_eq!(
            interaction_kind(&pointer_down()),
            Some(InteractionKind::PointerDown)
        );
        assert_eq!(interaction_kind(&pointer_up()), None);
        assert_eq!(
            interaction_kind(&touch(TouchPhase::Started)),
            Some(InteractionKind::TouchStart)
        );
        assert_eq!(interaction_kind(&touch(TouchPhase::Moved)), None);
        assert_eq!(interaction_kind(&wheel()), Some(InteractionKind::Wheel));
    }

    #[test]
    fn touch_then_wheel_dismisses_once_on_touch() {
        let mut app = loaded_app();

        send(&mut app, touch(TouchPhase::Started));
        app.update();
        send(&mut app, wheel());
        app.update();
        app.update();

        assert_eq!(dismissals(&app), vec![InteractionKind::TouchStart]);
        assert_eq!(
            *app.world().resource::<State<InteractionHintState>>().get(),
            InteractionHintState::Dismissed
        );
    }

    #[test]
    fn mixed_burst_in_one_frame_dismisses_on_first_delivered() {
        let mut app = loaded_app();

        send(&mut app, pointer_up());
        send(&mut app, wheel());
        send(&mut app, pointer_down());
        send(&mut app, touch(TouchPhase::Started));
        send(&mut app, wheel());
        app.update();
        app.update();

        assert_eq!(dismissals(&app), vec![InteractionKind::Wheel]);
    }

    #[test]
    fn input_before_load_does_not_dismiss_later_hint() {
        let mut app = lifecycle_app();
        app.init_resource::<DismissalLog>()
            .add_systems(PostUpdate, record_dismissals);
        app.update();

        send(&mut app, pointer_down());
        app.update();
        send(
            &mut app,
            ModelLoadEvent::Loaded {
                scene: Handle::default(),
            },
        );
        app.update();
        app.update();

        assert!(dismissals(&app).is_empty());
        assert!(!app.world().resource::<DismissalGate>().is_closed());
        assert_eq!(count::<With<InteractionHint>>(&mut app), 1);
    }

    #[test]
    fn input_during_arming_frame_does_not_dismiss() {
        let mut app = lifecycle_app();
        app.init_resource::<DismissalLog>()
            .add_systems(PostUpdate, record_dismissals);
        app.update();

        send(
            &mut app,
            ModelLoadEvent::Loaded {
                scene: Handle::default(),
            },
        );
        app.update();
        assert!(app.world().get_resource::<State<InteractionHintState>>().is_none());

        send(&mut app, pointer_down());
        app.update();
        app.update();

        assert_eq!(
            *app.world().resource::<State<InteractionHintState>>().get(),
            InteractionHintState::Armed
        );
        assert!(dismissals(&app).is_empty());
        assert_eq!(count::<With<InteractionHint>>(&mut app), 1);

        send(&mut app, wheel());
        app.update();
        assert_eq!(dismissals(&app), vec![InteractionKind::Wheel]);
    }

    #[test]
    fn input_after_failure_has_no_effect() {
        let mut app = lifecycle_app();
        app.init_resource::<DismissalLog>()
            .add_systems(PostUpdate, record_dismissals);
        app.update();

        send(
            &mut app,
            ModelLoadEvent::Failed(crate::engine::loading::error::AssetLoadFailure::NoScene {
                path: "models/scene.gltf".to_string(),
            }),
        );
        app.update();
        app.update();
        send(&mut app, pointer_down());
        app.update();

        assert_eq!(
            *app.world().resource::<State<LoadState>>().get(),
            LoadState::Failed
        );
        assert!(dismissals(&app).is_empty());
    }

    #[test]
    fn dismissed_hint_fades_out_and_is_removed() {
        let mut app = loaded_app();

        send(&mut app, pointer_down());
        app.update();
        assert_eq!(count::<With<HintFade>>(&mut app), 1);

        app.update();
        let mut query = app
            .world_mut()
            .query_filtered::<&TextColor, With<InteractionHintText>>();
        let alpha = query.iter(app.world()).map(|c| c.0.alpha()).next();
        assert!(alpha.is_some_and(|a| a <= 0.7));

        for _ in 0..20 {
            app.update();
        }
        assert_eq!(count::<With<InteractionHint>>(&mut app), 0);
    }
}
