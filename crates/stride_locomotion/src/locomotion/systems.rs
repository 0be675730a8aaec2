//! Locomotion systems — тонкая ECS-обвязка вокруг controller'а
//!
//! Работают в FixedUpdate (60Hz) для детерминизма, chain'ом:
//! input → tick. Вся логика в `LocomotionController`, системы только
//! гоняют данные и публикуют переходы.

use bevy::prelude::*;

use crate::components::Actor;
use crate::input::TickInput;

use super::controller::LocomotionController;
use super::events::{ActorTransition, LocomotionEvent};
use super::solver::SolverHandle;
use super::Gravity;

/// Система: TickInput events → controller setters
///
/// Невалидный ввод (NaN от сломанного адаптера) логируется и
/// пропускается — симуляция не падает из-за одного плохого sample'а.
pub fn apply_tick_input(
    mut inputs: EventReader<TickInput>,
    mut query: Query<&mut LocomotionController>,
) {
    for input in inputs.read() {
        let Ok(mut controller) = query.get_mut(input.entity) else {
            continue;
        };

        if let Err(err) = controller.set_motion(input.motion) {
            crate::log_warning(&format!(
                "motion input rejected for {:?}: {}",
                input.entity, err
            ));
        }

        if input.jump_requested {
            // No-op в воздухе — controller сам решает
            controller.request_jump();
        }

        if input.look_delta != 0.0 {
            if let Err(err) = controller.look_up(input.look_delta) {
                crate::log_warning(&format!(
                    "look input rejected for {:?}: {}",
                    input.entity, err
                ));
            }
        }
    }
}

/// Система: core locomotion tick для всех акторов
///
/// Один sweep на актора, переходы публикуются как [`ActorTransition`].
pub fn step_locomotion(
    mut query: Query<(Entity, &mut LocomotionController, Option<&Actor>)>,
    mut solver: ResMut<SolverHandle>,
    gravity: Res<Gravity>,
    time: Res<Time<Fixed>>,
    mut transitions: EventWriter<ActorTransition>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        // FixedUpdate ещё не накопил первый интервал
        return;
    }

    for (entity, mut controller, actor) in query.iter_mut() {
        match controller.update(dt, gravity.0, solver.0.as_mut()) {
            Ok(output) => {
                for event in &output.events {
                    let name = actor.map_or("<unnamed>", |a| a.display_name.as_str());
                    match event {
                        LocomotionEvent::Jumped => {
                            crate::log(&format!("🦘 {} jumped", name));
                        }
                        LocomotionEvent::StartedRunning => {
                            crate::log(&format!("🏃 {} started running", name));
                        }
                        LocomotionEvent::StoppedRunning => {
                            crate::log(&format!("🧍 {} stopped running", name));
                        }
                    }
                    transitions.write(ActorTransition {
                        entity,
                        event: *event,
                    });
                }
            }
            Err(err) => {
                // dt/gravity прошли проверку выше — сюда попадаем только
                // если host подсунул кривой Gravity resource
                crate::log_error(&format!("locomotion tick rejected for {:?}: {}", entity, err));
            }
        }
    }
}
