//! Locomotion Events — семантические переходы состояния за tick
//!
//! Типизированный enum вместо строковых signal-имён: gameplay/audio/animation
//! слои матчатся по варианту, без shared mutable globals.

use bevy::prelude::*;

/// Семантический переход состояния локомоции
///
/// Порядок внутри tick'а фиксированный: сначала `Jumped`, затем
/// run-переход (если оба случились в одном tick'е).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionEvent {
    /// Прыжок применён (импульс ушёл в velocity на этом tick'е)
    Jumped,
    /// Актор начал бежать (grounded + motion != 0, edge-triggered)
    StartedRunning,
    /// Актор перестал бежать (оторвался от земли или отпустил motion)
    StoppedRunning,
}

/// ECS-обёртка перехода: какой entity и что с ним случилось
///
/// `LocomotionController::update` возвращает чистый [`LocomotionEvent`]
/// (ядро не знает своего Entity); система `step_locomotion` оборачивает
/// и публикует для остальных подсистем.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorTransition {
    pub entity: Entity,
    pub event: LocomotionEvent,
}
