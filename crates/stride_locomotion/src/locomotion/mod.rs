//! Locomotion module (engine-agnostic character movement)
//!
//! ECS ответственность:
//! - Per-tick state: velocity, look pitch, run FSM, jump arming
//! - Transition events: Jumped, StartedRunning, StoppedRunning
//! - Config: run/jump speed, air control, air resistance, look clamp
//!
//! Host engine ответственность:
//! - Collision sweep (move_and_slide аналог) через [`CollisionSolver`]
//! - Raw input devices → [`crate::TickInput`]
//! - Head/camera rig rotation через [`HeadOrientationSink`]

use bevy::prelude::*;

pub mod config;
pub mod controller;
pub mod events;
pub mod head;
pub mod solver;
pub mod systems;


// Re-export основных типов
pub use config::{ActorConfig, LandingBehavior};
pub use controller::{LocomotionController, LocomotionError, RunState, TickOutput};
pub use events::{ActorTransition, LocomotionEvent};
pub use head::HeadOrientationSink;
pub use solver::{ActorShape, CollisionSolver, FlatGroundSolver, SolverHandle, SweepRequest, SweepResult};

/// Гравитация мира (world-space, units/s²)
///
/// Host engine может переписать resource если мир с нестандартной гравитацией
/// (низкая гравитация, зоны и т.д.).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Gravity(pub Vec3);

impl Default for Gravity {
    fn default() -> Self {
        Self(Vec3::new(0.0, -9.8, 0.0))
    }
}

/// Locomotion Plugin
///
/// Регистрирует locomotion системы в FixedUpdate.
///
/// Порядок выполнения:
/// 1. `pump_input` — опрос InputAdapter'а (только если host поставил InputSource)
/// 2. `apply_tick_input` — TickInput events → controller setters
/// 3. `step_locomotion` — core tick: интеграция velocity + sweep + events
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<crate::input::TickInput>()
            .add_event::<ActorTransition>();

        // Ресурсы по умолчанию: гравитация -9.8Y, solver = плоский пол.
        // Host engine заменяет SolverHandle своим sweep'ом.
        app.init_resource::<Gravity>().init_resource::<SolverHandle>();

        app.add_systems(
            FixedUpdate,
            (
                crate::input::pump_input.run_if(resource_exists::<crate::input::InputSource>),
                systems::apply_tick_input,
                systems::step_locomotion,
            )
                .chain(), // Последовательное выполнение
        );
    }
}
