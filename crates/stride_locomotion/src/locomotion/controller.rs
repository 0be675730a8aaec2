//! LocomotionController — per-tick ядро локомоции
//!
//! Вся числовая логика живёт здесь: интеграция velocity под гравитацией
//! и drag'ом, ветвление ground/air, arming-and-firing прыжка, edge-triggered
//! run FSM, clamp взгляда. Системы вокруг — тонкая обвязка.

use std::fmt;

use bevy::prelude::*;
use thiserror::Error;

use super::config::{ActorConfig, LandingBehavior};
use super::events::LocomotionEvent;
use super::head::HeadOrientationSink;
use super::solver::{CollisionSolver, SweepRequest};

/// Коэффициент квадратичного drag'а
///
/// Грубая аппроксимация сопротивления воздуха: при air_resistance = 1.0
/// даёт terminal velocity ≈ 53 units/s (человеческая).
const DRAG_COEFF: f32 = 0.007;

/// Ошибки tick boundary: невалидный аргумент = tick не применяется,
/// состояние остаётся ровно как было
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LocomotionError {
    #[error("tick delta must be positive and finite, got {0}")]
    InvalidDelta(f32),
    #[error("{0} must be finite")]
    NonFinite(&'static str),
}

/// Run FSM (edge-triggered, без терминального состояния)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

/// Результат одного tick'а
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    /// Velocity после sweep'а и landing policy
    pub velocity: Vec3,
    /// Ground contact после sweep'а
    pub grounded: bool,
    /// Переходы этого tick'а, в порядке возникновения (возможно пусто)
    pub events: Vec<LocomotionEvent>,
}

/// Внутреннее состояние актора — мутируется только setter'ами и `update`
#[derive(Debug, Clone, PartialEq)]
struct ActorState {
    velocity: Vec3,
    /// Pitch взгляда, радианы; всегда в пределах ±max_look_angle
    look_angle: f32,
    /// Планарный input: ноль или единичной длины, частичных величин нет
    motion: Vec2,
    /// Facing frame актора (yaw); motion вращается через него в world space
    facing: Quat,
    /// Прыжок взведён (взводится только на земле)
    jump_armed: bool,
    run_state: RunState,
    /// Ground contact прошлого tick'а — вход для ветвления текущего
    grounded: bool,
}

impl Default for ActorState {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            look_angle: 0.0,
            motion: Vec2::ZERO,
            facing: Quat::IDENTITY,
            jump_armed: false,
            run_state: RunState::Idle,
            grounded: false,
        }
    }
}

/// Контроллер локомоции одного актора
///
/// Однопоточный, синхронный: один вызов `update` на fixed tick. Нескольких
/// акторов можно тикать параллельно — между контроллерами нет shared state.
#[derive(Component, Default)]
pub struct LocomotionController {
    config: ActorConfig,
    state: ActorState,
    head: Option<Box<dyn HeadOrientationSink + Send + Sync>>,
}

impl fmt::Debug for LocomotionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocomotionController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("head", &self.head.as_ref().map(|_| "sink"))
            .finish()
    }
}

impl LocomotionController {
    pub fn new(config: ActorConfig) -> Self {
        Self {
            config,
            state: ActorState::default(),
            head: None,
        }
    }

    // --- config -----------------------------------------------------------

    pub fn config(&self) -> &ActorConfig {
        &self.config
    }

    /// Заменяет конфиг целиком; сохранённый pitch сразу re-clamp'ится
    /// под новый max_look_angle
    pub fn set_config(&mut self, config: ActorConfig) {
        self.config = config;
        self.reclamp_look();
    }

    pub fn set_max_look_angle(&mut self, angle: f32) {
        self.config.max_look_angle = angle;
        self.reclamp_look();
    }

    // --- input setters ----------------------------------------------------

    /// Сохраняет планарный input нормализованным (ноль остаётся нулём)
    pub fn set_motion(&mut self, motion: Vec2) -> Result<(), LocomotionError> {
        if !motion.is_finite() {
            return Err(LocomotionError::NonFinite("motion"));
        }
        // normalize_or_zero: субнормальная длина схлопывается в ноль вместо
        // inf/NaN от переполнившегося length_recip
        self.state.motion = motion.normalize_or_zero();
        Ok(())
    }

    pub fn motion(&self) -> Vec2 {
        self.state.motion
    }

    /// Взводит прыжок — только на земле. Запрос в воздухе молча
    /// отбрасывается: буферизации прыжков нет.
    pub fn request_jump(&mut self) {
        if self.state.grounded {
            self.state.jump_armed = true;
        }
    }

    pub fn is_jump_armed(&self) -> bool {
        self.state.jump_armed
    }

    /// Facing frame (yaw) — куда актор смотрит в плоскости
    pub fn set_facing(&mut self, facing: Quat) -> Result<(), LocomotionError> {
        if !facing.is_finite() {
            return Err(LocomotionError::NonFinite("facing"));
        }
        let normalized = facing.normalize();
        // Вырожденный (почти нулевой) кватернион нормализуется в inf/NaN —
        // это не rotation, отклоняем не трогая состояние
        if !normalized.is_finite() {
            return Err(LocomotionError::NonFinite("facing"));
        }
        self.state.facing = normalized;
        Ok(())
    }

    pub fn facing(&self) -> Quat {
        self.state.facing
    }

    // --- look -------------------------------------------------------------

    /// Сдвигает pitch на delta с clamp'ом; новое значение уходит в head sink
    pub fn look_up(&mut self, delta: f32) -> Result<(), LocomotionError> {
        if !delta.is_finite() {
            return Err(LocomotionError::NonFinite("look delta"));
        }
        self.set_look_angle_clamped(self.state.look_angle + delta);
        Ok(())
    }

    pub fn set_look_angle(&mut self, angle: f32) -> Result<(), LocomotionError> {
        if !angle.is_finite() {
            return Err(LocomotionError::NonFinite("look angle"));
        }
        self.set_look_angle_clamped(angle);
        Ok(())
    }

    pub fn look_angle(&self) -> f32 {
        self.state.look_angle
    }

    /// Transform взгляда (pitch вокруг X) — для camera/head потребителей
    pub fn look_transform(&self) -> Transform {
        Transform::from_rotation(Quat::from_rotation_x(self.state.look_angle))
    }

    /// Подключает приёмник pitch'а; `None` отключает (no-op при изменениях)
    pub fn set_head_sink(&mut self, sink: Option<Box<dyn HeadOrientationSink + Send + Sync>>) {
        self.head = sink;
        self.push_head_pitch();
    }

    // --- velocity ---------------------------------------------------------

    pub fn velocity(&self) -> Vec3 {
        self.state.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) -> Result<(), LocomotionError> {
        if !velocity.is_finite() {
            return Err(LocomotionError::NonFinite("velocity"));
        }
        self.state.velocity = velocity;
        Ok(())
    }

    /// Внешний импульс (knockback, взрыв): velocity += delta_v
    pub fn apply_impulse(&mut self, delta_v: Vec3) -> Result<(), LocomotionError> {
        if !delta_v.is_finite() {
            return Err(LocomotionError::NonFinite("impulse"));
        }
        self.state.velocity += delta_v;
        Ok(())
    }

    pub fn grounded(&self) -> bool {
        self.state.grounded
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    pub fn is_running(&self) -> bool {
        self.state.run_state == RunState::Running
    }

    // --- core tick --------------------------------------------------------

    /// Один fixed tick локомоции
    ///
    /// Порядок шагов фиксированный:
    /// 1. horizontal intent (земля или air_control)
    /// 2. гравитация
    /// 3. air drag (только в воздухе)
    /// 4. прыжок (только с земли)
    /// 5. run FSM edge detection
    /// 6. sweep через solver
    /// 7. landing policy
    ///
    /// Невалидный вход (`dt <= 0`, не-finite) отклоняется ДО любой
    /// мутации — состояние после Err идентично состоянию до вызова.
    pub fn update(
        &mut self,
        dt: f32,
        gravity: Vec3,
        solver: &mut dyn CollisionSolver,
    ) -> Result<TickOutput, LocomotionError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(LocomotionError::InvalidDelta(dt));
        }
        if !gravity.is_finite() {
            return Err(LocomotionError::NonFinite("gravity"));
        }

        let mut events = Vec::new();
        let config = &self.config;
        let state = &mut self.state;

        // 1. Horizontal intent: на земле (или с air_control) input владеет
        // горизонталью безусловно — нулевой motion останавливает актора.
        // В воздухе без air_control горизонталь не трогаем (momentum).
        if state.grounded || config.air_control {
            let world_motion = state.facing * Vec3::new(state.motion.x, 0.0, state.motion.y);
            state.velocity.x = world_motion.x * config.run_speed;
            state.velocity.z = world_motion.z * config.run_speed;
        }

        // 2. Гравитация — безусловно
        state.velocity += gravity * dt;

        // 3. Air drag (квадратичный), только в воздухе; нулевую скорость
        // не нормализуем
        if !state.grounded && config.air_resistance > 0.0 {
            let speed = state.velocity.length();
            if speed > 0.0 {
                let drag = 0.5 * speed * speed * DRAG_COEFF * config.air_resistance;
                state.velocity -= state.velocity / speed * drag * dt;
            }
        }

        // 4. Прыжок: взведён и на земле → импульс вверх. В воздухе импульс
        // не применяется никогда.
        if state.grounded && state.jump_armed {
            state.jump_armed = false;
            state.velocity.y += config.jump_speed;
            events.push(LocomotionEvent::Jumped);
        }

        // 5. Run FSM: переход ровно один раз на фронте предиката
        let should_run = state.grounded && state.motion != Vec2::ZERO;
        match (state.run_state, should_run) {
            (RunState::Idle, true) => {
                state.run_state = RunState::Running;
                events.push(LocomotionEvent::StartedRunning);
            }
            (RunState::Running, false) => {
                state.run_state = RunState::Idle;
                events.push(LocomotionEvent::StoppedRunning);
            }
            _ => {}
        }

        // 6. Sweep: тактический слой скользит по миру и сообщает контакт
        let result = solver.sweep(&SweepRequest {
            shape: config.shape,
            velocity: state.velocity,
            dt,
            up: Vec3::Y,
            step_height: config.step_height,
            max_slope_angle: config.max_slope_angle,
            stop_on_slope: config.stop_on_slope,
        });
        state.velocity = result.velocity;
        state.grounded = result.grounded;

        // 7. Landing policy
        if state.grounded && config.landing == LandingBehavior::ZeroVelocity {
            state.velocity = Vec3::ZERO;
        }

        Ok(TickOutput {
            velocity: state.velocity,
            grounded: state.grounded,
            events,
        })
    }

    // --- helpers ----------------------------------------------------------

    fn set_look_angle_clamped(&mut self, angle: f32) {
        let max = self.config.max_look_angle;
        self.state.look_angle = angle.clamp(-max, max);
        self.push_head_pitch();
    }

    fn reclamp_look(&mut self) {
        let max = self.config.max_look_angle;
        let clamped = self.state.look_angle.clamp(-max, max);
        if clamped != self.state.look_angle {
            self.state.look_angle = clamped;
            self.push_head_pitch();
        }
    }

    fn push_head_pitch(&mut self) {
        // Отсутствующий sink — не ошибка, просто некому сообщать
        if let Some(sink) = self.head.as_mut() {
            sink.set_pitch(self.state.look_angle);
        }
    }
}
