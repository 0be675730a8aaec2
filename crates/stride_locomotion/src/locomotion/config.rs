//! Конфигурация актора: tunables локомоции + sweep параметры

use serde::{Deserialize, Serialize};

use super::solver::ActorShape;

/// Политика приземления (что делать с velocity когда sweep вернул grounded)
///
/// Переключатель вместо жёсткого правила: оба поведения легитимны,
/// выбор зависит от того хочет ли игра residual slide после посадки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LandingBehavior {
    /// Оставить velocity как её скорректировал solver (residual slide)
    #[default]
    KeepSolverVelocity,
    /// Жёстко обнулить velocity при контакте с землёй (мгновенная посадка)
    ZeroVelocity,
}

/// Tunables локомоции (data-driven, независимо настраиваются в runtime)
///
/// Инварианты: `air_resistance >= 0`, `max_look_angle > 0`.
/// Controller их не мутирует — только читает на каждом tick'е.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorConfig {
    /// Горизонтальная скорость бега (units/s)
    pub run_speed: f32,
    /// Вертикальный импульс прыжка (units/s)
    pub jump_speed: f32,
    /// Может ли актор менять горизонтальную velocity в воздухе
    pub air_control: bool,
    /// Коэффициент квадратичного сопротивления воздуха
    /// (1.0 ≈ terminal velocity 53 units/s, человеческая)
    pub air_resistance: f32,
    /// Максимальный pitch взгляда, радианы (clamp в обе стороны)
    pub max_look_angle: f32,
    /// Политика приземления
    pub landing: LandingBehavior,
    /// Capsule актора для sweep'а
    pub shape: ActorShape,
    /// Максимальная высота ступеньки которую sweep перешагивает
    pub step_height: f32,
    /// Максимальный уклон (радианы) который считается полом
    pub max_slope_angle: f32,
    /// Останавливаться на уклоне вместо сползания
    pub stop_on_slope: bool,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            run_speed: 1.0,
            jump_speed: 1.0,
            air_control: false,
            air_resistance: 0.0,
            max_look_angle: std::f32::consts::FRAC_PI_2,
            landing: LandingBehavior::default(),
            shape: ActorShape::default(),
            step_height: 0.25,
            max_slope_angle: 55_f32.to_radians(),
            stop_on_slope: true,
        }
    }
}
