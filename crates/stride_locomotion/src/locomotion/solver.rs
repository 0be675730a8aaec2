//! CollisionSolver boundary — sweep-and-slide контракт с host engine
//!
//! ECS считает desired velocity, тактический слой (Godot CharacterBody3D,
//! rapier, что угодно) выполняет реальный sweep по миру и возвращает
//! скорректированную velocity + ground contact. Ядро видит только этот
//! trait — конкретный физический движок сюда не линкуется.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Capsule-габариты актора для sweep'а
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorShape {
    pub radius: f32,
    pub height: f32,
}

impl Default for ActorShape {
    fn default() -> Self {
        // Человеческий capsule
        Self {
            radius: 0.4,
            height: 1.8,
        }
    }
}

/// Запрос sweep'а на один tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRequest {
    pub shape: ActorShape,
    /// Desired velocity после интеграции (гравитация/drag/jump уже внутри)
    pub velocity: Vec3,
    pub dt: f32,
    /// Мировой "вверх" для floor-детекции
    pub up: Vec3,
    pub step_height: f32,
    pub max_slope_angle: f32,
    pub stop_on_slope: bool,
}

/// Результат sweep'а
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepResult {
    /// Velocity после скольжения по поверхностям
    pub velocity: Vec3,
    /// Стоит ли актор на walkable поверхности после sweep'а
    pub grounded: bool,
}

/// Opaque sweep-and-slide примитив
///
/// Контракт: блокирующий, детерминированный, один вызов на актора на tick.
pub trait CollisionSolver {
    fn sweep(&mut self, request: &SweepRequest) -> SweepResult;
}

/// Resource-обёртка для solver'а (host engine подставляет свой)
#[derive(Resource)]
pub struct SolverHandle(pub Box<dyn CollisionSolver + Send + Sync>);

impl Default for SolverHandle {
    fn default() -> Self {
        Self(Box::new(FlatGroundSolver::new(0.0)))
    }
}

/// Бесконечный плоский пол — solver для headless demo и тестов
///
/// Интегрирует только высоту над полом: уход ниже пола = контакт,
/// вертикальная составляющая velocity гасится, горизонтальная скользит.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGroundSolver {
    /// Текущая высота опоры capsule над полом
    altitude: f32,
}

impl FlatGroundSolver {
    pub fn new(altitude: f32) -> Self {
        Self {
            altitude: altitude.max(0.0),
        }
    }

    pub fn altitude(&self) -> f32 {
        self.altitude
    }
}

impl CollisionSolver for FlatGroundSolver {
    fn sweep(&mut self, request: &SweepRequest) -> SweepResult {
        let next = self.altitude + request.velocity.y * request.dt;
        if next <= 0.0 {
            // Упёрлись в пол: вертикаль гасится, горизонталь скользит
            self.altitude = 0.0;
            SweepResult {
                velocity: Vec3::new(request.velocity.x, 0.0, request.velocity.z),
                grounded: true,
            }
        } else {
            self.altitude = next;
            SweepResult {
                velocity: request.velocity,
                grounded: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(velocity: Vec3, dt: f32) -> SweepRequest {
        SweepRequest {
            shape: ActorShape::default(),
            velocity,
            dt,
            up: Vec3::Y,
            step_height: 0.25,
            max_slope_angle: 55_f32.to_radians(),
            stop_on_slope: true,
        }
    }

    #[test]
    fn test_falling_actor_lands_on_floor() {
        let mut solver = FlatGroundSolver::new(0.5);

        // 0.5 units над полом, падаем 10 units/s: первый tick ещё в воздухе
        let result = solver.sweep(&request(Vec3::new(0.0, -10.0, 0.0), 0.02));
        assert!(!result.grounded);

        // Ещё несколько tick'ов — пол достигнут, вертикаль погашена
        let mut last = result;
        for _ in 0..10 {
            last = solver.sweep(&request(Vec3::new(1.0, -10.0, 0.0), 0.02));
        }
        assert!(last.grounded);
        assert_eq!(last.velocity, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(solver.altitude(), 0.0);
    }

    #[test]
    fn test_jump_leaves_floor() {
        let mut solver = FlatGroundSolver::new(0.0);

        // Стоим на полу
        let result = solver.sweep(&request(Vec3::new(0.0, -1.0, 0.0), 0.02));
        assert!(result.grounded);

        // Вертикальный импульс вверх отрывает от пола
        let result = solver.sweep(&request(Vec3::new(0.0, 5.0, 0.0), 0.02));
        assert!(!result.grounded);
        assert!(solver.altitude() > 0.0);
    }
}
